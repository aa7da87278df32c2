//! tzfind-cli
//! ==========
//!
//! Command-line interface for the `tzfind-core` timezone candidate ranker.
//!
//! This crate primarily provides a binary (`tzfind`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! tzfind --help
//! tzfind stats
//! tzfind rank "what time is it in Tokyo?" -k 5 --scores
//! tzfind prompt "Tokyo vs Berlin" --phrase Tokyo
//! tzfind country DE
//! tzfind zone europe/berlin
//! ```
//!
//! For programmatic access, use the [`tzfind-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
