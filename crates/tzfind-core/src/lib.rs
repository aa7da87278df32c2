// crates/tzfind-core/src/lib.rs

//! # tzfind-core
//!
//! Ranks a compiled-in timezone reference table against free-form requests
//! ("what time is it in Tokyo vs Berlin?") so an answer generator can ground
//! its reply in concrete UTC offsets.
//!
//! ```rust
//! use tzfind_core::zone_table;
//!
//! let top = zone_table().rank("Tokyo", 3)?;
//! assert!(top[0].contains("Asia/Tokyo"));
//! # Ok::<(), tzfind_core::TzFindError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod rank; // The core ranker
pub mod resolver;
pub mod search; // Exact lookups on a table
pub mod similarity;
pub mod table;
pub mod text;
pub mod traits;

pub mod prelude;

// Re-exports
pub use crate::config::{QuerySource, ResolverConfig};
pub use crate::error::{Result, TzFindError};
pub use crate::model::{TableStats, UtcOffset, ZoneKind, ZoneRecord};
pub use crate::prompt::{Prompt, PromptBuilder};
pub use crate::rank::{rank, score_all, score_top, ScoredCandidate, DEFAULT_K};
pub use crate::resolver::{Candidates, Resolution, TimezoneResolver};
pub use crate::table::{global_zones, zone_table, ZoneTable};
pub use crate::traits::{AnswerGenerator, NameMatch, NoExtractor, PhraseExtractor, PromptEcho};
