//! tzfind-rs
//!
//! Workspace facade over [`tzfind_core`], used by the demos in `demos/`.
//! Depend on `tzfind-core` directly in your own code.

pub use tzfind_core::*;
