//! tzfind prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::config::{QuerySource, ResolverConfig};
pub use crate::error::{Result, TzFindError};
pub use crate::model::{UtcOffset, ZoneKind, ZoneRecord};
pub use crate::prompt::{Prompt, PromptBuilder};
pub use crate::rank::{rank, score_all, score_top, DEFAULT_K};
pub use crate::resolver::TimezoneResolver;
pub use crate::table::{global_zones, zone_table, ZoneTable};
pub use crate::traits::{AnswerGenerator, NameMatch, PhraseExtractor, PromptEcho};
