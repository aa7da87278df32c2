// crates/tzfind-core/src/traits.rs
use crate::error::{Result, TzFindError};
use crate::model::ZoneRecord;
use crate::prompt::Prompt;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical name.
///
/// Comparisons are accent-insensitive and case-insensitive, based on
/// [`fold_key`].
///
/// # Examples
/// ```rust
/// use tzfind_core::traits::NameMatch;
///
/// struct Zone(&'static str);
/// impl NameMatch for Zone {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Zone("America/Asunción").is_named("america/asuncion"));
/// assert!(Zone("Europe/Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for ZoneRecord<'_> {
    #[inline]
    fn name_str(&self) -> &str {
        self.identifier()
    }
}

/// Pulls a short country or timezone phrase out of a free-form request.
///
/// Implementations usually call out to a language model; the crate only
/// depends on the string-in/string-out contract.
pub trait PhraseExtractor: Send + Sync {
    fn extract(&self, request: &str) -> Result<String>;
}

impl<F> PhraseExtractor for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn extract(&self, request: &str) -> Result<String> {
        self(request)
    }
}

/// An extractor that has nothing to offer; the resolver then ranks the
/// request text itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtractor;

impl PhraseExtractor for NoExtractor {
    fn extract(&self, _request: &str) -> Result<String> {
        Err(TzFindError::Extractor("no phrase extractor configured".into()))
    }
}

/// Produces the final natural-language reply from an assembled prompt.
pub trait AnswerGenerator {
    fn generate(&self, prompt: &Prompt) -> Result<String>;
}

/// A generator that answers with the rendered prompt itself.
///
/// Useful for dry runs: the "answer" is exactly what a model would be sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptEcho;

impl AnswerGenerator for PromptEcho {
    fn generate(&self, prompt: &Prompt) -> Result<String> {
        Ok(prompt.render())
    }
}

impl<F> AnswerGenerator for F
where
    F: Fn(&Prompt) -> Result<String>,
{
    fn generate(&self, prompt: &Prompt) -> Result<String> {
        self(prompt)
    }
}
