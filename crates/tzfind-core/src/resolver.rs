// crates/tzfind-core/src/resolver.rs

//! # Resolver
//!
//! The full pipeline: request → (phrase) → ranked candidates → prompt →
//! answer. Phrase extraction and answer generation are pluggable; the
//! ranking always runs against a [`ZoneTable`].

use crate::config::{QuerySource, ResolverConfig};
use crate::error::Result;
use crate::prompt::{Prompt, PromptBuilder};
use crate::rank::rank;
use crate::table::{zone_table, ZoneTable};
use crate::traits::{AnswerGenerator, PhraseExtractor};
use serde::Serialize;
use tracing::{debug, warn};

/// The ranked candidates for one request, before generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidates<'t> {
    /// The text the table was ranked against.
    pub query: String,
    /// The extracted phrase, if an extractor produced one.
    pub phrase: Option<String>,
    pub rows: Vec<&'t str>,
}

/// Everything produced while resolving one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'t> {
    pub candidates: Candidates<'t>,
    pub prompt: Prompt,
    pub answer: String,
}

/// Resolves requests against a zone table.
///
/// ```rust
/// use tzfind_core::prompt::Prompt;
/// use tzfind_core::resolver::TimezoneResolver;
/// use tzfind_core::Result;
///
/// let echo = |p: &Prompt| -> Result<String> { Ok(p.candidates[0].clone()) };
/// let resolver = TimezoneResolver::new(echo);
/// let res = resolver.resolve("Tokyo").unwrap();
/// assert!(res.answer.contains("Asia/Tokyo"));
/// ```
pub struct TimezoneResolver<'t, G> {
    table: &'t ZoneTable,
    extractor: Option<Box<dyn PhraseExtractor>>,
    generator: G,
    config: ResolverConfig,
    prompts: PromptBuilder,
}

impl<G: AnswerGenerator> TimezoneResolver<'static, G> {
    /// A resolver over the default [`zone_table`] with default settings and
    /// no phrase extractor.
    pub fn new(generator: G) -> Self {
        let config = ResolverConfig::default();
        Self {
            table: zone_table(),
            extractor: None,
            generator,
            prompts: PromptBuilder::new().include_global_zones(config.include_global_zones),
            config,
        }
    }
}

impl<'t, G: AnswerGenerator> TimezoneResolver<'t, G> {
    /// Rank a different table.
    pub fn with_table<'u>(self, table: &'u ZoneTable) -> TimezoneResolver<'u, G> {
        TimezoneResolver {
            table,
            extractor: self.extractor,
            generator: self.generator,
            config: self.config,
            prompts: self.prompts,
        }
    }

    pub fn with_extractor(mut self, extractor: impl PhraseExtractor + 'static) -> Self {
        self.extractor = Some(Box::new(extractor));
        self
    }

    /// Apply `config`, including its `include_global_zones` flag on the
    /// current prompt builder. Fails if it does not validate.
    pub fn with_config(mut self, config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        self.prompts = self
            .prompts
            .include_global_zones(config.include_global_zones);
        self.config = config;
        Ok(self)
    }

    /// Use `prompts` as is, including its global-zones setting. A later
    /// [`with_config`](Self::with_config) call overrides that setting again.
    pub fn with_prompt_builder(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn table(&self) -> &'t ZoneTable {
        self.table
    }

    /// Extract, pick the query and rank. Does not call the generator.
    pub fn candidates(&self, request: &str) -> Result<Candidates<'t>> {
        let phrase = self.extract_phrase(request);

        let query = match (self.config.query_source, &phrase) {
            (QuerySource::Phrase, Some(p)) => p.clone(),
            _ => request.to_owned(),
        };
        debug!(source = ?self.config.query_source, %query, k = self.config.k, "ranking zone table");

        let rows = rank(&query, self.table.rows(), self.config.k)?;
        debug!(top = rows.first().copied().unwrap_or_default(), count = rows.len(), "ranked");

        Ok(Candidates {
            query,
            phrase,
            rows,
        })
    }

    /// Build the prompt for `request` without calling the generator.
    pub fn prompt(&self, request: &str) -> Result<(Candidates<'t>, Prompt)> {
        let candidates = self.candidates(request)?;
        let prompt = self.prompts.build(&candidates.rows, request);
        Ok((candidates, prompt))
    }

    /// Run the full pipeline.
    pub fn resolve(&self, request: &str) -> Result<Resolution<'t>> {
        let (candidates, prompt) = self.prompt(request)?;
        let answer = self.generator.generate(&prompt)?;
        debug!(answer_len = answer.len(), "answer generated");
        Ok(Resolution {
            candidates,
            prompt,
            answer,
        })
    }

    fn extract_phrase(&self, request: &str) -> Option<String> {
        let extractor = self.extractor.as_ref()?;
        match extractor.extract(request) {
            Ok(phrase) if !phrase.trim().is_empty() => {
                let phrase = phrase.trim().to_owned();
                debug!(%phrase, "extracted phrase");
                Some(phrase)
            }
            Ok(_) => {
                warn!("phrase extractor returned nothing; using the request text");
                None
            }
            Err(e) => {
                warn!(error = %e, "phrase extraction failed; using the request text");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TzFindError;
    use crate::traits::NoExtractor;
    use std::cell::RefCell;

    fn first_row(p: &Prompt) -> Result<String> {
        Ok(p.candidates.first().cloned().unwrap_or_default())
    }

    #[test]
    fn ranks_the_request_by_default() {
        let resolver = TimezoneResolver::new(first_row)
            .with_extractor(|_: &str| -> Result<String> { Ok("Japan".into()) });
        let c = resolver.candidates("what time is it in Tokyo?").unwrap();
        assert_eq!(c.query, "what time is it in Tokyo?");
        assert_eq!(c.phrase.as_deref(), Some("Japan"));
        assert_eq!(c.rows.len(), 10);
    }

    #[test]
    fn phrase_source_ranks_the_phrase() {
        let config = ResolverConfig {
            k: 3,
            query_source: QuerySource::Phrase,
            include_global_zones: false,
        };
        let resolver = TimezoneResolver::new(first_row)
            .with_extractor(|_: &str| -> Result<String> { Ok("  Tokyo ".into()) })
            .with_config(config)
            .unwrap();
        let res = resolver.resolve("what time is it over there?").unwrap();
        assert_eq!(res.candidates.query, "Tokyo");
        assert_eq!(res.candidates.rows, zone_table().rank("Tokyo", 3).unwrap());
        assert!(res.answer.contains("Asia/Tokyo"));
        assert!(res.prompt.reference.is_empty());
        assert_eq!(res.prompt.request, "what time is it over there?");
    }

    #[test]
    fn prompt_echo_is_a_dry_run() {
        let res = TimezoneResolver::new(crate::traits::PromptEcho)
            .resolve("Tokyo")
            .unwrap();
        assert_eq!(res.answer, res.prompt.render());
    }

    #[test]
    fn prompt_builder_keeps_its_own_settings() {
        let builder = PromptBuilder::new()
            .include_global_zones(false)
            .instructions("Answer briefly.");
        let (_, prompt) = TimezoneResolver::new(crate::traits::PromptEcho)
            .with_prompt_builder(builder)
            .prompt("Tokyo")
            .unwrap();
        assert!(prompt.reference.is_empty());
        assert_eq!(prompt.instructions, "Answer briefly.");
    }

    #[test]
    fn config_applied_later_sets_global_zones() {
        let config = ResolverConfig {
            include_global_zones: true,
            ..ResolverConfig::default()
        };
        let (_, prompt) = TimezoneResolver::new(first_row)
            .with_prompt_builder(PromptBuilder::new().include_global_zones(false))
            .with_config(config)
            .unwrap()
            .prompt("Tokyo")
            .unwrap();
        assert_eq!(prompt.reference.len(), crate::table::global_zones().len());
    }

    #[test]
    fn custom_table() {
        let table = ZoneTable::from_rows(["FR  Europe/Paris  CET", "JP  Asia/Tokyo  JST"]).unwrap();
        let resolver = TimezoneResolver::new(first_row).with_table(&table);
        let res = resolver.resolve("tokyo").unwrap();
        assert_eq!(res.candidates.rows, vec!["JP  Asia/Tokyo  JST", "FR  Europe/Paris  CET"]);
        assert_eq!(res.answer, "JP  Asia/Tokyo  JST");
    }

    #[test]
    fn failed_extraction_falls_back_to_request() {
        let config = ResolverConfig {
            query_source: QuerySource::Phrase,
            ..ResolverConfig::default()
        };
        let resolver = TimezoneResolver::new(first_row)
            .with_extractor(NoExtractor)
            .with_config(config)
            .unwrap();
        let c = resolver.candidates("Tokyo").unwrap();
        assert_eq!(c.query, "Tokyo");
        assert_eq!(c.phrase, None);
    }

    #[test]
    fn generator_sees_the_assembled_prompt() {
        let seen = RefCell::new(String::new());
        let generator = |p: &Prompt| -> Result<String> {
            *seen.borrow_mut() = p.render();
            Ok("ok".into())
        };
        let resolver = TimezoneResolver::new(&generator);
        resolver.resolve("Berlin vs Tokyo").unwrap();
        assert!(seen.borrow().ends_with("Request:\nBerlin vs Tokyo\n"));
    }

    #[test]
    fn errors_propagate() {
        let failing = |_: &Prompt| -> Result<String> { Err(TzFindError::Generator("down".into())) };
        let resolver = TimezoneResolver::new(failing);
        assert!(matches!(resolver.resolve("Tokyo"), Err(TzFindError::Generator(_))));

        let bad = ResolverConfig {
            k: 0,
            ..ResolverConfig::default()
        };
        assert!(TimezoneResolver::new(first_row).with_config(bad).is_err());
    }
}
