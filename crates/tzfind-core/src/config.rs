// crates/tzfind-core/src/config.rs
use crate::error::{Result, TzFindError};
use crate::rank::DEFAULT_K;
use serde::{Deserialize, Serialize};

/// What the resolver ranks the table against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuerySource {
    /// The full request text.
    #[default]
    Request,
    /// The phrase returned by the [`PhraseExtractor`](crate::traits::PhraseExtractor),
    /// falling back to the request when extraction fails or comes back empty.
    Phrase,
}

impl std::str::FromStr for QuerySource {
    type Err = TzFindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "request" => Ok(QuerySource::Request),
            "phrase" => Ok(QuerySource::Phrase),
            other => Err(TzFindError::invalid(format!(
                "unknown query source {other:?} (expected \"request\" or \"phrase\")"
            ))),
        }
    }
}

/// Resolver settings. Missing fields take their defaults when deserialized.
///
/// ```rust
/// use tzfind_core::config::{QuerySource, ResolverConfig};
///
/// let cfg = ResolverConfig::default();
/// assert_eq!(cfg.k, 10);
/// assert_eq!(cfg.query_source, QuerySource::Request);
/// assert!(cfg.include_global_zones);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How many candidate rows to hand to the answer generator.
    pub k: usize,
    pub query_source: QuerySource,
    /// Embed the country-less reference zones in the prompt.
    pub include_global_zones: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            query_source: QuerySource::default(),
            include_global_zones: true,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(TzFindError::invalid("k must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// ```rust
    /// use tzfind_core::config::{QuerySource, ResolverConfig};
    ///
    /// let cfg = ResolverConfig::from_json_str(r#"{ "k": 3, "query_source": "phrase" }"#).unwrap();
    /// assert_eq!(cfg.k, 3);
    /// assert_eq!(cfg.query_source, QuerySource::Phrase);
    /// assert!(cfg.include_global_zones);
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            TzFindError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_source_parses_case_insensitively() {
        assert_eq!("Phrase".parse::<QuerySource>().unwrap(), QuerySource::Phrase);
        assert_eq!(" request ".parse::<QuerySource>().unwrap(), QuerySource::Request);
        assert!("both".parse::<QuerySource>().is_err());
    }

    #[test]
    fn zero_k_is_rejected() {
        let cfg = ResolverConfig {
            k: 0,
            ..ResolverConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(TzFindError::InvalidArgument(_))));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_config() {
        assert_eq!(ResolverConfig::from_json_str("{}").unwrap(), ResolverConfig::default());
        assert!(ResolverConfig::from_json_str(r#"{ "k": 0 }"#).is_err());
        assert!(matches!(
            ResolverConfig::from_json_str("{ k: }"),
            Err(TzFindError::Json(_))
        ));
        assert!(matches!(
            ResolverConfig::load_from_path("/nonexistent/tzfind.json"),
            Err(TzFindError::NotFound(_))
        ));
    }
}
