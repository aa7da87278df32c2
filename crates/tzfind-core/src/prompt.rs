// crates/tzfind-core/src/prompt.rs

//! # Prompt Assembly
//!
//! Packs the ranked candidates and the original request into one text block
//! for the answer generator. Rows are passed through verbatim and in rank
//! order.

use crate::table::global_zones;
use serde::Serialize;

/// Default preamble telling the generator what to do with the tables.
pub const DEFAULT_INSTRUCTIONS: &str = "\
Convert between time zones using the country and time zone tables below.
Explain any countries or time zones the request mentions that the tables do not list.
Work out the offset difference step by step, then answer the request.";

/// Column header shared by the reference block and the candidate rows.
pub const TABLE_HEADER: &str = "\
Country code(s)\tTZ identifier\tEmbedded comments\tType\tUTC offset STD\tUTC offset DST\tAbbreviation";

/// The text handed to the answer generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub instructions: String,
    /// Zones not tied to a country; empty when disabled.
    pub reference: Vec<String>,
    /// Ranked candidate rows, best first.
    pub candidates: Vec<String>,
    /// The original request, verbatim.
    pub request: String,
}

impl Prompt {
    /// Render the prompt as a single text block.
    ///
    /// ```rust
    /// use tzfind_core::prompt::PromptBuilder;
    ///
    /// let prompt = PromptBuilder::new()
    ///     .include_global_zones(false)
    ///     .build(&["JP\tAsia/Tokyo\t\tCanonical\t+09:00\t+09:00\tJST"], "time in Tokyo?");
    /// let text = prompt.render();
    /// assert!(text.contains("Timezones:\n1. JP\tAsia/Tokyo"));
    /// assert!(text.ends_with("Request:\ntime in Tokyo?\n"));
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.instructions);
        out.push_str("\n\n");

        if !self.reference.is_empty() {
            out.push_str("Reference zones:\n");
            out.push_str(TABLE_HEADER);
            out.push('\n');
            for row in &self.reference {
                out.push_str(row);
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str("Timezones:\n");
        for (i, row) in self.candidates.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, row));
        }
        out.push('\n');

        out.push_str("Request:\n");
        out.push_str(&self.request);
        out.push('\n');
        out
    }
}

/// Builds [`Prompt`]s.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    instructions: String,
    include_global_zones: bool,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.to_owned(),
            include_global_zones: true,
        }
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the instruction preamble.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Whether to embed the country-less reference zones (on by default).
    pub fn include_global_zones(mut self, include: bool) -> Self {
        self.include_global_zones = include;
        self
    }

    pub fn build<S: AsRef<str>>(&self, candidates: &[S], request: &str) -> Prompt {
        let reference = if self.include_global_zones {
            global_zones().rows().to_vec()
        } else {
            Vec::new()
        };
        Prompt {
            instructions: self.instructions.clone(),
            reference,
            candidates: candidates.iter().map(|r| r.as_ref().to_owned()).collect(),
            request: request.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_keep_rank_order_and_request_comes_last() {
        let prompt = PromptBuilder::new().build(&["b-row", "a-row"], "what time is it in Tokyo?");
        let text = prompt.render();

        let b = text.find("1. b-row").unwrap();
        let a = text.find("2. a-row").unwrap();
        let req = text.find("Request:\nwhat time is it in Tokyo?").unwrap();
        assert!(b < a && a < req);
        assert!(text.starts_with(DEFAULT_INSTRUCTIONS));
        assert!(text.contains("Reference zones:\n"));
        assert!(text.contains("\tEtc/UTC\t"));
        assert_eq!(prompt.reference.len(), 56);
    }

    #[test]
    fn global_zones_can_be_left_out() {
        let prompt = PromptBuilder::new()
            .include_global_zones(false)
            .instructions("Answer briefly.")
            .build(&["row"], "q");
        assert!(prompt.reference.is_empty());
        assert_eq!(prompt.render(), "Answer briefly.\n\nTimezones:\n1. row\n\nRequest:\nq\n");
    }
}
