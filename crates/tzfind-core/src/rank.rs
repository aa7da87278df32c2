// crates/tzfind-core/src/rank.rs

//! # Similarity Ranker
//!
//! Scores every row of a table against a query and keeps the `k` best.
//!
//! - Query and rows are case-folded with [`fold_case`] before scoring; the
//!   returned rows keep their original casing.
//! - The score is [`SequenceMatcher::ratio`] with the folded query on the
//!   left and the folded row on the right.
//! - Rows are ordered by descending score. Equal scores keep table order.

use crate::error::{Result, TzFindError};
use crate::similarity::SequenceMatcher;
use crate::table::ZoneTable;
use crate::text::fold_case;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Number of candidates handed to the answer generator by default.
pub const DEFAULT_K: usize = 10;

/// A row together with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate<'t> {
    /// Position of the row in the table.
    pub index: usize,
    pub row: &'t str,
    pub score: f64,
}

/// Rank `table` against `query` and return the `k` most similar rows,
/// best first.
///
/// Returns `min(k, table.len())` rows. Fails with
/// [`TzFindError::InvalidArgument`] if `table` is empty or `k` is zero.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::rank::rank;
///
/// let table = [
///     "US  America/New_York  EST",
///     "FR  Europe/Paris  CET",
///     "JP  Asia/Tokyo  JST",
/// ];
/// let top = rank("Tokyo", &table, 2).unwrap();
/// assert_eq!(top[0], "JP  Asia/Tokyo  JST");
/// assert_eq!(top.len(), 2);
/// ```
pub fn rank<'t, S: AsRef<str>>(query: &str, table: &'t [S], k: usize) -> Result<Vec<&'t str>> {
    let scored = score_top(query, table, k)?;
    Ok(scored.into_iter().map(|c| c.row).collect())
}

/// Like [`rank`], but keeps the scores.
///
/// Same ordering, same `min(k, table.len())` length and the same errors.
pub fn score_top<'t, S: AsRef<str>>(
    query: &str,
    table: &'t [S],
    k: usize,
) -> Result<Vec<ScoredCandidate<'t>>> {
    if k == 0 {
        return Err(TzFindError::invalid("k must be at least 1"));
    }
    let mut scored = score_all(query, table)?;
    scored.truncate(k);
    Ok(scored)
}

/// Score every row of `table` against `query`, ordered like [`rank`].
///
/// Intended for diagnostics; [`rank`] is the operation that feeds the
/// answer generator.
pub fn score_all<'t, S: AsRef<str>>(
    query: &str,
    table: &'t [S],
) -> Result<Vec<ScoredCandidate<'t>>> {
    if table.is_empty() {
        return Err(TzFindError::invalid("cannot rank an empty table"));
    }

    let mut matcher = SequenceMatcher::new(&fold_case(query), "");
    // identical folded rows score identically; compute each one once
    let mut seen: HashMap<String, f64> = HashMap::new();

    let mut scored: Vec<ScoredCandidate<'t>> = table
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            let folded = fold_case(row);
            let score = match seen.get(&folded) {
                Some(&score) => score,
                None => {
                    matcher.set_seq2(&folded);
                    let score = matcher.ratio();
                    seen.insert(folded, score);
                    score
                }
            };
            ScoredCandidate { index, row, score }
        })
        .collect();

    // `sort_by` is stable: equal scores keep table order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(scored)
}

impl ZoneTable {
    /// Rank this table's rows against `query`. See [`rank`].
    ///
    /// ```rust
    /// let top = tzfind_core::zone_table().rank("Tokyo", 3).unwrap();
    /// assert!(top[0].contains("Asia/Tokyo"));
    /// ```
    pub fn rank(&self, query: &str, k: usize) -> Result<Vec<&str>> {
        rank(query, self.rows(), k)
    }

    /// The `k` best rows with their scores. See [`score_top`].
    pub fn score_top(&self, query: &str, k: usize) -> Result<Vec<ScoredCandidate<'_>>> {
        score_top(query, self.rows(), k)
    }

    /// Score all rows against `query`. See [`score_all`].
    pub fn score_all(&self, query: &str) -> Result<Vec<ScoredCandidate<'_>>> {
        score_all(query, self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [&str; 3] = [
        "US  America/New_York  EST",
        "FR  Europe/Paris  CET",
        "JP  Asia/Tokyo  JST",
    ];

    #[test]
    fn tokyo_example() {
        let top = rank("tokyo", &TABLE, 2).unwrap();
        // ratios: JP 0.4167, US 0.1333, FR 0.0769
        assert_eq!(top, vec!["JP  Asia/Tokyo  JST", "US  America/New_York  EST"]);
    }

    #[test]
    fn scores_are_exposed_in_rank_order() {
        let scored = score_all("tokyo", &TABLE).unwrap();
        let indices: Vec<usize> = scored.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![2, 0, 1]);
        assert!((scored[0].score - 10.0 / 24.0).abs() < 1e-12);
        assert!((scored[1].score - 4.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_k_and_empty_table() {
        assert!(matches!(rank("x", &TABLE, 0), Err(TzFindError::InvalidArgument(_))));
        let empty: [&str; 0] = [];
        assert!(matches!(rank("x", &empty, 5), Err(TzFindError::InvalidArgument(_))));
        assert!(score_all("x", &empty).is_err());
    }

    #[test]
    fn score_top_matches_rank() {
        let scored = score_top("tokyo", &TABLE, 2).unwrap();
        let rows: Vec<&str> = scored.iter().map(|c| c.row).collect();
        assert_eq!(rows, rank("tokyo", &TABLE, 2).unwrap());
        assert!((scored[0].score - 10.0 / 24.0).abs() < 1e-12);
        assert!(matches!(score_top("x", &TABLE, 0), Err(TzFindError::InvalidArgument(_))));
    }

    #[test]
    fn k_larger_than_table() {
        assert_eq!(rank("paris", &TABLE, 10).unwrap().len(), 3);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let table = ["b", "a", "A", "a"];
        let scored = score_all("a", &table).unwrap();
        let rows: Vec<(usize, &str)> = scored.iter().map(|c| (c.index, c.row)).collect();
        assert_eq!(rows, vec![(1, "a"), (2, "A"), (3, "a"), (0, "b")]);
    }
}
