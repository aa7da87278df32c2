// crates/tzfind-core/src/similarity.rs

//! # Similarity
//!
//! Longest-matching-block sequence comparison over `char` sequences.
//!
//! The matcher finds the longest contiguous block common to both sequences,
//! then recurses on the pieces to the left and to the right of it. The
//! similarity ratio is `2 * M / T`, where `M` is the number of matched chars
//! and `T` the combined length of both sequences.
//!
//! Scores are reproducible bit-for-bit against the classic
//! Ratcliff/Obershelp "gestalt" matcher, including its "autojunk" heuristic:
//! when the right-hand sequence has 200 or more chars, chars that make up
//! more than 1% of it are not used to seed a match.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Right-hand sequences at least this long get popular chars pruned.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Match {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Compares a fixed left sequence `a` against a right sequence `b`.
///
/// Operand order matters: `b` is the indexed side, so the autojunk rule
/// only ever applies to `b`.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::similarity::SequenceMatcher;
///
/// let m = SequenceMatcher::new("abcd", "bcde");
/// assert_eq!(m.ratio(), 0.75);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of every (non-popular) char of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();
        let b2j = index_chars(&b);
        Self {
            a: a.chars().collect(),
            b,
            b2j,
        }
    }

    /// Replace the right-hand sequence, keeping `a`.
    ///
    /// Scoring one query against many rows should reuse a single matcher
    /// through this method.
    pub fn set_seq2(&mut self, b: &str) {
        self.b.clear();
        self.b.extend(b.chars());
        self.b2j = index_chars(&self.b);
    }

    /// Find the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among blocks of maximal size, returns the one that starts earliest in
    /// `a`, and of those the one that starts earliest in `b`. When nothing
    /// matches, returns `Match { a: alo, b: blo, size: 0 }`.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the longest block ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            new_j2len.clear();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = j
                        .checked_sub(1)
                        .and_then(|p| j2len.get(&p))
                        .copied()
                        .unwrap_or(0);
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            std::mem::swap(&mut j2len, &mut new_j2len);
        }

        // Popular chars never seed a block; grow over them on both sides.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        Match {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// All matching blocks, ordered by position, adjacent blocks merged.
    ///
    /// The last element is always the sentinel
    /// `Match { a: len(a), b: len(b), size: 0 }`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());

        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a + last.size == m.a && last.b + last.size == m.b {
                    last.size += m.size;
                    continue;
                }
            }
            merged.push(m);
        }
        merged.push(Match {
            a: la,
            b: lb,
            size: 0,
        });
        merged
    }

    /// Number of chars covered by the matching blocks.
    pub fn matched_chars(&self) -> usize {
        self.matching_blocks().iter().map(|m| m.size).sum()
    }

    /// Similarity in `[0.0, 1.0]`: `2 * M / T`, or `1.0` if both sides are empty.
    pub fn ratio(&self) -> f64 {
        calculate_ratio(self.matched_chars(), self.a.len() + self.b.len())
    }
}

/// Similarity ratio of `a` against `b`. See [`SequenceMatcher::ratio`].
///
/// ```rust
/// use tzfind_core::similarity::ratio;
///
/// assert_eq!(ratio("", ""), 1.0);
/// assert_eq!(ratio("tokyo", ""), 0.0);
/// assert_eq!(ratio("tokyo", "tokyo"), 1.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length > 0 {
        2.0 * matches as f64 / length as f64
    } else {
        1.0
    }
}

fn index_chars(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b2j.entry(ch).or_default().push(j);
    }

    let n = b.len();
    if n >= AUTOJUNK_MIN_LEN {
        let threshold = n / 100 + 1;
        b2j.retain(|_, positions| positions.len() <= threshold);
    }
    b2j
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn longest_match_prefers_earliest_block() {
        let m = SequenceMatcher::new("abxcd", "abcd");
        assert_eq!(m.find_longest_match(0, 5, 0, 4), Match { a: 0, b: 0, size: 2 });
        assert!(approx(m.ratio(), 0.888_888_888_888_888_8));
    }

    #[test]
    fn matching_blocks_end_with_sentinel() {
        let m = SequenceMatcher::new(
            "private Thread currentThread;",
            "private volatile Thread currentThread;",
        );
        assert_eq!(
            m.matching_blocks(),
            vec![
                Match { a: 0, b: 0, size: 6 },
                Match { a: 6, b: 15, size: 23 },
                Match { a: 29, b: 38, size: 0 },
            ]
        );
        assert!(approx(m.ratio(), 0.865_671_641_791_044_7));
    }

    #[test]
    fn empty_sides() {
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", ""), 0.0);
        assert_eq!(ratio("", "abc"), 0.0);
        let m = SequenceMatcher::new("abc", "");
        assert_eq!(m.matching_blocks(), vec![Match { a: 3, b: 0, size: 0 }]);
    }

    #[test]
    fn counts_chars_not_bytes() {
        // 5 matched chars out of 5 + 42
        let row = "jp\tasia/tokyo\t\tcanonical\t+09:00\t+09:00\tjst";
        assert!(approx(ratio("tokyo", row), 0.212_765_957_446_808_5));
        assert_eq!(ratio("−05:00", "−05:00"), 1.0);
        assert!(approx(ratio("−", "-"), 0.0));
    }

    #[test]
    fn autojunk_only_prunes_long_right_side() {
        // 250 chars, every char popular: nothing can seed a match.
        let long = " abcd".repeat(50);
        assert_eq!(ratio("abcd abcd", &long), 0.0);

        // Below the threshold the same chars match normally.
        let short = " abcd".repeat(10);
        assert!(ratio("abcd abcd", &short) > 0.0);
    }

    #[test]
    fn popular_chars_extend_a_seed() {
        let b = format!("{}xyz{}", "a".repeat(150), "a".repeat(100));
        let m = SequenceMatcher::new("xyzaaaaa", &b);
        assert_eq!(
            m.matching_blocks(),
            vec![Match { a: 0, b: 150, size: 8 }, Match { a: 8, b: 253, size: 0 }]
        );
        assert!(approx(m.ratio(), 0.061_302_681_992_337_16));
    }

    #[test]
    fn set_seq2_reuses_left_side() {
        let mut m = SequenceMatcher::new("abcd", "zzzz");
        assert_eq!(m.ratio(), 0.0);
        m.set_seq2("bcde");
        assert_eq!(m.ratio(), 0.75);
    }
}
