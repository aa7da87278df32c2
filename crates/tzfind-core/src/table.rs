// crates/tzfind-core/src/table.rs

//! # Zone Table
//!
//! The reference table is compiled into the binary. Rows are
//! tab-separated lines:
//!
//! ```text
//! Country code(s)  TZ identifier  Embedded comments  Type  STD  DST  Abbreviation
//! ```
//!
//! The process-wide tables are built lazily on first access and are never
//! mutated afterwards, so they can be shared across threads freely.

use crate::error::{Result, TzFindError};
use crate::model::{TableStats, ZoneKind, ZoneRecord};
use once_cell::sync::Lazy;
use std::collections::HashSet;

const COUNTRY_ZONES: &str = include_str!("../data/zone_table.tsv");
const GLOBAL_ZONES: &str = include_str!("../data/global_zones.tsv");

static ZONE_TABLE: Lazy<ZoneTable> = Lazy::new(|| ZoneTable::from_text(COUNTRY_ZONES));
static GLOBAL_TABLE: Lazy<ZoneTable> = Lazy::new(|| ZoneTable::from_text(GLOBAL_ZONES));

/// The country reference table, one row per (country codes, zone) entry.
///
/// ```rust
/// let table = tzfind_core::zone_table();
/// assert!(table.rows().iter().any(|r| r.contains("Asia/Tokyo")));
/// ```
pub fn zone_table() -> &'static ZoneTable {
    &ZONE_TABLE
}

/// Zones not tied to any country (`CET`, `EST5EDT`, `Etc/GMT+5`, `UTC`, ...).
///
/// These are always shown to the answer generator next to the ranked
/// candidates; they are not part of the ranking corpus.
pub fn global_zones() -> &'static ZoneTable {
    &GLOBAL_TABLE
}

/// An immutable, ordered arena of reference rows.
///
/// Row order is significant: it is the tie-break order for ranking.
/// Duplicate rows are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTable {
    rows: Vec<String>,
}

impl ZoneTable {
    /// Build a table from newline-separated text. Blank lines are skipped;
    /// everything else (including leading tabs) is kept verbatim.
    pub fn from_text(text: &str) -> Self {
        let rows = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        Self { rows }
    }

    /// Build a table from explicit rows. Fails on an empty list.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<String> = rows.into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return Err(TzFindError::invalid("a zone table needs at least one row"));
        }
        Ok(Self { rows })
    }

    /// All rows in table order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Structured views of all rows, in table order. Malformed rows are skipped.
    pub fn records(&self) -> impl Iterator<Item = ZoneRecord<'_>> {
        self.rows.iter().filter_map(|r| ZoneRecord::parse(r).ok())
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            rows: self.rows.len(),
            ..TableStats::default()
        };
        let mut countries: HashSet<String> = HashSet::new();

        for row in &self.rows {
            let Ok(rec) = ZoneRecord::parse(row) else {
                stats.malformed += 1;
                continue;
            };
            match rec.kind() {
                ZoneKind::Canonical => stats.canonical += 1,
                ZoneKind::Link => stats.links += 1,
                ZoneKind::LinkBackward => stats.backward_links += 1,
            }
            for code in rec.country_codes() {
                countries.insert(code.to_ascii_uppercase());
            }
        }
        stats.countries = countries.len();
        stats
    }
}
