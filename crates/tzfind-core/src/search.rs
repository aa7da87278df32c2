// crates/tzfind-core/src/search.rs
use crate::error::{Result, TzFindError};
use crate::model::ZoneRecord;
use crate::table::ZoneTable;
use crate::text::fold_key;
use crate::traits::NameMatch;

/// Exact lookups on a [`ZoneTable`].
///
/// These complement [`ZoneTable::rank`]: ranking is fuzzy and always returns
/// something, lookups match a single column exactly and may return nothing.
impl ZoneTable {
    /// All zones that list `code` (ISO2, case-insensitive) among their countries.
    ///
    /// ```rust
    /// let zones = tzfind_core::zone_table().find_by_country_code("jp");
    /// let ids: Vec<&str> = zones.iter().map(|z| z.identifier()).collect();
    /// assert_eq!(ids, vec!["Asia/Tokyo", "Japan"]);
    /// ```
    pub fn find_by_country_code(&self, code: &str) -> Vec<ZoneRecord<'_>> {
        let code = code.trim();
        if code.is_empty() {
            return Vec::new();
        }
        self.records().filter(|r| r.has_country_code(code)).collect()
    }

    /// The first zone whose identifier equals `id` after folding
    /// (`europe/zurich` finds `Europe/Zurich`).
    pub fn find_by_identifier(&self, id: &str) -> Option<ZoneRecord<'_>> {
        let id = id.trim();
        self.records().find(|r| r.is_named(id))
    }

    /// Like [`ZoneTable::find_by_identifier`], but a miss is an error.
    pub fn identifier(&self, id: &str) -> Result<ZoneRecord<'_>> {
        self.find_by_identifier(id)
            .ok_or_else(|| TzFindError::NotFound(format!("no zone named {id:?}")))
    }

    /// All zones using abbreviation `abbr` (e.g. `CET`), case-insensitive.
    pub fn find_by_abbreviation(&self, abbr: &str) -> Vec<ZoneRecord<'_>> {
        let abbr = abbr.trim();
        if abbr.is_empty() {
            return Vec::new();
        }
        self.records()
            .filter(|r| r.abbreviation().eq_ignore_ascii_case(abbr))
            .collect()
    }

    /// Zones whose identifier or comment contains `substr` (folded).
    pub fn find_by_substring(&self, substr: &str) -> Vec<ZoneRecord<'_>> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.records()
            .filter(|r| {
                r.name_contains(&q) || r.comment().is_some_and(|c| fold_key(c).contains(&q))
            })
            .collect()
    }
}
