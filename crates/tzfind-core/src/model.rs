// crates/tzfind-core/src/model.rs
use crate::error::{Result, TzFindError};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of tab-separated fields in a reference row.
pub const FIELD_COUNT: usize = 7;

/// How an identifier relates to the zone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZoneKind {
    /// A zone with its own rules.
    Canonical,
    /// An alias of a canonical zone.
    Link,
    /// An alias kept only for backward compatibility (`Link†` in the table).
    LinkBackward,
}

impl ZoneKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Canonical" => Some(ZoneKind::Canonical),
            "Link" => Some(ZoneKind::Link),
            "Link†" => Some(ZoneKind::LinkBackward),
            _ => None,
        }
    }

    pub fn is_link(self) -> bool {
        !matches!(self, ZoneKind::Canonical)
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ZoneKind::Canonical => "Canonical",
            ZoneKind::Link => "Link",
            ZoneKind::LinkBackward => "Link†",
        })
    }
}

/// A fixed UTC offset, in minutes east of UTC.
///
/// The table writes negative offsets with U+2212 MINUS SIGN (`−05:00`);
/// ASCII `-` is accepted too. Display always uses ASCII.
///
/// ```rust
/// use tzfind_core::model::UtcOffset;
///
/// let off = UtcOffset::parse("−03:30").unwrap();
/// assert_eq!(off.minutes(), -210);
/// assert_eq!(off.to_string(), "-03:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    pub fn from_minutes(minutes: i32) -> Self {
        Self { minutes }
    }

    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Parses `±HH:MM`. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let sign = match chars.next()? {
            '+' => 1,
            '−' | '-' => -1,
            _ => return None,
        };
        let (hours, minutes) = chars.as_str().split_once(':')?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return None;
        }
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if minutes >= 60 {
            return None;
        }
        Some(Self {
            minutes: sign * (hours * 60 + minutes),
        })
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let abs = self.minutes.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

impl Serialize for UtcOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A structured, borrowed view of one reference row.
///
/// Parsing is only for display and lookups; ranking always works on the raw
/// row text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneRecord<'a> {
    #[serde(skip)]
    row: &'a str,
    country_codes: &'a str,
    identifier: &'a str,
    comment: &'a str,
    kind: ZoneKind,
    std_offset: UtcOffset,
    dst_offset: UtcOffset,
    abbreviation: &'a str,
}

impl<'a> ZoneRecord<'a> {
    /// Parse a tab-separated row:
    /// `codes \t identifier \t comment \t kind \t std \t dst \t abbreviation`.
    ///
    /// ```rust
    /// use tzfind_core::model::{ZoneKind, ZoneRecord};
    ///
    /// let rec = ZoneRecord::parse("JP\tAsia/Tokyo\t\tCanonical\t+09:00\t+09:00\tJST").unwrap();
    /// assert_eq!(rec.identifier(), "Asia/Tokyo");
    /// assert_eq!(rec.kind(), ZoneKind::Canonical);
    /// assert_eq!(rec.std_offset().minutes(), 540);
    /// ```
    pub fn parse(row: &'a str) -> Result<Self> {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(TzFindError::malformed(
                row,
                format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
            ));
        }

        let identifier = fields[1].trim();
        if identifier.is_empty() {
            return Err(TzFindError::malformed(row, "missing TZ identifier"));
        }
        let kind = ZoneKind::parse(fields[3])
            .ok_or_else(|| TzFindError::malformed(row, format!("unknown type {:?}", fields[3])))?;
        let std_offset = UtcOffset::parse(fields[4])
            .ok_or_else(|| TzFindError::malformed(row, format!("bad STD offset {:?}", fields[4])))?;
        let dst_offset = UtcOffset::parse(fields[5])
            .ok_or_else(|| TzFindError::malformed(row, format!("bad DST offset {:?}", fields[5])))?;

        Ok(Self {
            row,
            country_codes: fields[0].trim(),
            identifier,
            comment: fields[2].trim(),
            kind,
            std_offset,
            dst_offset,
            abbreviation: fields[6].trim(),
        })
    }

    /// The original row text.
    pub fn row(&self) -> &'a str {
        self.row
    }

    /// ISO 3166-1 alpha-2 codes listed for this zone (e.g. `DE`, `DK`, ...).
    ///
    /// Empty for zones not tied to a country (`Etc/GMT+5`, `CET`).
    pub fn country_codes(&self) -> impl Iterator<Item = &'a str> {
        self.country_codes
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// True if `code` is among [`ZoneRecord::country_codes`], case-insensitive.
    pub fn has_country_code(&self, code: &str) -> bool {
        let code = code.trim();
        self.country_codes().any(|c| c.eq_ignore_ascii_case(code))
    }

    /// TZ identifier, e.g. `Europe/Berlin`. Always non-empty.
    pub fn identifier(&self) -> &'a str {
        self.identifier
    }

    /// Embedded comment (e.g. `most of Germany`) or `None`.
    pub fn comment(&self) -> Option<&'a str> {
        Some(self.comment).filter(|c| !c.is_empty())
    }

    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Standard-time offset.
    pub fn std_offset(&self) -> UtcOffset {
        self.std_offset
    }

    /// Daylight-saving offset; equal to the STD offset where DST isn't observed.
    pub fn dst_offset(&self) -> UtcOffset {
        self.dst_offset
    }

    pub fn observes_dst(&self) -> bool {
        self.std_offset != self.dst_offset
    }

    /// Time zone abbreviation (e.g. `CET`); numeric for zones without one (`+4`
    /// is written as `4`).
    pub fn abbreviation(&self) -> &'a str {
        self.abbreviation
    }
}

/// Simple aggregate statistics for a zone table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TableStats {
    pub rows: usize,
    pub canonical: usize,
    pub links: usize,
    pub backward_links: usize,
    /// Distinct country codes across all rows.
    pub countries: usize,
    /// Rows that could not be parsed into a [`ZoneRecord`].
    pub malformed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_country_row() {
        let row = "DE,\u{2009}DK,\u{2009}NO\tEurope/Berlin\tmost of Germany\tCanonical\t+01:00\t+02:00\tCET";
        let rec = ZoneRecord::parse(row).unwrap();
        assert_eq!(rec.country_codes().collect::<Vec<_>>(), vec!["DE", "DK", "NO"]);
        assert!(rec.has_country_code("dk"));
        assert!(!rec.has_country_code("SE"));
        assert_eq!(rec.comment(), Some("most of Germany"));
        assert!(rec.observes_dst());
        assert_eq!(rec.row(), row);
    }

    #[test]
    fn parses_countryless_backward_link() {
        let rec = ZoneRecord::parse("\tEtc/GMT+5\t\tLink†\t−05:00\t−05:00\t-5").unwrap();
        assert_eq!(rec.country_codes().count(), 0);
        assert_eq!(rec.kind(), ZoneKind::LinkBackward);
        assert!(rec.kind().is_link());
        assert_eq!(rec.std_offset(), UtcOffset::from_minutes(-300));
        assert_eq!(rec.comment(), None);
        assert!(!rec.observes_dst());
    }

    #[test]
    fn rejects_short_rows() {
        let err = ZoneRecord::parse("US  America/New_York  EST").unwrap_err();
        assert!(matches!(err, TzFindError::MalformedRow { .. }));
    }

    #[test]
    fn rejects_bad_offsets_and_kinds() {
        assert!(ZoneRecord::parse("JP\tAsia/Tokyo\t\tCanonical\t9:00\t+09:00\tJST").is_err());
        assert!(ZoneRecord::parse("JP\tAsia/Tokyo\t\tAlias\t+09:00\t+09:00\tJST").is_err());
        assert!(UtcOffset::parse("+09:75").is_none());
        assert!(UtcOffset::parse("±hh:mm").is_none());
        assert!(UtcOffset::parse("+-5:00").is_none());
        assert!(UtcOffset::parse("++5:00").is_none());
        assert!(UtcOffset::parse("-+5:00").is_none());
        assert!(UtcOffset::parse("+05:-1").is_none());
    }

    #[test]
    fn offset_display_uses_ascii() {
        assert_eq!(UtcOffset::parse("+05:45").unwrap().to_string(), "+05:45");
        assert_eq!(UtcOffset::parse("−09:30").unwrap().to_string(), "-09:30");
        assert_eq!(UtcOffset::UTC.to_string(), "+00:00");
    }
}
