// crates/tzfind-core/src/text.rs

/// Case-fold a string for similarity scoring.
///
/// This is plain Unicode lowercasing. No transliteration happens here: the
/// score is computed over the real characters of a row (`−`, `†`, accented
/// letters), so folding must not change how many characters a row has.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::text::fold_case;
///
/// assert_eq!(fold_case("JP\tAsia/Tokyo"), "jp\tasia/tokyo");
/// assert_eq!(fold_case("−05:00"), "−05:00");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into a folded key suitable for lookups.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Asunción` -> `Asuncion`)
/// 2\) Normalize to lowercase
///
/// Used for identifier and comment matching only, never for ranking.
///
/// # Examples
///
/// ```rust
/// use tzfind_core::text::fold_key;
///
/// assert_eq!(fold_key("America/Asunción"), "america/asuncion");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after [`fold_key`] normalization.
///
/// ```rust
/// use tzfind_core::text::equals_folded;
///
/// assert!(equals_folded("Europe/Zürich", "europe/zurich"));
/// assert!(!equals_folded("Europe/Berlin", "Europe/Paris"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_keeps_char_count() {
        for s in ["Link†", "−04:00", "Asia/Ho_Chi_Minh", "ÖSTERREICH", "AE,\u{2009}OM"] {
            assert_eq!(s.chars().count(), fold_case(s).chars().count(), "{s}");
        }
    }

    #[test]
    fn fold_key_transliterates() {
        assert_eq!(fold_key("Nouméa"), "noumea");
        assert!(equals_folded("ÖRESUND", "oresund"));
    }
}
