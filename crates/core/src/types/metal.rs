//! Metal set parsing for product records.
//!
//! The catalog wire format carries a product's metals as a single
//! comma-delimited string (e.g., `"Gold, Rose Gold"`). Components compare
//! metals case-insensitively, so parsing normalizes to lowercase.

/// Parse a comma-delimited metal string into a normalized set.
///
/// Entries are trimmed and lowercased; empty entries are dropped. An empty
/// or whitespace-only input yields an empty set.
#[must_use]
pub fn parse_metals(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Join a metal set back into display form.
#[must_use]
pub fn format_metals(metals: &[String]) -> String {
    metals.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let metals = parse_metals("Gold, Rose Gold ,SILVER");
        assert_eq!(metals, vec!["gold", "rose gold", "silver"]);
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_metals("").is_empty());
        assert!(parse_metals("  ,  ,").is_empty());
    }

    #[test]
    fn test_format_joins_with_comma() {
        let metals = vec!["gold".to_string(), "silver".to_string()];
        assert_eq!(format_metals(&metals), "gold, silver");
    }
}
