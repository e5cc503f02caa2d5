/// Split a comma-separated list field into trimmed tokens.
///
/// Empty tokens are kept; each consumer decides what to do with them.
pub fn split_tokens(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).collect()
}

/// Classify a token as a numeric id.
///
/// A token is numeric when it is non-empty and consists of ASCII digits
/// only. Anything else (including decimals and signed numbers) is treated
/// as a slug. Every clause that distinguishes ids from slugs goes through
/// this one predicate.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the field value when it holds anything besides whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tokens() {
        assert_eq!(split_tokens("news, 5 ,sports"), vec!["news", "5", "sports"]);
        assert_eq!(split_tokens("solo"), vec!["solo"]);
        assert_eq!(split_tokens("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn classifies_numeric_tokens() {
        assert!(is_numeric_token("5"));
        assert!(is_numeric_token("123456"));
        assert!(!is_numeric_token("news"));
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("1.5"));
        assert!(!is_numeric_token("-3"));
        assert!(!is_numeric_token("5a"));
    }

    #[test]
    fn blank_fields_count_as_absent() {
        assert_eq!(non_blank(Some("news")), Some("news"));
        assert_eq!(non_blank(Some("  ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }
}
