use crate::types::{Token, TokenRef};

/// Splits normalized text into whitespace-delimited tokens. Never yields an empty token.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(|token| token.to_string()).collect()
}

/// Returns `(first, last)` for a person name.
///
/// - No tokens: `(None, None)`
/// - One token: `(Some(token), None)`
/// - Two or more: `(Some(first), Some(last))`; middle tokens are reachable via
///   [`middle_tokens`].
pub fn extract_first_last(text: &str) -> (Option<&TokenRef>, Option<&TokenRef>) {
    let mut tokens = text.split_whitespace();
    let first = tokens.next();
    let last = tokens.last();

    (first, last)
}

/// Tokens strictly between the first and the last one.
pub fn middle_tokens(text: &str) -> Vec<&TokenRef> {
    let tokens: Vec<&TokenRef> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Vec::new();
    }

    tokens[1..tokens.len() - 1].to_vec()
}

/// First character of each token, concatenated.
pub fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_skips_whitespace_runs() {
        assert_eq!(tokenize("  john \t  smith\n"), vec!["john", "smith"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_extract_first_last() {
        assert_eq!(extract_first_last(""), (None, None));
        assert_eq!(extract_first_last("cher"), (Some("cher"), None));
        assert_eq!(
            extract_first_last("john smith"),
            (Some("john"), Some("smith"))
        );
        assert_eq!(
            extract_first_last("john ronald reuel tolkien"),
            (Some("john"), Some("tolkien"))
        );
    }

    #[test]
    fn test_middle_tokens() {
        assert!(middle_tokens("john smith").is_empty());
        assert_eq!(
            middle_tokens("john ronald reuel tolkien"),
            vec!["ronald", "reuel"]
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("international business machines"), "ibm");
        assert_eq!(initials(""), "");
    }
}
