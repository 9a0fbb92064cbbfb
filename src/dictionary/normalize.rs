//! Token normalization applied symmetrically to word-list entries and
//! target-file tokens.

/// Normalize a raw whitespace-delimited token into a comparable word.
///
/// Case-folds to lowercase and strips punctuation, keeping hyphens and
/// apostrophes only when they sit inside the word ("well-known", "don't").
/// Returns `None` for tokens with no word content at all ("...", "--").
pub fn normalize_token(token: &str) -> Option<String> {
    let mut word = String::with_capacity(token.len());
    for ch in token.chars() {
        if ch.is_alphanumeric() {
            word.extend(ch.to_lowercase());
        } else if ch == '-' || ch == '\'' {
            word.push(ch);
        }
    }

    let word = word.trim_matches(|c| c == '-' || c == '\'');
    if word.is_empty() {
        None
    } else {
        Some(word.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case() {
        assert_eq!(normalize_token("Cat"), Some("cat".to_string()));
        assert_eq!(normalize_token("HELLO"), Some("hello".to_string()));
    }

    #[test]
    fn strips_edge_punctuation() {
        assert_eq!(normalize_token("Cat."), Some("cat".to_string()));
        assert_eq!(normalize_token("(hello),"), Some("hello".to_string()));
        assert_eq!(normalize_token("\"quoted!\""), Some("quoted".to_string()));
    }

    #[test]
    fn keeps_internal_hyphen_and_apostrophe() {
        assert_eq!(normalize_token("well-known"), Some("well-known".to_string()));
        assert_eq!(normalize_token("don't"), Some("don't".to_string()));
        // Edge hyphens and apostrophes are not word content.
        assert_eq!(normalize_token("--dash--"), Some("dash".to_string()));
        assert_eq!(normalize_token("'tis'"), Some("tis".to_string()));
    }

    #[test]
    fn drops_tokens_without_word_content() {
        assert_eq!(normalize_token("..."), None);
        assert_eq!(normalize_token("--"), None);
        assert_eq!(normalize_token(""), None);
    }
}
