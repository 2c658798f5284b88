//! Text normalization shared by indexing and querying.

/// Lower-cases `text`, turns everything except letters, digits, `_` and
/// whitespace into separators, and drops stopwords.
///
/// Corpus text and queries go through the same function, which is what
/// makes search case- and punctuation-insensitive.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}

pub fn is_stopword(token: &str) -> bool {
    matches!(
        token,
        // articles and determiners
        "a" | "an"
            | "the"
            | "this"
            | "that"
            | "these"
            | "those"
            | "some"
            | "any"
            | "each"
            | "every"
            | "all"
            // conjunctions
            | "and"
            | "or"
            | "but"
            | "nor"
            | "so"
            | "yet"
            | "if"
            | "then"
            | "than"
            // prepositions
            | "in"
            | "on"
            | "at"
            | "to"
            | "for"
            | "of"
            | "with"
            | "by"
            | "from"
            | "as"
            | "into"
            | "about"
            // auxiliary verbs
            | "is"
            | "are"
            | "was"
            | "were"
            | "be"
            | "been"
            | "being"
            | "am"
            | "do"
            | "does"
            | "did"
            | "have"
            | "has"
            | "had"
            | "will"
            | "would"
            | "shall"
            | "should"
            | "can"
            | "could"
            | "may"
            | "might"
            | "must"
            // pronouns
            | "i"
            | "me"
            | "my"
            | "we"
            | "us"
            | "our"
            | "you"
            | "your"
            | "he"
            | "him"
            | "his"
            | "she"
            | "her"
            | "it"
            | "its"
            | "they"
            | "them"
            | "their"
            | "what"
            | "which"
            | "who"
            | "whom"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("List Employees"), vec!["list", "employees"]);
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        assert_eq!(
            tokenize("employees, time-off & (requests)!"),
            vec!["employees", "time", "off", "requests"]
        );
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        assert_eq!(
            tokenize("hris_list_employees v2"),
            vec!["hris_list_employees", "v2"]
        );
    }

    #[test]
    fn test_drops_stopwords() {
        assert_eq!(tokenize("Get all of the jobs"), vec!["get", "jobs"]);
        assert!(tokenize("the and of it").is_empty());
    }

    #[test]
    fn test_action_words_are_not_stopwords() {
        for word in ["create", "update", "delete", "get", "list", "search"] {
            assert!(!is_stopword(word), "{word} must stay searchable");
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!  ").is_empty());
    }
}
