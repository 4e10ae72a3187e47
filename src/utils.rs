/// Joins the non-empty, trimmed fragments with single spaces.
pub fn collapse_whitespace<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn contains_any_keyword(text: &str, keywords: &[String]) -> bool {
    let text_lower = text.to_lowercase();
    keywords
        .iter()
        .filter(|k| !k.is_empty())
        .any(|k| text_lower.contains(&k.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_nested_fragments() {
        let text = collapse_whitespace(["  Senior\n", "", " Public   Health ", "Officer"]);
        assert_eq!(text, "Senior Public Health Officer");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_chars("स्वास्थ्य अधिकारी", 3), "स्व");
        assert_eq!(truncate_chars("short", 150), "short");
    }

    #[test]
    fn keyword_match_ignores_case() {
        let keywords = vec!["Public Health".to_string(), "MPH".to_string()];
        assert!(contains_any_keyword("Walk-in for PUBLIC HEALTH specialist", &keywords));
        assert!(contains_any_keyword("mph graduates", &keywords));
        assert!(!contains_any_keyword("Tender notice", &keywords));
    }
}
