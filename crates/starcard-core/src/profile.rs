//! Profile text helpers.

/// Derive avatar initials from a display name.
///
/// Takes the first character of the first two whitespace-separated words,
/// upper-cased. Empty or blank names give an empty string.
pub fn initials_from_name(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_words() {
        assert_eq!(initials_from_name("Ada Lovelace"), "AL");
    }

    #[test]
    fn test_extra_words_ignored() {
        assert_eq!(initials_from_name("grace brewster murray hopper"), "GB");
    }

    #[test]
    fn test_irregular_whitespace() {
        assert_eq!(initials_from_name("  linus \t  torvalds\n"), "LT");
    }

    #[test]
    fn test_single_word_and_empty() {
        assert_eq!(initials_from_name("ferris"), "F");
        assert_eq!(initials_from_name(""), "");
        assert_eq!(initials_from_name("   "), "");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(initials_from_name("иван петров"), "ИП");
    }
}
