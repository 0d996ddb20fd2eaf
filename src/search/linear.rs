/// Scans `entries` in their original order and returns the first one that
/// contains `query` as a substring.
pub fn linear_search<'a, S: AsRef<str>>(entries: &'a [S], query: &str) -> Option<&'a S> {
    entries.iter().find(|entry| entry.as_ref().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_on_substring() {
        let entries = ["1 Doe", "2 Roe", "3 Moe"];
        assert_eq!(linear_search(&entries, "oe"), Some(&"1 Doe"));
        assert_eq!(linear_search(&entries, "Moe"), Some(&"3 Moe"));
        assert_eq!(linear_search(&entries, "Zoe"), None);
    }

    #[test]
    fn empty_directory_finds_nothing() {
        let entries: [String; 0] = [];
        assert!(linear_search(&entries, "Doe").is_none());
    }
}
