use anyhow::Result;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

/// Built-in word list used when no file is configured.
static BUILTIN_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "PROOF", "QUANTUM", "ECHO", "CIPHER", "LEDGER", "ORACLE", "BEACON",
        "VORTEX", "PHOTON", "NEBULA", "CIRCUIT", "KERNEL", "SOCKET", "BUFFER",
        "PACKET", "MATRIX", "VECTOR", "PRISM", "FLUX", "RELAY",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
});

/// The fixed, ordered list of words hidden in each round's grid.
/// Uppercase, unique, first-seen order preserved.
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a newline-separated file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let list = Self::from_lines(content.lines());

        tracing::info!("Loaded {} words into word list", list.len());

        Ok(list)
    }

    /// The built-in default list.
    pub fn builtin() -> Self {
        Self::from_lines(BUILTIN_WORDS.iter().map(String::as_str))
    }

    /// Build a list from raw lines: trim, uppercase, drop empties and
    /// single letters, dedupe keeping first occurrence.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut words: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for line in lines {
            let word = line.trim().to_uppercase();
            if word.len() < 2 || !seen.insert(word.clone()) {
                continue;
            }
            words.push(word);
        }
        Self { words }
    }

    /// Exact uppercase lookup of a candidate string or its reverse.
    /// Returns the listed word that matched.
    pub fn match_word(&self, candidate: &str) -> Option<&str> {
        let reversed: String = candidate.chars().rev().collect();
        self.words
            .iter()
            .find(|w| w.as_str() == candidate || w.as_str() == reversed)
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_normalizes() {
        let list = WordList::from_lines(vec!["  cat ", "DOG", "dog", "", "x", "Cat"]);
        let words: Vec<&str> = list.iter().collect();
        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_match_word_forward_and_reversed() {
        let list = WordList::from_lines(vec!["CAT", "DOG"]);
        assert_eq!(list.match_word("CAT"), Some("CAT"));
        assert_eq!(list.match_word("TAC"), Some("CAT"));
        assert_eq!(list.match_word("GOD"), Some("DOG"));
        assert_eq!(list.match_word("COW"), None);
    }

    #[test]
    fn test_match_is_case_sensitive_uppercase() {
        let list = WordList::from_lines(vec!["CAT"]);
        assert_eq!(list.match_word("cat"), None);
    }

    #[test]
    fn test_builtin_is_nonempty_and_unique() {
        let list = WordList::builtin();
        assert!(!list.is_empty());
        let words: Vec<&str> = list.iter().collect();
        let mut deduped = words.clone();
        deduped.dedup();
        assert_eq!(words.len(), deduped.len());
    }
}
