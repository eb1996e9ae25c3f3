//! In-memory word list loaded from a plain-text file.
//!
//! One word per line; blank lines and lines starting with `#` are skipped.
//! Matching is case-insensitive.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use super::{Dictionary, DictionaryError, Verdict};

#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordList {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_uppercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, std::io::Error> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_ascii_uppercase());
        }
        Ok(WordList { words })
    }

    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let wrap = |source| DictionaryError::WordList { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(wrap)?;
        let list = WordList::from_reader(BufReader::new(file)).map_err(wrap)?;
        info!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

impl Dictionary for WordList {
    fn validate(&self, words: &[String]) -> Result<Verdict, DictionaryError> {
        let invalid: Vec<String> = words.iter().filter(|w| !self.contains(w)).cloned().collect();
        if invalid.is_empty() {
            Ok(Verdict::accepted())
        } else {
            Ok(Verdict::rejected(invalid))
        }
    }

    fn name(&self) -> &str {
        "word-list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_skips_comments_and_blank_lines() {
        let text = "# header\ncat\n\n  dog \nCATS\n";
        let list = WordList::from_reader(text.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("Dog"));
        assert!(!list.contains("header"));
    }

    #[test]
    fn validate_lists_unknown_words() {
        let list = WordList::from_words(["CAT", "AT"]);
        let words = vec!["CAT".to_string(), "XQ".to_string(), "AT".to_string()];
        let v = list.validate(&words).unwrap();
        assert!(!v.all_valid);
        assert_eq!(v.invalid_words, vec!["XQ".to_string()]);
        assert!(list.is_trusted());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qi\nza").unwrap();
        let list = WordList::load(file.path()).unwrap();
        assert!(list.contains("QI"));
        assert!(list.contains("za"));
    }

    #[test]
    fn load_missing_file_errors() {
        let err = WordList::load(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::WordList { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
