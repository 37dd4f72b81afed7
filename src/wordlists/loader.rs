//! Word list loading utilities
//!
//! Loads words from a text file or from the embedded list. Blank lines and
//! `#` comments are ignored; entries that are not five ASCII letters are
//! skipped with a warning.

use super::WORDS;
use crate::core::Word;
use crate::lexicon::Lexicon;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Name that selects the embedded list in [`load_lexicon`]
pub const EMBEDDED: &str = "embedded";

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordlebot::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(content.lines());
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice into words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordlebot::wordlists::loader::words_from_slice;
/// use wordlebot::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    parse_lines(slice.iter().copied())
}

/// Build a lexicon from `"embedded"` or a file path
///
/// # Errors
///
/// Returns an I/O error if `source` names a file that cannot be read.
pub fn load_lexicon(source: &str) -> io::Result<Lexicon> {
    let words = if source == EMBEDDED {
        words_from_slice(WORDS)
    } else {
        load_from_file(source)?
    };
    Ok(Lexicon::new(words))
}

fn parse_lines<'a, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!("skipping word list entry {line:?}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl8te", "", "SLATE"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!("wordlebot-loader-{}.txt", std::process::id()));
        fs::write(&path, "# openers\ncrane\n\n  slate  \nnope\nirate\ncrane\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate", "crane"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
        assert!(load_lexicon("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_embedded_lexicon() {
        let lexicon = load_lexicon(EMBEDDED).unwrap();
        assert_eq!(lexicon.len(), WORDS.len());
        assert!(lexicon.contains(&Word::new("crane").unwrap()));
    }
}
