//! Formatting utilities for terminal output

use crate::core::{Grade, GuessRecord};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Render a guess as coloured letter tiles
#[must_use]
pub fn colored_record(record: &GuessRecord) -> String {
    record
        .word()
        .text()
        .chars()
        .zip(record.grades())
        .map(|(ch, grade)| {
            let tile = format!(" {} ", ch.to_ascii_uppercase());
            match grade {
                Grade::Correct => tile.black().on_green().bold().to_string(),
                Grade::Present => tile.black().on_yellow().bold().to_string(),
                Grade::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long runs, drawn on stderr
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓▒░"));
    ProgressBar::new(len).with_style(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_record_keeps_letters() {
        let record = GuessRecord::new(
            Word::new("crane").unwrap(),
            Grade::parse_line("GY---").unwrap(),
        )
        .unwrap();
        let rendered = colored_record(&record);
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(rendered.contains(letter));
        }
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
