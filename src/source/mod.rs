//! Input sources for the history lines.
//!
//! - File loading: one history line per text line
//! - Demo: generated calculator-style history

use crate::error::InputError;
use std::path::PathBuf;

pub mod demo;
pub mod file;

pub use demo::{demo_line, demo_lines, DEFAULT_DEMO_LINES};
pub use file::read_lines;

/// Where the initial history comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read lines from a text file.
    File(PathBuf),
    /// Generate this many demo lines.
    Demo(usize),
}

impl InputSource {
    /// Load every line.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the file is missing, not text, or unreadable.
    pub fn load(&self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(path) => read_lines(path),
            InputSource::Demo(count) => Ok(demo_lines(*count)),
        }
    }
}

/// Pick the input source from the command line.
///
/// A file path wins over `--demo`. With neither, demo lines are generated.
pub fn detect_input_source(file: Option<PathBuf>, demo: Option<usize>) -> InputSource {
    match file {
        Some(path) => InputSource::File(path),
        None => InputSource::Demo(demo.unwrap_or(DEFAULT_DEMO_LINES)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_path_wins_over_demo() {
        let source = detect_input_source(Some(PathBuf::from("h.txt")), Some(5));
        assert_eq!(source, InputSource::File(PathBuf::from("h.txt")));
    }

    #[test]
    fn no_arguments_means_default_demo() {
        assert_eq!(
            detect_input_source(None, None),
            InputSource::Demo(DEFAULT_DEMO_LINES)
        );
    }

    #[test]
    fn demo_source_loads_requested_count() {
        let lines = InputSource::Demo(7).load().unwrap();
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn file_source_loads_lines() {
        let path = std::env::temp_dir().join("vscroll_source_load.txt");
        fs::write(&path, "1 + 1 = 2\n2 * 3 = 6\n").unwrap();

        let lines = InputSource::File(path.clone()).load().unwrap();

        let _ = fs::remove_file(&path);
        assert_eq!(lines, vec!["1 + 1 = 2", "2 * 3 = 6"]);
    }
}
