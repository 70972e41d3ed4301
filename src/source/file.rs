//! File-based history source.

use crate::error::InputError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

/// Read every line of a UTF-8 text file.
///
/// Line endings (`\n` or `\r\n`) are stripped. A trailing newline does not
/// produce an empty last line.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::NotText` if it is not valid UTF-8 and `InputError::Io` for
/// other I/O errors.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidData => InputError::NotText {
                path: path.to_path_buf(),
            },
            _ => InputError::Io(e),
        })?;

    debug!(path = %path.display(), lines = lines.len(), "Loaded history file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_lines_without_endings() {
        let path = std::env::temp_dir().join("vscroll_read_lines_endings.txt");
        fs::write(&path, "first\r\nsecond\n\nfourth").unwrap();

        let lines = read_lines(&path).unwrap();

        let _ = fs::remove_file(&path);
        assert_eq!(lines, vec!["first", "second", "", "fourth"]);
    }

    #[test]
    fn empty_file_has_no_lines() {
        let path = std::env::temp_dir().join("vscroll_read_lines_empty.txt");
        fs::write(&path, "").unwrap();

        let lines = read_lines(&path).unwrap();

        let _ = fs::remove_file(&path);
        assert!(lines.is_empty());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let missing = std::env::temp_dir().join("vscroll_nonexistent_12345.txt");

        let result = read_lines(&missing);

        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }

    #[test]
    fn binary_file_is_not_text() {
        let path = std::env::temp_dir().join("vscroll_read_lines_binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, b'\n']).unwrap();

        let result = read_lines(&path);

        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(InputError::NotText { .. })));
    }
}
