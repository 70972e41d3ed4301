//! Display-width line wrapping shared by measurement and rendering.
//!
//! Rows are counted with the same greedy break the terminal host draws with,
//! so a measured height always matches the number of rendered rows.

use unicode_width::UnicodeWidthChar;

/// Split one `\n`-free segment into rows no wider than `width` columns.
///
/// An empty segment is one empty row. A character wider than `width` gets a
/// row to itself. Zero-width characters stay attached to the preceding row.
pub fn wrap_segment(segment: &str, width: usize) -> Vec<&str> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row_start = 0;
    let mut row_width = 0;

    for (offset, ch) in segment.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if row_width > 0 && row_width + ch_width > width {
            rows.push(&segment[row_start..offset]);
            row_start = offset;
            row_width = 0;
        }
        row_width += ch_width;
    }

    rows.push(&segment[row_start..]);
    rows
}

/// Wrap multi-line text into rows no wider than `width` columns.
///
/// # Examples
///
/// ```
/// # use vscroll::history::wrap::wrap_text;
/// assert_eq!(wrap_text("abcdef\nxy", 4), vec!["abcd", "ef", "xy"]);
/// assert_eq!(wrap_text("", 4), vec![""]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<&str> {
    text.split('\n')
        .flat_map(|segment| wrap_segment(segment, width))
        .collect()
}

/// Number of rows `text` occupies at `width` columns.
pub fn wrapped_row_count(text: &str, width: usize) -> usize {
    text.split('\n')
        .map(|segment| wrap_segment(segment, width).len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn short_line_is_one_row() {
        assert_eq!(wrap_segment("hello", 80), vec!["hello"]);
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        assert_eq!(wrap_segment("abcd", 4), vec!["abcd"]);
    }

    #[test]
    fn long_line_breaks_at_width() {
        assert_eq!(wrap_segment("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn empty_lines_still_take_a_row() {
        assert_eq!(wrapped_row_count("a\n\nb", 10), 3);
    }

    #[test]
    fn wide_characters_use_two_columns() {
        // each CJK char is 2 columns wide
        assert_eq!(wrap_segment("中文字", 4), vec!["中文", "字"]);
    }

    #[test]
    fn char_wider_than_row_gets_own_row() {
        assert_eq!(wrap_segment("a中b", 1), vec!["a", "中", "b"]);
    }

    #[test]
    fn zero_width_is_treated_as_one() {
        assert_eq!(wrapped_row_count("abc", 0), 3);
    }

    #[test]
    fn count_matches_rows() {
        let text = "first line\nsecond, a bit longer line\n\nlast";
        assert_eq!(wrapped_row_count(text, 7), wrap_text(text, 7).len());
    }

    proptest! {
        /// Rows never exceed the width unless a single char is wider.
        #[test]
        fn prop_rows_fit_width(text in "[a-z 中\n]{0,60}", width in 1usize..20) {
            for row in wrap_text(&text, width) {
                prop_assert!(
                    row.width() <= width || row.chars().count() == 1,
                    "row {:?} wider than {}", row, width
                );
            }
        }

        /// Wrapping loses no characters.
        #[test]
        fn prop_rows_preserve_content(text in "[a-z 中]{0,60}", width in 1usize..20) {
            let joined: String = wrap_text(&text, width).concat();
            prop_assert_eq!(joined, text);
        }
    }
}
