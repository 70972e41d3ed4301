//! Generated calculator-style history for trying the viewer without a file.

/// Number of lines generated when no file or count is given.
pub const DEFAULT_DEMO_LINES: usize = 200;

/// Demo history line `n`.
///
/// Deterministic, and every seventh line is long enough to wrap in a narrow
/// terminal so rows of different heights are mixed in.
///
/// # Examples
///
/// ```
/// # use vscroll::source::demo_line;
/// assert_eq!(demo_line(0), "11 + 8 = 19");
/// assert_eq!(demo_line(1), "48 - 61 = -13");
/// ```
pub fn demo_line(n: usize) -> String {
    let a = ((n * 37 + 11) % 1000) as i64;
    let b = ((n * 53 + 7) % 100 + 1) as i64;
    let (op, result) = match n % 4 {
        0 => ('+', a + b),
        1 => ('-', a - b),
        2 => ('*', a * b),
        _ => ('/', a / b),
    };

    if n % 7 == 6 {
        format!(
            "{a} {op} {b} = {result}  (long entry: kept to show how a wrapped row \
             takes several rows of the viewport while its neighbours take one)"
        )
    } else {
        format!("{a} {op} {b} = {result}")
    }
}

/// The first `count` demo lines.
pub fn demo_lines(count: usize) -> Vec<String> {
    (0..count).map(demo_line).collect()
}
