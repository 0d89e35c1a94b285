//! Functionality for looking up lines in the source code.

/// Returns the text of the 1-indexed line `line_no`, without its line
/// ending. Lines are delimited by `'\n'` only, so the numbering always
/// agrees with the scanner's line counter, which treats `'\r'` as ordinary
/// whitespace.
pub fn line_text(source: &str, line_no: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line_no.checked_sub(1)?)
        .map(|line| line.trim_end_matches('\r'))
}
