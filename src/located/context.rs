use once_cell::sync::Lazy;
use regex::Regex;

static SPLIT_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r?\n").unwrap());

/// Lines of source surrounding a reported error line.
///
/// Always holds at least one line, and the error line is one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWindow")
)]
pub struct ContextWindow {
    first_line: usize,
    lines: Vec<String>,
    error_line_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidWindow {
    #[error("context window has no lines")]
    Empty,
    #[error("context window starts at line 0")]
    LineZero,
    #[error("error line index {index} is outside of {len} lines")]
    ErrorLineOutOfRange { index: usize, len: usize },
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWindow {
    first_line: usize,
    lines: Vec<String>,
    error_line_index: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWindow> for ContextWindow {
    type Error = InvalidWindow;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.first_line, raw.lines, raw.error_line_index)
    }
}

impl ContextWindow {
    pub fn new(
        first_line: usize,
        lines: Vec<String>,
        error_line_index: usize,
    ) -> Result<Self, InvalidWindow> {
        if lines.is_empty() {
            return Err(InvalidWindow::Empty);
        }
        if first_line == 0 {
            return Err(InvalidWindow::LineZero);
        }
        if error_line_index >= lines.len() {
            return Err(InvalidWindow::ErrorLineOutOfRange {
                index: error_line_index,
                len: lines.len(),
            });
        }

        Ok(Self {
            first_line,
            lines,
            error_line_index,
        })
    }

    /// 1-based number of the first line in the window.
    pub const fn first_line(&self) -> usize {
        self.first_line
    }

    /// 1-based number of the last line in the window.
    pub fn last_line(&self) -> usize {
        self.first_line + self.lines.len() - 1
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 0-based offset of the error line within [`lines`](Self::lines).
    pub const fn error_line_index(&self) -> usize {
        self.error_line_index
    }

    pub fn error_line(&self) -> &str {
        &self.lines[self.error_line_index]
    }

    /// 1-based number of the error line in the source.
    pub const fn error_line_number(&self) -> usize {
        self.first_line + self.error_line_index
    }

    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (self.first_line + i, line.as_str()))
    }
}

/// Splits `input` on `\n` and `\r\n`.
///
/// Trailing empty lines are dropped, so `"a\n\n"` is the single line `"a"`
/// and `"\n"` has no lines at all. The empty input is one empty line.
pub fn split_lines(input: &str) -> Vec<&str> {
    if input.is_empty() {
        return vec![""];
    }

    let mut lines = SPLIT_LINES.split(input).collect::<Vec<_>>();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Extracts up to `border` lines on each side of the 1-based `line`.
///
/// Returns `None` when there is no input or line, or when the line claim lies
/// outside of `input`. Never panics.
pub fn interesting_lines(
    input: Option<&str>,
    line: Option<usize>,
    border: usize,
) -> Option<ContextWindow> {
    let (Some(input), Some(line)) = (input, line) else {
        return None;
    };

    let lines = split_lines(input);
    let (first, last) = window_bounds(lines.len(), line, border)?;
    let focus = lines.get(first..=last)?;

    Some(ContextWindow {
        first_line: first + 1,
        lines: focus.iter().map(|&l| l.to_owned()).collect(),
        error_line_index: line - 1 - first,
    })
}

/// Inclusive 0-based bounds of the window, clamped to `line_count`.
fn window_bounds(line_count: usize, line: usize, border: usize) -> Option<(usize, usize)> {
    let zero_based = line.checked_sub(1)?;
    let max_index = line_count.checked_sub(1)?;
    if zero_based > max_index {
        return None;
    }

    let first = zero_based.saturating_sub(border);
    let last = max_index.min(zero_based.saturating_add(border));

    (first <= last).then_some((first, last))
}
