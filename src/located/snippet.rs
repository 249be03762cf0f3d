use unicode_width::UnicodeWidthChar;

use super::{ContextWindow, PLACEHOLDER};

const TAB: &str = "    ";

/// A [`ContextWindow`] ready for display, with a caret under the error column
/// when one is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet<'a> {
    window: ContextWindow,
    column: Option<usize>,
    source_name: Option<&'a str>,
}

impl<'a> Snippet<'a> {
    pub const fn new(
        window: ContextWindow,
        column: Option<usize>,
        source_name: Option<&'a str>,
    ) -> Self {
        Self {
            window,
            column,
            source_name,
        }
    }

    pub const fn window(&self) -> &ContextWindow {
        &self.window
    }

    pub fn into_window(self) -> ContextWindow {
        self.window
    }
}

impl std::fmt::Display for Snippet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let num_digits = |n: usize| if n == 0 { 1 } else { n.ilog10() as usize + 1 };
        let gutter = num_digits(self.window.last_line());
        let error_line = self.window.error_line_number();

        write!(
            f,
            "{:gutter$}--> {}:{}",
            "",
            self.source_name.unwrap_or(PLACEHOLDER),
            error_line,
        )?;
        if let Some(column) = self.column {
            write!(f, ":{}", column)?;
        }

        for (number, line) in self.window.numbered() {
            write!(f, "\n{:>gutter$} |", number)?;
            if !line.is_empty() {
                write!(f, " {}", line.replace('\t', TAB))?;
            }

            let Some(column) = self.column.filter(|_| number == error_line) else { continue; };

            write!(f, "\n{:gutter$} | ", "")?;
            for _ in 0..caret_offset(line, column) {
                write!(f, " ")?;
            }
            write!(f, "^")?;
        }

        Ok(())
    }
}

/// Display width of the text preceding the 1-based `column` of `line`.
///
/// Columns past the end of the line land one cell after its last character.
fn caret_offset(line: &str, column: usize) -> usize {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| match c {
            '\t' => TAB.len(),
            c => c.width().unwrap_or(0),
        })
        .sum()
}
