//! Errors that know where in their source text they happened, and the
//! context windows that can be cut around them.

mod context;
mod error;
mod snippet;

pub use context::{interesting_lines, split_lines, ContextWindow, InvalidWindow};
pub use error::{Origin, Result, SettingsError};
pub use snippet::Snippet;

/// Border used by [`LocatedError::default_snippet`].
pub const DEFAULT_BORDER: usize = 2;

/// Stands in for an unknown source name or line when rendering.
pub const PLACEHOLDER: &str = "?";

/// An error raised while processing textual input.
///
/// Line and column are 1-based claims made by whoever raised the error. They
/// are never checked against [`input`](LocatedError::input).
pub trait LocatedError: std::error::Error {
    fn line(&self) -> Option<usize>;

    /// Column on [`line`](LocatedError::line), if known.
    fn position(&self) -> Option<usize>;

    /// The complete text that was being processed.
    fn input(&self) -> Option<&str>;

    /// File path or resource name the input was read from.
    fn source_name(&self) -> Option<&str>;

    /// Lines around the error line, `border` on each side.
    fn interesting_lines(&self, border: usize) -> Option<ContextWindow> {
        interesting_lines(self.input(), self.line(), border)
    }

    /// The window around the error, ready for display.
    ///
    /// Emits a `debug` event when the error's location cannot be shown.
    fn snippet(&self, border: usize) -> Option<Snippet<'_>> {
        let Some(window) = self.interesting_lines(border) else {
            tracing::debug!(
                line = ?self.line(),
                border,
                source_name = ?self.source_name(),
                has_input = self.input().is_some(),
                "no context window for error"
            );
            return None;
        };

        Some(Snippet::new(window, self.position(), self.source_name()))
    }

    fn default_snippet(&self) -> Option<Snippet<'_>> {
        self.snippet(DEFAULT_BORDER)
    }

    /// `"<description> in <source name>:<line>"`.
    fn render(&self) -> String {
        Rendered(self).to_string()
    }

    fn rendered(&self) -> Rendered<'_, Self>
    where
        Self: Sized,
    {
        Rendered(self)
    }
}

/// Displays a [`LocatedError`] as `"<description> in <source name>:<line>"`.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a, E: ?Sized>(&'a E);

impl<E: LocatedError + ?Sized> std::fmt::Display for Rendered<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {}:", self.0, self.0.source_name().unwrap_or(PLACEHOLDER))?;
        match self.0.line() {
            Some(line) => write!(f, "{}", line),
            None => f.write_str(PLACEHOLDER),
        }
    }
}
