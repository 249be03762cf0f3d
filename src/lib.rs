//! Source context for errors raised while processing text.
//!
//! An error implementing [`LocatedError`] can cut a [`ContextWindow`] of the
//! lines around where it happened, and display it as a [`Snippet`].

pub mod located;

pub use located::{
    interesting_lines, split_lines, ContextWindow, InvalidWindow, LocatedError, Origin,
    Rendered, SettingsError, Snippet, DEFAULT_BORDER,
};
