use std::sync::Arc;

use super::LocatedError;

pub type Result<T, E = SettingsError> = std::result::Result<T, E>;

/// Where a [`SettingsError`] came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    line: Option<usize>,
    column: Option<usize>,
    input: Option<Arc<str>>,
    source_name: Option<String>,
}

impl Origin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: impl Into<Arc<str>>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn at_column(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("syntax error: {message}")]
    Syntax { message: String, origin: Origin },
    #[error("invalid setting: {message}")]
    Validation { message: String, origin: Origin },
    #[error("schema mismatch: {message}")]
    Schema { message: String, origin: Origin },
}

impl SettingsError {
    pub fn syntax(message: impl Into<String>, origin: Origin) -> Self {
        Self::Syntax {
            message: message.into(),
            origin,
        }
    }

    pub fn validation(message: impl Into<String>, origin: Origin) -> Self {
        Self::Validation {
            message: message.into(),
            origin,
        }
    }

    pub fn schema(message: impl Into<String>, origin: Origin) -> Self {
        Self::Schema {
            message: message.into(),
            origin,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. }
            | Self::Validation { message, .. }
            | Self::Schema { message, .. } => message,
        }
    }

    pub fn origin(&self) -> &Origin {
        match self {
            Self::Syntax { origin, .. }
            | Self::Validation { origin, .. }
            | Self::Schema { origin, .. } => origin,
        }
    }
}

impl LocatedError for SettingsError {
    fn line(&self) -> Option<usize> {
        self.origin().line
    }

    fn position(&self) -> Option<usize> {
        self.origin().column
    }

    fn input(&self) -> Option<&str> {
        self.origin().input.as_deref()
    }

    fn source_name(&self) -> Option<&str> {
        self.origin().source_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "name = app\nport = eighty\nhost = localhost\n";

    fn load_port(input: &str) -> Result<u16> {
        let origin = Origin::new()
            .with_input(input)
            .with_source_name("config.yaml");

        let (index, value) = input
            .lines()
            .enumerate()
            .find_map(|(i, l)| l.strip_prefix("port = ").map(|v| (i, v)))
            .ok_or_else(|| SettingsError::schema("missing `port`", origin.clone()))?;

        value.parse().map_err(|_| {
            SettingsError::validation(
                format!("`{value}` is not a port"),
                origin.at_column(index + 1, "port = ".len() + 1),
            )
        })
    }

    #[test]
    pub fn exposes_origin() {
        let err = load_port(INPUT).unwrap_err();

        assert_eq!(err.message(), "`eighty` is not a port");
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.position(), Some(8));
        assert_eq!(err.input(), Some(INPUT));
        assert_eq!(err.source_name(), Some("config.yaml"));
        assert_eq!(err.to_string(), "invalid setting: `eighty` is not a port");
    }

    #[test]
    pub fn window_from_error() {
        let err = load_port(INPUT).unwrap_err();
        let window = err.interesting_lines(1).unwrap();

        assert_eq!(window.first_line(), 1);
        assert_eq!(window.lines(), ["name = app", "port = eighty", "host = localhost"]);
        assert_eq!(window.error_line_index(), 1);
    }

    #[test]
    pub fn unlocated_error() {
        let err = load_port("name = app").unwrap_err();

        assert!(matches!(err, SettingsError::Schema { .. }));
        assert_eq!(err.line(), None);
        assert_eq!(err.position(), None);
        assert_eq!(err.interesting_lines(2), None);
        assert_eq!(err.render(), "schema mismatch: missing `port` in config.yaml:?");
    }

    #[test]
    pub fn shared_input() {
        let input: Arc<str> = Arc::from("a = [\nb = 2");
        let first = SettingsError::syntax("unclosed `[`", Origin::new().with_input(input.clone()).at(1));
        let second = SettingsError::syntax("expected `]`", Origin::new().with_input(input).at(2));

        assert!(std::ptr::eq(first.input().unwrap(), second.input().unwrap()));
        assert_eq!(second.interesting_lines(0).unwrap().error_line(), "b = 2");
    }
}
