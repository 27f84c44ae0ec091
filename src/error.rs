use std::fmt;

/// Error types for urlcheck operations.
///
/// The checker itself is total and never raises these; they cover the
/// front end's own failure modes (config loading, argument handling).
#[derive(Debug)]
pub enum UrlCheckError {
    /// IO error (config file reads, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for UrlCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlCheckError::Io(err) => write!(f, "IO error: {err}"),
            UrlCheckError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlCheckError::Http(err) => write!(f, "HTTP error: {err}"),
            UrlCheckError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlCheckError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlCheckError::Io(err) => Some(err),
            UrlCheckError::Http(err) => Some(err),
            UrlCheckError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlCheckError {
    fn from(err: std::io::Error) -> Self {
        UrlCheckError::Io(err)
    }
}

impl From<reqwest::Error> for UrlCheckError {
    fn from(err: reqwest::Error) -> Self {
        UrlCheckError::Http(err)
    }
}

impl From<toml::de::Error> for UrlCheckError {
    fn from(err: toml::de::Error) -> Self {
        UrlCheckError::TomlParsing(err)
    }
}

/// Type alias for Results using UrlCheckError
pub type Result<T> = std::result::Result<T, UrlCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_error = UrlCheckError::Config("invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: invalid timeout"
        );

        let arg_error = UrlCheckError::InvalidArgument("--timeout".to_string());
        assert_eq!(format!("{arg_error}"), "Invalid argument: --timeout");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = UrlCheckError::from(io_error);

        match error {
            UrlCheckError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error = UrlCheckError::from(io_error);

        use std::error::Error;
        assert!(error.source().is_some());
        assert!(
            UrlCheckError::Config("irrelevant".to_string())
                .source()
                .is_none()
        );
    }
}
