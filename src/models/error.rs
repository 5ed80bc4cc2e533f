use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigurationError(String),
    PatternError(String),
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            Error::PatternError(msg) => write!(f, "Pattern Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Error {
        Error::PatternError(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Error {
        Error::ConfigurationError(format!("Failed to build worker pool: {}", err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_regex_converts_to_pattern_error() {
        let err: Error = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, Error::PatternError(_)));
        assert!(err.to_string().starts_with("Pattern Error:"));
    }

    #[test]
    fn test_io_error_is_the_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
