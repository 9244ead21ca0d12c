use std::{fmt, io};

/// Crate-wide `Result` type using [`TypeaheadError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, TypeaheadError>;

/// Top-level error type for typeahead operations.
#[derive(Debug)]
pub enum TypeaheadError {
    /// Candidate loading errors.
    Load(LoadError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Errors raised while loading or validating the candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Candidate file not found.
    FileNotFound(String),

    /// Candidate file could not be read.
    ReadFailed(String),

    /// Candidate data is not a JSON array of `{name, code}` objects.
    InvalidFormat(String),

    /// A candidate has an empty display name.
    EmptyName { code: String },

    /// Two candidates share the same code.
    DuplicateCode(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for TypeaheadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeaheadError::Load(e) => write!(f, "Load error: {e}"),
            TypeaheadError::Config(e) => write!(f, "Configuration error: {e}"),
            TypeaheadError::Io(e) => write!(f, "I/O error: {e}"),
            TypeaheadError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FileNotFound(path) => write!(f, "Candidate file not found: {path}"),
            LoadError::ReadFailed(msg) => write!(f, "Failed to read candidates: {msg}"),
            LoadError::InvalidFormat(msg) => write!(f, "Invalid candidate data: {msg}"),
            LoadError::EmptyName { code } => {
                write!(f, "Candidate with code '{code}' has an empty name")
            }
            LoadError::DuplicateCode(code) => write!(f, "Duplicate candidate code: {code}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for TypeaheadError {}
impl std::error::Error for LoadError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to TypeaheadError ========================= */

impl From<io::Error> for TypeaheadError {
    fn from(err: io::Error) -> Self {
        TypeaheadError::Io(err)
    }
}

impl From<LoadError> for TypeaheadError {
    fn from(err: LoadError) -> Self {
        TypeaheadError::Load(err)
    }
}

impl From<ConfigError> for TypeaheadError {
    fn from(err: ConfigError) -> Self {
        TypeaheadError::Config(err)
    }
}

impl From<toml::de::Error> for TypeaheadError {
    fn from(err: toml::de::Error) -> Self {
        TypeaheadError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for TypeaheadError {
    fn from(err: toml::ser::Error) -> Self {
        TypeaheadError::Config(ConfigError::Generic(format!(
            "Failed to serialize config: {err}"
        )))
    }
}

impl From<String> for TypeaheadError {
    fn from(msg: String) -> Self {
        TypeaheadError::Generic(msg)
    }
}

impl From<&str> for TypeaheadError {
    fn from(msg: &str) -> Self {
        TypeaheadError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = TypeaheadError::from(LoadError::DuplicateCode("AL".to_string()));
        assert_eq!(err.to_string(), "Load error: Duplicate candidate code: AL");

        let err = LoadError::EmptyName {
            code: "XX".to_string(),
        };
        assert_eq!(err.to_string(), "Candidate with code 'XX' has an empty name");
    }

    #[test]
    fn test_config_error_display() {
        let err = TypeaheadError::from(ConfigError::InvalidValue {
            field: "loader.delay_ms".to_string(),
            value: "90000".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value '90000' for field 'loader.delay_ms'"
        );
    }

    #[test]
    fn test_from_str() {
        let err: TypeaheadError = "boom".into();
        assert_eq!(err.to_string(), "boom");
    }
}
