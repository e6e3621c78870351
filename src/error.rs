use thiserror::Error;

/// Failures reported by the host services and the settings layer.
///
/// Errors travel inside application messages, so every variant carries
/// owned strings and the type stays `Clone`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("could not read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("could not decode {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("could not list images in {directory}: {reason}")]
    List { directory: String, reason: String },

    /// Neither the native nor the alternate path separator appears in the path.
    #[error("cannot resolve a directory from {0}")]
    UnresolvableDirectory(String),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("invalid settings: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn read(path: &str, err: impl std::fmt::Display) -> Self {
        Error::Read {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn decode(path: &str, err: impl std::fmt::Display) -> Self {
        Error::Decode {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn list(directory: &str, err: impl std::fmt::Display) -> Self {
        Error::List {
            directory: directory.to_string(),
            reason: err.to_string(),
        }
    }
}
