use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProjectError>;

/// Reasons a project name is rejected.
///
/// Every variant is recoverable: the user re-runs with different input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Project name must contain at least one letter or digit")]
    AllInvalidCharacters,

    #[error("Project name cannot consist only of dashes")]
    DashesOnly,

    #[error("Project name must start with a letter (got '{0}')")]
    MustStartWithLetter(String),

    #[error("Project name must be at least {min} characters (got '{name}')")]
    TooShort { name: String, min: usize },

    #[error("Project name must be at most {max} characters (got {len})")]
    TooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid project name: {0}")]
    Name(#[from] NameError),

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Sources directory not found: {0}")]
    MissingSourcesDirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for ProjectError {
    fn from(err: config::ConfigError) -> Self {
        ProjectError::Configuration(err.to_string())
    }
}
