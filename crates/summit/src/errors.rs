//! Error types for Summit.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from `main` are shown through Debug, but thiserror only derives Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// A site configuration that is missing a required field, has a malformed one, or could not be loaded at all.
#[derive(Error)]
pub enum ConfigurationError {
    #[error("`{field}` is required and cannot be empty")]
    MissingField { field: &'static str },

    #[error("`{field}` is malformed ({reason}), got `{value}`")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Failed to read configuration file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

impl ConfigurationError {
    /// The name of the offending field, if the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ConfigurationError::MissingField { field }
            | ConfigurationError::MalformedField { field, .. } => Some(*field),
            ConfigurationError::ReadFailed { .. } | ConfigurationError::ParseFailed { .. } => None,
        }
    }
}

#[derive(Error)]
pub enum IoError {
    #[error("Failed to create directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read file: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy {from} to {to}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// The path the failed operation was targeting.
    pub fn path(&self) -> &PathBuf {
        match self {
            IoError::CreateDirFailed { path, .. }
            | IoError::WriteFailed { path, .. }
            | IoError::ReadFailed { path, .. } => path,
            IoError::CopyFailed { to, .. } => to,
        }
    }
}

#[derive(Error)]
pub enum DeployError {
    #[error("{path} is not a git repository")]
    NotARepository { path: PathBuf },

    #[error("Docs directory {path} does not exist, run `summit setup` first")]
    MissingDocs { path: PathBuf },

    #[error("Failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

#[derive(Error, Debug)]
pub enum SummitError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Deploy(#[from] DeployError),

    #[error("Failed to serialize the site configuration document")]
    Render(#[from] serde_yaml::Error),

    #[error("Failed to serialize or parse the artifact manifest")]
    Manifest(#[from] serde_json::Error),
}

impl_debug_for_error!(ConfigurationError, IoError, DeployError);
