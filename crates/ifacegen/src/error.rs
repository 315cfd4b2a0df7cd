//! Errors raised while generating an interface package.

use std::path::PathBuf;

/// Everything that can abort a generation run.
///
/// None of these are recovered locally; a failed run leaves whatever
/// artifacts were already written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed schema at {path}: {message}")]
    Schema { path: String, message: String },

    #[error("failed to read project manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project manifest {} at {field}: {message}", .path.display())]
    ManifestParse {
        path: PathBuf,
        field: String,
        message: String,
    },

    #[error("project manifest {} has no devDependencies.typescript entry", .path.display())]
    MissingCompilerVersion { path: PathBuf },

    #[error("invalid generator config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
