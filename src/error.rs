use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the version manager and the archive builder.
#[derive(Debug, Error)]
pub enum ModpackError {
    /// A required file or directory does not exist.
    #[error("{what} not found: {}", path.display())]
    NotFound { what: &'static str, path: PathBuf },

    /// Manifest content or a version string could not be parsed.
    #[error("{0}")]
    Format(String),

    /// No usable choice could be read from the prompt source.
    #[error("{0}")]
    Input(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Zip {
        context: String,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ModpackError {
    pub fn not_found(what: &'static str, path: impl Into<PathBuf>) -> Self {
        ModpackError::NotFound {
            what,
            path: path.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ModpackError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn zip(context: impl Into<String>, source: zip::result::ZipError) -> Self {
        ModpackError::Zip {
            context: context.into(),
            source,
        }
    }
}
