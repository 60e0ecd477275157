//! Error types for conversion and site generation.

use std::path::PathBuf;

/// Errors raised while converting markdown to an HTML tree or rendering it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A style delimiter was opened but never closed.
    #[error("invalid markdown syntax: unmatched delimiter '{delimiter}'")]
    UnmatchedDelimiter { delimiter: &'static str },

    #[error(transparent)]
    Structural(#[from] StructuralViolation),
}

/// Misuse of the [`HtmlNode`](crate::HtmlNode) model detected at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructuralViolation {
    #[error("leaf node must have a value")]
    LeafWithoutValue,
    #[error("parent node must have a tag")]
    ParentWithoutTag,
}

/// Errors raised by page and site generation.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no `# ` heading found in {}", .path.display())]
    MissingTitle { path: PathBuf },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} exists and is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to convert {}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
