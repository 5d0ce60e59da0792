//! Error types for configuration resolution and artifact generation.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::template::TemplateRef;

/// Errors surfaced by configuration accessors, template rendering and file
/// materialization.
///
/// Failures are scoped to one (table, artifact kind) pair: the dispatcher
/// records them in the run report and keeps going, so a broken template or an
/// unwritable directory never aborts the remaining pairs.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A required setting was absent at the point of use.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// The template reference could not be resolved, or rendering failed.
    #[error("template `{template}` failed: {message}")]
    Template { template: String, message: String },

    /// The output directory or file could not be written.
    #[error("filesystem operation failed at `{path}`: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Build a [`GenerateError::Template`] from any displayable cause.
    pub fn template(template: &TemplateRef, cause: impl std::fmt::Display) -> Self {
        GenerateError::Template {
            template: template.to_string(),
            message: cause.to_string(),
        }
    }

    /// Build a [`GenerateError::Filesystem`] carrying the offending path.
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Short class label used in serialized reports and log fields.
    pub fn class(&self) -> &'static str {
        match self {
            GenerateError::Configuration(_) => "configuration",
            GenerateError::Template { .. } => "template",
            GenerateError::Filesystem { .. } => "filesystem",
        }
    }
}

/// Convenience for mapping `io::Error` onto a path-carrying filesystem error.
pub(crate) fn fs_err(path: &Path) -> impl FnOnce(io::Error) -> GenerateError + '_ {
    move |source| GenerateError::filesystem(path, source)
}
