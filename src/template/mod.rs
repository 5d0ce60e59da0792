//! Pluggable template rendering.
//!
//! Generators talk to one capability: [`TemplateEngine::render`] takes a
//! parameter bag, a [`TemplateRef`] and an output path, and materializes the
//! file. The default implementation is [`JinjaEngine`]; callers may install
//! any other engine on the configuration builder.

mod jinja;

pub use jinja::JinjaEngine;

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::GenerateError;

/// Reference to a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRef {
    /// One of the templates shipped with the crate, by name.
    Builtin(&'static str),
    /// A template file, read from disk at render time.
    File(PathBuf),
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRef::Builtin(name) => write!(f, "builtin:{name}"),
            TemplateRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Renders a parameter bag through a template into an output file.
///
/// Engines are shared read-only across all generation calls in a run, so
/// implementations must be `Send + Sync` and must not cache per-call state.
pub trait TemplateEngine: Send + Sync {
    /// Renders `template` with `params` and writes the result to `output`.
    ///
    /// Reference-resolution and render failures are reported as
    /// [`GenerateError::Template`]; failures writing the output file as
    /// [`GenerateError::Filesystem`]. The parent directory of `output` is
    /// guaranteed to exist by the caller.
    fn render(
        &self,
        params: &Map<String, Value>,
        template: &TemplateRef,
        output: &Path,
    ) -> Result<(), GenerateError>;
}
