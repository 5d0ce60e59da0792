//! Aggregate result of one generation run.
//!
//! Skips and table exclusions are normal outcomes and are recorded as data;
//! only [`FailedArtifact`] entries represent actual failures. The report is
//! serializable so callers can persist run results.

use std::fmt;
use std::path::PathBuf;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::ArtifactKind;
use crate::error::GenerateError;

/// Why one (table, kind) pair produced no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The artifact kind is disabled in the configuration.
    Disabled,
    /// The target file already exists and overwriting is off.
    AlreadyExists,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::AlreadyExists => "already_exists",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a whole table was excluded before any generator ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableExclusion {
    /// Rejected by the allow/deny table filter.
    Filtered,
    /// A view, and view generation is off.
    View,
}

impl TableExclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableExclusion::Filtered => "filtered",
            TableExclusion::View => "view",
        }
    }
}

impl fmt::Display for TableExclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file written during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub table: String,
    pub kind: ArtifactKind,
    pub path: PathBuf,
}

/// One (table, kind) pair skipped during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArtifact {
    pub table: String,
    pub kind: ArtifactKind,
    pub reason: SkipReason,
}

/// One table excluded before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedTable {
    pub table: String,
    pub reason: TableExclusion,
}

/// One (table, kind) pair that failed; the run continued past it.
#[derive(Debug)]
pub struct FailedArtifact {
    pub table: String,
    pub kind: ArtifactKind,
    pub error: GenerateError,
}

impl Serialize for FailedArtifact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FailedArtifact", 4)?;
        state.serialize_field("table", &self.table)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("error_class", self.error.class())?;
        state.serialize_field("error", &self.error.to_string())?;
        state.end()
    }
}

/// Everything that happened in one generation run.
#[derive(Debug, Default, Serialize)]
pub struct GenerationReport {
    pub written: Vec<GeneratedArtifact>,
    pub skipped: Vec<SkippedArtifact>,
    pub failed: Vec<FailedArtifact>,
    pub excluded_tables: Vec<ExcludedTable>,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Paths of all files written in this run.
    pub fn written_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.written.iter().map(|artifact| &artifact.path)
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wrote {} file(s), skipped {}, failed {}, excluded {} table(s)",
            self.written.len(),
            self.skipped.len(),
            self.failed.len(),
            self.excluded_tables.len()
        )
    }
}
