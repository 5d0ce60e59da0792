//! Artifact generators and run orchestration.
//!
//! One generator exists per [`ArtifactKind`]; each consumes a filtered table
//! plus the run configuration and produces zero or one file through the
//! configured template engine. [`CodeGenerator`] drives the closed generator
//! set over a table list and collects a [`GenerationReport`].

mod context;
mod controller;
mod dispatch;
mod entity;
mod mapper;
mod report;
mod service;
mod service_impl;


pub use controller::ControllerGenerator;
pub use dispatch::{generate, CodeGenerator};
pub use entity::EntityGenerator;
pub use mapper::MapperGenerator;
pub use report::{
    ExcludedTable, FailedArtifact, GeneratedArtifact, GenerationReport, SkipReason,
    SkippedArtifact, TableExclusion,
};
pub use service::ServiceGenerator;
pub use service_impl::ServiceImplGenerator;

use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::config::GlobalConfig;
use crate::error::{fs_err, GenerateError};
use crate::schema::Table;
use crate::template::TemplateRef;

/// The supported artifact kinds, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Entity,
    Mapper,
    Service,
    ServiceImpl,
    Controller,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Entity,
        ArtifactKind::Mapper,
        ArtifactKind::Service,
        ArtifactKind::ServiceImpl,
        ArtifactKind::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Entity => "entity",
            ArtifactKind::Mapper => "mapper",
            ArtifactKind::Service => "service",
            ArtifactKind::ServiceImpl => "service_impl",
            ArtifactKind::Controller => "controller",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one (table, generator) pair: a written file or a recorded skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Skipped(SkipReason),
}

/// Closed set of the per-kind generators the dispatcher iterates.
#[derive(Debug, Clone)]
pub enum ArtifactGenerator {
    Entity(EntityGenerator),
    Mapper(MapperGenerator),
    Service(ServiceGenerator),
    ServiceImpl(ServiceImplGenerator),
    Controller(ControllerGenerator),
}

impl ArtifactGenerator {
    /// One generator per kind, with the builtin templates, in kind order.
    pub fn default_set() -> Vec<ArtifactGenerator> {
        vec![
            ArtifactGenerator::Entity(EntityGenerator::new()),
            ArtifactGenerator::Mapper(MapperGenerator::new()),
            ArtifactGenerator::Service(ServiceGenerator::new()),
            ArtifactGenerator::ServiceImpl(ServiceImplGenerator::new()),
            ArtifactGenerator::Controller(ControllerGenerator::new()),
        ]
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactGenerator::Entity(_) => ArtifactKind::Entity,
            ArtifactGenerator::Mapper(_) => ArtifactKind::Mapper,
            ArtifactGenerator::Service(_) => ArtifactKind::Service,
            ArtifactGenerator::ServiceImpl(_) => ArtifactKind::ServiceImpl,
            ArtifactGenerator::Controller(_) => ArtifactKind::Controller,
        }
    }

    /// Generates this kind's artifact for one table.
    pub fn generate(
        &self,
        table: &Table,
        config: &GlobalConfig,
    ) -> Result<Outcome, GenerateError> {
        match self {
            ArtifactGenerator::Entity(g) => g.generate(table, config),
            ArtifactGenerator::Mapper(g) => g.generate(table, config),
            ArtifactGenerator::Service(g) => g.generate(table, config),
            ArtifactGenerator::ServiceImpl(g) => g.generate(table, config),
            ArtifactGenerator::Controller(g) => g.generate(table, config),
        }
    }
}

/// Shared materialization flow for one (table, kind) pair.
///
/// Checks the enable flag, derives the class name and output path, applies
/// the overwrite guard, then renders through the configured engine. `section`
/// is the kind-specific parameter block, inserted under the kind's name.
fn materialize(
    kind: ArtifactKind,
    template: &TemplateRef,
    table: &Table,
    config: &GlobalConfig,
    section: Value,
) -> Result<Outcome, GenerateError> {
    if !config.is_enabled(kind) {
        return Ok(Outcome::Skipped(SkipReason::Disabled));
    }

    let base_name = config.strategy.base_name(&table.name);
    let class_name = config.class_name_for(kind, &base_name);
    let package = config.package.package_for(kind);
    let path = config.package.output_path(&package, &class_name);

    if path.exists() && !config.strategy.overwrite_enable {
        return Ok(Outcome::Skipped(SkipReason::AlreadyExists));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(fs_err(parent))?;
    }

    let mut params = context::base_params(table, config, &base_name, &class_name, &package);
    params.insert(kind.as_str().to_string(), section);
    config
        .strategy
        .template_engine()
        .render(&params, template, &path)?;
    Ok(Outcome::Written(path))
}
