//! # crudgen
//!
//! **crudgen** generates data-access-layer source files (entities, mappers,
//! services, service implementations, controllers) from in-memory relational
//! table metadata, driven by a layered configuration model and a pluggable
//! template engine.
//!
//! ## Overview
//!
//! Callers supply a list of [`Table`] values (typically produced by a schema
//! introspection step) and one [`GlobalConfig`]. The engine filters tables
//! through an allow/deny list, resolves per-column settings by merging
//! table-scoped overrides, global overrides and name-based conventions, then
//! dispatches every enabled artifact generator. Each generator renders one
//! file through the configured template engine, guarded by an overwrite
//! policy that keeps re-runs idempotent and preserves hand-edited output.
//!
//! ## Architecture
//!
//! - **[`schema`]** - `Table`/`Column` value objects describing one table's shape
//! - **[`config`]** - configuration layering: global, per-table and per-column
//!   overrides, package layout, per-kind naming and enable flags
//! - **[`template`]** - the `TemplateEngine` capability plus the minijinja-backed
//!   default implementation and the builtin template set
//! - **[`generator`]** - the closed set of per-kind generators, the dispatcher,
//!   and the run report
//! - **[`naming`]** - naming conventions (class case, declared-type mapping)
//! - **[`error`]** - the crate-wide error type
//!
//! ## Quick Start
//!
//! ```no_run
//! use crudgen::config::{EntityConfig, GlobalConfig};
//! use crudgen::schema::{Column, Table};
//!
//! let tables = vec![
//!     Table::new("t_sys_user")
//!         .with_comment("system users")
//!         .with_column(Column::new("id", "BIGINT"))
//!         .with_column(Column::new("name", "VARCHAR(64)").nullable(true))
//!         .with_column(Column::new("deleted", "TINYINT(1)")),
//! ];
//!
//! let config = GlobalConfig::builder()
//!     .source_dir("generated/src")
//!     .base_package("app")
//!     .table_prefix("t_")
//!     .logic_delete_column("deleted")
//!     .entity(EntityConfig::new().class_suffix("Entity"))
//!     .build();
//!
//! let report = crudgen::generate(&tables, config);
//! println!("{report}");
//! ```
//!
//! Re-running the same configuration with `overwrite_enable` left off skips
//! every file that already exists; turning it on regenerates them in place.
//!
//! ## Customizing Output
//!
//! Template references are per generator: swap a builtin for a file-based
//! template with `EntityGenerator::new().with_template(..)` and run the
//! dispatcher over a custom generator set via `CodeGenerator::with_generators`.
//! Replacing the engine entirely (any `TemplateEngine` implementation) is a
//! one-line change on the configuration builder.

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod schema;
pub mod template;

pub use config::{GlobalConfig, GlobalConfigBuilder};
pub use error::GenerateError;
pub use generator::{
    generate, ArtifactKind, CodeGenerator, GenerationReport, SkipReason, TableExclusion,
};
pub use schema::{Column, Table};
pub use template::{TemplateEngine, TemplateRef};
