//! Layered configuration model.
//!
//! [`GlobalConfig`] is the immutable per-run snapshot, assembled through
//! [`GlobalConfigBuilder`]. It aggregates the package layout
//! ([`PackageConfig`]), the generation strategy ([`StrategyConfig`] with its
//! table filter, override registries and column-config resolver), and one
//! naming block per artifact kind.

mod artifact;
mod column;
mod global;
mod package;
mod strategy;
mod table;

pub use artifact::{
    ControllerConfig, EntityConfig, MapperConfig, ServiceConfig, ServiceImplConfig, SuperClass,
};
pub use column::ColumnConfig;
pub use global::{GlobalConfig, GlobalConfigBuilder};
pub use package::PackageConfig;
pub use strategy::StrategyConfig;
pub use table::TableConfig;
