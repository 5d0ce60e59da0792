//! Top-level configuration aggregate and its builder.

use std::path::PathBuf;
use std::sync::Arc;

use super::{
    ColumnConfig, ControllerConfig, EntityConfig, MapperConfig, PackageConfig, ServiceConfig,
    ServiceImplConfig, StrategyConfig, TableConfig,
};
use crate::generator::ArtifactKind;
use crate::template::TemplateEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
struct EnabledKinds {
    entity: bool,
    mapper: bool,
    service: bool,
    service_impl: bool,
    controller: bool,
}

impl Default for EnabledKinds {
    fn default() -> Self {
        EnabledKinds {
            entity: true,
            mapper: true,
            service: false,
            service_impl: false,
            controller: false,
        }
    }
}

impl EnabledKinds {
    fn get(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Entity => self.entity,
            ArtifactKind::Mapper => self.mapper,
            ArtifactKind::Service => self.service,
            ArtifactKind::ServiceImpl => self.service_impl,
            ArtifactKind::Controller => self.controller,
        }
    }

    fn set(&mut self, kind: ArtifactKind, enabled: bool) {
        match kind {
            ArtifactKind::Entity => self.entity = enabled,
            ArtifactKind::Mapper => self.mapper = enabled,
            ArtifactKind::Service => self.service = enabled,
            ArtifactKind::ServiceImpl => self.service_impl = enabled,
            ArtifactKind::Controller => self.controller = enabled,
        }
    }
}

/// Immutable configuration snapshot for one generation run.
///
/// Aggregates package layout, the generation strategy, per-kind naming
/// configuration, and per-kind enable flags. Built through
/// [`GlobalConfigBuilder`] and read-only afterwards; sharing one snapshot
/// across concurrent generation calls is safe.
///
/// Entity and mapper generation are enabled by default; service, service
/// implementation and controller generation start disabled.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfig {
    pub package: PackageConfig,
    pub strategy: StrategyConfig,
    pub entity: EntityConfig,
    pub mapper: MapperConfig,
    pub service: ServiceConfig,
    pub service_impl: ServiceImplConfig,
    pub controller: ControllerConfig,
    /// Author name surfaced to templates, when set.
    pub author: Option<String>,
    enabled: EnabledKinds,
}

impl GlobalConfig {
    pub fn builder() -> GlobalConfigBuilder {
        GlobalConfigBuilder::new()
    }

    /// Whether generation of `kind` artifacts is enabled.
    pub fn is_enabled(&self, kind: ArtifactKind) -> bool {
        self.enabled.get(kind)
    }

    /// Composed class name for `kind`, using that kind's naming configuration.
    pub fn class_name_for(&self, kind: ArtifactKind, base_name: &str) -> String {
        match kind {
            ArtifactKind::Entity => self.entity.class_name(base_name),
            ArtifactKind::Mapper => self.mapper.class_name(base_name),
            ArtifactKind::Service => self.service.class_name(base_name),
            ArtifactKind::ServiceImpl => self.service_impl.class_name(base_name),
            ArtifactKind::Controller => self.controller.class_name(base_name),
        }
    }
}

/// Chainable builder for [`GlobalConfig`].
///
/// Every setter consumes and returns the builder; [`build`](Self::build)
/// finalizes the snapshot.
#[derive(Debug, Clone, Default)]
pub struct GlobalConfigBuilder {
    package: PackageConfig,
    strategy: StrategyConfig,
    entity: EntityConfig,
    mapper: MapperConfig,
    service: ServiceConfig,
    service_impl: ServiceImplConfig,
    controller: ControllerConfig,
    author: Option<String>,
    enabled: EnabledKinds,
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        GlobalConfigBuilder::default()
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.package.source_dir = dir.into();
        self
    }

    pub fn base_package(mut self, package: impl Into<String>) -> Self {
        self.package.base_package = package.into();
        self
    }

    pub fn file_extension(mut self, extension: impl Into<String>) -> Self {
        self.package.extension = extension.into();
        self
    }

    pub fn entity_package(mut self, package: impl Into<String>) -> Self {
        self.package = self.package.entity_package(package);
        self
    }

    pub fn mapper_package(mut self, package: impl Into<String>) -> Self {
        self.package = self.package.mapper_package(package);
        self
    }

    pub fn service_package(mut self, package: impl Into<String>) -> Self {
        self.package = self.package.service_package(package);
        self
    }

    pub fn service_impl_package(mut self, package: impl Into<String>) -> Self {
        self.package = self.package.service_impl_package(package);
        self
    }

    pub fn controller_package(mut self, package: impl Into<String>) -> Self {
        self.package = self.package.controller_package(package);
        self
    }

    /// Adds one table-name prefix to strip when deriving class names.
    pub fn table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strategy = self.strategy.with_table_prefix(prefix);
        self
    }

    pub fn logic_delete_column(mut self, name: impl Into<String>) -> Self {
        self.strategy = self.strategy.with_logic_delete_column(name);
        self
    }

    pub fn version_column(mut self, name: impl Into<String>) -> Self {
        self.strategy = self.strategy.with_version_column(name);
        self
    }

    pub fn generate_for_view(mut self, generate_for_view: bool) -> Self {
        self.strategy.generate_for_view = generate_for_view;
        self
    }

    pub fn overwrite_enable(mut self, overwrite_enable: bool) -> Self {
        self.strategy.overwrite_enable = overwrite_enable;
        self
    }

    pub fn table_config(mut self, config: TableConfig) -> Self {
        self.strategy.add_table_config(config);
        self
    }

    /// Registers a global (cross-table) column override.
    pub fn column_config(mut self, config: ColumnConfig) -> Self {
        self.strategy.add_column_config(config);
        self
    }

    /// Registers a column override scoped to one table.
    pub fn table_column_config(
        mut self,
        table_name: impl Into<String>,
        config: ColumnConfig,
    ) -> Self {
        self.strategy.add_table_column_config(table_name, config);
        self
    }

    pub fn generate_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strategy.add_generate_tables(names);
        self
    }

    pub fn un_generate_tables<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strategy.add_un_generate_tables(names);
        self
    }

    pub fn enable(mut self, kind: ArtifactKind) -> Self {
        self.enabled.set(kind, true);
        self
    }

    pub fn disable(mut self, kind: ArtifactKind) -> Self {
        self.enabled.set(kind, false);
        self
    }

    pub fn package(mut self, package: PackageConfig) -> Self {
        self.package = package;
        self
    }

    pub fn strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn entity(mut self, entity: EntityConfig) -> Self {
        self.entity = entity;
        self
    }

    pub fn mapper(mut self, mapper: MapperConfig) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn service(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }

    pub fn service_impl(mut self, service_impl: ServiceImplConfig) -> Self {
        self.service_impl = service_impl;
        self
    }

    pub fn controller(mut self, controller: ControllerConfig) -> Self {
        self.controller = controller;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Installs an explicit template engine instead of the lazy default.
    pub fn template_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.strategy.set_template_engine(engine);
        self
    }

    pub fn build(self) -> GlobalConfig {
        GlobalConfig {
            package: self.package,
            strategy: self.strategy,
            entity: self.entity,
            mapper: self.mapper,
            service: self.service,
            service_impl: self.service_impl,
            controller: self.controller,
            author: self.author,
            enabled: self.enabled,
        }
    }
}
