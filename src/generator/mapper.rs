//! Data-access (mapper) generation.

use super::{context, materialize, ArtifactKind, Outcome};
use crate::config::GlobalConfig;
use crate::error::GenerateError;
use crate::schema::Table;
use crate::template::TemplateRef;

/// Generates one data-access source file per table.
#[derive(Debug, Clone)]
pub struct MapperGenerator {
    template: TemplateRef,
}

impl Default for MapperGenerator {
    fn default() -> Self {
        MapperGenerator {
            template: TemplateRef::Builtin("mapper"),
        }
    }
}

impl MapperGenerator {
    pub fn new() -> Self {
        MapperGenerator::default()
    }

    pub fn with_template(mut self, template: TemplateRef) -> Self {
        self.template = template;
        self
    }

    pub fn generate(
        &self,
        table: &Table,
        config: &GlobalConfig,
    ) -> Result<Outcome, GenerateError> {
        let section = context::mapper_section(&config.mapper);
        materialize(ArtifactKind::Mapper, &self.template, table, config, section)
    }
}
