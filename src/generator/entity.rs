//! Entity (data-class) generation.

use super::{context, materialize, ArtifactKind, Outcome};
use crate::config::GlobalConfig;
use crate::error::GenerateError;
use crate::schema::Table;
use crate::template::TemplateRef;

/// Generates one entity source file per table.
///
/// The rendered entity carries a field per column (nullable columns become
/// `Option<_>`), the extra derives from [`EntityConfig`], the resolved
/// logic-delete/version column names, and the superclass import when one is
/// configured.
///
/// [`EntityConfig`]: crate::config::EntityConfig
#[derive(Debug, Clone)]
pub struct EntityGenerator {
    template: TemplateRef,
}

impl Default for EntityGenerator {
    fn default() -> Self {
        EntityGenerator {
            template: TemplateRef::Builtin("entity"),
        }
    }
}

impl EntityGenerator {
    pub fn new() -> Self {
        EntityGenerator::default()
    }

    /// Replaces the builtin template with a custom reference.
    pub fn with_template(mut self, template: TemplateRef) -> Self {
        self.template = template;
        self
    }

    pub fn generate(
        &self,
        table: &Table,
        config: &GlobalConfig,
    ) -> Result<Outcome, GenerateError> {
        let section = context::entity_section(&config.entity);
        materialize(ArtifactKind::Entity, &self.template, table, config, section)
    }
}
