//! Controller generation.

use super::{context, materialize, ArtifactKind, Outcome};
use crate::config::GlobalConfig;
use crate::error::GenerateError;
use crate::schema::Table;
use crate::template::TemplateRef;

/// Generates one controller source file per table. Disabled by default.
///
/// The builtin template emits REST-style route documentation unless
/// [`ControllerConfig::rest_style`](crate::config::ControllerConfig) is
/// turned off.
#[derive(Debug, Clone)]
pub struct ControllerGenerator {
    template: TemplateRef,
}

impl Default for ControllerGenerator {
    fn default() -> Self {
        ControllerGenerator {
            template: TemplateRef::Builtin("controller"),
        }
    }
}

impl ControllerGenerator {
    pub fn new() -> Self {
        ControllerGenerator::default()
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
        let section = context::controller_section(&config.controller);
        materialize(
            ArtifactKind::Controller,
            &self.template,
            table,
            config,
            section,
        )
    }
}
