//! Service-interface generation.

use super::{context, materialize, ArtifactKind, Outcome};
use crate::config::GlobalConfig;
use crate::error::GenerateError;
use crate::schema::Table;
use crate::template::TemplateRef;

/// Generates one service-interface source file per table.
///
/// Disabled by default; enable with
/// [`GlobalConfigBuilder::enable`](crate::config::GlobalConfigBuilder::enable).
#[derive(Debug, Clone)]
pub struct ServiceGenerator {
    template: TemplateRef,
}

impl Default for ServiceGenerator {
    fn default() -> Self {
        ServiceGenerator {
            template: TemplateRef::Builtin("service"),
        }
    }
}

impl ServiceGenerator {
    pub fn new() -> Self {
        ServiceGenerator::default()
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
        let section = context::service_section(&config.service);
        materialize(ArtifactKind::Service, &self.template, table, config, section)
    }
}
