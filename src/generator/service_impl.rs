//! Service-implementation generation.

use super::{context, materialize, ArtifactKind, Outcome};
use crate::config::GlobalConfig;
use crate::error::GenerateError;
use crate::schema::Table;
use crate::template::TemplateRef;

/// Generates one service-implementation source file per table. Disabled by
/// default.
#[derive(Debug, Clone)]
pub struct ServiceImplGenerator {
    template: TemplateRef,
}

impl Default for ServiceImplGenerator {
    fn default() -> Self {
        ServiceImplGenerator {
            template: TemplateRef::Builtin("service_impl"),
        }
    }
}

impl ServiceImplGenerator {
    pub fn new() -> Self {
        ServiceImplGenerator::default()
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
        let section = context::service_impl_section(&config.service_impl);
        materialize(
            ArtifactKind::ServiceImpl,
            &self.template,
            table,
            config,
            section,
        )
    }
}
