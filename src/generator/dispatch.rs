//! Run orchestration across tables and generators.

use tracing::{debug, info, warn};

use super::{
    ArtifactGenerator, ExcludedTable, FailedArtifact, GeneratedArtifact, GenerationReport,
    Outcome, SkippedArtifact, TableExclusion,
};
use crate::config::GlobalConfig;
use crate::schema::Table;

/// Drives the generator set over a table list.
///
/// For each table the dispatcher applies the view check and the allow/deny
/// filter, stamps the resolved logic-delete/version flags and column hints
/// onto a working copy of the table, then invokes every generator. A failing
/// pair is recorded and the run continues; there is no cross-pair abort.
#[derive(Debug)]
pub struct CodeGenerator {
    config: GlobalConfig,
    generators: Vec<ArtifactGenerator>,
}

impl CodeGenerator {
    /// Dispatcher over the default generator set (all five kinds).
    pub fn new(config: GlobalConfig) -> Self {
        CodeGenerator {
            config,
            generators: ArtifactGenerator::default_set(),
        }
    }

    /// Dispatcher over a caller-chosen generator set, e.g. with custom
    /// template references.
    pub fn with_generators(config: GlobalConfig, generators: Vec<ArtifactGenerator>) -> Self {
        CodeGenerator { config, generators }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Runs generation for every table and collects the outcome.
    pub fn generate(&self, tables: &[Table]) -> GenerationReport {
        let mut report = GenerationReport::default();

        for table in tables {
            if table.is_view && !self.config.strategy.generate_for_view {
                debug!(table = %table.name, "view excluded from generation");
                report.excluded_tables.push(ExcludedTable {
                    table: table.name.clone(),
                    reason: TableExclusion::View,
                });
                continue;
            }
            if !self.config.strategy.is_support_generate(&table.name) {
                debug!(table = %table.name, "table excluded by filter");
                report.excluded_tables.push(ExcludedTable {
                    table: table.name.clone(),
                    reason: TableExclusion::Filtered,
                });
                continue;
            }

            let table = self.resolve_table(table);
            for generator in &self.generators {
                let kind = generator.kind();
                match generator.generate(&table, &self.config) {
                    Ok(Outcome::Written(path)) => {
                        debug!(table = %table.name, %kind, path = %path.display(), "artifact written");
                        report.written.push(GeneratedArtifact {
                            table: table.name.clone(),
                            kind,
                            path,
                        });
                    }
                    Ok(Outcome::Skipped(reason)) => {
                        debug!(table = %table.name, %kind, %reason, "artifact skipped");
                        report.skipped.push(SkippedArtifact {
                            table: table.name.clone(),
                            kind,
                            reason,
                        });
                    }
                    Err(error) => {
                        warn!(table = %table.name, %kind, %error, "artifact generation failed");
                        report.failed.push(FailedArtifact {
                            table: table.name.clone(),
                            kind,
                            error,
                        });
                    }
                }
            }
        }

        info!(
            tables = tables.len(),
            written = report.written.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            excluded = report.excluded_tables.len(),
            "generation run complete"
        );
        report
    }

    /// Working copy of a table with the resolved column state stamped on.
    fn resolve_table(&self, table: &Table) -> Table {
        let mut resolved = table.clone();
        for column in &mut resolved.columns {
            let column_config = self
                .config
                .strategy
                .resolve_column_config(&table.name, &column.name);
            column.is_logic_delete = column_config.is_logic_delete();
            column.is_version = column_config.is_version();
            column.is_large = column_config.large.unwrap_or(false);
            column.on_insert_value = column_config.on_insert_value;
            column.on_update_value = column_config.on_update_value;
            column.mask = column_config.mask;
        }
        resolved
    }
}

/// Runs generation for `tables` under `config` with the default generator
/// set. Library-level entry point.
pub fn generate(tables: &[Table], config: GlobalConfig) -> GenerationReport {
    CodeGenerator::new(config).generate(tables)
}
