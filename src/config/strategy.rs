//! Generation strategy: table filtering, column-config resolution, naming.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::{ColumnConfig, TableConfig};
use crate::naming;
use crate::template::{JinjaEngine, TemplateEngine};

/// Strategy-level configuration shared by every generator in a run.
///
/// Holds the table allow/deny lists, the table-scoped and global column
/// override registries, naming inputs (table-name prefixes to strip), the
/// conventional logic-delete/version column names, and the template engine
/// slot. Built once before a run and read-only afterwards.
#[derive(Clone, Default)]
pub struct StrategyConfig {
    /// Table-name prefixes stripped when deriving class names; first match wins.
    pub table_prefixes: Vec<String>,
    /// Column name that carries soft-delete semantics by convention.
    pub logic_delete_column: Option<String>,
    /// Column name that carries optimistic-lock version semantics by convention.
    pub version_column: Option<String>,
    /// Whether database views are eligible for generation.
    pub generate_for_view: bool,
    /// Whether existing output files are replaced. When false, re-runs skip
    /// any pair whose target file already exists.
    pub overwrite_enable: bool,
    table_configs: BTreeMap<String, TableConfig>,
    column_configs: BTreeMap<String, ColumnConfig>,
    generate_tables: BTreeSet<String>,
    un_generate_tables: BTreeSet<String>,
    engine: OnceCell<Arc<dyn TemplateEngine>>,
}

impl StrategyConfig {
    pub fn new() -> Self {
        StrategyConfig::default()
    }

    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim();
        if !trimmed.is_empty() {
            self.table_prefixes.push(trimmed.to_string());
        }
        self
    }

    pub fn with_logic_delete_column(mut self, name: impl Into<String>) -> Self {
        self.logic_delete_column = Some(name.into());
        self
    }

    pub fn with_version_column(mut self, name: impl Into<String>) -> Self {
        self.version_column = Some(name.into());
        self
    }

    pub fn generate_for_view(mut self, generate_for_view: bool) -> Self {
        self.generate_for_view = generate_for_view;
        self
    }

    pub fn overwrite_enable(mut self, overwrite_enable: bool) -> Self {
        self.overwrite_enable = overwrite_enable;
        self
    }

    /// Upserts a table-scoped override block, keyed by its `table_name`.
    ///
    /// Names are trimmed; blank ones are ignored.
    pub fn add_table_config(&mut self, mut config: TableConfig) -> &mut Self {
        let key = config.table_name.trim().to_string();
        if !key.is_empty() {
            config.table_name = key.clone();
            self.table_configs.insert(key, config);
        }
        self
    }

    /// Upserts a global (cross-table) column override, keyed by `column_name`.
    pub fn add_column_config(&mut self, mut config: ColumnConfig) -> &mut Self {
        let key = config.column_name.trim().to_string();
        if !key.is_empty() {
            config.column_name = key.clone();
            self.column_configs.insert(key, config);
        }
        self
    }

    /// Upserts a column override scoped to `table_name`, creating the
    /// table-level block on demand.
    pub fn add_table_column_config(
        &mut self,
        table_name: impl Into<String>,
        config: ColumnConfig,
    ) -> &mut Self {
        let table_name = table_name.into();
        let key = table_name.trim();
        if !key.is_empty() {
            self.table_configs
                .entry(key.to_string())
                .or_insert_with(|| TableConfig::new(key))
                .add_column_config(config);
        }
        self
    }

    /// Adds table names to the allow-list. Names are trimmed; blank entries
    /// are dropped silently.
    pub fn add_generate_tables<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                self.generate_tables.insert(trimmed.to_string());
            }
        }
        self
    }

    /// Adds table names to the deny-list. Same trimming rules as the
    /// allow-list; deny always wins at filter time.
    pub fn add_un_generate_tables<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                self.un_generate_tables.insert(trimmed.to_string());
            }
        }
        self
    }

    /// Exact-match lookup of a table-scoped override block.
    pub fn table_config(&self, table_name: &str) -> Option<&TableConfig> {
        self.table_configs.get(table_name)
    }

    /// Exact-match lookup of a global column override.
    pub fn column_config(&self, column_name: &str) -> Option<&ColumnConfig> {
        self.column_configs.get(column_name)
    }

    pub fn generate_tables(&self) -> &BTreeSet<String> {
        &self.generate_tables
    }

    pub fn un_generate_tables(&self) -> &BTreeSet<String> {
        &self.un_generate_tables
    }

    /// Whether generation proceeds for `table_name`.
    ///
    /// Deny-list membership excludes unconditionally, even when the name is
    /// also allow-listed. An empty allow-list admits every non-denied table;
    /// a non-empty one admits members only. Lookups are exact and
    /// case-sensitive.
    pub fn is_support_generate(&self, table_name: &str) -> bool {
        if self.un_generate_tables.contains(table_name) {
            return false;
        }
        self.generate_tables.is_empty() || self.generate_tables.contains(table_name)
    }

    /// Effective column configuration for one (table, column) pair.
    ///
    /// Resolution order: table-scoped override, then global override, then a
    /// fresh default. Afterwards the conventional logic-delete/version column
    /// names fill in `true` for fields still unset; a field already carrying
    /// an explicit `true` or `false` is never touched. Always returns a
    /// usable owned configuration.
    pub fn resolve_column_config(&self, table_name: &str, column_name: &str) -> ColumnConfig {
        let scoped = self
            .table_configs
            .get(table_name)
            .and_then(|t| t.column_config(column_name));
        let mut resolved = scoped
            .or_else(|| self.column_configs.get(column_name))
            .cloned()
            .unwrap_or_else(|| ColumnConfig::new(column_name));

        if resolved.logic_delete.is_none()
            && self.logic_delete_column.as_deref() == Some(column_name)
        {
            resolved.logic_delete = Some(true);
        }
        if resolved.version.is_none() && self.version_column.as_deref() == Some(column_name) {
            resolved.version = Some(true);
        }
        resolved
    }

    /// Class-name base for a table: the first matching configured prefix is
    /// stripped, then the naming convention is applied.
    pub fn base_name(&self, table_name: &str) -> String {
        let stripped = self
            .table_prefixes
            .iter()
            .find_map(|prefix| table_name.strip_prefix(prefix.as_str()))
            .unwrap_or(table_name);
        naming::class_case(stripped)
    }

    /// The active template engine.
    ///
    /// Returns the explicitly configured engine, or constructs and caches a
    /// [`JinjaEngine`] on first access. The cache is scoped to this
    /// configuration instance.
    pub fn template_engine(&self) -> &Arc<dyn TemplateEngine> {
        self.engine
            .get_or_init(|| Arc::new(JinjaEngine::new()) as Arc<dyn TemplateEngine>)
    }

    /// Installs an explicit template engine, replacing any cached default.
    pub fn set_template_engine(&mut self, engine: Arc<dyn TemplateEngine>) {
        self.engine = OnceCell::with_value(engine);
    }

    pub fn with_template_engine(mut self, engine: Arc<dyn TemplateEngine>) -> Self {
        self.set_template_engine(engine);
        self
    }
}

impl fmt::Debug for StrategyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyConfig")
            .field("table_prefixes", &self.table_prefixes)
            .field("logic_delete_column", &self.logic_delete_column)
            .field("version_column", &self.version_column)
            .field("generate_for_view", &self.generate_for_view)
            .field("overwrite_enable", &self.overwrite_enable)
            .field("table_configs", &self.table_configs)
            .field("column_configs", &self.column_configs)
            .field("generate_tables", &self.generate_tables)
            .field("un_generate_tables", &self.un_generate_tables)
            .field("engine_configured", &self.engine.get().is_some())
            .finish()
    }
}
