//! Table-scoped configuration overrides.

use std::collections::BTreeMap;

use super::ColumnConfig;

/// Overrides scoped to a single table.
///
/// A column entry here always takes precedence over the same column name in
/// the global registry on [`StrategyConfig`].
///
/// [`StrategyConfig`]: crate::config::StrategyConfig
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableConfig {
    /// Table name these overrides apply to.
    pub table_name: String,
    column_configs: BTreeMap<String, ColumnConfig>,
}

impl TableConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        TableConfig {
            table_name: table_name.into(),
            column_configs: BTreeMap::new(),
        }
    }

    /// Upserts a column override, keyed by its `column_name`.
    ///
    /// Names are trimmed; blank ones are ignored.
    pub fn add_column_config(&mut self, mut config: ColumnConfig) -> &mut Self {
        let key = config.column_name.trim().to_string();
        if !key.is_empty() {
            config.column_name = key.clone();
            self.column_configs.insert(key, config);
        }
        self
    }

    /// Chainable form of [`add_column_config`](Self::add_column_config).
    pub fn with_column_config(mut self, config: ColumnConfig) -> Self {
        self.add_column_config(config);
        self
    }

    /// Exact-match lookup of a scoped column override.
    pub fn column_config(&self, column_name: &str) -> Option<&ColumnConfig> {
        self.column_configs.get(column_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let table = TableConfig::new("t_user")
            .with_column_config(ColumnConfig::new("deleted").logic_delete(false));
        assert!(table.column_config("deleted").is_some());
        assert!(table.column_config("version").is_none());
    }

    #[test]
    fn test_blank_column_name_is_ignored() {
        let table = TableConfig::new("t_user").with_column_config(ColumnConfig::new("   "));
        assert!(table.column_config("").is_none());
        assert!(table.column_config("   ").is_none());
    }

    #[test]
    fn test_readd_replaces_entry() {
        let mut table = TableConfig::new("t_user");
        table.add_column_config(ColumnConfig::new("deleted").logic_delete(true));
        table.add_column_config(ColumnConfig::new("deleted").logic_delete(false));
        let cfg = table.column_config("deleted");
        assert_eq!(cfg.and_then(|c| c.logic_delete), Some(false));
    }

    #[test]
    fn test_trimmed_key_matches_trimmed_lookup() {
        let table =
            TableConfig::new("t_user").with_column_config(ColumnConfig::new("  deleted  "));
        assert!(table.column_config("deleted").is_some());
    }
}
