//! Per-column generation overrides.

/// Generation overrides for one column.
///
/// `logic_delete` and `version` are tri-state: `None` means the setting was
/// never configured and name-based defaults may still apply, `Some(false)`
/// means an explicit opt-out that no later resolution step may override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnConfig {
    /// Column name this configuration applies to.
    pub column_name: String,
    /// Soft-delete flag column. `None` = unset.
    pub logic_delete: Option<bool>,
    /// Optimistic-lock version column. `None` = unset.
    pub version: Option<bool>,
    /// Expression inserted in place of the column value on insert.
    pub on_insert_value: Option<String>,
    /// Expression inserted in place of the column value on update.
    pub on_update_value: Option<String>,
    /// Masking rule applied when the column is rendered in read paths.
    pub mask: Option<String>,
    /// Marks the column as a large object that should be fetched lazily.
    pub large: Option<bool>,
}

impl ColumnConfig {
    pub fn new(column_name: impl Into<String>) -> Self {
        ColumnConfig {
            column_name: column_name.into(),
            ..ColumnConfig::default()
        }
    }

    pub fn logic_delete(mut self, logic_delete: bool) -> Self {
        self.logic_delete = Some(logic_delete);
        self
    }

    pub fn version(mut self, version: bool) -> Self {
        self.version = Some(version);
        self
    }

    pub fn on_insert_value(mut self, value: impl Into<String>) -> Self {
        self.on_insert_value = Some(value.into());
        self
    }

    pub fn on_update_value(mut self, value: impl Into<String>) -> Self {
        self.on_update_value = Some(value.into());
        self
    }

    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    pub fn large(mut self, large: bool) -> Self {
        self.large = Some(large);
        self
    }

    /// Resolved logic-delete flag; unset counts as `false`.
    pub fn is_logic_delete(&self) -> bool {
        self.logic_delete.unwrap_or(false)
    }

    /// Resolved version flag; unset counts as `false`.
    pub fn is_version(&self) -> bool {
        self.version.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_resolve_false() {
        let cfg = ColumnConfig::new("deleted");
        assert_eq!(cfg.logic_delete, None);
        assert_eq!(cfg.version, None);
        assert!(!cfg.is_logic_delete());
        assert!(!cfg.is_version());
    }

    #[test]
    fn test_explicit_false_is_distinct_from_unset() {
        let cfg = ColumnConfig::new("deleted").logic_delete(false);
        assert_eq!(cfg.logic_delete, Some(false));
        assert!(!cfg.is_logic_delete());
    }

    #[test]
    fn test_chained_hints() {
        let cfg = ColumnConfig::new("created_at")
            .on_insert_value("now()")
            .on_update_value("now()")
            .large(false);
        assert_eq!(cfg.on_insert_value.as_deref(), Some("now()"));
        assert_eq!(cfg.on_update_value.as_deref(), Some("now()"));
        assert_eq!(cfg.large, Some(false));
    }
}
