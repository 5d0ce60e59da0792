//! In-memory schema model consumed by the generators.
//!
//! `Table` and `Column` are plain value objects describing one relational
//! table's shape. They are produced by an external schema-introspection step
//! (or built by hand in tests) and stay immutable for the duration of a
//! generation run; the dispatcher clones a table to stamp the resolved
//! logic-delete/version flags and per-column generation hints before any
//! generator sees it.

use crate::naming;

/// One column of a relational table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name as declared in the schema.
    pub name: String,
    /// Declared SQL type, e.g. `VARCHAR(64)` or `BIGINT UNSIGNED`.
    pub declared_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Column comment, if the schema carries one.
    pub comment: Option<String>,
    /// Resolved flag: this column carries soft-delete semantics.
    ///
    /// Stamped by the dispatcher from the resolved [`ColumnConfig`] before
    /// generation; defaults to `false` on a freshly built column.
    ///
    /// [`ColumnConfig`]: crate::config::ColumnConfig
    pub is_logic_delete: bool,
    /// Resolved flag: this column is the optimistic-lock version column.
    pub is_version: bool,
    /// Resolved expression used in place of the column value on insert.
    ///
    /// Stamped by the dispatcher, like the flags above; `None` when no
    /// configuration supplies one.
    pub on_insert_value: Option<String>,
    /// Resolved expression used in place of the column value on update.
    pub on_update_value: Option<String>,
    /// Resolved masking rule applied to the column in read paths.
    pub mask: Option<String>,
    /// Resolved flag: large object column, fetched lazily.
    pub is_large: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Column {
            name: name.into(),
            declared_type: declared_type.into(),
            nullable: false,
            comment: None,
            is_logic_delete: false,
            is_version: false,
            on_insert_value: None,
            on_update_value: None,
            mask: None,
            is_large: false,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Code-level type for this column's declared SQL type.
    pub fn code_type(&self) -> String {
        naming::code_type(&self.declared_type)
    }
}

/// One relational table (or view) with its ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Table name as declared in the schema.
    pub name: String,
    /// Table comment, if the schema carries one.
    pub comment: Option<String>,
    /// Whether this entry is a database view rather than a base table.
    pub is_view: bool,
    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            ..Table::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn view(mut self, is_view: bool) -> Self {
        self.is_view = is_view;
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Exact-match, case-sensitive column lookup.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_table_construction() {
        let table = Table::new("t_user")
            .with_comment("application users")
            .with_column(Column::new("id", "BIGINT"))
            .with_column(Column::new("name", "VARCHAR(64)").nullable(true));

        assert_eq!(table.name, "t_user");
        assert_eq!(table.columns.len(), 2);
        assert!(!table.is_view);
        assert!(table.columns[0].comment.is_none());
        assert!(table.columns[1].nullable);
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let table = Table::new("t_user").with_column(Column::new("Deleted", "TINYINT(1)"));
        assert!(table.column("Deleted").is_some());
        assert!(table.column("deleted").is_none());
    }

    #[test]
    fn test_fresh_columns_have_no_resolved_flags() {
        let column = Column::new("deleted", "TINYINT(1)");
        assert!(!column.is_logic_delete);
        assert!(!column.is_version);
        assert!(!column.is_large);
        assert!(column.on_insert_value.is_none());
        assert!(column.mask.is_none());
        assert_eq!(column.code_type(), "bool");
    }
}
