//! Naming conventions shared by the generators.
//!
//! Two conventions live here: the schema-case to code-case function applied
//! to table names when deriving class names, and the declared-SQL-type to
//! code-type mapping the default templates use for column fields.

use heck::ToUpperCamelCase;

/// Convert a schema-style name (`t_sys_user`, `order-line`) to a class-style
/// name (`TSysUser`, `OrderLine`).
pub fn class_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Map a declared column type to a code-level type string.
///
/// The mapping is intentionally coarse: templates receive the result as text,
/// so date/decimal columns name their conventional crates without crudgen
/// depending on them. Unknown declarations fall back to `String`.
pub fn code_type(declared: &str) -> String {
    let normalized = declared.trim().to_ascii_uppercase();

    // MySQL idiom: TINYINT(1) is a boolean in disguise.
    if normalized.starts_with("TINYINT(1)") {
        return "bool".to_string();
    }

    let unsigned = normalized.contains("UNSIGNED");
    let base = normalized
        .split(['(', ' '])
        .next()
        .unwrap_or(normalized.as_str());

    let mapped = match base {
        "CHAR" | "VARCHAR" | "NVARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT"
        | "CLOB" | "ENUM" | "SET" | "JSON" => "String",
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" => {
            if unsigned {
                "u32"
            } else {
                "i32"
            }
        }
        "BIGINT" => {
            if unsigned {
                "u64"
            } else {
                "i64"
            }
        }
        "FLOAT" => "f32",
        "DOUBLE" | "REAL" => "f64",
        "DECIMAL" | "NUMERIC" => "rust_decimal::Decimal",
        "BOOLEAN" | "BOOL" | "BIT" => "bool",
        "DATE" => "chrono::NaiveDate",
        "TIME" => "chrono::NaiveTime",
        "DATETIME" | "TIMESTAMP" => "chrono::NaiveDateTime",
        "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" | "BYTEA" => {
            "Vec<u8>"
        }
        "UUID" => "uuid::Uuid",
        _ => "String",
    };

    mapped.to_string()
}
