//! Parameter-bag assembly for template rendering.
//!
//! Every render receives the same base shape (`table`, `base_name`,
//! `class_name`, `package`, `classes`, optional `author`) plus one
//! kind-specific section built by the per-kind helpers below. Superclass
//! fields are present only when a superclass is configured.

use serde_json::{json, Map, Value};

use super::ArtifactKind;
use crate::config::{
    ControllerConfig, EntityConfig, GlobalConfig, MapperConfig, ServiceConfig, ServiceImplConfig,
    SuperClass,
};
use crate::schema::Table;

/// Builds the parameter map shared by every artifact kind.
pub(super) fn base_params(
    table: &Table,
    config: &GlobalConfig,
    base_name: &str,
    class_name: &str,
    package: &str,
) -> Map<String, Value> {
    let columns: Vec<Value> = table
        .columns
        .iter()
        .map(|column| {
            json!({
                "name": column.name,
                "declared_type": column.declared_type,
                "code_type": column.code_type(),
                "nullable": column.nullable,
                "comment": column.comment,
                "is_logic_delete": column.is_logic_delete,
                "is_version": column.is_version,
                "on_insert_value": column.on_insert_value,
                "on_update_value": column.on_update_value,
                "mask": column.mask,
                "is_large": column.is_large,
            })
        })
        .collect();

    let mut packages = Map::new();
    packages.insert("base".to_string(), json!(config.package.base_package));
    packages.insert(
        "source_dir".to_string(),
        json!(config.package.source_dir.display().to_string()),
    );
    packages.insert("extension".to_string(), json!(config.package.extension));
    for kind in ArtifactKind::ALL {
        packages.insert(
            kind.as_str().to_string(),
            json!(config.package.package_for(kind)),
        );
    }
    packages.insert("current".to_string(), json!(package));

    let mut classes = Map::new();
    for kind in ArtifactKind::ALL {
        classes.insert(
            kind.as_str().to_string(),
            json!(config.class_name_for(kind, base_name)),
        );
    }

    let mut params = Map::new();
    params.insert(
        "table".to_string(),
        json!({
            "name": table.name,
            "comment": table.comment,
            "is_view": table.is_view,
            "columns": columns,
        }),
    );
    params.insert("base_name".to_string(), json!(base_name));
    params.insert("class_name".to_string(), json!(class_name));
    params.insert("package".to_string(), Value::Object(packages));
    params.insert("classes".to_string(), Value::Object(classes));
    if let Some(author) = &config.author {
        params.insert("author".to_string(), json!(author));
    }
    params
}

fn naming_section(
    prefix: &str,
    suffix: &str,
    superclass: Option<&SuperClass>,
) -> Map<String, Value> {
    let mut section = Map::new();
    section.insert("class_prefix".to_string(), json!(prefix));
    section.insert("class_suffix".to_string(), json!(suffix));
    if let Some(superclass) = superclass {
        section.insert(
            "superclass".to_string(),
            json!({
                "import_path": superclass.import_path,
                "simple_name": superclass.simple_name,
            }),
        );
    }
    section
}

pub(super) fn entity_section(config: &EntityConfig) -> Value {
    let mut section = naming_section(
        &config.class_prefix,
        &config.class_suffix,
        config.superclass(),
    );
    section.insert("derives".to_string(), json!(config.derives));
    Value::Object(section)
}

pub(super) fn mapper_section(config: &MapperConfig) -> Value {
    Value::Object(naming_section(
        &config.class_prefix,
        &config.class_suffix,
        config.superclass(),
    ))
}

pub(super) fn service_section(config: &ServiceConfig) -> Value {
    Value::Object(naming_section(
        &config.class_prefix,
        &config.class_suffix,
        config.superclass(),
    ))
}

pub(super) fn service_impl_section(config: &ServiceImplConfig) -> Value {
    Value::Object(naming_section(
        &config.class_prefix,
        &config.class_suffix,
        config.superclass(),
    ))
}

pub(super) fn controller_section(config: &ControllerConfig) -> Value {
    let mut section = naming_section(
        &config.class_prefix,
        &config.class_suffix,
        config.superclass(),
    );
    section.insert("rest_style".to_string(), json!(config.rest_style));
    Value::Object(section)
}
