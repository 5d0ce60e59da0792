use crudgen::config::{GlobalConfig, StrategyConfig};
use crudgen::generator::{ArtifactGenerator, CodeGenerator, EntityGenerator};
use crudgen::schema::{Column, Table};
use crudgen::template::JinjaEngine;
use crudgen::{GenerateError, TemplateEngine, TemplateRef};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("crudgen_tpl_{}_{}", std::process::id(), nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn table() -> Table {
    Table::new("t_city")
        .with_column(Column::new("id", "INT"))
        .with_column(Column::new("name", "VARCHAR(64)"))
}

#[test]
fn test_custom_template_file_per_generator() {
    let dir = temp_dir();
    let template_path = dir.join("entity_header_only.j2");
    fs::write(
        &template_path,
        "// {{ class_name }} from {{ table.name }} ({{ table.columns | length }} columns)",
    )
    .unwrap();

    let config = GlobalConfig::builder()
        .source_dir(dir.join("out"))
        .table_prefix("t_")
        .build();
    let generators = vec![ArtifactGenerator::Entity(
        EntityGenerator::new().with_template(TemplateRef::File(template_path)),
    )];

    let report = CodeGenerator::with_generators(config, generators).generate(&[table()]);

    assert!(!report.has_failures());
    let content = fs::read_to_string(dir.join("out/app/entity/City.rs")).unwrap();
    assert_eq!(content, "// City from t_city (2 columns)");
}

#[test]
fn test_direct_render_with_json_params() {
    let dir = temp_dir();
    let template_path = dir.join("plain.j2");
    fs::write(&template_path, "{{ greeting }}, {{ who }}!").unwrap();
    let output = dir.join("rendered.txt");

    let params = match json!({ "greeting": "hello", "who": "schema" }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    };
    JinjaEngine::new()
        .render(&params, &TemplateRef::File(template_path), &output)
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello, schema!");
}

#[test]
fn test_unresolvable_reference_is_a_template_error() {
    let dir = temp_dir();
    let output = dir.join("never_written.txt");

    let err = JinjaEngine::new()
        .render(
            &serde_json::Map::new(),
            &TemplateRef::File(dir.join("missing.j2")),
            &output,
        )
        .unwrap_err();

    assert!(matches!(err, GenerateError::Template { .. }));
    assert_eq!(err.class(), "template");
    assert!(!output.exists());
}

#[test]
fn test_template_error_names_the_reference() {
    let err = GenerateError::template(&TemplateRef::Builtin("entity"), "boom");
    assert!(err.to_string().contains("builtin:entity"));

    let err = GenerateError::template(&TemplateRef::File("x/y.j2".into()), "boom");
    assert!(err.to_string().contains("x/y.j2"));
}

#[test]
fn test_lazy_default_engine_is_cached_per_config() {
    let strategy = StrategyConfig::new();
    let first = Arc::clone(strategy.template_engine());
    let second = Arc::clone(strategy.template_engine());
    assert!(Arc::ptr_eq(&first, &second));

    // A different configuration instance gets its own engine.
    let other = StrategyConfig::new();
    let other_engine = Arc::clone(other.template_engine());
    assert!(!Arc::ptr_eq(&first, &other_engine));
}

#[test]
fn test_configured_engine_wins_over_lazy_default() {
    struct Marker;
    impl TemplateEngine for Marker {
        fn render(
            &self,
            _params: &serde_json::Map<String, serde_json::Value>,
            _template: &TemplateRef,
            output: &std::path::Path,
        ) -> Result<(), GenerateError> {
            fs::write(output, "marker").map_err(|e| GenerateError::filesystem(output, e))
        }
    }

    let marker: Arc<dyn TemplateEngine> = Arc::new(Marker);
    let strategy = StrategyConfig::new().with_template_engine(Arc::clone(&marker));
    assert!(Arc::ptr_eq(strategy.template_engine(), &marker));
}

#[test]
fn test_builtin_templates_cover_every_kind() {
    let names: Vec<_> = JinjaEngine::builtin_names().collect();
    assert_eq!(
        names,
        vec!["entity", "mapper", "service", "service_impl", "controller"]
    );
}
