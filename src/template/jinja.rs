//! Default template engine backed by minijinja.

use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde_json::{Map, Value};

use super::{TemplateEngine, TemplateRef};
use crate::error::{fs_err, GenerateError};

/// Template sources embedded at compile time, keyed by builtin name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("entity", include_str!("../../templates/entity.rs.j2")),
    ("mapper", include_str!("../../templates/mapper.rs.j2")),
    ("service", include_str!("../../templates/service.rs.j2")),
    (
        "service_impl",
        include_str!("../../templates/service_impl.rs.j2"),
    ),
    (
        "controller",
        include_str!("../../templates/controller.rs.j2"),
    ),
];

/// Default [`TemplateEngine`] implementation.
///
/// Resolves [`TemplateRef::Builtin`] names against the embedded template set
/// and reads [`TemplateRef::File`] sources from disk at render time. Each
/// render uses a fresh minijinja environment; the engine itself is stateless
/// and freely shareable.
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaEngine;

impl JinjaEngine {
    pub fn new() -> Self {
        JinjaEngine
    }

    /// Names of the embedded builtin templates.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
    }

    fn source(&self, template: &TemplateRef) -> Result<String, GenerateError> {
        match template {
            TemplateRef::Builtin(name) => BUILTIN_TEMPLATES
                .iter()
                .find(|(candidate, _)| candidate == name)
                .map(|(_, source)| (*source).to_string())
                .ok_or_else(|| GenerateError::template(template, "unknown builtin template")),
            TemplateRef::File(path) => {
                fs::read_to_string(path).map_err(|e| GenerateError::template(template, e))
            }
        }
    }
}

impl TemplateEngine for JinjaEngine {
    fn render(
        &self,
        params: &Map<String, Value>,
        template: &TemplateRef,
        output: &Path,
    ) -> Result<(), GenerateError> {
        let source = self.source(template)?;
        let mut env = Environment::new();
        env.add_template("artifact", &source)
            .map_err(|e| GenerateError::template(template, e))?;
        let tmpl = env
            .get_template("artifact")
            .map_err(|e| GenerateError::template(template, e))?;
        let rendered = tmpl
            .render(params)
            .map_err(|e| GenerateError::template(template, e))?;
        fs::write(output, rendered).map_err(fs_err(output))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use serde_json::json;

    fn params(pairs: Value) -> Map<String, Value> {
        match pairs {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_every_builtin_resolves() {
        let engine = JinjaEngine::new();
        for name in JinjaEngine::builtin_names() {
            let source = engine.source(&TemplateRef::Builtin(name)).unwrap();
            assert!(!source.is_empty(), "builtin `{name}` is empty");
        }
    }

    #[test]
    fn test_unknown_builtin_is_a_template_error() {
        let engine = JinjaEngine::new();
        let err = engine
            .source(&TemplateRef::Builtin("no_such_template"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::Template { .. }));
    }

    #[test]
    fn test_missing_file_is_a_template_error() {
        let engine = JinjaEngine::new();
        let err = engine
            .source(&TemplateRef::File("does/not/exist.j2".into()))
            .unwrap_err();
        assert!(matches!(err, GenerateError::Template { .. }));
    }

    #[test]
    fn test_render_writes_file_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("greeting.j2");
        fs::write(&template_path, "hello {{ name }}").unwrap();
        let output = dir.path().join("out.txt");

        let engine = JinjaEngine::new();
        engine
            .render(
                &params(json!({ "name": "world" })),
                &TemplateRef::File(template_path),
                &output,
            )
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "hello world");
    }

    #[test]
    fn test_render_failure_reports_template_error() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("broken.j2");
        fs::write(&template_path, "{{ missing_function() }}").unwrap();
        let output = dir.path().join("out.txt");

        let engine = JinjaEngine::new();
        let err = engine
            .render(
                &params(json!({})),
                &TemplateRef::File(template_path),
                &output,
            )
            .unwrap_err();
        assert!(matches!(err, GenerateError::Template { .. }));
        assert!(!output.exists());
    }
}
