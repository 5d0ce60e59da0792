//! Package layout and output-path mapping.

use std::path::PathBuf;

use crate::generator::ArtifactKind;

/// Where generated files land.
///
/// Packages are dot-separated names mapped to directory separators under
/// `source_dir`. Each artifact kind has a conventional sub-package derived
/// from `base_package` unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Root directory for generated sources.
    pub source_dir: PathBuf,
    /// Base package name, e.g. `com.example.app`.
    pub base_package: String,
    /// File extension for generated sources, without the leading dot.
    pub extension: String,
    entity_package: Option<String>,
    mapper_package: Option<String>,
    service_package: Option<String>,
    service_impl_package: Option<String>,
    controller_package: Option<String>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            source_dir: PathBuf::from("generated"),
            base_package: "app".to_string(),
            extension: "rs".to_string(),
            entity_package: None,
            mapper_package: None,
            service_package: None,
            service_impl_package: None,
            controller_package: None,
        }
    }
}

impl PackageConfig {
    pub fn new() -> Self {
        PackageConfig::default()
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn base_package(mut self, package: impl Into<String>) -> Self {
        self.base_package = package.into();
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn entity_package(mut self, package: impl Into<String>) -> Self {
        self.entity_package = Some(package.into());
        self
    }

    pub fn mapper_package(mut self, package: impl Into<String>) -> Self {
        self.mapper_package = Some(package.into());
        self
    }

    pub fn service_package(mut self, package: impl Into<String>) -> Self {
        self.service_package = Some(package.into());
        self
    }

    pub fn service_impl_package(mut self, package: impl Into<String>) -> Self {
        self.service_impl_package = Some(package.into());
        self
    }

    pub fn controller_package(mut self, package: impl Into<String>) -> Self {
        self.controller_package = Some(package.into());
        self
    }

    /// Effective package for one artifact kind: the configured override, or
    /// the conventional sub-package of `base_package`.
    pub fn package_for(&self, kind: ArtifactKind) -> String {
        let (override_pkg, default_suffix) = match kind {
            ArtifactKind::Entity => (&self.entity_package, "entity"),
            ArtifactKind::Mapper => (&self.mapper_package, "mapper"),
            ArtifactKind::Service => (&self.service_package, "service"),
            ArtifactKind::ServiceImpl => (&self.service_impl_package, "service.impl"),
            ArtifactKind::Controller => (&self.controller_package, "controller"),
        };
        match override_pkg {
            Some(pkg) => pkg.clone(),
            None => format!("{}.{}", self.base_package, default_suffix),
        }
    }

    /// Output path for a class in a package: `source_dir` joined with the
    /// package's dot-separated segments, then `<class_name>.<extension>`.
    pub fn output_path(&self, package: &str, class_name: &str) -> PathBuf {
        let mut path = self.source_dir.clone();
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        let file_name = if self.extension.is_empty() {
            class_name.to_string()
        } else {
            format!("{}.{}", class_name, self.extension)
        };
        path.push(file_name);
        path
    }
}
