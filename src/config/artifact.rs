//! Per-artifact-kind naming configuration.

use crate::error::GenerateError;

/// Configured reference to a parent type for a generated class.
///
/// Absence of a superclass is a distinct state from any default parent;
/// generators must check [`superclass`](EntityConfig::superclass) (or use the
/// checked accessors) rather than assuming one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperClass {
    /// Fully-qualified import path of the parent type.
    pub import_path: String,
    /// Simple (unqualified) name of the parent type.
    pub simple_name: String,
}

impl SuperClass {
    pub fn new(import_path: impl Into<String>, simple_name: impl Into<String>) -> Self {
        SuperClass {
            import_path: import_path.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Builds a descriptor from a fully-qualified import path, deriving the
    /// simple name from the final `::` or `.` segment.
    pub fn from_import(import_path: impl Into<String>) -> Self {
        let import_path = import_path.into();
        let simple_name = import_path
            .rsplit("::")
            .next()
            .and_then(|tail| tail.rsplit('.').next())
            .unwrap_or(import_path.as_str())
            .to_string();
        SuperClass {
            import_path,
            simple_name,
        }
    }
}

fn require_superclass<'a>(
    superclass: Option<&'a SuperClass>,
    artifact: &str,
) -> Result<&'a SuperClass, GenerateError> {
    superclass.ok_or_else(|| {
        GenerateError::Configuration(format!(
            "superclass not configured for {artifact} artifacts"
        ))
    })
}

macro_rules! naming_accessors {
    ($artifact:literal) => {
        /// Composed class name for a derived base name: `prefix + base + suffix`.
        pub fn class_name(&self, base_name: &str) -> String {
            format!("{}{}{}", self.class_prefix, base_name, self.class_suffix)
        }

        pub fn superclass(&self) -> Option<&SuperClass> {
            self.superclass.as_ref()
        }

        /// Import path of the configured superclass.
        ///
        /// Fails with [`GenerateError::Configuration`] when no superclass is
        /// configured; never substitutes a default parent.
        pub fn superclass_import(&self) -> Result<&str, GenerateError> {
            require_superclass(self.superclass.as_ref(), $artifact)
                .map(|s| s.import_path.as_str())
        }

        /// Simple name of the configured superclass; same failure contract as
        /// [`superclass_import`](Self::superclass_import).
        pub fn superclass_name(&self) -> Result<&str, GenerateError> {
            require_superclass(self.superclass.as_ref(), $artifact)
                .map(|s| s.simple_name.as_str())
        }

        pub fn class_prefix(mut self, prefix: impl Into<String>) -> Self {
            self.class_prefix = prefix.into();
            self
        }

        pub fn class_suffix(mut self, suffix: impl Into<String>) -> Self {
            self.class_suffix = suffix.into();
            self
        }

        pub fn with_superclass(mut self, superclass: SuperClass) -> Self {
            self.superclass = Some(superclass);
            self
        }
    };
}

/// Naming configuration for generated entity classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityConfig {
    pub class_prefix: String,
    pub class_suffix: String,
    superclass: Option<SuperClass>,
    /// Extra derive names forwarded to the entity template.
    pub derives: Vec<String>,
}

impl EntityConfig {
    pub fn new() -> Self {
        EntityConfig::default()
    }

    pub fn with_derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    naming_accessors!("entity");
}

/// Naming configuration for generated data-access (mapper) classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    pub class_prefix: String,
    pub class_suffix: String,
    superclass: Option<SuperClass>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            class_prefix: String::new(),
            class_suffix: "Mapper".to_string(),
            superclass: None,
        }
    }
}

impl MapperConfig {
    pub fn new() -> Self {
        MapperConfig::default()
    }

    naming_accessors!("mapper");
}

/// Naming configuration for generated service interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub class_prefix: String,
    pub class_suffix: String,
    superclass: Option<SuperClass>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            class_prefix: String::new(),
            class_suffix: "Service".to_string(),
            superclass: None,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        ServiceConfig::default()
    }

    naming_accessors!("service");
}

/// Naming configuration for generated service implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceImplConfig {
    pub class_prefix: String,
    pub class_suffix: String,
    superclass: Option<SuperClass>,
}

impl Default for ServiceImplConfig {
    fn default() -> Self {
        ServiceImplConfig {
            class_prefix: String::new(),
            class_suffix: "ServiceImpl".to_string(),
            superclass: None,
        }
    }
}

impl ServiceImplConfig {
    pub fn new() -> Self {
        ServiceImplConfig::default()
    }

    naming_accessors!("service implementation");
}

/// Naming configuration for generated controller classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub class_prefix: String,
    pub class_suffix: String,
    superclass: Option<SuperClass>,
    /// Emit REST-style annotations/routing in the controller template.
    pub rest_style: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            class_prefix: String::new(),
            class_suffix: "Controller".to_string(),
            superclass: None,
            rest_style: true,
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        ControllerConfig::default()
    }

    pub fn rest_style(mut self, rest_style: bool) -> Self {
        self.rest_style = rest_style;
        self
    }

    naming_accessors!("controller");
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_class_name_composition() {
        let entity = EntityConfig::new().class_suffix("Entity");
        assert_eq!(entity.class_name("SysUser"), "SysUserEntity");

        let controller = ControllerConfig::new().class_prefix("Api");
        assert_eq!(controller.class_name("SysUser"), "ApiSysUserController");
    }

    #[test]
    fn test_default_suffixes() {
        assert_eq!(EntityConfig::new().class_name("User"), "User");
        assert_eq!(MapperConfig::new().class_name("User"), "UserMapper");
        assert_eq!(ServiceConfig::new().class_name("User"), "UserService");
        assert_eq!(
            ServiceImplConfig::new().class_name("User"),
            "UserServiceImpl"
        );
        assert_eq!(
            ControllerConfig::new().class_name("User"),
            "UserController"
        );
    }

    #[test]
    fn test_missing_superclass_is_a_configuration_error() {
        let entity = EntityConfig::new();
        assert!(entity.superclass().is_none());
        let err = entity.superclass_import().unwrap_err();
        assert!(matches!(err, GenerateError::Configuration(_)));
        let err = entity.superclass_name().unwrap_err();
        assert!(matches!(err, GenerateError::Configuration(_)));
    }

    #[test]
    fn test_configured_superclass_accessors() {
        let service = ServiceConfig::new()
            .with_superclass(SuperClass::new("com.example.base.BaseService", "BaseService"));
        assert_eq!(
            service.superclass_import().unwrap(),
            "com.example.base.BaseService"
        );
        assert_eq!(service.superclass_name().unwrap(), "BaseService");
    }

    #[test]
    fn test_superclass_from_import() {
        let dotted = SuperClass::from_import("com.example.base.BaseEntity");
        assert_eq!(dotted.simple_name, "BaseEntity");

        let pathed = SuperClass::from_import("crate::model::BaseEntity");
        assert_eq!(pathed.simple_name, "BaseEntity");

        let bare = SuperClass::from_import("BaseEntity");
        assert_eq!(bare.simple_name, "BaseEntity");
        assert_eq!(bare.import_path, "BaseEntity");
    }
}
