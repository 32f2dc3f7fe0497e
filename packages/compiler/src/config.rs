//! Generator Configuration
//!
//! Process-wide settings for the Java generator. A configuration is
//! validated and frozen when a [`crate::JavaGenerator`] is built; every pass
//! reads a shared snapshot of it and never writes to it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CompileError, Result};

/// Fully-qualified Java name: dotted identifiers, optionally ending in `.*`.
static QUALIFIED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*(\.\*)?$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Name of the generated application class. Empty means the output is
    /// not wrapped in a class.
    pub app_name: String,
    /// Package declaration for the generated file. Empty means none.
    pub package: String,
    /// Base class the application class extends. Empty means none.
    pub base_class: String,
    /// Imports every pass starts with.
    pub default_imports: Vec<String>,
    /// Imports requested by the caller for this workspace.
    pub extra_imports: Option<Vec<String>>,
    /// Emit the `Var` wrapper class inline instead of importing it.
    pub inline_var_class: bool,
    /// Package that holds the external `Var` class.
    pub var_class_package: Option<String>,
    /// Custom source type tags mapped to Java class names.
    pub class_types: IndexMap<String, String>,
    /// Identifiers user names must never take, on top of the Java list.
    pub reserved_words: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            app_name: String::new(),
            package: String::new(),
            base_class: String::new(),
            default_imports: Vec::new(),
            extra_imports: None,
            inline_var_class: true,
            var_class_package: None,
            class_types: IndexMap::new(),
            reserved_words: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    pub fn with_extra_imports(mut self, imports: Vec<String>) -> Self {
        self.extra_imports = Some(imports);
        self
    }

    pub fn with_inline_var_class(mut self, inline: bool) -> Self {
        self.inline_var_class = inline;
        self
    }

    pub fn with_class_type(mut self, tag: impl Into<String>, class: impl Into<String>) -> Self {
        self.class_types.insert(tag.into(), class.into());
        self
    }

    /// Reject names that would produce a broken `import` or `package` line.
    pub fn validate(&self) -> Result<()> {
        let extra = self.extra_imports.iter().flatten();
        for import in self.default_imports.iter().chain(extra) {
            if !QUALIFIED_NAME_RE.is_match(import) {
                return Err(CompileError::InvalidConfig(format!(
                    "'{}' is not a valid import name",
                    import
                )));
            }
        }
        if !self.package.is_empty() && !QUALIFIED_NAME_RE.is_match(&self.package) {
            return Err(CompileError::InvalidConfig(format!(
                "'{}' is not a valid package name",
                self.package
            )));
        }
        if !self.base_class.is_empty() && !QUALIFIED_NAME_RE.is_match(&self.base_class) {
            return Err(CompileError::InvalidConfig(format!(
                "'{}' is not a valid base class name",
                self.base_class
            )));
        }
        if let Some(package) = &self.var_class_package {
            if !QUALIFIED_NAME_RE.is_match(package) {
                return Err(CompileError::InvalidConfig(format!(
                    "'{}' is not a valid package name for the Var class",
                    package
                )));
            }
        }
        Ok(())
    }
}
