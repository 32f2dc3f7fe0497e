//! Type Resolver
//!
//! Turns the coarse type tags the editor attaches to variables into Java
//! types. Resolution is total: every name gets some type, unknown or missing
//! tags fall back with a diagnostic instead of an error.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{Diagnostic, DiagnosticKind};
use crate::workspace::VariableBinding;

/// Name of the dynamic wrapper class.
pub const VAR_CLASS: &str = "Var";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Object,
    LinkedList,
    HashMap,
    /// The dynamic wrapper type.
    Var,
    Boolean,
    String,
    Double,
    /// A class named by the configuration's custom type table.
    Class(String),
}

impl JavaType {
    pub fn as_str(&self) -> &str {
        match self {
            JavaType::Object => "Object",
            JavaType::LinkedList => "LinkedList",
            JavaType::HashMap => "HashMap",
            JavaType::Var => VAR_CLASS,
            JavaType::Boolean => "boolean",
            JavaType::String => "String",
            JavaType::Double => "double",
            JavaType::Class(name) => name,
        }
    }

    /// Import the declaration of this type needs, if any.
    pub fn import(&self) -> Option<&'static str> {
        match self {
            JavaType::LinkedList => Some("java.util.LinkedList"),
            JavaType::HashMap => Some("java.util.HashMap"),
            _ => None,
        }
    }

    /// Field initializer used when a global has no explicit one.
    pub fn default_initializer(&self) -> Option<&'static str> {
        match self {
            JavaType::Var => Some("new Var(0)"),
            JavaType::Boolean => Some("false"),
            JavaType::String => Some("\"\""),
            _ => None,
        }
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of mapping one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagResolution {
    Known(JavaType),
    /// Non-empty tag with no mapping; resolved to the wrapper type.
    Unrecognized(JavaType),
    /// Empty or absent tag; resolved to `Object`.
    Missing(JavaType),
}

impl TagResolution {
    pub fn java_type(&self) -> &JavaType {
        match self {
            TagResolution::Known(ty) | TagResolution::Unrecognized(ty) | TagResolution::Missing(ty) => ty,
        }
    }
}

/// Map one source type tag through the fixed table.
pub fn map_type_tag(tag: Option<&str>, class_types: &IndexMap<String, String>) -> TagResolution {
    let tag = match tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => tag,
        _ => return TagResolution::Missing(JavaType::Object),
    };
    let ty = match tag {
        "Object" => JavaType::Object,
        "Array" => JavaType::LinkedList,
        "Map" => JavaType::HashMap,
        "Var" => JavaType::Var,
        "Boolean" => JavaType::Boolean,
        "String" | "Colour" => JavaType::String,
        "Number" => JavaType::Double,
        other => match class_types.get(other) {
            Some(class) => JavaType::Class(class.clone()),
            None => return TagResolution::Unrecognized(JavaType::Var),
        },
    };
    TagResolution::Known(ty)
}

#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    tags: HashMap<String, Option<String>>,
    class_types: IndexMap<String, String>,
    resolved: HashMap<String, JavaType>,
    needs_var_class: bool,
    diagnostics: Vec<Diagnostic>,
}

impl TypeResolver {
    pub fn new(class_types: IndexMap<String, String>) -> Self {
        TypeResolver {
            class_types,
            ..Default::default()
        }
    }

    pub fn reset(&mut self) {
        self.tags.clear();
        self.resolved.clear();
        self.needs_var_class = false;
        self.diagnostics.clear();
    }

    /// Load the workspace's variables and resolve each of them once.
    pub fn load(&mut self, variables: &[VariableBinding]) {
        for binding in variables {
            self.tags.insert(binding.name.clone(), binding.type_tag.clone());
        }
        for binding in variables {
            self.resolve_type(&binding.name);
        }
    }

    /// Java type of `name`. Memoized, so each fallback is reported once.
    pub fn resolve_type(&mut self, name: &str) -> JavaType {
        if let Some(ty) = self.resolved.get(name) {
            return ty.clone();
        }
        let tag = self.tags.get(name).cloned().flatten();
        let resolution = map_type_tag(tag.as_deref(), &self.class_types);
        match &resolution {
            TagResolution::Known(_) => {}
            TagResolution::Unrecognized(ty) => {
                let message = format!(
                    "unknown type '{}' for variable '{}', using {}",
                    tag.as_deref().unwrap_or_default(),
                    name,
                    ty
                );
                self.report(message);
            }
            TagResolution::Missing(ty) => {
                self.report(format!("no type for variable '{}', using {}", name, ty));
            }
        }
        let ty = resolution.java_type().clone();
        if ty == JavaType::Var {
            self.needs_var_class = true;
        }
        self.resolved.insert(name.to_string(), ty.clone());
        ty
    }

    /// Type already resolved for `name`, without resolving or reporting.
    pub fn peek(&self, name: &str) -> Option<&JavaType> {
        self.resolved.get(name)
    }

    pub fn needs_var_class(&self) -> bool {
        self.needs_var_class
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn report(&mut self, message: String) {
        log::warn!("{}", message);
        self.diagnostics
            .push(Diagnostic::new(DiagnosticKind::UnknownType, None, message));
    }
}
