//! Deferred Declarations
//!
//! Everything the generated file needs ahead of (or after) the translated
//! body, collected while the body is walked: method definitions, class
//! fields, imports and auxiliary classes. Entries are keyed by name and the
//! last write wins, so helpers can be requested from any number of call
//! sites.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use indexmap::IndexMap;

use crate::names::{NameKind, NameRegistry};

/// Placeholder replaced by the reserved name in provided helper functions.
pub const FUNCTION_NAME_PLACEHOLDER: &str = "{{FUNCTION_NAME}}";

/// Words checked for the `static` modifier when ordering definitions.
const STATIC_MARKER_WINDOW: usize = 3;

/// Body of a deferred definition.
pub enum DeclarationBody {
    Text(String),
    /// Produced once, when the ledger is rendered.
    Producer(Box<dyn FnOnce() -> String>),
}

impl DeclarationBody {
    pub fn producer(f: impl FnOnce() -> String + 'static) -> Self {
        DeclarationBody::Producer(Box::new(f))
    }

    fn resolve(self) -> String {
        match self {
            DeclarationBody::Text(text) => text,
            DeclarationBody::Producer(produce) => produce(),
        }
    }
}

impl fmt::Debug for DeclarationBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationBody::Text(text) => f.debug_tuple("Text").field(text).finish(),
            DeclarationBody::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<String> for DeclarationBody {
    fn from(text: String) -> Self {
        DeclarationBody::Text(text)
    }
}

impl From<&str> for DeclarationBody {
    fn from(text: &str) -> Self {
        DeclarationBody::Text(text.to_string())
    }
}

#[derive(Debug, Default)]
pub struct DeclarationLedger {
    definitions: IndexMap<String, DeclarationBody>,
    /// Desired helper name -> name actually reserved for it.
    function_names: HashMap<String, String>,
    globals: IndexMap<String, Option<String>>,
    imports: BTreeSet<String>,
    classes: IndexMap<String, String>,
}

impl DeclarationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.definitions.clear();
        self.function_names.clear();
        self.globals.clear();
        self.imports.clear();
        self.classes.clear();
    }

    pub fn define(&mut self, name: impl Into<String>, body: impl Into<DeclarationBody>) {
        self.definitions.insert(name.into(), body.into());
    }

    pub fn define_global(&mut self, name: impl Into<String>, initializer: Option<String>) {
        self.globals.insert(name.into(), initializer);
    }

    pub fn add_import(&mut self, qualified_name: impl Into<String>) {
        self.imports.insert(qualified_name.into());
    }

    pub fn define_class(&mut self, name: impl Into<String>, lines: &[&str]) {
        self.classes.insert(name.into(), format!("{}\n", lines.join("\n")));
    }

    pub fn has_definition(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn globals(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.globals
            .iter()
            .map(|(name, init)| (name.as_str(), init.as_deref()))
    }

    /// Define a helper function once per pass and return its name.
    ///
    /// The first request reserves a distinct procedure name for
    /// `desired_name` and stores the body with every
    /// [`FUNCTION_NAME_PLACEHOLDER`] replaced by it. Later requests only
    /// return the name.
    pub fn provide_function(
        &mut self,
        names: &mut NameRegistry,
        desired_name: &str,
        lines: &[&str],
    ) -> String {
        if let Some(name) = self.function_names.get(desired_name) {
            return name.clone();
        }
        let name = names.distinct(desired_name, NameKind::Procedure);
        let template = lines.join("\n");
        let actual = name.clone();
        self.define(
            name.clone(),
            DeclarationBody::producer(move || template.replace(FUNCTION_NAME_PLACEHOLDER, &actual)),
        );
        self.function_names.insert(desired_name.to_string(), name.clone());
        name
    }

    /// Render the method definitions: statics first, then instance methods,
    /// each group sorted by name, every definition followed by a blank line.
    /// Consumes the definitions.
    pub fn render_definitions(&mut self) -> String {
        let mut statics = Vec::new();
        let mut instance = Vec::new();
        for (name, body) in self.definitions.drain(..) {
            let text = body.resolve();
            if is_static(&text) {
                statics.push((name, text));
            } else {
                instance.push((name, text));
            }
        }
        statics.sort_by(|a, b| a.0.cmp(&b.0));
        instance.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        for (_, text) in statics.into_iter().chain(instance) {
            out.push_str(&text);
            out.push_str("\n\n");
        }
        out
    }

    /// Sorted `import` lines, one per line, without a trailing newline.
    pub fn render_imports(&self) -> String {
        let mut lines: Vec<String> = self
            .imports
            .iter()
            .map(|name| format!("import {};", name))
            .collect();
        lines.sort();
        lines.join("\n")
    }

    /// Auxiliary classes in registration order, separated by blank lines.
    pub fn render_classes(&self) -> String {
        self.classes
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Whether the first code line of a definition declares it `static`.
/// Leading `//` comment lines are skipped.
fn is_static(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("//"))
        .map(|line| {
            line.split_whitespace()
                .take(STATIC_MARKER_WINDOW)
                .any(|word| word == "static")
        })
        .unwrap_or(false)
}
