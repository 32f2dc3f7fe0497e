//! Compilation Context
//!
//! All state owned by a single pass: the configuration snapshot, the name
//! registry, the type resolver, the declaration ledger, the set of blocks
//! currently being emitted and the collected diagnostics. A context is
//! built fresh for every pass and dropped when the pass ends.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::declarations::DeclarationLedger;
use crate::error::{Diagnostic, DiagnosticKind};
use crate::names::{NameKind, NameRegistry};
use crate::output::source_text::collapse_blank_lines;
use crate::runtime::VAR_CLASS_LINES;
use crate::types::{JavaType, TypeResolver, VAR_CLASS};
use crate::workspace::{Block, Workspace};

pub struct CompilationContext<'w> {
    config: Arc<GeneratorConfig>,
    workspace: &'w Workspace,
    pub names: NameRegistry,
    pub types: TypeResolver,
    pub ledger: DeclarationLedger,
    active: HashSet<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'w> CompilationContext<'w> {
    pub fn new(config: Arc<GeneratorConfig>, workspace: &'w Workspace) -> Self {
        let names = NameRegistry::new(config.reserved_words.iter().cloned());
        let types = TypeResolver::new(config.class_types.clone());
        CompilationContext {
            config,
            workspace,
            names,
            types,
            ledger: DeclarationLedger::new(),
            active: HashSet::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Reset pass-scoped state and seed it from the workspace.
    ///
    /// The application class name and the variable names are reserved
    /// before anything else so that names minted during the walk (loop
    /// counters, helpers) never take them.
    pub fn begin(&mut self) {
        self.names.reset();
        self.types.reset();
        self.ledger.reset();
        self.active.clear();
        self.diagnostics.clear();

        for import in &self.config.default_imports {
            self.ledger.add_import(import.clone());
        }
        if !self.config.app_name.is_empty() {
            self.names.reserve(&self.config.app_name, NameKind::Class);
        }
        let variables = &self.workspace.variables;
        for binding in variables {
            self.names.reserve(&binding.name, NameKind::Variable);
        }
        self.types.load(variables);
        for binding in variables {
            self.ledger.define_global(binding.name.clone(), None);
        }
        log::debug!(
            "pass started: {} blocks, {} variables",
            self.workspace.blocks.len(),
            variables.len()
        );
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn workspace(&self) -> &'w Workspace {
        self.workspace
    }

    /// Look up a linked block, reporting dangling ids.
    pub fn block(&mut self, id: &str, from: Option<&str>) -> Option<&'w Block> {
        let block = self.workspace.block(id);
        if block.is_none() {
            self.report(
                DiagnosticKind::MissingBlock,
                from,
                format!("link to unknown block '{}' ignored", id),
            );
        }
        block
    }

    /// Mark `id` as being emitted. Returns false if it already is, which
    /// means the graph loops back onto itself.
    pub fn enter(&mut self, id: &str) -> bool {
        if self.active.insert(id.to_string()) {
            return true;
        }
        self.report(
            DiagnosticKind::Cycle,
            Some(id),
            "block reached again while emitting it; chain truncated",
        );
        false
    }

    pub fn leave(&mut self, id: &str) {
        self.active.remove(id);
    }

    pub fn report(&mut self, kind: DiagnosticKind, block_id: Option<&str>, message: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, block_id, message);
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Identifier of the application class, if one is configured.
    pub fn class_name(&mut self) -> Option<String> {
        if self.config.app_name.is_empty() {
            return None;
        }
        Some(self.names.reserve(&self.config.app_name, NameKind::Class))
    }

    /// Identifier of a user variable.
    pub fn variable_name(&mut self, name: &str) -> String {
        self.names.reserve(name, NameKind::Variable)
    }

    /// Java type of a user variable; requests the wrapper class when needed.
    pub fn variable_type(&mut self, name: &str) -> JavaType {
        self.types.resolve_type(name)
    }

    /// Render the field and method preamble followed by `body`.
    ///
    /// Runs of blank lines are collapsed and a non-empty preamble is
    /// separated from the body by exactly two blank lines. Consumes the
    /// ledger's definitions.
    pub fn finish(&mut self, body: &str) -> String {
        let mut all_defs = String::new();
        let globals: Vec<(String, Option<String>)> = self
            .ledger
            .globals()
            .map(|(name, init)| (name.to_string(), init.map(str::to_string)))
            .collect();
        for (name, initializer) in globals {
            let ty = self.variable_type(&name);
            if let Some(import) = ty.import() {
                self.ledger.add_import(import);
            }
            let initializer = initializer
                .filter(|init| !init.is_empty())
                .or_else(|| ty.default_initializer().map(str::to_string))
                .map(|init| format!(" = {}", init))
                .unwrap_or_default();
            let name = self.variable_name(&name);
            all_defs.push_str(&format!("protected {} {}{};\n", ty, name, initializer));
        }
        all_defs.push_str(&self.ledger.render_definitions());
        self.provide_var_class();

        let preamble = collapse_blank_lines(&all_defs);
        let preamble = preamble.trim_end_matches('\n');
        if preamble.is_empty() {
            return body.to_string();
        }
        format!("{}\n\n\n{}", preamble, body)
    }

    /// Supply the `Var` class declaration if any variable resolved to it.
    pub fn provide_var_class(&mut self) {
        if !self.types.needs_var_class() {
            return;
        }
        if self.config.inline_var_class {
            if !self.ledger.has_class(VAR_CLASS) {
                self.ledger.define_class(VAR_CLASS, VAR_CLASS_LINES);
            }
        } else if let Some(package) = self.config.var_class_package.clone() {
            self.ledger.add_import(format!("{}.{}", package, VAR_CLASS));
        }
    }

    /// Diagnostics gathered so far, including type fallbacks.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = self.types.take_diagnostics();
        diagnostics.append(&mut self.diagnostics);
        diagnostics
    }
}
