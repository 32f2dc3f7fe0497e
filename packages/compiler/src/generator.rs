//! Workspace Driver
//!
//! Runs one compilation pass over a workspace: resets the pass state, emits
//! every root chain, then assembles package line, imports, the field and
//! method preamble, the body and the auxiliary classes into a Java file.

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::context::CompilationContext;
use crate::error::{CompileError, Diagnostic, Result};
use crate::output::source_text::{indent_block, INDENT};
use crate::output::statement::block_to_code;
use crate::workspace::Workspace;

/// Generated Java source together with the problems found while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compiles workspaces against a frozen configuration.
///
/// The generator holds no pass state, so one instance can serve any number
/// of passes, including concurrent ones on different threads.
#[derive(Debug, Clone)]
pub struct JavaGenerator {
    config: Arc<GeneratorConfig>,
}

impl JavaGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(JavaGenerator {
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn compile(&self, workspace: &Workspace) -> Result<Compilation> {
        let roots = workspace
            .top_blocks
            .as_ref()
            .ok_or(CompileError::MissingTopBlocks)?;
        if let Some(unknown) = roots.iter().find(|id| workspace.block(id).is_none()) {
            return Err(CompileError::UnknownTopBlock(unknown.clone()));
        }

        let mut ctx = CompilationContext::new(Arc::clone(&self.config), workspace);
        ctx.begin();

        let mut body = String::new();
        for root in roots {
            body.push_str(&block_to_code(&mut ctx, root, None));
        }

        let class_name = ctx.class_name();
        let code = ctx.finish(&body);
        if let Some(extra) = &self.config.extra_imports {
            for import in extra {
                ctx.ledger.add_import(import.clone());
            }
        }

        let mut out = String::new();
        if !self.config.package.is_empty() {
            out.push_str(&format!("package {};\n\n", self.config.package));
        }
        let imports = ctx.ledger.render_imports();
        if !imports.is_empty() {
            out.push_str(&imports);
            out.push_str("\n\n");
        }
        match class_name {
            Some(name) => {
                out.push_str(&format!("public class {}", name));
                if !self.config.base_class.is_empty() {
                    out.push_str(&format!(" extends {}", self.config.base_class));
                }
                out.push_str(" {\n");
                out.push_str(&indent_block(&code, INDENT));
                if !code.is_empty() && !code.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("}\n");
            }
            None => out.push_str(&code),
        }
        let classes = ctx.ledger.render_classes();
        if !classes.is_empty() {
            out.truncate(out.trim_end_matches('\n').len());
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&classes);
        }

        let diagnostics = ctx.take_diagnostics();
        log::debug!(
            "pass finished: {} bytes, {} diagnostics",
            out.len(),
            diagnostics.len()
        );
        Ok(Compilation {
            code: out,
            diagnostics,
        })
    }
}
