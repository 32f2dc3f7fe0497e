//! Perform Compile
//!
//! Loads a workspace and a generator configuration from disk, layers the
//! command-line overrides on top and runs one compilation pass.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockly_java::{Compilation, GeneratorConfig, JavaGenerator, Workspace};

/// Everything the command line can ask for.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Workspace description (JSON).
    pub workspace: PathBuf,
    /// Generator configuration (JSON).
    pub config: Option<PathBuf>,
    pub app_name: Option<String>,
    pub package: Option<String>,
    pub base_class: Option<String>,
    /// Extra imports, added to those from the configuration file.
    pub imports: Vec<String>,
    /// Import `Var` from this package instead of emitting it inline.
    pub external_var_class: Option<String>,
    /// Write the generated code here instead of stdout.
    pub output: Option<PathBuf>,
}

pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn load_workspace(path: &Path) -> Result<Workspace> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read workspace {}", path.display()))?;
    Workspace::from_json(&content)
        .with_context(|| format!("failed to parse workspace {}", path.display()))
}

/// Command-line values win over the configuration file.
pub fn apply_overrides(mut config: GeneratorConfig, options: &CompileOptions) -> GeneratorConfig {
    if let Some(app_name) = &options.app_name {
        config.app_name = app_name.clone();
    }
    if let Some(package) = &options.package {
        config.package = package.clone();
    }
    if let Some(base_class) = &options.base_class {
        config.base_class = base_class.clone();
    }
    if !options.imports.is_empty() {
        config
            .extra_imports
            .get_or_insert_with(Vec::new)
            .extend(options.imports.iter().cloned());
    }
    if let Some(package) = &options.external_var_class {
        config.inline_var_class = false;
        config.var_class_package = Some(package.clone());
    }
    config
}

pub fn perform_compilation(options: &CompileOptions) -> Result<Compilation> {
    let config = apply_overrides(load_config(options.config.as_deref())?, options);
    let workspace = load_workspace(&options.workspace)?;
    log::debug!(
        "compiling {} ({} blocks)",
        options.workspace.display(),
        workspace.blocks.len()
    );
    let generator = JavaGenerator::new(config)?;
    let compilation = generator.compile(&workspace)?;
    Ok(compilation)
}

/// Write `code` to the requested file, or stdout when there is none.
pub fn write_output(code: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, code)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{}", code);
            Ok(())
        }
    }
}
