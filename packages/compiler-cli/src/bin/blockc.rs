//! blockc: compile a Blockly workspace to Java source.

use std::path::PathBuf;
use std::process;

use blockly_java_cli::logging;
use blockly_java_cli::perform_compile::{perform_compilation, write_output, CompileOptions};
use clap::{Arg, ArgAction, Command};

fn cli() -> Command {
    Command::new("blockc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Blockly workspace to Java compiler")
        .arg(
            Arg::new("workspace")
                .value_name("WORKSPACE")
                .required(true)
                .help("Path to the workspace JSON"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to a generator config JSON"),
        )
        .arg(
            Arg::new("app-name")
                .long("app-name")
                .value_name("NAME")
                .help("Wrap the output in `public class NAME`"),
        )
        .arg(
            Arg::new("package")
                .long("package")
                .value_name("PACKAGE")
                .help("Package declaration for the generated file"),
        )
        .arg(
            Arg::new("base-class")
                .long("base-class")
                .value_name("CLASS")
                .help("Class the application class extends"),
        )
        .arg(
            Arg::new("import")
                .long("import")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Additional import (repeatable)"),
        )
        .arg(
            Arg::new("external-var-class")
                .long("external-var-class")
                .value_name("PACKAGE")
                .help("Import Var from PACKAGE instead of emitting it"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write the Java source here instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pass details"),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = logging::init(matches.get_flag("verbose")) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    let string = |id: &str| matches.get_one::<String>(id).cloned();
    let options = CompileOptions {
        workspace: matches
            .get_one::<String>("workspace")
            .map(PathBuf::from)
            .unwrap_or_default(),
        config: string("config").map(PathBuf::from),
        app_name: string("app-name"),
        package: string("package"),
        base_class: string("base-class"),
        imports: matches
            .get_many::<String>("import")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        external_var_class: string("external-var-class"),
        output: string("output").map(PathBuf::from),
    };

    let result = perform_compilation(&options)
        .and_then(|compilation| {
            write_output(&compilation.code, options.output.as_deref())?;
            Ok(compilation)
        });
    match result {
        Ok(compilation) => {
            if !compilation.is_clean() {
                eprintln!("{} diagnostic(s) reported", compilation.diagnostics.len());
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
