#![deny(clippy::all)]

//! Blockly Java CLI
//!
//! File handling, configuration layering and logging setup behind the
//! `blockc` binary.

pub use blockly_java as compiler;

pub mod logging;
pub mod perform_compile;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
