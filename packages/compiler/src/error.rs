//! Compiler Errors
//!
//! Errors returned to the caller of a compilation pass. Only contract
//! violations by the embedding code end up here; problems inside the block
//! graph are reported as [`Diagnostic`]s and never abort a pass.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The workspace carried no top-block list at all.
    #[error("workspace has no top-block list")]
    MissingTopBlocks,

    /// A top-block id does not name a block in the workspace.
    #[error("top block '{0}' is not present in the workspace")]
    UnknownTopBlock(String),

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CompileError>;

/// Category of a non-fatal problem found while walking the block graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A variable had no usable type tag and was given a fallback type.
    UnknownType,
    /// A block type tag without an emission rule.
    UnsupportedBlock,
    /// A socket or next link names a block id that does not exist.
    MissingBlock,
    /// A block was reached again while it was still being emitted.
    Cycle,
    /// A statement block was plugged into a value socket.
    MisplacedStatement,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            DiagnosticKind::UnknownType => "unknown-type",
            DiagnosticKind::UnsupportedBlock => "unsupported-block",
            DiagnosticKind::MissingBlock => "missing-block",
            DiagnosticKind::Cycle => "cycle",
            DiagnosticKind::MisplacedStatement => "misplaced-statement",
        };
        write!(f, "{}", kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub block_id: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, block_id: Option<&str>, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            block_id: block_id.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.block_id {
            Some(id) => write!(f, "[{}] block {}: {}", self.kind, id, self.message),
            None => write!(f, "[{}] {}", self.kind, self.message),
        }
    }
}
