//! Statement Emitter
//!
//! Walks chains of statement blocks. Each block's rule returns its own text
//! plus two decorations that apply only to the rest of its chain: text
//! appended after the chain and an indent applied to every line of it.

use std::collections::HashSet;

use crate::blocks::{self, Generated};
use crate::context::CompilationContext;
use crate::output::source_text::{indent_block, prefix_lines, COMMENT_PREFIX, INDENT};
use crate::workspace::{Block, Workspace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementOutput {
    /// The statement itself, newline-terminated.
    pub text: String,
    /// Appended after the rendered rest of the chain.
    pub trailing: String,
    /// Prefixed to every line of the rendered rest of the chain.
    pub next_indent: String,
}

impl StatementOutput {
    pub fn text(text: impl Into<String>) -> Self {
        StatementOutput {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = trailing.into();
        self
    }

    pub fn with_next_indent(mut self, indent: impl Into<String>) -> Self {
        self.next_indent = indent.into();
        self
    }
}

/// Render block `id` and every block chained after it.
///
/// The chain is walked with a loop and then folded from its tail, so stack
/// depth follows statement nesting rather than chain length.
pub fn block_to_code(ctx: &mut CompilationContext, id: &str, from: Option<&str>) -> String {
    let mut links: Vec<(String, StatementOutput)> = Vec::new();
    let mut entered: Vec<&str> = Vec::new();
    let mut tail = String::new();
    let mut current = Some((id, from));
    while let Some((id, from)) = current.take() {
        let Some(block) = ctx.block(id, from) else {
            break;
        };
        if !ctx.enter(id) {
            tail = format!("{}chain truncated: block '{}' repeats\n", COMMENT_PREFIX, id);
            break;
        }
        entered.push(id);
        let output = match blocks::generate(ctx, block) {
            Generated::Statement(output) => output,
            Generated::Expression(code, _) => StatementOutput::text(scrub_naked_value(&code)),
            Generated::Deferred => break,
            Generated::Unsupported => StatementOutput::text(format!(
                "{}Unsupported block: {}\n",
                COMMENT_PREFIX, block.kind
            )),
        };
        links.push((block_comments(ctx.workspace(), block), output));
        current = block.next.as_deref().map(|next| (next, Some(block.id.as_str())));
    }
    for id in entered {
        ctx.leave(id);
    }
    fold_chain(links, tail)
}

/// Join rendered links back to front. Each link's decorations apply to
/// everything after it: `text + indent(rest, next_indent) + trailing`.
fn fold_chain(links: Vec<(String, StatementOutput)>, tail: String) -> String {
    // Segments of the rendered rest, last segment first.
    let mut rest = vec![tail];
    for (comments, output) in links.into_iter().rev() {
        let StatementOutput {
            text,
            trailing,
            next_indent,
        } = output;
        if !next_indent.is_empty() || !trailing.is_empty() {
            let mut joined: String = rest.drain(..).rev().collect();
            if !next_indent.is_empty() {
                joined = indent_block(&joined, &next_indent);
            }
            joined.push_str(&trailing);
            rest.push(joined);
        }
        rest.push(text);
        rest.push(comments);
    }
    rest.into_iter().rev().collect()
}

/// Render the chain plugged into statement socket `socket`, indented one level.
pub fn statement_to_code(ctx: &mut CompilationContext, block: &Block, socket: &str) -> String {
    match block.input_target(socket) {
        Some(target) => indent_block(&block_to_code(ctx, target, Some(&block.id)), INDENT),
        None => String::new(),
    }
}

/// A value block used as a statement.
fn scrub_naked_value(code: &str) -> String {
    if code.is_empty() {
        String::new()
    } else {
        format!("{};\n", code)
    }
}

/// Comment lines for `block`: its own comment, then the comments found in
/// its value-input subtrees. Nested statement chains carry their own.
pub fn block_comments(workspace: &Workspace, block: &Block) -> String {
    let mut out = String::new();
    if let Some(comment) = trimmed_comment(block) {
        out.push_str(&prefix_lines(comment, COMMENT_PREFIX));
        out.push('\n');
    }
    for child in block.value_targets() {
        let nested = nested_comments(workspace, child);
        if !nested.is_empty() {
            out.push_str(&prefix_lines(&nested, COMMENT_PREFIX));
        }
    }
    out
}

fn trimmed_comment(block: &Block) -> Option<&str> {
    block
        .comment
        .as_deref()
        .map(|c| c.trim_end_matches('\n'))
        .filter(|c| !c.is_empty())
}

/// Comments of `root` and all of its descendants, one per line, with a
/// trailing newline. Empty when there are none.
pub fn nested_comments(workspace: &Workspace, root: &str) -> String {
    let mut comments = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        let Some(block) = workspace.block(id) else {
            continue;
        };
        if let Some(comment) = trimmed_comment(block) {
            comments.push(comment);
        }
        if let Some(next) = block.next.as_deref() {
            stack.push(next);
        }
        for input in block.inputs.iter().rev() {
            if let Some(child) = input.block.as_deref() {
                stack.push(child);
            }
        }
    }
    if comments.is_empty() {
        return String::new();
    }
    let mut out = comments.join("\n");
    out.push('\n');
    out
}
