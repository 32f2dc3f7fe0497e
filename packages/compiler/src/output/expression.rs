//! Expression Emitter
//!
//! Renders value-producing block subtrees, threading precedence so children
//! are parenthesized only when their operand position requires it.

use crate::blocks::{self, Generated};
use crate::context::CompilationContext;
use crate::error::DiagnosticKind;
use crate::output::order::Order;
use crate::output::source_text::{is_number, is_string_literal};
use crate::runtime::{TO_STRING_HELPER, TO_STRING_HELPER_LINES, TO_STRING_IMPORTS};
use crate::types::JavaType;
use crate::workspace::Block;

/// Code for the block plugged into `socket`, wrapped in parentheses when it
/// binds looser than `outer`. An empty socket yields an empty string; the
/// caller decides what stands in for it.
pub fn value_to_code(
    ctx: &mut CompilationContext,
    block: &Block,
    socket: &str,
    outer: Order,
) -> String {
    let Some(target) = block.input_target(socket) else {
        return String::new();
    };
    match expression_for(ctx, target, Some(&block.id)) {
        Some((code, inner)) if !code.is_empty() => {
            if inner.needs_parens(outer) {
                format!("({})", code)
            } else {
                code
            }
        }
        _ => String::new(),
    }
}

/// Like [`value_to_code`] but substitutes `default` for an empty socket.
pub fn value_or(
    ctx: &mut CompilationContext,
    block: &Block,
    socket: &str,
    outer: Order,
    default: &str,
) -> String {
    let code = value_to_code(ctx, block, socket, outer);
    if code.is_empty() {
        default.to_string()
    } else {
        code
    }
}

/// Expression text and precedence of block `id`, or `None` when it does not
/// produce a value.
pub fn expression_for(
    ctx: &mut CompilationContext,
    id: &str,
    from: Option<&str>,
) -> Option<(String, Order)> {
    let block = ctx.block(id, from)?;
    if !ctx.enter(id) {
        return None;
    }
    let generated = blocks::generate(ctx, block);
    ctx.leave(id);
    match generated {
        Generated::Expression(code, order) => Some((code, order)),
        Generated::Unsupported => None,
        Generated::Statement(_) | Generated::Deferred => {
            ctx.report(
                DiagnosticKind::MisplacedStatement,
                Some(id),
                format!("'{}' does not produce a value", block.kind),
            );
            None
        }
    }
}

/// Code that evaluates the value in `socket` as a Java `String`, or an
/// empty string for an empty socket.
pub fn to_text(ctx: &mut CompilationContext, block: &Block, socket: &str) -> String {
    text_value(ctx, block, socket)
        .map(|(code, _)| code)
        .unwrap_or_default()
}

/// [`to_text`] together with the precedence of the produced code.
///
/// String-valued code passes through, number literals are quoted, `Var` and
/// `String` variables are used directly, and anything else goes through the
/// runtime conversion helper, which is defined once per pass.
pub fn text_value(
    ctx: &mut CompilationContext,
    block: &Block,
    socket: &str,
) -> Option<(String, Order)> {
    let target_id = block.input_target(socket)?;
    let (code, order) = expression_for(ctx, target_id, Some(&block.id))?;
    let item = code.trim();
    if item.is_empty() {
        return None;
    }
    let target = ctx.workspace().block(target_id);
    let produces_string = target.is_some_and(|t| matches!(t.kind.as_str(), "text" | "text_join"));
    if produces_string || is_string_literal(item) {
        return Some((item.to_string(), order));
    }

    let variable = target
        .filter(|target| target.kind == "variables_get")
        .and_then(|target| target.field_value("VAR"));
    if let Some(variable) = variable {
        match ctx.variable_type(variable) {
            JavaType::Var => return Some((format!("{}.toString()", item), Order::FUNCTION_CALL)),
            JavaType::String => return Some((item.to_string(), order)),
            _ => {}
        }
    }
    if is_number(item) {
        return Some((format!("\"{}\"", item.trim()), Order::ATOMIC));
    }

    for import in TO_STRING_IMPORTS {
        ctx.ledger.add_import(import);
    }
    let helper = ctx
        .ledger
        .provide_function(&mut ctx.names, TO_STRING_HELPER, TO_STRING_HELPER_LINES);
    Some((format!("{}({})", helper, item), Order::FUNCTION_CALL))
}
