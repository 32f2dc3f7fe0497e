//! Procedure definitions, calls and early returns.
//!
//! A definition emits no body text. Its method goes into the declaration
//! ledger under the procedure's registry name, so calls that appear before
//! the definition in workspace order still resolve to the same identifier.

use super::Generated;
use crate::context::CompilationContext;
use crate::names::NameKind;
use crate::output::expression::{value_or, value_to_code};
use crate::output::order::Order;
use crate::output::source_text::INDENT;
use crate::output::statement::{block_comments, statement_to_code};
use crate::types::JavaType;
use crate::workspace::Block;

pub(super) fn definition(ctx: &mut CompilationContext, block: &Block, returns: bool) -> Generated {
    let name = procedure_name(ctx, block);
    let params: Vec<String> = block
        .params
        .iter()
        .map(|param| {
            let ty = ctx.types.peek(param).cloned().unwrap_or(JavaType::Object);
            format!("{} {}", ty, ctx.variable_name(param))
        })
        .collect();

    let body = statement_to_code(ctx, block, "STACK");
    let return_value = if returns {
        value_to_code(ctx, block, "RETURN", Order::NONE)
    } else {
        String::new()
    };
    let (return_type, return_line) = if return_value.is_empty() {
        ("void", String::new())
    } else {
        ("Object", format!("{}return {};\n", INDENT, return_value))
    };

    let mut code = block_comments(ctx.workspace(), block);
    code.push_str(&format!(
        "public {} {}({}) {{\n{}{}}}",
        return_type,
        name,
        params.join(", "),
        body,
        return_line
    ));
    log::debug!("procedure '{}' registered", name);
    ctx.ledger.define(name, code);
    Generated::Deferred
}

pub(super) fn call(ctx: &mut CompilationContext, block: &Block, returns: bool) -> Generated {
    let name = procedure_name(ctx, block);
    let args: Vec<String> = (0..block.numbered_inputs("ARG"))
        .map(|n| value_or(ctx, block, &format!("ARG{}", n), Order::NONE, "null"))
        .collect();
    let code = format!("{}({})", name, args.join(", "));
    if returns {
        Generated::Expression(code, Order::FUNCTION_CALL)
    } else {
        Generated::statement(format!("{};\n", code))
    }
}

pub(super) fn if_return(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let condition = value_or(ctx, block, "CONDITION", Order::NONE, "false");
    let value = if block.get_input("VALUE").is_some() {
        value_or(ctx, block, "VALUE", Order::NONE, "null")
    } else {
        String::new()
    };
    let statement = if value.is_empty() {
        "return;".to_string()
    } else {
        format!("return {};", value)
    };
    Generated::statement(format!(
        "if ({}) {{\n{}{}\n}}\n",
        condition, INDENT, statement
    ))
}

fn procedure_name(ctx: &mut CompilationContext, block: &Block) -> String {
    let raw = block.field_value("NAME").unwrap_or_default();
    ctx.names.reserve(raw, NameKind::Procedure)
}
