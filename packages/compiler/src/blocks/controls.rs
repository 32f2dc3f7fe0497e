//! Control flow blocks: conditionals, loops, loop exits and the try wrapper.

use super::Generated;
use crate::context::CompilationContext;
use crate::names::NameKind;
use crate::output::expression::value_or;
use crate::output::order::Order;
use crate::output::source_text::{format_number, is_number, INDENT};
use crate::output::statement::{statement_to_code, StatementOutput};
use crate::types::JavaType;
use crate::workspace::Block;

pub(super) fn if_else(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let mut code = String::new();
    for n in 0..block.numbered_inputs("IF").max(1) {
        let condition = value_or(ctx, block, &format!("IF{}", n), Order::NONE, "false");
        let branch = statement_to_code(ctx, block, &format!("DO{}", n));
        if n > 0 {
            code.push_str(" else ");
        }
        code.push_str(&format!("if ({}) {{\n{}}}", condition, branch));
    }
    if block.get_input("ELSE").is_some() {
        let branch = statement_to_code(ctx, block, "ELSE");
        code.push_str(&format!(" else {{\n{}}}", branch));
    }
    code.push('\n');
    Generated::statement(code)
}

pub(super) fn while_until(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let until = block.field_value("MODE") == Some("UNTIL");
    let condition = if until {
        format!("!{}", value_or(ctx, block, "BOOL", Order::LOGICAL_NOT, "false"))
    } else {
        value_or(ctx, block, "BOOL", Order::NONE, "false")
    };
    let branch = statement_to_code(ctx, block, "DO");
    Generated::statement(format!("while ({}) {{\n{}}}\n", condition, branch))
}

pub(super) fn repeat(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let times = match block.field_value("TIMES") {
        Some(times) => times
            .trim()
            .parse::<f64>()
            .map(format_number)
            .unwrap_or_else(|_| "0".to_string()),
        None => value_or(ctx, block, "TIMES", Order::RELATIONAL, "0"),
    };
    let counter = ctx.names.distinct("count", NameKind::Variable);
    let branch = statement_to_code(ctx, block, "DO");

    let mut code = String::new();
    let limit = if is_number(&times) {
        times.trim().to_string()
    } else {
        let end = ctx.names.distinct(&format!("{}_end", counter), NameKind::Variable);
        code.push_str(&format!("double {} = {};\n", end, times));
        end
    };
    code.push_str(&format!(
        "for (int {0} = 0; {0} < {1}; {0}++) {{\n{2}}}\n",
        counter, limit, branch
    ));
    Generated::statement(code)
}

pub(super) fn for_range(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let variable = block.field_value("VAR").unwrap_or_default();
    let name = ctx.variable_name(variable);
    let from = value_or(ctx, block, "FROM", Order::ASSIGNMENT, "0");
    let to = value_or(ctx, block, "TO", Order::RELATIONAL, "0");
    let by = value_or(ctx, block, "BY", Order::ASSIGNMENT, "1");

    // A `Var` loop variable is driven through a local double counter.
    let local = ctx.variable_type(variable) == JavaType::Var;
    let counter = if local {
        ctx.names.distinct(&format!("{}_loop", name), NameKind::Variable)
    } else {
        name.clone()
    };
    let mut branch = statement_to_code(ctx, block, "DO");
    if local {
        branch = format!("{}{}.set({});\n{}", INDENT, name, counter, branch);
    }

    let mut code = String::new();
    let header = match literal_range(&from, &to, &by) {
        Some((start, end, step)) => {
            let (cmp, update) = if start <= end {
                ("<=", format!("{} += {}", counter, format_number(step.abs())))
            } else {
                (">=", format!("{} -= {}", counter, format_number(step.abs())))
            };
            format!("{0} = {1}; {0} {2} {3}; {4}", counter, from, cmp, to, update)
        }
        None => {
            let step = if is_number(&by) {
                by.trim().to_string()
            } else {
                let step = ctx.names.distinct(&format!("{}_inc", counter), NameKind::Variable);
                code.push_str(&format!("double {} = {};\n", step, by));
                step
            };
            format!(
                "{0} = {1}; {2} >= 0 ? {0} <= {3} : {0} >= {3}; {0} += {2}",
                counter, from, step, to
            )
        }
    };
    if local {
        code.push_str(&format!("for (double {}) {{\n{}}}\n", header, branch));
    } else {
        code.push_str(&format!("for ({}) {{\n{}}}\n", header, branch));
    }
    Generated::statement(code)
}

pub(super) fn flow(block: &Block) -> Generated {
    match block.field_value("FLOW") {
        Some("CONTINUE") => Generated::statement("continue;\n"),
        _ => Generated::statement("break;\n"),
    }
}

/// Opens a `try` that covers the rest of the chain this block sits in.
pub(super) fn try_rest() -> Generated {
    Generated::Statement(
        StatementOutput::text("try {\n")
            .with_next_indent(INDENT)
            .with_trailing("} catch (Exception e) {\n    e.printStackTrace();\n}\n"),
    )
}

fn literal_range(from: &str, to: &str, by: &str) -> Option<(f64, f64, f64)> {
    let parse = |text: &str| {
        if is_number(text) {
            text.trim().parse::<f64>().ok()
        } else {
            None
        }
    };
    Some((parse(from)?, parse(to)?, parse(by)?))
}
