//! Math blocks.

use super::Generated;
use crate::context::CompilationContext;
use crate::output::expression::value_or;
use crate::output::order::{BinaryOperator, Order};
use crate::output::source_text::format_number;
use crate::types::JavaType;
use crate::workspace::Block;

pub(super) fn number(block: &Block) -> Generated {
    let value = block
        .field_value("NUM")
        .and_then(|num| num.trim().parse::<f64>().ok())
        .unwrap_or(0.0);
    let code = format_number(value);
    let order = if code.starts_with('-') {
        Order::UNARY_SIGN
    } else {
        Order::ATOMIC
    };
    Generated::Expression(code, order)
}

pub(super) fn arithmetic(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let op = block.field_value("OP").unwrap_or("ADD");
    if op == "POWER" {
        let base = value_or(ctx, block, "A", Order::NONE, "0");
        let exponent = value_or(ctx, block, "B", Order::NONE, "0");
        return Generated::Expression(
            format!("Math.pow({}, {})", base, exponent),
            Order::FUNCTION_CALL,
        );
    }
    let info = BinaryOperator::from_field(op)
        .filter(|operator| {
            matches!(
                operator,
                BinaryOperator::Plus
                    | BinaryOperator::Minus
                    | BinaryOperator::Multiply
                    | BinaryOperator::Divide
            )
        })
        .unwrap_or(BinaryOperator::Plus)
        .info();
    let lhs = value_or(ctx, block, "A", info.lhs, "0");
    let rhs = value_or(ctx, block, "B", info.rhs, "0");
    Generated::Expression(format!("{} {} {}", lhs, info.symbol, rhs), info.order)
}

pub(super) fn single(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let op = block.field_value("OP").unwrap_or("NEG");
    if op == "NEG" {
        let operand = value_or(ctx, block, "NUM", Order::UNARY_SIGN, "0");
        // `--x` would be a decrement.
        let operand = if operand.starts_with('-') {
            format!(" {}", operand)
        } else {
            operand
        };
        return Generated::Expression(format!("-{}", operand), Order::UNARY_SIGN);
    }
    let operand = value_or(ctx, block, "NUM", Order::NONE, "0");
    let code = match op {
        "ROOT" => format!("Math.sqrt({})", operand),
        "ABS" => format!("Math.abs({})", operand),
        "LN" => format!("Math.log({})", operand),
        "LOG10" => format!("Math.log10({})", operand),
        "EXP" => format!("Math.exp({})", operand),
        "POW10" => format!("Math.pow(10, {})", operand),
        _ => format!("Math.abs({})", operand),
    };
    Generated::Expression(code, Order::FUNCTION_CALL)
}

pub(super) fn modulo(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let info = BinaryOperator::Modulo.info();
    let dividend = value_or(ctx, block, "DIVIDEND", info.lhs, "0");
    let divisor = value_or(ctx, block, "DIVISOR", info.rhs, "0");
    Generated::Expression(format!("{} % {}", dividend, divisor), info.order)
}

pub(super) fn change(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let variable = block.field_value("VAR").unwrap_or_default();
    let name = ctx.variable_name(variable);
    if ctx.variable_type(variable) == JavaType::Var {
        let delta = value_or(ctx, block, "DELTA", Order::ADDITIVE, "0");
        return Generated::statement(format!("{0}.set({0}.getDouble() + {1});\n", name, delta));
    }
    let delta = value_or(ctx, block, "DELTA", Order::ASSIGNMENT, "0");
    Generated::statement(format!("{} += {};\n", name, delta))
}
