//! Logic blocks: booleans, comparisons, `&&`/`||`, negation, ternary.

use super::Generated;
use crate::context::CompilationContext;
use crate::output::expression::{value_or, value_to_code};
use crate::output::order::{BinaryOperator, Order};
use crate::workspace::Block;

pub(super) fn boolean(block: &Block) -> Generated {
    let code = if block.field_value("BOOL") == Some("TRUE") {
        "true"
    } else {
        "false"
    };
    Generated::Expression(code.to_string(), Order::ATOMIC)
}

pub(super) fn compare(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let operator = block
        .field_value("OP")
        .and_then(BinaryOperator::from_field)
        .filter(|op| {
            matches!(
                op,
                BinaryOperator::Equals
                    | BinaryOperator::NotEquals
                    | BinaryOperator::Lower
                    | BinaryOperator::LowerEquals
                    | BinaryOperator::Bigger
                    | BinaryOperator::BiggerEquals
            )
        })
        .unwrap_or(BinaryOperator::Equals);
    let info = operator.info();
    let lhs = value_or(ctx, block, "A", info.lhs, "0");
    let rhs = value_or(ctx, block, "B", info.rhs, "0");
    Generated::Expression(format!("{} {} {}", lhs, info.symbol, rhs), info.order)
}

pub(super) fn operation(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let operator = match block.field_value("OP") {
        Some("OR") => BinaryOperator::Or,
        _ => BinaryOperator::And,
    };
    let info = operator.info();
    let mut lhs = value_to_code(ctx, block, "A", info.lhs);
    let mut rhs = value_to_code(ctx, block, "B", info.rhs);
    if lhs.is_empty() && rhs.is_empty() {
        lhs = "false".to_string();
        rhs = "false".to_string();
    } else {
        // The neutral element keeps a half-filled block meaningful.
        let neutral = if operator == BinaryOperator::And {
            "true"
        } else {
            "false"
        };
        if lhs.is_empty() {
            lhs = neutral.to_string();
        }
        if rhs.is_empty() {
            rhs = neutral.to_string();
        }
    }
    Generated::Expression(format!("{} {} {}", lhs, info.symbol, rhs), info.order)
}

pub(super) fn negate(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let operand = value_or(ctx, block, "BOOL", Order::LOGICAL_NOT, "true");
    Generated::Expression(format!("!{}", operand), Order::LOGICAL_NOT)
}

pub(super) fn ternary(ctx: &mut CompilationContext, block: &Block) -> Generated {
    // A nested ternary is only unambiguous in the branch positions.
    let condition = value_or(ctx, block, "IF", Order::LOGICAL_OR, "false");
    let then = value_or(ctx, block, "THEN", Order::CONDITIONAL, "null");
    let otherwise = value_or(ctx, block, "ELSE", Order::CONDITIONAL, "null");
    Generated::Expression(
        format!("{} ? {} : {}", condition, then, otherwise),
        Order::CONDITIONAL,
    )
}
