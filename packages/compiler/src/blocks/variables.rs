//! Variable getters and setters.

use super::Generated;
use crate::context::CompilationContext;
use crate::output::expression::value_or;
use crate::output::order::Order;
use crate::types::JavaType;
use crate::workspace::Block;

pub(super) fn get(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let variable = block.field_value("VAR").unwrap_or_default();
    Generated::Expression(ctx.variable_name(variable), Order::ATOMIC)
}

pub(super) fn set(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let variable = block.field_value("VAR").unwrap_or_default();
    let name = ctx.variable_name(variable);
    if ctx.variable_type(variable) == JavaType::Var {
        let value = value_or(ctx, block, "VALUE", Order::NONE, "0");
        return Generated::statement(format!("{} = new Var({});\n", name, value));
    }
    let value = value_or(ctx, block, "VALUE", Order::ASSIGNMENT, "0");
    Generated::statement(format!("{} = {};\n", name, value))
}
