//! List blocks, backed by `java.util.LinkedList`.

use super::Generated;
use crate::context::CompilationContext;
use crate::output::expression::value_or;
use crate::output::order::Order;
use crate::workspace::Block;

pub(super) fn create_with(ctx: &mut CompilationContext, block: &Block) -> Generated {
    ctx.ledger.add_import("java.util.LinkedList");
    let count = block.numbered_inputs("ADD");
    if count == 0 {
        return Generated::Expression("new LinkedList<>()".to_string(), Order::FUNCTION_CALL);
    }
    ctx.ledger.add_import("java.util.Arrays");
    let items: Vec<String> = (0..count)
        .map(|n| value_or(ctx, block, &format!("ADD{}", n), Order::NONE, "null"))
        .collect();
    Generated::Expression(
        format!("new LinkedList<>(Arrays.asList({}))", items.join(", ")),
        Order::FUNCTION_CALL,
    )
}

pub(super) fn length(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let list = value_to_list(ctx, block);
    Generated::Expression(format!("{}.size()", list), Order::FUNCTION_CALL)
}

fn value_to_list(ctx: &mut CompilationContext, block: &Block) -> String {
    let list = value_or(ctx, block, "VALUE", Order::MEMBER, "");
    if list.is_empty() {
        ctx.ledger.add_import("java.util.LinkedList");
        "new LinkedList<>()".to_string()
    } else {
        list
    }
}
