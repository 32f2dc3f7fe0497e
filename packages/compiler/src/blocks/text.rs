//! Text blocks. Every value that ends up in a string goes through
//! [`to_text`] so non-string values are converted explicitly.

use super::Generated;
use crate::context::CompilationContext;
use crate::output::expression::{text_value, to_text};
use crate::output::order::Order;
use crate::output::source_text::quote_string;
use crate::workspace::Block;

pub(super) fn literal(block: &Block) -> Generated {
    let text = block.field_value("TEXT").unwrap_or_default();
    Generated::Expression(quote_string(text), Order::ATOMIC)
}

pub(super) fn join(ctx: &mut CompilationContext, block: &Block) -> Generated {
    match block.numbered_inputs("ADD") {
        0 => Generated::Expression("\"\"".to_string(), Order::ATOMIC),
        1 => match text_value(ctx, block, "ADD0") {
            Some((item, order)) => Generated::Expression(item, order),
            None => Generated::Expression("\"\"".to_string(), Order::ATOMIC),
        },
        count => {
            let items: Vec<String> = (0..count)
                .map(|n| text_or_empty(ctx, block, &format!("ADD{}", n)))
                .collect();
            Generated::Expression(items.join(" + "), Order::ADDITIVE)
        }
    }
}

pub(super) fn length(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let text = match text_value(ctx, block, "VALUE") {
        Some((text, order)) if order.needs_parens(Order::MEMBER) => format!("({})", text),
        Some((text, _)) => text,
        None => "\"\"".to_string(),
    };
    Generated::Expression(format!("{}.length()", text), Order::FUNCTION_CALL)
}

pub(super) fn print(ctx: &mut CompilationContext, block: &Block) -> Generated {
    let text = text_or_empty(ctx, block, "TEXT");
    Generated::statement(format!("System.out.println({});\n", text))
}

fn text_or_empty(ctx: &mut CompilationContext, block: &Block, socket: &str) -> String {
    let text = to_text(ctx, block, socket);
    if text.is_empty() {
        "\"\"".to_string()
    } else {
        text
    }
}
