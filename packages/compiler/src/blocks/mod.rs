//! Block Rules
//!
//! One emission rule per block kind. The kind is parsed from the block's type
//! tag into a closed enum; tags without a rule land in
//! [`BlockKind::Unknown`] and degrade to a diagnostic instead of failing the
//! pass.

mod controls;
mod lists;
mod logic;
mod math;
mod procedures;
mod text;
mod variables;

use crate::context::CompilationContext;
use crate::error::DiagnosticKind;
use crate::output::order::Order;
use crate::output::statement::StatementOutput;
use crate::workspace::Block;

/// What a rule produced for one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Expression(String, Order),
    Statement(StatementOutput),
    /// The block only registered declarations; it has no body text.
    Deferred,
    Unsupported,
}

impl Generated {
    pub fn statement(text: impl Into<String>) -> Self {
        Generated::Statement(StatementOutput::text(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    LogicBoolean,
    LogicNull,
    LogicCompare,
    LogicOperation,
    LogicNegate,
    LogicTernary,
    MathNumber,
    MathArithmetic,
    MathSingle,
    MathModulo,
    MathChange,
    Text,
    TextJoin,
    TextLength,
    TextPrint,
    VariablesGet,
    VariablesSet,
    ControlsIf,
    ControlsWhileUntil,
    ControlsRepeat,
    ControlsFor,
    ControlsFlow,
    ControlsTryRest,
    ProcedureDefinition { returns: bool },
    ProcedureCall { returns: bool },
    ProcedureIfReturn,
    ListsCreateWith,
    ListsLength,
    Unknown(String),
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> BlockKind {
        match tag {
            "logic_boolean" => BlockKind::LogicBoolean,
            "logic_null" => BlockKind::LogicNull,
            "logic_compare" => BlockKind::LogicCompare,
            "logic_operation" => BlockKind::LogicOperation,
            "logic_negate" => BlockKind::LogicNegate,
            "logic_ternary" => BlockKind::LogicTernary,
            "math_number" => BlockKind::MathNumber,
            "math_arithmetic" => BlockKind::MathArithmetic,
            "math_single" => BlockKind::MathSingle,
            "math_modulo" => BlockKind::MathModulo,
            "math_change" => BlockKind::MathChange,
            "text" => BlockKind::Text,
            "text_join" => BlockKind::TextJoin,
            "text_length" => BlockKind::TextLength,
            "text_print" => BlockKind::TextPrint,
            "variables_get" => BlockKind::VariablesGet,
            "variables_set" => BlockKind::VariablesSet,
            "controls_if" => BlockKind::ControlsIf,
            "controls_whileUntil" => BlockKind::ControlsWhileUntil,
            "controls_repeat_ext" | "controls_repeat" => BlockKind::ControlsRepeat,
            "controls_for" => BlockKind::ControlsFor,
            "controls_flow_statements" => BlockKind::ControlsFlow,
            "controls_try_rest" => BlockKind::ControlsTryRest,
            "procedures_defnoreturn" => BlockKind::ProcedureDefinition { returns: false },
            "procedures_defreturn" => BlockKind::ProcedureDefinition { returns: true },
            "procedures_callnoreturn" => BlockKind::ProcedureCall { returns: false },
            "procedures_callreturn" => BlockKind::ProcedureCall { returns: true },
            "procedures_ifreturn" => BlockKind::ProcedureIfReturn,
            "lists_create_with" => BlockKind::ListsCreateWith,
            "lists_length" => BlockKind::ListsLength,
            other => BlockKind::Unknown(other.to_string()),
        }
    }
}

/// Run the rule for `block`.
pub fn generate(ctx: &mut CompilationContext, block: &Block) -> Generated {
    match BlockKind::from_tag(&block.kind) {
        BlockKind::LogicBoolean => logic::boolean(block),
        BlockKind::LogicNull => Generated::Expression("null".to_string(), Order::ATOMIC),
        BlockKind::LogicCompare => logic::compare(ctx, block),
        BlockKind::LogicOperation => logic::operation(ctx, block),
        BlockKind::LogicNegate => logic::negate(ctx, block),
        BlockKind::LogicTernary => logic::ternary(ctx, block),
        BlockKind::MathNumber => math::number(block),
        BlockKind::MathArithmetic => math::arithmetic(ctx, block),
        BlockKind::MathSingle => math::single(ctx, block),
        BlockKind::MathModulo => math::modulo(ctx, block),
        BlockKind::MathChange => math::change(ctx, block),
        BlockKind::Text => text::literal(block),
        BlockKind::TextJoin => text::join(ctx, block),
        BlockKind::TextLength => text::length(ctx, block),
        BlockKind::TextPrint => text::print(ctx, block),
        BlockKind::VariablesGet => variables::get(ctx, block),
        BlockKind::VariablesSet => variables::set(ctx, block),
        BlockKind::ControlsIf => controls::if_else(ctx, block),
        BlockKind::ControlsWhileUntil => controls::while_until(ctx, block),
        BlockKind::ControlsRepeat => controls::repeat(ctx, block),
        BlockKind::ControlsFor => controls::for_range(ctx, block),
        BlockKind::ControlsFlow => controls::flow(block),
        BlockKind::ControlsTryRest => controls::try_rest(),
        BlockKind::ProcedureDefinition { returns } => procedures::definition(ctx, block, returns),
        BlockKind::ProcedureCall { returns } => procedures::call(ctx, block, returns),
        BlockKind::ProcedureIfReturn => procedures::if_return(ctx, block),
        BlockKind::ListsCreateWith => lists::create_with(ctx, block),
        BlockKind::ListsLength => lists::length(ctx, block),
        BlockKind::Unknown(tag) => {
            ctx.report(
                DiagnosticKind::UnsupportedBlock,
                Some(&block.id),
                format!("no Java rule for block type '{}'", tag),
            );
            Generated::Unsupported
        }
    }
}
