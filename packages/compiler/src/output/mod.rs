//! Output Module
//!
//! Turns blocks into Java text: precedence levels, the expression and
//! statement emitters, and the string helpers they share.

pub mod expression;
pub mod order;
pub mod source_text;
pub mod statement;
