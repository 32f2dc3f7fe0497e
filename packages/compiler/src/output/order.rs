//! Operator Precedence
//!
//! Java precedence levels used to decide when a sub-expression must be
//! parenthesized. Lower values bind tighter. A child is wrapped when its own
//! level is numerically greater than the level its operand position allows.

use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(pub u8);

impl Order {
    /// `0` `""` identifiers
    pub const ATOMIC: Order = Order(0);
    /// array and collection literals
    pub const COLLECTION: Order = Order(1);
    /// `.` `[]`
    pub const MEMBER: Order = Order(2);
    /// `()`
    pub const FUNCTION_CALL: Order = Order(2);
    /// `expr++` `expr--`
    pub const POSTFIX: Order = Order(3);
    pub const EXPONENTIATION: Order = Order(3);
    /// `!`
    pub const LOGICAL_NOT: Order = Order(3);
    /// `++expr` `--expr` `+expr` `-expr` `~`
    pub const UNARY_SIGN: Order = Order(4);
    /// `*` `/` `%`
    pub const MULTIPLICATIVE: Order = Order(5);
    /// `+` `-`
    pub const ADDITIVE: Order = Order(6);
    /// `<<` `>>` `>>>`
    pub const BITWISE_SHIFT: Order = Order(7);
    /// `<` `>` `<=` `>=` `instanceof`
    pub const RELATIONAL: Order = Order(8);
    /// `==` `!=`
    pub const EQUALITY: Order = Order(9);
    pub const BITWISE_AND: Order = Order(10);
    pub const BITWISE_XOR: Order = Order(11);
    pub const BITWISE_OR: Order = Order(12);
    pub const LOGICAL_AND: Order = Order(13);
    pub const LOGICAL_OR: Order = Order(14);
    /// `?:`
    pub const CONDITIONAL: Order = Order(15);
    /// `=` `+=` `-=` and friends
    pub const ASSIGNMENT: Order = Order(16);
    /// Fully parenthesized context; nothing needs wrapping.
    pub const NONE: Order = Order(99);

    /// Whether an expression at this level must be wrapped to sit in an
    /// operand position that allows at most `outer`.
    pub fn needs_parens(self, outer: Order) -> bool {
        self > outer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Equals,
    NotEquals,
    Lower,
    LowerEquals,
    Bigger,
    BiggerEquals,
    And,
    Or,
}

/// Rendering of one binary operator: its symbol, its own level, and the
/// level each operand position allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub symbol: &'static str,
    pub order: Order,
    pub lhs: Order,
    pub rhs: Order,
}

const fn info(symbol: &'static str, order: Order, lhs: Order, rhs: Order) -> OperatorInfo {
    OperatorInfo {
        symbol,
        order,
        lhs,
        rhs,
    }
}

lazy_static! {
    // Non-associative operators tighten their right operand so that
    // `a - (b - c)` and `a / (b * c)` keep their parentheses; comparisons
    // tighten both sides because chaining them is not valid Java.
    pub static ref BINARY_OPERATORS: HashMap<BinaryOperator, OperatorInfo> = {
        let mut m = HashMap::new();
        m.insert(BinaryOperator::Plus, info("+", Order::ADDITIVE, Order::ADDITIVE, Order::ADDITIVE));
        m.insert(BinaryOperator::Minus, info("-", Order::ADDITIVE, Order::ADDITIVE, Order::MULTIPLICATIVE));
        m.insert(BinaryOperator::Multiply, info("*", Order::MULTIPLICATIVE, Order::MULTIPLICATIVE, Order::MULTIPLICATIVE));
        m.insert(BinaryOperator::Divide, info("/", Order::MULTIPLICATIVE, Order::MULTIPLICATIVE, Order::UNARY_SIGN));
        m.insert(BinaryOperator::Modulo, info("%", Order::MULTIPLICATIVE, Order::MULTIPLICATIVE, Order::UNARY_SIGN));
        m.insert(BinaryOperator::Equals, info("==", Order::EQUALITY, Order::RELATIONAL, Order::RELATIONAL));
        m.insert(BinaryOperator::NotEquals, info("!=", Order::EQUALITY, Order::RELATIONAL, Order::RELATIONAL));
        m.insert(BinaryOperator::Lower, info("<", Order::RELATIONAL, Order::BITWISE_SHIFT, Order::BITWISE_SHIFT));
        m.insert(BinaryOperator::LowerEquals, info("<=", Order::RELATIONAL, Order::BITWISE_SHIFT, Order::BITWISE_SHIFT));
        m.insert(BinaryOperator::Bigger, info(">", Order::RELATIONAL, Order::BITWISE_SHIFT, Order::BITWISE_SHIFT));
        m.insert(BinaryOperator::BiggerEquals, info(">=", Order::RELATIONAL, Order::BITWISE_SHIFT, Order::BITWISE_SHIFT));
        m.insert(BinaryOperator::And, info("&&", Order::LOGICAL_AND, Order::LOGICAL_AND, Order::LOGICAL_AND));
        m.insert(BinaryOperator::Or, info("||", Order::LOGICAL_OR, Order::LOGICAL_OR, Order::LOGICAL_OR));
        m
    };
}

impl BinaryOperator {
    pub fn info(self) -> OperatorInfo {
        BINARY_OPERATORS[&self]
    }

    /// Operator named by a block's `OP` dropdown value.
    pub fn from_field(op: &str) -> Option<BinaryOperator> {
        let operator = match op {
            "ADD" => BinaryOperator::Plus,
            "MINUS" => BinaryOperator::Minus,
            "MULTIPLY" => BinaryOperator::Multiply,
            "DIVIDE" => BinaryOperator::Divide,
            "EQ" => BinaryOperator::Equals,
            "NEQ" => BinaryOperator::NotEquals,
            "LT" => BinaryOperator::Lower,
            "LTE" => BinaryOperator::LowerEquals,
            "GT" => BinaryOperator::Bigger,
            "GTE" => BinaryOperator::BiggerEquals,
            "AND" => BinaryOperator::And,
            "OR" => BinaryOperator::Or,
            _ => return None,
        };
        Some(operator)
    }
}
