//! Expression Emitter Tests
//!
//! Precedence-aware parenthesization and string conversion.

#[path = "../util/workspace_util.rs"]
mod workspace_util;
use workspace_util::*;

use blockly_java::{Block, DiagnosticKind, Workspace};

fn numbers_workspace() -> Workspace {
    Workspace::new()
        .with_variable("a", Some("Number"))
        .with_variable("b", Some("Number"))
        .with_variable("c", Some("Number"))
        .with_block(get("a", "a"))
        .with_block(get("b", "b"))
        .with_block(get("c", "c"))
}

fn emit(workspace: Workspace, root: &str) -> String {
    let compilation = compile(&workspace.with_top(root));
    body(&compilation.code).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parenthesize_a_looser_operand() {
        let workspace = numbers_workspace()
            .with_block(arithmetic("sum", "ADD", "a", "b"))
            .with_block(arithmetic("product", "MULTIPLY", "sum", "c"))
            .with_top("product");
        let compilation = compile(&workspace);
        assert_eq!(
            compilation.code,
            "protected double a;\nprotected double b;\nprotected double c;\n\n\n(a + b) * c;\n"
        );
        assert!(compilation.is_clean());
    }

    #[test]
    fn should_not_parenthesize_a_tighter_operand() {
        let workspace = numbers_workspace()
            .with_block(arithmetic("product", "MULTIPLY", "b", "c"))
            .with_block(arithmetic("sum", "ADD", "a", "product"));
        assert_eq!(emit(workspace, "sum"), "a + b * c;\n");
    }

    #[test]
    fn should_keep_parentheses_on_the_right_of_non_associative_operators() {
        let workspace = numbers_workspace()
            .with_block(arithmetic("sum", "ADD", "b", "c"))
            .with_block(arithmetic("difference", "MINUS", "a", "sum"));
        assert_eq!(emit(workspace, "difference"), "a - (b + c);\n");

        let workspace = numbers_workspace()
            .with_block(arithmetic("product", "MULTIPLY", "b", "c"))
            .with_block(arithmetic("quotient", "DIVIDE", "a", "product"));
        assert_eq!(emit(workspace, "quotient"), "a / (b * c);\n");
    }

    #[test]
    fn should_chain_left_nested_operators_without_parentheses() {
        let workspace = numbers_workspace()
            .with_block(arithmetic("left", "MINUS", "a", "b"))
            .with_block(arithmetic("outer", "MINUS", "left", "c"));
        assert_eq!(emit(workspace, "outer"), "a - b - c;\n");
    }

    #[test]
    fn should_emit_power_as_a_call() {
        let workspace = Workspace::new()
            .with_block(number("two", "2"))
            .with_block(number("three", "3"))
            .with_block(arithmetic("power", "POWER", "two", "three"));
        assert_eq!(emit(workspace, "power"), "Math.pow(2, 3);\n");
    }

    #[test]
    fn should_separate_double_negation() {
        let workspace = Workspace::new()
            .with_block(number("n", "-3"))
            .with_block(
                Block::new("neg", "math_single")
                    .with_output()
                    .field("OP", "NEG")
                    .value("NUM", "n"),
            );
        assert_eq!(emit(workspace, "neg"), "- -3;\n");
    }

    #[test]
    fn should_wrap_a_ternary_used_as_a_condition() {
        let inner = Block::new("inner", "logic_ternary")
            .with_output()
            .value("IF", "t")
            .value("THEN", "f")
            .value("ELSE", "t2");
        let outer = Block::new("outer", "logic_ternary")
            .with_output()
            .value("IF", "inner")
            .value("THEN", "one")
            .value("ELSE", "two");
        let workspace = Workspace::new()
            .with_block(boolean("t", true))
            .with_block(boolean("f", false))
            .with_block(boolean("t2", true))
            .with_block(number("one", "1"))
            .with_block(number("two", "2"))
            .with_block(inner)
            .with_block(outer);
        assert_eq!(emit(workspace, "outer"), "(true ? false : true) ? 1 : 2;\n");
    }

    #[test]
    fn should_fill_missing_logic_operands() {
        let both_missing = Block::new("and", "logic_operation").with_output().field("OP", "AND");
        assert_eq!(
            emit(Workspace::new().with_block(both_missing), "and"),
            "false && false;\n"
        );

        let one_missing = Block::new("or", "logic_operation")
            .with_output()
            .field("OP", "OR")
            .value("A", "t");
        let workspace = Workspace::new().with_block(boolean("t", true)).with_block(one_missing);
        assert_eq!(emit(workspace, "or"), "true || false;\n");
    }

    #[test]
    fn should_parenthesize_a_negated_comparison() {
        let compare = Block::new("eq", "logic_compare")
            .with_output()
            .field("OP", "EQ")
            .value("A", "one")
            .value("B", "two");
        let negate = Block::new("not", "logic_negate").with_output().value("BOOL", "eq");
        let workspace = Workspace::new()
            .with_block(number("one", "1"))
            .with_block(number("two", "2"))
            .with_block(compare)
            .with_block(negate);
        assert_eq!(emit(workspace, "not"), "!(1 == 2);\n");

        let empty = Block::new("not", "logic_negate").with_output();
        assert_eq!(emit(Workspace::new().with_block(empty), "not"), "!true;\n");
    }

    #[test]
    fn should_emit_numbers_beyond_int_range_as_doubles() {
        let workspace = Workspace::new()
            .with_block(number("big", "10000000000"))
            .with_block(number("max", "2147483647"));
        assert_eq!(emit(workspace.clone(), "big"), "10000000000.0;\n");
        assert_eq!(emit(workspace, "max"), "2147483647;\n");
    }

    #[test]
    fn should_quote_numbers_joined_into_text() {
        let join = Block::new("join", "text_join")
            .with_output()
            .value("ADD0", "label")
            .value("ADD1", "five");
        let workspace = Workspace::new()
            .with_block(text("label", "n = "))
            .with_block(number("five", "5"))
            .with_block(join);
        assert_eq!(emit(workspace, "join"), "\"n = \" + \"5\";\n");
    }

    #[test]
    fn should_parenthesize_a_join_before_length() {
        let join = Block::new("join", "text_join")
            .with_output()
            .value("ADD0", "x")
            .value("ADD1", "y");
        let length = Block::new("len", "text_length").with_output().value("VALUE", "join");
        let workspace = Workspace::new()
            .with_block(text("x", "a"))
            .with_block(text("y", "b"))
            .with_block(join)
            .with_block(length);
        assert_eq!(emit(workspace, "len"), "(\"a\" + \"b\").length();\n");
    }

    #[test]
    fn should_define_the_conversion_helper_once() {
        let workspace = Workspace::new()
            .with_variable("flag", Some("Boolean"))
            .with_block(print("p1", "g1").next("p2"))
            .with_block(print("p2", "g2").next("p3"))
            .with_block(print("p3", "g3"))
            .with_block(get("g1", "flag"))
            .with_block(get("g2", "flag"))
            .with_block(get("g3", "flag"))
            .with_top("p1");
        let code = compile(&workspace).code;

        assert_eq!(code.matches("public static String blocklyToString(").count(), 1);
        assert_eq!(code.matches("System.out.println(blocklyToString(flag));").count(), 3);
        assert!(code.starts_with("import java.text.DecimalFormat;\nimport java.text.NumberFormat;\n\n"));
        assert!(!code.contains("{{FUNCTION_NAME}}"));
    }

    #[test]
    fn should_rename_the_helper_around_a_user_variable() {
        let workspace = Workspace::new()
            .with_variable("blocklyToString", Some("Number"))
            .with_block(get("g", "blocklyToString"))
            .with_block(print("p", "g"))
            .with_top("p");
        let code = compile(&workspace).code;
        assert!(code.contains("protected double blocklyToString;"));
        assert!(code.contains("public static String blocklyToString2(Object object) {"));
        assert!(code.contains("System.out.println(blocklyToString2(blocklyToString));"));
    }

    #[test]
    fn should_convert_var_and_string_variables_directly() {
        let workspace = Workspace::new()
            .with_variable("v", Some("Var"))
            .with_variable("s", Some("String"))
            .with_block(print("p1", "gv").next("p2"))
            .with_block(print("p2", "gs"))
            .with_block(get("gv", "v"))
            .with_block(get("gs", "s"))
            .with_top("p1");
        let code = compile(&workspace).code;
        assert!(code.contains("System.out.println(v.toString());\nSystem.out.println(s);\n"));
        assert!(code.contains("protected Var v = new Var(0);"));
        assert!(code.contains("protected String s = \"\";"));
        assert!(code.contains("class Var {"));
        assert!(!code.contains("blocklyToString"));
    }

    #[test]
    fn should_report_a_statement_in_a_value_socket() {
        let workspace = Workspace::new()
            .with_block(print("p", "inner"))
            .with_block(Block::new("inner", "controls_flow_statements").field("FLOW", "BREAK"))
            .with_top("p");
        let compilation = compile(&workspace);
        assert_eq!(compilation.code, "System.out.println(\"\");\n");
        assert_eq!(compilation.diagnostics.len(), 1);
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::MisplacedStatement);
    }
}
