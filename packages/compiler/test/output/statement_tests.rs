//! Statement Emitter Tests
//!
//! Chaining, nesting, comments, chain decorations and graceful degradation.

#[path = "../util/workspace_util.rs"]
mod workspace_util;
use workspace_util::*;

use blockly_java::{Block, DiagnosticKind, Workspace};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_emit_an_if_else_chain() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("if", "controls_if")
                    .value("IF0", "c0")
                    .statement("DO0", "a")
                    .value("IF1", "c1")
                    .statement("DO1", "b")
                    .statement("ELSE", "c"),
            )
            .with_block(boolean("c0", true))
            .with_block(boolean("c1", false))
            .with_block(print("a", "ta"))
            .with_block(print("b", "tb"))
            .with_block(print("c", "tc"))
            .with_block(text("ta", "a"))
            .with_block(text("tb", "b"))
            .with_block(text("tc", "c"))
            .with_top("if");
        assert_eq!(
            compile(&workspace).code,
            "if (true) {\n    System.out.println(\"a\");\n} else if (false) {\n    System.out.println(\"b\");\n} else {\n    System.out.println(\"c\");\n}\n"
        );
    }

    #[test]
    fn should_negate_an_until_condition() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("loop", "controls_whileUntil")
                    .field("MODE", "UNTIL")
                    .value("BOOL", "and")
                    .statement("DO", "stop"),
            )
            .with_block(
                Block::new("and", "logic_operation")
                    .with_output()
                    .field("OP", "AND")
                    .value("A", "t")
                    .value("B", "f"),
            )
            .with_block(boolean("t", true))
            .with_block(boolean("f", false))
            .with_block(Block::new("stop", "controls_flow_statements").field("FLOW", "BREAK"))
            .with_top("loop");
        assert_eq!(
            compile(&workspace).code,
            "while (!(true && false)) {\n    break;\n}\n"
        );
    }

    #[test]
    fn should_give_nested_repeat_loops_distinct_counters() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("outer", "controls_repeat_ext")
                    .value("TIMES", "three")
                    .statement("DO", "inner"),
            )
            .with_block(
                Block::new("inner", "controls_repeat_ext")
                    .value("TIMES", "two")
                    .statement("DO", "skip"),
            )
            .with_block(number("three", "3"))
            .with_block(number("two", "2"))
            .with_block(Block::new("skip", "controls_flow_statements").field("FLOW", "CONTINUE"))
            .with_top("outer");
        assert_eq!(
            compile(&workspace).code,
            "for (int count = 0; count < 3; count++) {\n    for (int count2 = 0; count2 < 2; count2++) {\n        continue;\n    }\n}\n"
        );
    }

    #[test]
    fn should_evaluate_a_computed_repeat_count_once() {
        let workspace = Workspace::new()
            .with_variable("n", Some("Number"))
            .with_block(Block::new("loop", "controls_repeat_ext").value("TIMES", "n"))
            .with_block(get("n", "n"))
            .with_top("loop");
        let code = compile(&workspace).code;
        assert_eq!(
            body(&code),
            "double count_end = n;\nfor (int count = 0; count < count_end; count++) {\n}\n"
        );
    }

    #[test]
    fn should_pick_the_for_direction_from_literal_bounds() {
        let up = Workspace::new()
            .with_variable("i", Some("Number"))
            .with_block(
                Block::new("for", "controls_for")
                    .field("VAR", "i")
                    .value("FROM", "one")
                    .value("TO", "ten")
                    .value("BY", "two"),
            )
            .with_block(number("one", "1"))
            .with_block(number("ten", "10"))
            .with_block(number("two", "2"))
            .with_top("for");
        assert_eq!(
            body(&compile(&up).code),
            "for (i = 1; i <= 10; i += 2) {\n}\n"
        );

        let down = Workspace::new()
            .with_variable("i", Some("Number"))
            .with_block(
                Block::new("for", "controls_for")
                    .field("VAR", "i")
                    .value("FROM", "ten")
                    .value("TO", "one"),
            )
            .with_block(number("one", "1"))
            .with_block(number("ten", "10"))
            .with_top("for");
        assert_eq!(
            body(&compile(&down).code),
            "for (i = 10; i >= 1; i -= 1) {\n}\n"
        );
    }

    #[test]
    fn should_wrap_the_rest_of_the_chain_in_try() {
        let workspace = Workspace::new()
            .with_block(print("first", "t1").next("try"))
            .with_block(Block::new("try", "controls_try_rest").next("second"))
            .with_block(print("second", "t2").next("third"))
            .with_block(print("third", "t3"))
            .with_block(text("t1", "a"))
            .with_block(text("t2", "b"))
            .with_block(text("t3", "c"))
            .with_top("first");
        assert_eq!(
            compile(&workspace).code,
            "System.out.println(\"a\");\ntry {\n    System.out.println(\"b\");\n    System.out.println(\"c\");\n} catch (Exception e) {\n    e.printStackTrace();\n}\n"
        );
    }

    #[test]
    fn should_prefix_comments() {
        let workspace = Workspace::new()
            .with_block(print("p", "t").comment("greet\nthe user"))
            .with_block(text("t", "hi"))
            .with_top("p");
        assert_eq!(
            compile(&workspace).code,
            "// greet\n// the user\nSystem.out.println(\"hi\");\n"
        );
    }

    #[test]
    fn should_not_leave_a_blank_line_after_a_newline_terminated_comment() {
        let workspace = Workspace::new()
            .with_block(print("p", "t").comment("note\n"))
            .with_block(text("t", "hi"))
            .with_top("p");
        assert_eq!(
            compile(&workspace).code,
            "// note\nSystem.out.println(\"hi\");\n"
        );
    }

    #[test]
    fn should_emit_a_very_long_chain() {
        const LENGTH: usize = 12_000;
        let workspace = (0..LENGTH)
            .map(|n| {
                let block =
                    Block::new(format!("b{}", n), "controls_flow_statements").field("FLOW", "BREAK");
                if n + 1 < LENGTH {
                    block.next(format!("b{}", n + 1))
                } else {
                    block
                }
            })
            .fold(Workspace::new(), Workspace::with_block)
            .with_top("b0");
        let compilation = compile(&workspace);
        assert_eq!(compilation.code, "break;\n".repeat(LENGTH));
        assert!(compilation.is_clean());
    }

    #[test]
    fn should_wrap_a_long_chain_after_try() {
        const LENGTH: usize = 5_000;
        let mut workspace = Workspace::new()
            .with_block(Block::new("try", "controls_try_rest").next("b0"))
            .with_top("try");
        for n in 0..LENGTH {
            let block = Block::new(format!("b{}", n), "controls_flow_statements").field("FLOW", "CONTINUE");
            workspace = workspace.with_block(if n + 1 < LENGTH {
                block.next(format!("b{}", n + 1))
            } else {
                block
            });
        }
        let code = compile(&workspace).code;
        assert!(code.starts_with("try {\n    continue;\n    continue;\n"));
        assert!(code.ends_with("    continue;\n} catch (Exception e) {\n    e.printStackTrace();\n}\n"));
        assert_eq!(code.matches("    continue;\n").count(), LENGTH);
    }

    #[test]
    fn should_lift_comments_of_value_blocks() {
        let workspace = Workspace::new()
            .with_block(print("p", "t"))
            .with_block(text("t", "hi").comment("inner"))
            .with_top("p");
        assert_eq!(
            compile(&workspace).code,
            "// inner\nSystem.out.println(\"hi\");\n"
        );
    }

    #[test]
    fn should_stub_unsupported_blocks_and_continue() {
        let mut blocks = vec![Block::new("turtle", "turtle_move").next("p")];
        blocks.extend(print_text("p", "still here"));
        let compilation = compile(&rooted("turtle", blocks));
        assert_eq!(
            compilation.code,
            "// Unsupported block: turtle_move\nSystem.out.println(\"still here\");\n"
        );
        assert_eq!(compilation.diagnostics.len(), 1);
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::UnsupportedBlock);
        assert_eq!(compilation.diagnostics[0].block_id.as_deref(), Some("turtle"));
    }

    #[test]
    fn should_leave_an_unsupported_value_empty() {
        let workspace = Workspace::new()
            .with_block(print("p", "odd"))
            .with_block(Block::new("odd", "colour_picker").with_output())
            .with_top("p");
        let compilation = compile(&workspace);
        assert_eq!(compilation.code, "System.out.println(\"\");\n");
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::UnsupportedBlock);
    }

    #[test]
    fn should_truncate_a_cyclic_chain() {
        let workspace = Workspace::new()
            .with_block(print("p1", "t1").next("p2"))
            .with_block(print("p2", "t2").next("p1"))
            .with_block(text("t1", "1"))
            .with_block(text("t2", "2"))
            .with_top("p1");
        let compilation = compile(&workspace);
        assert_eq!(
            compilation.code,
            "System.out.println(\"1\");\nSystem.out.println(\"2\");\n// chain truncated: block 'p1' repeats\n"
        );
        assert_eq!(compilation.diagnostics.len(), 1);
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::Cycle);
    }

    #[test]
    fn should_stop_at_a_value_cycle() {
        let workspace = Workspace::new()
            .with_block(Block::new("not", "logic_negate").with_output().value("BOOL", "not"))
            .with_top("not");
        let compilation = compile(&workspace);
        assert_eq!(compilation.code, "!true;\n");
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::Cycle);
    }

    #[test]
    fn should_treat_a_dangling_link_as_empty() {
        let workspace = Workspace::new()
            .with_block(print("p", "ghost"))
            .with_top("p");
        let compilation = compile(&workspace);
        assert_eq!(compilation.code, "System.out.println(\"\");\n");
        assert_eq!(compilation.diagnostics[0].kind, DiagnosticKind::MissingBlock);
        assert_eq!(compilation.diagnostics[0].block_id.as_deref(), Some("p"));
    }

    #[test]
    fn should_assign_through_the_var_wrapper() {
        let workspace = Workspace::new()
            .with_variable("x", Some("Number"))
            .with_variable("v", Some("Var"))
            .with_block(
                Block::new("set_x", "variables_set")
                    .field("VAR", "x")
                    .value("VALUE", "sum")
                    .next("set_v"),
            )
            .with_block(
                Block::new("set_v", "variables_set")
                    .field("VAR", "v")
                    .value("VALUE", "five")
                    .next("bump_x"),
            )
            .with_block(
                Block::new("bump_x", "math_change")
                    .field("VAR", "x")
                    .value("DELTA", "one")
                    .next("bump_v"),
            )
            .with_block(
                Block::new("bump_v", "math_change")
                    .field("VAR", "v")
                    .value("DELTA", "one"),
            )
            .with_block(arithmetic("sum", "ADD", "one", "two"))
            .with_block(number("one", "1"))
            .with_block(number("two", "2"))
            .with_block(number("five", "5"))
            .with_top("set_x");
        let code = compile(&workspace).code;
        assert!(code.contains(
            "\n\n\nx = 1 + 2;\nv = new Var(5);\nx += 1;\nv.set(v.getDouble() + 1);\n"
        ));
    }

    #[test]
    fn should_register_procedures_instead_of_emitting_them() {
        let mut blocks = vec![
            Block::new("def", "procedures_defnoreturn")
                .field("NAME", "greet")
                .statement("STACK", "p"),
            Block::new("call", "procedures_callnoreturn").field("NAME", "greet"),
        ];
        blocks.extend(print_text("p", "hi"));
        let workspace = blocks
            .into_iter()
            .fold(Workspace::new(), Workspace::with_block)
            .with_top("def")
            .with_top("call");
        assert_eq!(
            compile(&workspace).code,
            "public void greet() {\n    System.out.println(\"hi\");\n}\n\n\ngreet();\n"
        );
    }

    #[test]
    fn should_declare_typed_parameters_and_return_values() {
        let workspace = Workspace::new()
            .with_variable("n", Some("Number"))
            .with_block(
                Block::new("def", "procedures_defreturn")
                    .field("NAME", "double it")
                    .param("n")
                    .value("RETURN", "product"),
            )
            .with_block(arithmetic("product", "MULTIPLY", "g", "two"))
            .with_block(get("g", "n"))
            .with_block(number("two", "2"))
            .with_top("def");
        let code = compile(&workspace).code;
        assert!(code.contains("public Object double_it(double n) {\n    return n * 2;\n}"));
    }

    #[test]
    fn should_lift_comments_from_a_returned_value() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("def", "procedures_defreturn")
                    .field("NAME", "f")
                    .comment("answers")
                    .value("RETURN", "one"),
            )
            .with_block(number("one", "1").comment("the answer"))
            .with_top("def");
        assert_eq!(
            compile(&workspace).code,
            "// answers\n// the answer\npublic Object f() {\n    return 1;\n}\n\n\n"
        );
    }

    #[test]
    fn should_fall_back_to_zero_for_an_unreadable_repeat_count() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("loop", "controls_repeat")
                    .field("TIMES", "")
                    .statement("DO", "stop"),
            )
            .with_block(Block::new("stop", "controls_flow_statements").field("FLOW", "BREAK"))
            .with_top("loop");
        assert_eq!(
            compile(&workspace).code,
            "for (int count = 0; count < 0; count++) {\n    break;\n}\n"
        );
    }

    #[test]
    fn should_emit_an_early_return() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("ret", "procedures_ifreturn")
                    .value("CONDITION", "t")
                    .input("VALUE", blockly_java::InputKind::Value, None),
            )
            .with_block(boolean("t", true))
            .with_top("ret");
        assert_eq!(
            compile(&workspace).code,
            "if (true) {\n    return null;\n}\n"
        );

        let workspace = Workspace::new()
            .with_block(Block::new("ret", "procedures_ifreturn").value("CONDITION", "t"))
            .with_block(boolean("t", true))
            .with_top("ret");
        assert_eq!(compile(&workspace).code, "if (true) {\n    return;\n}\n");
    }

    #[test]
    fn should_build_lists() {
        let workspace = Workspace::new()
            .with_block(
                Block::new("len", "lists_length")
                    .with_output()
                    .value("VALUE", "list"),
            )
            .with_block(
                Block::new("list", "lists_create_with")
                    .with_output()
                    .value("ADD0", "one")
                    .value("ADD1", "two"),
            )
            .with_block(number("one", "1"))
            .with_block(number("two", "2"))
            .with_top("len");
        assert_eq!(
            compile(&workspace).code,
            "import java.util.Arrays;\nimport java.util.LinkedList;\n\nnew LinkedList<>(Arrays.asList(1, 2)).size();\n"
        );
    }
}
