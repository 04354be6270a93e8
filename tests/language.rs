use std::fs;
use std::io;

use lume::interpreter::lexer::core::tokenize;
use lume::interpreter::lexer::token::TokenKind;
use lume::run_script;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in WalkDir::new("demos")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "lm"))
    {
        let path = entry.path();
        let source = fs::read(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut input = io::empty();
        let mut output = Vec::new();
        let code = run_script(
            &source,
            &path.display().to_string(),
            &mut input,
            &mut output,
            false,
        );
        assert_eq!(
            code,
            0,
            "demo {path:?} failed:\n{}",
            String::from_utf8_lossy(&output)
        );
    }

    assert!(count > 0, "No demo scripts found under demos/");
}

fn run(source: &str) -> (i32, String) {
    run_with_input(source, "")
}

fn run_with_input(source: &str, input: &str) -> (i32, String) {
    let mut input = io::Cursor::new(input);
    let mut output = Vec::new();
    let code = run_script(source.as_bytes(), "test.lm", &mut input, &mut output, false);
    (code, String::from_utf8_lossy(&output).into_owned())
}

fn assert_prints(source: &str, expected: &str) {
    let (code, output) = run(source);
    assert_eq!(output, expected, "script: {source}");
    assert_eq!(code, 0, "script: {source}");
}

fn assert_exit_code(source: &str, expected: i32) {
    let (code, output) = run(source);
    assert_eq!(code, expected, "script: {source}\noutput: {output}");
}

fn assert_error(source: &str, needle: &str) {
    let (code, output) = run(source);
    assert_eq!(code, 1, "script: {source}\noutput: {output}");
    assert!(
        output.contains(needle),
        "missing '{needle}' in output of {source}:\n{output}"
    );
}

#[test]
fn final_integer_becomes_the_exit_code() {
    assert_exit_code("var x = 2; var y = 3; return x + y;", 5);
    assert_exit_code("fn add(a, b) { return a + b; } return add(2, 3);", 5);
    assert_exit_code("2 + 2;", 4);
    assert_exit_code("return 0;", 0);
    assert_exit_code("return -1;", -1);
}

#[test]
fn exit_codes_truncate_wide_integers() {
    assert_exit_code("return 4294967296 + 5;", 5);
}

#[test]
fn non_integer_results_exit_zero() {
    assert_exit_code("return 1.5;", 0);
    assert_exit_code("return \"done\";", 0);
    assert_exit_code("return true;", 0);
    assert_exit_code("return;", 0);
    assert_exit_code("var x = 9;", 0);
    assert_exit_code("fn f() { return 1; }", 0);
}

#[test]
fn top_level_return_does_not_halt_the_program() {
    assert_prints("return 1; print(\"after\");", "after");
    assert_exit_code("return 1; return 2;", 2);
}

#[test]
fn print_value_forms() {
    assert_prints("print(42);", "42\n");
    assert_prints("print(1.5);", "1.500000\n");
    assert_prints("print(true); print(false);", "true\nfalse\n");
    assert_prints("print(null);", "null\n");
    assert_prints("print(\"bare\");", "bare");
    assert_prints("fn f() { return 0; } print(f);", "<fn f>");
    assert_prints("print(print);", "<builtin print>");
}

#[test]
fn print_separates_arguments_with_spaces() {
    assert_prints("print(\"x =\", 3);", "x = 3\n");
    assert_prints("print(1, 2);", "1\n 2\n");
    assert_prints("print();", "");
}

#[test]
fn integer_arithmetic_stays_integral() {
    assert_prints("print(2 + 3 * 4);", "14\n");
    assert_prints("print((2 + 3) * 4);", "20\n");
    assert_prints("print(7 / 2);", "3\n");
    assert_prints("print(7 % 3);", "1\n");
}

#[test]
fn floating_operands_promote_results() {
    assert_prints("print(7 / 2.0);", "3.500000\n");
    assert_prints("print(1.5 + 1);", "2.500000\n");
    assert_prints("print(1.0 / 3.0);", "0.333333\n");
    assert_prints("print(7.5 % 2);", "1.500000\n");
}

#[test]
fn integer_overflow_wraps() {
    assert_prints("print(9223372036854775807 + 1);", "-9223372036854775808\n");
    assert_prints("print(0 - 9223372036854775807 - 1);", "-9223372036854775808\n");
}

#[test]
fn oversized_literals_saturate() {
    assert_prints("print(9223372036854775808);", "9223372036854775807\n");
}

#[test]
fn division_and_modulo_by_zero_error() {
    assert_error("return 5 / 0;", "Division by zero");
    assert_error("return 5 % 0;", "Modulo by zero");
    assert_error("return 5.0 / 0.0;", "Division by zero");
    assert_error("return 5 / 0.0;", "Division by zero");
    assert_error("return 7.5 % 0;", "Modulo by zero");
}

#[test]
fn bitwise_operators_work_on_integers() {
    assert_prints("print(12 & 10);", "8\n");
    assert_prints("print(12 | 10);", "14\n");
    assert_prints("print(12 ^ 10);", "6\n");
    assert_prints("print(1 << 4);", "16\n");
    assert_prints("print(256 >> 4);", "16\n");
    assert_prints("print(~0);", "-1\n");
}

#[test]
fn shift_counts_wrap_at_the_word_size() {
    assert_prints("print(1 << 64);", "1\n");
}

#[test]
fn bitwise_operators_reject_floats() {
    assert_error("return 1.0 & 2;", "Incompatible operand types");
    assert_error("return 1 << 2.0;", "Incompatible operand types for shift");
    assert_error("return ~1.5;", "Incompatible operand types");
}

#[test]
fn comparisons_and_equality() {
    assert_prints("print(2 < 3);", "true\n");
    assert_prints("print(2 >= 3);", "false\n");
    assert_prints("print(1 != 2);", "true\n");
    assert_prints("print(2 == 2.0);", "true\n");
    assert_prints("print(1.5 < 2);", "true\n");
}

#[test]
fn string_equality_compares_bytes() {
    assert_prints("print(\"ab\" == \"ab\");", "true\n");
    assert_prints("print(\"ab\" == \"a\" + \"b\");", "true\n");
    assert_prints("print(\"ab\" != \"ac\");", "true\n");
}

#[test]
fn equality_on_unsupported_types_errors() {
    assert_error("return true == true;", "Incompatible operand types");
    assert_error("return null == null;", "Incompatible operand types");
}

#[test]
fn ordering_is_numeric_only() {
    assert_error("return \"a\" < \"b\";", "Incompatible operand types for comparison");
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_prints(
        "fn noisy(v) { print(v); return v; } return noisy(0) and noisy(1);",
        "0\n1\n",
    );
    assert_prints(
        "fn noisy(v) { print(v); return v; } print(noisy(1) or noisy(0));",
        "1\n0\ntrue\n",
    );
}

#[test]
fn word_operators_alias_symbols() {
    assert_prints("print(1 and 0);", "false\n");
    assert_prints("print(1 or 0);", "true\n");
    assert_error("return not true;", "Incompatible operand types");
}

#[test]
fn unary_operators() {
    assert_prints("print(-5);", "-5\n");
    assert_prints("print(+5);", "5\n");
    assert_prints("print(-2.5);", "-2.500000\n");
    assert_error("return -\"s\";", "Incompatible operand types");
    assert_error("return !1;", "Incompatible operand types");
}

#[test]
fn conditions_coerce_truthiness() {
    assert_prints("if (1) { print(\"yes\"); }", "yes");
    assert_prints("if (0) { print(\"then\"); } else { print(\"else\"); }", "else");
    assert_prints("if (\"\") { } else { print(\"empty\"); }", "empty");
    assert_prints("if (\"x\") { print(\"nonempty\"); }", "nonempty");
    assert_prints("if (null) { } else { print(\"nope\"); }", "nope");
    assert_prints("if (0.0) { } else { print(\"zero\"); }", "zero");
}

#[test]
fn functions_cannot_be_conditions() {
    assert_error(
        "fn f() { return 0; } if (f) { return 1; }",
        "cannot be used as a condition",
    );
    assert_error("return 1 and print;", "cannot be used as a condition");
}

#[test]
fn block_scopes_shadow_and_expire() {
    assert_prints("var x = 1; { var x = 2; print(x); } print(x);", "2\n1\n");
    assert_error("{ var inner = 1; } return inner;", "Undefined reference 'inner'");
}

#[test]
fn assignment_reaches_enclosing_scopes() {
    assert_prints("var x = 1; { x = 5; } print(x);", "5\n");
    assert_prints("var x = 1; x = x + 1; print(x);", "2\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_prints("var x = 0; var y = 0; x = y = 7; print(x, y);", "7\n 7\n");
    assert_error("x = 1;", "Undefined reference 'x'");
}

#[test]
fn declarations_without_initializers_default_to_null() {
    assert_prints("var x; print(x);", "null\n");
}

#[test]
fn user_functions_return_values() {
    assert_prints(
        "fn greet(name) { print(\"hi \" + name); } greet(\"lume\");",
        "hi lume",
    );
    assert_exit_code("fn double(n) { return n * 2; } return double(21);", 42);
}

#[test]
fn conditional_function_bodies_support_recursion() {
    assert_exit_code(
        "fn fact(n) if (n <= 1) { return 1; } else { return n * fact(n - 1); } return fact(5);",
        120,
    );
}

#[test]
fn if_statements_absorb_returns_from_their_branches() {
    assert_exit_code("if (0) { return 1; } else { return 2; }", 2);
    assert_exit_code("fn f(n) { if (n) { return 10; } return 20; } return f(1);", 20);
}

#[test]
fn parameters_shadow_caller_bindings() {
    assert_prints(
        "var n = 1; fn show(n) { print(n); } show(42); print(n);",
        "42\n1\n",
    );
}

#[test]
fn call_scopes_chain_to_the_caller() {
    assert_prints(
        "fn show() { print(hidden); } fn wrap() { var hidden = 7; show(); } wrap();",
        "7\n",
    );
}

#[test]
fn functions_declared_in_blocks_are_local() {
    assert_exit_code(
        "fn outer() { fn inner() { return 2; } return inner(); } return outer();",
        2,
    );
    assert_error(
        "fn outer() { fn inner() { return 2; } return 0; } outer(); return inner();",
        "Undefined reference 'inner'",
    );
}

#[test]
fn arguments_evaluate_left_to_right() {
    assert_prints(
        "fn tap(v) { print(v); return v; } fn add(a, b) { return a + b; } print(add(tap(1), tap(2)));",
        "1\n2\n3\n",
    );
}

#[test]
fn call_errors() {
    assert_error(
        "fn add(a, b) { return a + b; } return add(1);",
        "Expected 2 arguments, found 1",
    );
    assert_error("var x = 3; return x();", "not callable");
    assert_error("return length(42);", "Expected a string argument");
    assert_error("return length();", "Expected 1 arguments, found 0");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_prints("var length = 5; print(length);", "5\n");

    let (code, output) = run("fn print(x) { return x; } return print(1);");
    assert_eq!(output, "");
    assert_eq!(code, 1);
}

#[test]
fn length_counts_raw_bytes() {
    assert_prints("print(length(\"abc\"));", "3\n");
    assert_prints(r#"print(length("a\n"));"#, "3\n");
    assert_prints("print(length(\"\"));", "0\n");
}

#[test]
fn string_escapes_cook_only_at_print_time() {
    assert_prints(r#"print("a\tb\n");"#, "a\tb\n");
    assert_prints(r#"print("a\qb");"#, "aqb");
}

#[test]
fn input_reads_one_line() {
    let (code, output) = run_with_input(
        r#"var name = input("? "); print("hi " + name + "\n");"#,
        "lume\n",
    );
    assert_eq!(output, "? hi lume\n");
    assert_eq!(code, 0);
}

#[test]
fn input_strips_carriage_returns() {
    let (_, output) = run_with_input("print(input());", "win\r\n");
    assert_eq!(output, "win");
}

#[test]
fn input_returns_null_at_end_of_stream() {
    let (code, output) = run_with_input("print(input());", "");
    assert_eq!(output, "null\n");
    assert_eq!(code, 0);
}

#[test]
fn input_consumes_the_stream_line_by_line() {
    let (_, output) = run_with_input("var a = input(); var b = input(); print(a + b);", "x\ny\n");
    assert_eq!(output, "xy");
}

#[test]
fn numeric_literal_notations() {
    assert_prints("print(0x1f);", "31\n");
    assert_prints("print(0755);", "493\n");
    assert_prints("print(0);", "0\n");
    assert_prints("print(1.5e2);", "150.000000\n");
    assert_prints("print(2.5e-1);", "0.250000\n");
}

#[test]
fn numeric_literals_scan_like_strtoll() {
    let (tokens, errors) = tokenize(b"08 0x1f 0755 1e5 1.5e+");
    assert!(errors.is_empty());

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Identifier,
            TokenKind::Float,
            TokenKind::Identifier,
            TokenKind::Plus,
        ]
    );
}

#[test]
fn tokens_track_lines_and_columns() {
    let (tokens, errors) = tokenize(b"var x = 1;\n  x = 2;");
    assert!(errors.is_empty());
    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[5].line, tokens[5].column), (2, 3));
}

#[test]
fn syntax_errors_are_reported() {
    assert_error("var x = 1 print(x);", "Expected ';' after declaration");
    assert_error("print(1) print(2);", "Expected ';' after expression");
    assert_error("var x = 1", "Unexpected end of input");
    assert_error("{ var x = 1;", "Unclosed block");
    assert_error("while (1) { }", "While loops are not implemented");
    assert_error("1 = 2;", "Assignment target must be an identifier");
    assert_error("fn f(1) { return 0; }", "Function parameters must be plain identifiers");
    assert_error("var = 1;", "Expected an identifier after 'var'");
    assert_error("return 1 +;", "Expected an expression");
}

#[test]
fn empty_and_comment_only_sources_are_rejected() {
    assert_error("", "Source file is empty");
    assert_error("# just a comment\n", "contains no statements");
}

#[test]
fn unterminated_strings_are_fatal() {
    assert_error("print(\"oops;", "Unterminated string");
}

#[test]
fn unknown_characters_are_reported_and_skipped() {
    let (code, output) = run("var x@ = 1; print(x);");
    assert_eq!(code, 0);
    assert!(output.contains("Unknown character"));
    assert!(output.ends_with("1\n"));
}

#[test]
fn diagnostics_carry_line_numbers() {
    assert_error("var a = 1;\nreturn b;", "Error on line 2: Undefined reference 'b'");
}
