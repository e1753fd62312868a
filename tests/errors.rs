use std::rc::Rc;

use wisp_lang::evaluator::Evaluator;
use wisp_lang::lexer::Lexer;
use wisp_lang::object::{Environment, Value};
use wisp_lang::parser::Parser;

fn eval(input: &str) -> Rc<Value> {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(), "{:?}", parser.errors());
    let evaluator = Evaluator::new();
    let env = Environment::new();
    evaluator.eval_program(&program, &env)
}

#[test]
fn error_messages_match_the_documented_contract() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
    ];

    for (input, expected) in cases {
        assert_eq!(*eval(input), Value::Error(expected.into()), "input: {input}");
    }
}

#[test]
fn an_error_short_circuits_the_surrounding_expression() {
    let input = "let a = 5 + true; a + 1;";
    assert_eq!(
        *eval(input),
        Value::Error("type mismatch: INTEGER + BOOLEAN".into())
    );
}

#[test]
fn errors_returned_from_functions_propagate_to_the_caller() {
    let input = "let f = fn() { 1 + true }; f() + 1;";
    assert_eq!(
        *eval(input),
        Value::Error("type mismatch: INTEGER + BOOLEAN".into())
    );
}

#[test]
fn parser_accumulates_multiple_errors_without_aborting() {
    let mut parser = Parser::new(Lexer::new("let x 5; let = 10; let y = ;"));
    parser.parse_program();
    assert!(parser.errors().len() >= 2);
}
