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
fn array_literal_evaluates_each_element() {
    let result = eval("[1, 2 * 2, 3 + 3]");
    match result.as_ref() {
        Value::Array(elements) => {
            assert_eq!(
                elements.iter().map(|e| e.as_ref()).collect::<Vec<_>>(),
                vec![&Value::Integer(1), &Value::Integer(4), &Value::Integer(6)]
            );
        }
        other => panic!("expected array, got {other}"),
    }
}

#[test]
fn array_indexing() {
    assert_eq!(*eval("[1, 2, 3][0]"), Value::Integer(1));
    assert_eq!(*eval("[1, 2, 3][1]"), Value::Integer(2));
    assert_eq!(*eval("let i = 0; [1][i];"), Value::Integer(1));
    assert_eq!(*eval("[1, 2, 3][3]"), Value::Null);
    assert_eq!(*eval("[1, 2, 3][-1]"), Value::Null);
}

#[test]
fn hash_literal_preserves_insertion_order_in_display() {
    let result = eval(r#"{"one": 1, "two": 2, "three": 3}"#);
    assert_eq!(result.to_string(), "{one: 1, two: 2, three: 3}");
}

#[test]
fn hash_indexing_by_computed_key() {
    assert_eq!(*eval(r#"{"foo": 5}["foo"]"#), Value::Integer(5));
    assert_eq!(*eval(r#"let key = "foo"; {"foo": 5}[key];"#), Value::Integer(5));
    assert_eq!(*eval(r#"{}["foo"]"#), Value::Null);
    assert_eq!(*eval("{5: 5}[5]"), Value::Integer(5));
    assert_eq!(*eval("{true: 5}[true]"), Value::Integer(5));
    assert_eq!(*eval("{false: 5}[false]"), Value::Integer(5));
}

#[test]
fn unhashable_key_is_an_error() {
    assert_eq!(
        *eval(r#"{"name": "Monkey"}[fn(x) { x }]"#),
        Value::Error("unusable as hash key: FUNCTION".into())
    );
}

#[test]
fn builtin_array_helpers_compose() {
    let input = r#"
        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))));
                }
            };
            iter(arr, []);
        };
        let double = fn(x) { x * 2 };
        map([1, 2, 3, 4], double);
    "#;
    let result = eval(input);
    assert_eq!(result.to_string(), "[2, 4, 6, 8]");
}
