use std::rc::Rc;

use crate::object::{BuiltinFn, Value};

/// The fixed set of host-provided functions available to every environment.
pub const BUILTINS: &[(&str, BuiltinFn)] = &[
    ("len", len),
    ("first", first),
    ("last", last),
    ("rest", rest),
    ("push", push),
    ("puts", puts),
];

pub fn lookup(name: &str) -> Option<Rc<Value>> {
    for &(builtin_name, func) in BUILTINS {
        if builtin_name == name {
            return Some(Rc::new(Value::Builtin(builtin_name, func)));
        }
    }
    None
}

fn error(message: impl Into<String>) -> Rc<Value> {
    Rc::new(Value::Error(message.into()))
}

fn wrong_arity(got: usize, want: &str) -> Rc<Value> {
    error(format!("wrong number of arguments. got={got}, want={want}"))
}

fn len(args: &[Rc<Value>]) -> Rc<Value> {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match args[0].as_ref() {
        Value::Str(s) => Rc::new(Value::Integer(s.len() as i64)),
        Value::Array(elements) => Rc::new(Value::Integer(elements.len() as i64)),
        other => error(format!(
            "argument to 'len' not supported, got {}",
            other.kind_name()
        )),
    }
}

fn first(args: &[Rc<Value>]) -> Rc<Value> {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match args[0].as_ref() {
        Value::Array(elements) => elements.first().cloned().unwrap_or_else(|| Rc::new(Value::Null)),
        other => error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.kind_name()
        )),
    }
}

fn last(args: &[Rc<Value>]) -> Rc<Value> {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match args[0].as_ref() {
        Value::Array(elements) => elements.last().cloned().unwrap_or_else(|| Rc::new(Value::Null)),
        other => error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.kind_name()
        )),
    }
}

fn rest(args: &[Rc<Value>]) -> Rc<Value> {
    if args.len() != 1 {
        return wrong_arity(args.len(), "1");
    }
    match args[0].as_ref() {
        Value::Array(elements) => {
            if elements.is_empty() {
                Rc::new(Value::Null)
            } else {
                Rc::new(Value::Array(elements[1..].to_vec()))
            }
        }
        other => error(format!(
            "argument to `rest` must be ARRAY, got {}",
            other.kind_name()
        )),
    }
}

fn push(args: &[Rc<Value>]) -> Rc<Value> {
    if args.len() != 2 {
        return wrong_arity(args.len(), "2");
    }
    match args[0].as_ref() {
        Value::Array(elements) => {
            let mut new_elements = elements.clone();
            new_elements.push(args[1].clone());
            Rc::new(Value::Array(new_elements))
        }
        other => error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.kind_name()
        )),
    }
}

fn puts(args: &[Rc<Value>]) -> Rc<Value> {
    for arg in args {
        println!("{arg}");
    }
    Rc::new(Value::Null)
}
