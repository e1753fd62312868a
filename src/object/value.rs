use std::fmt::{self, Display};
use std::rc::Rc;

use crate::ast::{BlockStatement, Identifier};

use super::{Environment, HashObj};

pub type BuiltinFn = fn(&[Rc<Value>]) -> Rc<Value>;

/// The closed set of runtime values every expression evaluates to.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Str(String),
    Null,
    ReturnValue(Rc<Value>),
    Error(String),
    Function {
        parameters: Vec<Identifier>,
        body: BlockStatement,
        env: Environment,
    },
    Builtin(&'static str, BuiltinFn),
    Array(Vec<Rc<Value>>),
    Hash(HashObj),
}

impl Value {
    /// The upper-case kind name used in diagnostics (`"type mismatch: INTEGER + BOOLEAN"`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
            Value::Function { .. } => "FUNCTION",
            Value::Builtin(..) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Null => write!(f, "null"),
            Value::ReturnValue(v) => write!(f, "{v}"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
            Value::Function {
                parameters, body, ..
            } => {
                let params = parameters
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "fn({params}) {{\n{body}\n}}")
            }
            Value::Builtin(..) => write!(f, "builtin function"),
            Value::Array(elements) => {
                let elements = elements
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{elements}]")
            }
            Value::Hash(hash) => write!(f, "{hash}"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind_name(), self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::ReturnValue(a), Value::ReturnValue(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Builtin(a, _), Value::Builtin(b, _)) => a == b,
            // Functions compare by identity only (there is no useful
            // structural equality once closures are involved).
            _ => false,
        }
    }
}
