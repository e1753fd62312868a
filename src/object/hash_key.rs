use super::Value;

/// The stable key used inside [`super::Hash`] values. Only `Integer`,
/// `Boolean`, and `String` values are hashable; anything else fails the
/// `unusable as hash key` check in the evaluator before a `HashKey` is ever
/// constructed for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    Str(String),
}

impl HashKey {
    pub fn from_value(value: &Value) -> Option<HashKey> {
        match value {
            Value::Integer(i) => Some(HashKey::Integer(*i)),
            Value::Boolean(b) => Some(HashKey::Boolean(*b)),
            Value::Str(s) => Some(HashKey::Str(s.clone())),
            _ => None,
        }
    }
}
