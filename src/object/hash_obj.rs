use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

use super::{HashKey, Value};

/// An insertion-ordered mapping from [`HashKey`] to a `(key, value)` pair.
///
/// Preserving insertion order keeps `display()` deterministic and lets it
/// agree with the parser's own insertion-ordered [`crate::ast::HashLiteral`].
#[derive(Clone, Default)]
pub struct HashObj {
    pairs: Vec<(Rc<Value>, Rc<Value>)>,
    index: HashMap<HashKey, usize>,
}

impl HashObj {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: HashKey, key_value: Rc<Value>, value: Rc<Value>) {
        if let Some(&i) = self.index.get(&key) {
            self.pairs[i] = (key_value, value);
        } else {
            self.index.insert(key, self.pairs.len());
            self.pairs.push((key_value, value));
        }
    }

    pub fn get(&self, key: &HashKey) -> Option<Rc<Value>> {
        self.index.get(key).map(|&i| self.pairs[i].1.clone())
    }

    pub fn pairs(&self) -> &[(Rc<Value>, Rc<Value>)] {
        &self.pairs
    }
}

impl Display for HashObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{pairs}}}")
    }
}

impl PartialEq for HashObj {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}
