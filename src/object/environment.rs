use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::Value;

struct EnvironmentInner {
    store: HashMap<String, Rc<Value>>,
    outer: Option<Environment>,
}

/// A lexically-scoped chain of variable bindings.
///
/// Cloning an `Environment` clones the `Rc` handle, not the bindings — every
/// clone observes the same store. This is how function closures and nested
/// block scopes share state without an explicit arena.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<EnvironmentInner>>);

impl Environment {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: None,
        })))
    }

    pub fn new_enclosed(outer: Environment) -> Self {
        Self(Rc::new(RefCell::new(EnvironmentInner {
            store: HashMap::new(),
            outer: Some(outer),
        })))
    }

    pub fn get(&self, name: &str) -> Option<Rc<Value>> {
        let inner = self.0.borrow();
        if let Some(value) = inner.store.get(name) {
            return Some(value.clone());
        }
        inner.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds `name` in this environment's own store. Never touches an outer
    /// scope, matching the chain-walk-on-read/write-local discipline.
    pub fn set(&self, name: impl Into<String>, value: Rc<Value>) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_own_binding() {
        let env = Environment::new();
        env.set("x", Rc::new(Value::Integer(5)));
        assert_eq!(*env.get("x").unwrap(), Value::Integer(5));
    }

    #[test]
    fn reads_through_outer_chain() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Value::Integer(1)));
        let inner = Environment::new_enclosed(outer);
        assert_eq!(*inner.get("x").unwrap(), Value::Integer(1));
    }

    #[test]
    fn inner_binding_does_not_leak_outward() {
        let outer = Environment::new();
        let inner = Environment::new_enclosed(outer.clone());
        inner.set("y", Rc::new(Value::Integer(2)));
        assert!(outer.get("y").is_none());
    }

    #[test]
    fn inner_shadows_outer() {
        let outer = Environment::new();
        outer.set("x", Rc::new(Value::Integer(1)));
        let inner = Environment::new_enclosed(outer.clone());
        inner.set("x", Rc::new(Value::Integer(2)));
        assert_eq!(*inner.get("x").unwrap(), Value::Integer(2));
        assert_eq!(*outer.get("x").unwrap(), Value::Integer(1));
    }
}
