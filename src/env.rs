// ABOUTME: Environment module for managing variable bindings and scopes

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical scope: a table of bindings plus an optional parent to search
/// next. The parent link is mutable because applying a lambda re-parents
/// its captured environment to the caller's environment on every call,
/// rather than fixing it once at closure-creation time.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// A fresh environment with no parent, for the program root.
    pub fn root() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// A fresh environment parented to `parent`.
    pub fn child(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Re-targets this environment's parent. Used when applying a lambda:
    /// the closure's environment is reparented to the caller's environment
    /// for the duration of the call.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// Defines or overwrites a binding in this scope only.
    pub fn bind_local(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Defines or overwrites a binding at the root of the environment chain.
    pub fn bind_global(&self, name: &str, value: Value) {
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.bind_global(name, value),
            None => self.bind_local(name, value),
        }
    }

    /// Searches this scope then its ancestors. Returns a deep copy of the
    /// bound value, or an `Unbound Symbol` error value if nothing matches
    /// all the way to the root.
    pub fn lookup(self: &Rc<Self>, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.lookup(name),
            None => Value::Error(format!("Unbound Symbol '{name}'")),
        }
    }

    /// Deep-copies this environment: a fresh table with every binding
    /// cloned, keeping the same parent by reference (the parent itself is
    /// not copied).
    pub fn deep_copy(self: &Rc<Self>) -> Rc<Self> {
        let bindings = self
            .bindings
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_local_and_lookup() {
        let env = Environment::root();
        env.bind_local("x", Value::Number(42));
        match env.lookup("x") {
            Value::Number(n) => assert_eq!(n, 42),
            other => panic!("expected Number(42), got {other}"),
        }
    }

    #[test]
    fn test_unbound_symbol_produces_error_value() {
        let env = Environment::root();
        match env.lookup("missing") {
            Value::Error(msg) => assert_eq!(msg, "Unbound Symbol 'missing'"),
            other => panic!("expected Error value, got {other}"),
        }
    }

    #[test]
    fn test_shadowing() {
        let parent = Environment::root();
        parent.bind_local("x", Value::Number(1));
        let child = Environment::child(parent);
        child.bind_local("x", Value::Number(2));
        match child.lookup("x") {
            Value::Number(n) => assert_eq!(n, 2),
            other => panic!("expected Number(2), got {other}"),
        }
    }

    #[test]
    fn test_parent_lookup() {
        let parent = Environment::root();
        parent.bind_local("x", Value::Number(7));
        let child = Environment::child(parent);
        match child.lookup("x") {
            Value::Number(n) => assert_eq!(n, 7),
            other => panic!("expected Number(7), got {other}"),
        }
    }

    #[test]
    fn test_bind_global_reaches_root_from_nested_scope() {
        let root = Environment::root();
        let mid = Environment::child(root.clone());
        let leaf = Environment::child(mid);
        leaf.bind_global("g", Value::Number(9));
        match root.lookup("g") {
            Value::Number(n) => assert_eq!(n, 9),
            other => panic!("expected Number(9), got {other}"),
        }
    }

    #[test]
    fn test_set_parent_reparents_lookup() {
        let a = Environment::root();
        a.bind_local("v", Value::Number(1));
        let b = Environment::root();
        b.bind_local("v", Value::Number(2));

        let leaf = Environment::child(a);
        assert!(matches!(leaf.lookup("v"), Value::Number(1)));
        leaf.set_parent(b);
        assert!(matches!(leaf.lookup("v"), Value::Number(2)));
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let env = Environment::root();
        env.bind_local("x", Value::Number(1));
        let copy = env.deep_copy();
        copy.bind_local("x", Value::Number(2));
        assert!(matches!(env.lookup("x"), Value::Number(1)));
        assert!(matches!(copy.lookup("x"), Value::Number(2)));
    }
}
