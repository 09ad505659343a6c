use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

#[derive(Default)]
struct Frame {
    variables: HashMap<String, Value>,
    parent:    Option<Scope>,
}

/// A shared handle to one level of a lexical scope chain.
///
/// Cloning a `Scope` yields another handle to the same level. Lookups walk
/// from this level up through its parents; declarations always land on this
/// level.
///
/// # Example
/// ```
/// use boolparser::{host::Scope, interpreter::value::core::Value};
///
/// let outer = Scope::new();
/// outer.declare("x", Value::from("1"));
///
/// let inner = outer.child();
/// assert!(inner.exists("x"));
/// assert!(!inner.exists_in_scope("x"));
///
/// inner.set("x", Value::from("2"));
/// assert_eq!(outer.get("x"), Some(Value::from("2")));
/// ```
#[derive(Clone, Default)]
pub struct Scope(Rc<RefCell<Frame>>);

impl Scope {
    /// Creates a root scope without a parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self(Rc::new(RefCell::new(Frame { variables: HashMap::new(),
                                          parent:    Some(self.clone()), })))
    }

    /// Returns the parent scope, if any.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }

    /// Declares `name` on this level, replacing an earlier declaration on
    /// the same level.
    pub fn declare(&self, name: &str, value: Value) {
        self.0.borrow_mut().variables.insert(name.to_string(), value);
    }

    /// Whether `name` is declared on this level only.
    #[must_use]
    pub fn exists_in_scope(&self, name: &str) -> bool {
        self.0.borrow().variables.contains_key(name)
    }

    /// Whether `name` is declared on this level or any ancestor.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Reads `name` from the nearest level that declares it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.find(name).and_then(|scope| scope.0.borrow().variables.get(name).cloned())
    }

    /// Overwrites `name` on the nearest level that declares it.
    ///
    /// Returns `false` without changing anything when no level declares it.
    pub fn set(&self, name: &str, value: Value) -> bool {
        match self.find(name) {
            Some(scope) => {
                scope.0.borrow_mut().variables.insert(name.to_string(), value);
                true
            },
            None => false,
        }
    }

    fn find(&self, name: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(scope) = current {
            if scope.exists_in_scope(name) {
                return Some(scope);
            }
            current = scope.parent();
        }
        None
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let frame = self.0.borrow();
        f.debug_struct("Scope")
         .field("variables", &frame.variables)
         .field("parent", &frame.parent)
         .finish()
    }
}
