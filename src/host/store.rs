use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

/// A persisted key/value store backing the session or global tier.
///
/// Values are always text. [`PersistedStore::flush`] is a notification that
/// the store changed; implementations schedule the actual write on their own
/// and must return immediately.
pub trait PersistedStore {
    /// Whether `name` has a value in this store.
    fn exists(&self, name: &str) -> bool;

    /// Reads the value of `name`.
    fn get(&self, name: &str) -> Option<String>;

    /// Writes the value of `name`.
    fn set(&self, name: &str, value: String);

    /// Requests that pending writes be persisted.
    fn flush(&self);
}

/// An in-memory [`PersistedStore`].
///
/// Flush requests are only counted, which lets callers check that a write
/// was reported.
///
/// # Example
/// ```
/// use boolparser::host::{MemoryStore, PersistedStore};
///
/// let store = MemoryStore::new().with("mood", "happy");
/// assert_eq!(store.get("mood").as_deref(), Some("happy"));
///
/// store.set("mood", "sleepy".to_string());
/// store.flush();
/// assert_eq!(store.flush_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    values:  RefCell<HashMap<String, String>>,
    flushes: Cell<usize>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, builder style.
    #[must_use]
    pub fn with(self, name: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(name.to_string(), value.to_string());
        self
    }

    /// Number of flush requests received so far.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes.get()
    }
}

impl PersistedStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.values.borrow().contains_key(name)
    }

    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: String) {
        self.values.borrow_mut().insert(name.to_string(), value);
    }

    fn flush(&self) {
        self.flushes.set(self.flushes.get() + 1);
    }
}
