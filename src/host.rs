use std::rc::Rc;

/// Variable scope chains.
///
/// Defines `Scope`, the lexical variable storage that expressions read from
/// and write to. Scopes are shared handles; a child scope sees every
/// variable of its ancestors.
pub mod scope;
/// Persisted key/value stores.
///
/// Defines the `PersistedStore` interface for the session and global tiers,
/// and `MemoryStore`, an in-memory implementation.
pub mod store;
/// Macro substitution.
///
/// Defines the `MacroExpander` interface used to expand `{...}` literals,
/// and `VariableMacros`, an expander for variable placeholders.
pub mod macros;

pub use macros::{MacroExpander, PassthroughMacros, VariableMacros};
pub use scope::Scope;
pub use store::{MemoryStore, PersistedStore};

/// The collaborators an expression needs from its surroundings.
///
/// A `Host` bundles the session and global stores with the macro expander.
/// It is cheap to clone; every clone shares the same stores.
#[derive(Clone)]
pub struct Host {
    /// Variables persisted for the current conversation.
    pub session: Rc<dyn PersistedStore>,
    /// Variables persisted across conversations.
    pub global:  Rc<dyn PersistedStore>,
    /// Expands `{...}` literals.
    pub macros:  Rc<dyn MacroExpander>,
}

impl Host {
    /// Creates a host from its collaborators.
    #[must_use]
    pub fn new(session: Rc<dyn PersistedStore>,
               global: Rc<dyn PersistedStore>,
               macros: Rc<dyn MacroExpander>)
               -> Self {
        Self { session,
               global,
               macros }
    }

    /// Creates a host with empty in-memory stores and the
    /// [`VariableMacros`] expander.
    #[must_use]
    pub fn in_memory() -> Self {
        let session = Rc::new(MemoryStore::new());
        let global = Rc::new(MemoryStore::new());
        let macros = Rc::new(VariableMacros::new(session.clone(), global.clone()));
        Self { session,
               global,
               macros }
    }
}
