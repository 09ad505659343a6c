use std::{rc::Rc, sync::LazyLock};

use regex::{Captures, Regex};
use tracing::trace;

use crate::host::{scope::Scope, store::PersistedStore};

static VARIABLE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(var|getvar|getglobalvar)::([^{}]*)\}\}").expect("valid placeholder pattern")
});

/// Expands the placeholders of a `{...}` literal into plain text.
///
/// The expander receives the literal exactly as written, braces included,
/// together with the scope active when the expression is evaluated.
pub trait MacroExpander {
    /// Returns the substituted text.
    fn expand(&self, raw: &str, scope: &Scope) -> String;
}

impl<F> MacroExpander for F where F: Fn(&str, &Scope) -> String
{
    fn expand(&self, raw: &str, scope: &Scope) -> String {
        self(raw, scope)
    }
}

/// An expander that returns every literal unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughMacros;

impl MacroExpander for PassthroughMacros {
    fn expand(&self, raw: &str, _scope: &Scope) -> String {
        raw.to_string()
    }
}

/// An expander for variable placeholders.
///
/// Recognises three placeholders and leaves all other text untouched:
/// - `{{var::name}}` reads `name` from the scope chain,
/// - `{{getvar::name}}` reads `name` from the session store,
/// - `{{getglobalvar::name}}` reads `name` from the global store.
///
/// Missing variables expand to empty text.
///
/// # Example
/// ```
/// use std::rc::Rc;
///
/// use boolparser::host::{MacroExpander, MemoryStore, Scope, VariableMacros};
///
/// let session = Rc::new(MemoryStore::new().with("count", "3"));
/// let global = Rc::new(MemoryStore::new());
/// let macros = VariableMacros::new(session, global);
///
/// assert_eq!(macros.expand("{{getvar::count}}", &Scope::new()), "3");
/// assert_eq!(macros.expand("{{getvar::missing}}", &Scope::new()), "");
/// ```
pub struct VariableMacros {
    session: Rc<dyn PersistedStore>,
    global:  Rc<dyn PersistedStore>,
}

impl VariableMacros {
    /// Creates an expander reading from the given stores.
    #[must_use]
    pub fn new(session: Rc<dyn PersistedStore>, global: Rc<dyn PersistedStore>) -> Self {
        Self { session, global }
    }
}

impl MacroExpander for VariableMacros {
    fn expand(&self, raw: &str, scope: &Scope) -> String {
        let expanded = VARIABLE_PLACEHOLDER.replace_all(raw, |caps: &Captures<'_>| {
                                               let name = caps[2].trim();
                                               match &caps[1] {
                                                   "var" => scope.get(name)
                                                                 .map(|value| value.to_storage_text())
                                                                 .unwrap_or_default(),
                                                   "getvar" => self.session.get(name).unwrap_or_default(),
                                                   _ => self.global.get(name).unwrap_or_default(),
                                               }
                                           });
        trace!(raw, expanded = %expanded, "expanded macro");
        expanded.into_owned()
    }
}
