use tracing::debug;

use crate::{
    host::{Host, Scope},
    interpreter::value::core::Value,
};

/// The storage tier a variable was found in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tier {
    /// The lexical scope chain.
    Local,
    /// The session store.
    Session,
    /// The global store.
    Global,
}

impl Tier {
    const fn name(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Session => "session",
            Self::Global => "global",
        }
    }
}

/// Reads and writes variables across the three storage tiers.
///
/// Lookups try the scope chain first, then the session store, then the
/// global store. Every tier stores text; reads decode that text as JSON when
/// they can, so `"5"` reads back as the number `5` and `"[1,2]"` as a list.
///
/// A `Variables` belongs to one parser. Its scope is the parser's private
/// scope, a child of the scope the parser was created for.
#[derive(Clone)]
pub struct Variables {
    scope: Scope,
    host:  Host,
}

impl Variables {
    /// Creates the variable access for a parser's private `scope`.
    #[must_use]
    pub const fn new(scope: Scope, host: Host) -> Self {
        Self { scope, host }
    }

    /// The parser's private scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The host collaborators.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Finds the tier that holds `name`, searching the scope chain from
    /// `scope` upwards.
    fn locate(&self, scope: &Scope, name: &str) -> Option<Tier> {
        if scope.exists(name) {
            Some(Tier::Local)
        } else if self.host.session.exists(name) {
            Some(Tier::Session)
        } else if self.host.global.exists(name) {
            Some(Tier::Global)
        } else {
            None
        }
    }

    /// Reads `name`.
    ///
    /// Stored text is decoded as JSON when possible; text that is not valid
    /// JSON, or decodes to `null`, is returned as is. A variable that exists
    /// in no tier reads as empty text.
    ///
    /// # Example
    /// ```
    /// use boolparser::{host::{Host, Scope},
    ///                  interpreter::{value::core::Value, variables::Variables}};
    ///
    /// let scope = Scope::new();
    /// scope.declare("n", Value::from("5"));
    /// scope.declare("word", Value::from("hello"));
    /// let variables = Variables::new(scope.child(), Host::in_memory());
    ///
    /// assert_eq!(variables.resolve("n"), Value::Number(5.0));
    /// assert_eq!(variables.resolve("word"), Value::from("hello"));
    /// assert_eq!(variables.resolve("missing"), Value::from(""));
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Value {
        let stored = match self.locate(&self.scope, name) {
            Some(Tier::Local) => self.scope.get(name).unwrap_or_else(|| Value::Text(String::new())),
            Some(Tier::Session) => Value::Text(self.host.session.get(name).unwrap_or_default()),
            Some(Tier::Global) => Value::Text(self.host.global.get(name).unwrap_or_default()),
            None => return Value::Text(String::new()),
        };
        decode(stored)
    }

    /// Writes `value` to `name` and returns the text that was stored.
    ///
    /// The search for an existing variable starts at the parent of the
    /// parser's private scope, so writes land in the caller's scope rather
    /// than disappearing with the parser. A write to the session or global
    /// store requests a flush of that store. A variable found in no tier is
    /// declared in the caller's scope.
    pub fn write(&self, name: &str, value: &Value) -> String {
        let text = value.to_storage_text();
        let target = self.scope.parent().unwrap_or_else(|| self.scope.clone());

        let tier = self.locate(&target, name);
        match tier {
            Some(Tier::Local) => {
                target.set(name, Value::Text(text.clone()));
            },
            Some(Tier::Session) => {
                self.host.session.set(name, text.clone());
                self.host.session.flush();
            },
            Some(Tier::Global) => {
                self.host.global.set(name, text.clone());
                self.host.global.flush();
            },
            None => target.declare(name, Value::Text(text.clone())),
        }

        debug!(name,
               tier = tier.map_or("new local", Tier::name),
               value = %text,
               "variable written");
        text
    }
}

fn decode(value: Value) -> Value {
    match value {
        Value::Text(text) => serde_json::from_str::<serde_json::Value>(&text).ok()
                                                                           .and_then(Value::from_json)
                                                                           .unwrap_or(Value::Text(text)),
        other => other,
    }
}
