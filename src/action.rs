//! Immutable action values delivered to every reducer on dispatch.

use std::collections::BTreeMap;

use crate::value::Value;

/// A tagged event value: a type tag plus named, dynamically-typed arguments.
///
/// Actions are built with a chainable builder and never mutated afterwards:
///
/// ```
/// use reflux::Action;
///
/// let action = Action::new("login")
///     .arg("user", "danny")
///     .arg("password", "1234");
/// assert_eq!(action.kind(), "login");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    kind: String,
    args: BTreeMap<String, Value>,
}

impl Action {
    /// Begin an action with the given type tag and no arguments.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: BTreeMap::new(),
        }
    }

    /// The seeding action: empty type tag, no arguments.
    ///
    /// Dispatched to every reducer once at construction so it can replace
    /// the zero state with its own default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a named argument, consuming and returning the action.
    ///
    /// Argument names are unique; adding the same name twice keeps the
    /// later value.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// The action's type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Look up an argument by name. Absent arguments are `None`, never a
    /// defaulted value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }
}
