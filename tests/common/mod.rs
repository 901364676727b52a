//! Shared fixture reducers used across the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use reflux::{Action, Reducer, StoreState, Value};

/// Integer counter: `INC` adds one, `DEC` subtracts one, anything else is
/// a no-op. The zero state (0) is also its initial state.
pub struct Counter;

impl Reducer for Counter {
    type State = i64;

    fn reduce(&self, state: i64, action: &Action) -> i64 {
        match action.kind() {
            "INC" => state + 1,
            "DEC" => state - 1,
            _ => state,
        }
    }
}

/// Session reducer carrying a credential table. Starts at `"Guest"`; a
/// `login` action with matching credentials transitions to `"<user> Login"`.
pub struct Login {
    users: HashMap<String, String>,
}

impl Login {
    pub fn new(users: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|(user, password)| (user.to_string(), password.to_string()))
                .collect(),
        }
    }
}

impl Default for Login {
    fn default() -> Self {
        Self::new([("danny", "1234")])
    }
}

impl Reducer for Login {
    type State = String;

    fn reduce(&self, state: String, action: &Action) -> String {
        // Zero state only ever arrives from the seeding pass.
        if state.is_empty() {
            return "Guest".to_string();
        }
        match action.kind() {
            "login" => {
                let user = action.get("user").and_then(Value::as_text);
                let password = action.get("password").and_then(Value::as_text);
                match (user, password) {
                    (Some(user), Some(password))
                        if self.users.get(user).map(String::as_str) == Some(password) =>
                    {
                        format!("{user} Login")
                    }
                    _ => state,
                }
            }
            _ => state,
        }
    }
}

/// Record-shaped state for the file updater fixture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileState {
    pub ext: String,
    pub mode: String,
}

impl StoreState for FileState {
    fn to_value(&self) -> Value {
        Value::record([("ext", self.ext.as_str()), ("mod", self.mode.as_str())])
    }
}

/// File metadata reducer: `chmod` appends `+x`/`+d` to the mode once,
/// `new ext` replaces the extension when an `Ext` argument is provided.
pub struct FileUpdater;

impl Reducer for FileUpdater {
    type State = FileState;

    fn reduce(&self, state: FileState, action: &Action) -> FileState {
        if state == FileState::default() {
            return FileState {
                ext: "elz".to_string(),
                mode: "+x".to_string(),
            };
        }
        match action.kind() {
            "chmod" => match action.get("mod").and_then(Value::as_text) {
                Some("+x") if !state.mode.contains("+x") => FileState {
                    mode: format!("{}+x", state.mode),
                    ..state
                },
                Some("+d") if !state.mode.contains("+d") => FileState {
                    mode: format!("{}+d", state.mode),
                    ..state
                },
                _ => state,
            },
            "new ext" => match action.get("Ext").and_then(Value::as_text) {
                Some(ext) => FileState {
                    ext: ext.to_string(),
                    ..state
                },
                None => state,
            },
            _ => state,
        }
    }
}
