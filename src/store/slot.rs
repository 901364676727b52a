//! Type-erased registration slots.
//!
//! Each registered reducer owns a typed state slice; the store only sees
//! the erased [`ReducerSlot`] surface, which is what lets reducers of
//! unrelated state types live in one container.

use crate::action::Action;
use crate::reducer::{Reducer, StoreState};
use crate::value::Value;

/// One registered reducer plus its current state, behind a uniform surface.
pub(crate) trait ReducerSlot: Send + Sync {
    /// The key this slot's state is stored and serialized under.
    fn key(&self) -> &str;

    /// Project the current typed state into the tagged representation.
    fn current(&self) -> Value;

    /// Run the reducer and replace the stored state with its return value,
    /// unconditionally.
    fn apply(&mut self, action: &Action);
}

pub(crate) struct TypedSlot<R: Reducer> {
    key: String,
    reducer: R,
    state: R::State,
}

impl<R: Reducer> TypedSlot<R> {
    /// Create a slot holding the zero state; seeding happens at build time.
    pub(crate) fn new(key: String, reducer: R) -> Self {
        Self {
            key,
            reducer,
            state: R::State::default(),
        }
    }
}

impl<R: Reducer> ReducerSlot for TypedSlot<R> {
    fn key(&self) -> &str {
        &self.key
    }

    fn current(&self) -> Value {
        self.state.to_value()
    }

    fn apply(&mut self, action: &Action) {
        let previous = std::mem::take(&mut self.state);
        self.state = self.reducer.reduce(previous, action);
    }
}
