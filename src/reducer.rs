//! Reducer contract: pure state transitions over a typed state slice.

use crate::action::Action;
use crate::value::Value;

/// A state slice owned by one reducer.
///
/// `Default` supplies the zero state the reducer is seeded with at
/// registration; `to_value` projects the typed state into the container's
/// tagged representation for reads and serialization.
pub trait StoreState: Clone + Default + Send + Sync + 'static {
    /// Project this state into the container's tagged value representation.
    fn to_value(&self) -> Value;
}

/// Reducer transforms its state slice based on dispatched actions.
///
/// This must be a pure function of `(state, action)`: no side effects, and
/// the same state type in and out — the associated `State` type is that
/// invariant, enforced at compile time. Reducers receive *every* dispatched
/// action and are expected to return their input state unchanged for action
/// types they don't recognize.
///
/// `reduce` takes `&self` so a reducer instance may carry fixed
/// configuration (lookup tables, limits), but it must not mutate it.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer owns.
    type State: StoreState;

    /// Process an action and return the new state.
    ///
    /// At registration this is invoked once with `State::default()` and
    /// [`Action::empty`]; a reducer that wants a non-zero initial state
    /// returns it from that call.
    fn reduce(&self, state: Self::State, action: &Action) -> Self::State;
}

impl StoreState for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl StoreState for i32 {
    fn to_value(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl StoreState for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl StoreState for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl<T: StoreState> StoreState for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(StoreState::to_value).collect())
    }
}
