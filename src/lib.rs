//! Reducer-composed state container with unidirectional data flow.
//!
//! A [`Store`] aggregates any number of pure state-transition functions
//! ("reducers") of unrelated state types into one addressable state tree,
//! routes every dispatched [`Action`] to all of them, and exposes the
//! aggregate for reads and JSON serialization.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Dispatch ──→ Reducer ──→ State ──→ Subscribers
//!                            │           │
//!                            └───────────┴──→ get_state / marshal
//! ```
//!
//! - **Action**: an immutable type tag plus named, dynamically-typed
//!   arguments
//! - **Reducer**: a pure function `(State, &Action) -> State`, registered
//!   under an explicit string key
//! - **Store**: the single source of truth for every reducer's current
//!   state slice
//!
//! # Example
//!
//! ```
//! use reflux::{Action, Reducer, Store};
//!
//! struct Counter;
//!
//! impl Reducer for Counter {
//!     type State = i64;
//!
//!     fn reduce(&self, state: i64, action: &Action) -> i64 {
//!         match action.kind() {
//!             "INC" => state + 1,
//!             "DEC" => state - 1,
//!             _ => state,
//!         }
//!     }
//! }
//!
//! let store = Store::builder().register("counter", Counter).build().unwrap();
//! store.dispatch(&Action::new("INC"));
//! store.dispatch(&Action::new("INC"));
//! assert_eq!(store.get_state("counter").unwrap().as_int(), Some(2));
//! ```

pub mod action;
pub mod error;
pub mod reducer;
pub mod store;
pub mod value;

pub use action::Action;
pub use error::StoreError;
pub use reducer::{Reducer, StoreState};
pub use store::{Store, StoreBuilder};
pub use value::Value;
