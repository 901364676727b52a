//! The store: aggregate state container, dispatcher, and subscriber list.
//!
//! Uses a read-write lock pattern: many concurrent readers (`get_state`,
//! `marshal`) can inspect state, while `dispatch` takes the exclusive
//! writer side. Concurrent dispatches serialize on that lock.

mod slot;

use std::collections::HashSet;

use parking_lot::{Mutex, RwLock};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::action::Action;
use crate::error::StoreError;
use crate::reducer::Reducer;
use crate::value::Value;
use slot::{ReducerSlot, TypedSlot};

type Subscriber = Box<dyn FnMut() + Send>;

/// Aggregate state container composed from registered reducers.
///
/// Owns one state slice per reducer, keyed by the string supplied at
/// registration; the slices are the single source of truth for reads and
/// for serialization. Built via [`Store::builder`].
pub struct Store {
    slots: RwLock<Vec<Box<dyn ReducerSlot>>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Store {
    /// Start building a store by registering reducers under explicit keys.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Deliver one action to every registered reducer, in registration
    /// order, then notify subscribers.
    ///
    /// Every dispatch is a full pass: each slot's state is replaced with
    /// its reducer's return value even when nothing changed. Subscribers
    /// run synchronously, in subscription order, after the state lock has
    /// been released, so they may read state but must not dispatch.
    ///
    /// A panicking reducer propagates to the caller; slots earlier in the
    /// pass keep their updated state and later slots are not run.
    pub fn dispatch(&self, action: &Action) {
        {
            let mut slots = self.slots.write();
            tracing::debug!(
                "Dispatching '{}' to {} reducer(s)",
                action.kind(),
                slots.len()
            );
            for slot in slots.iter_mut() {
                slot.apply(action);
                tracing::trace!("Reducer '{}' applied '{}'", slot.key(), action.kind());
            }
        }

        let mut subscribers = self.subscribers.lock();
        for notify in subscribers.iter_mut() {
            notify();
        }
    }

    /// Get the current state stored under `key`, or `None` if no reducer
    /// was registered with that key.
    ///
    /// Returns an owned projection; mutating it cannot affect the store.
    pub fn get_state(&self, key: &str) -> Option<Value> {
        let slots = self.slots.read();
        slots
            .iter()
            .find(|slot| slot.key() == key)
            .map(|slot| slot.current())
    }

    /// Register an observer invoked once after every completed dispatch.
    ///
    /// Callbacks run in subscription order. There is no unsubscribe.
    pub fn subscribe(&self, callback: impl FnMut() + Send + 'static) {
        self.subscribers.lock().push(Box::new(callback));
    }

    /// Serialize the aggregate state as one JSON object, fields in
    /// registration order, keyed by reducer key.
    ///
    /// # Errors
    /// Returns `StoreError::Serialize` if the encoder fails; no partial
    /// output is produced.
    pub fn marshal(&self) -> Result<String, StoreError> {
        let slots = self.slots.read();
        let entries: Vec<(&str, Value)> = slots
            .iter()
            .map(|slot| (slot.key(), slot.current()))
            .collect();
        Ok(serde_json::to_string(&StateObject(&entries))?)
    }
}

/// Serializes `(key, state)` entries as a single JSON object, preserving
/// registration order.
struct StateObject<'a>(&'a [(&'a str, Value)]);

impl Serialize for StateObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builder collecting `(key, reducer)` registrations for a [`Store`].
#[derive(Default)]
pub struct StoreBuilder {
    slots: Vec<Box<dyn ReducerSlot>>,
}

impl StoreBuilder {
    /// Register a reducer under an explicit key, in call order.
    ///
    /// Keys double as the serialized field names, so pick stable ones.
    /// Validation is deferred to [`build`](Self::build).
    pub fn register<R: Reducer>(mut self, key: impl Into<String>, reducer: R) -> Self {
        self.slots.push(Box::new(TypedSlot::new(key.into(), reducer)));
        self
    }

    /// Validate the registrations and seed every reducer's initial state.
    ///
    /// Seeding invokes each reducer, in registration order, with the zero
    /// value of its state type and [`Action::empty`]. Reducers must be free
    /// of side effects on that call: it happens unconditionally here.
    ///
    /// # Errors
    /// Returns `StoreError::EmptyKey` or `StoreError::DuplicateKey` if the
    /// registrations are misconfigured; the store is not constructed.
    pub fn build(self) -> Result<Store, StoreError> {
        let mut seen = HashSet::new();
        for slot in &self.slots {
            if slot.key().is_empty() {
                return Err(StoreError::EmptyKey);
            }
            if !seen.insert(slot.key().to_string()) {
                return Err(StoreError::DuplicateKey {
                    key: slot.key().to_string(),
                });
            }
        }

        let mut slots = self.slots;
        let seed = Action::empty();
        for slot in slots.iter_mut() {
            slot.apply(&seed);
            tracing::debug!("Registered reducer '{}'", slot.key());
        }

        Ok(Store {
            slots: RwLock::new(slots),
            subscribers: Mutex::new(Vec::new()),
        })
    }
}
