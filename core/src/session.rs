//! Couples the reducer with a `Syncer` into a single event loop step.

use crate::state::{Command, TodoState};
use crate::sync::{Syncer, Transport};

/// One user's view of the posts collection.
///
/// `handle` processes a command to completion before returning, so with a
/// single session there is never more than one request in flight per
/// command (bulk clear's joined deletes count as one).
pub struct TodoSession<T> {
    state: TodoState,
    syncer: Syncer<T>,
}

impl<T: Transport> TodoSession<T> {
    pub fn new(syncer: Syncer<T>) -> Self {
        Self {
            state: TodoState::new(),
            syncer,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn syncer(&self) -> &Syncer<T> {
        &self.syncer
    }

    /// Dispatch `command`, perform the resulting request if there is one, and
    /// reconcile state with its outcome. Returns whether a request was sent.
    pub async fn handle(&mut self, command: Command) -> bool {
        let Some(effect) = self.state.dispatch(command) else {
            return false;
        };
        let outcome = self.syncer.run(effect).await;
        self.state.apply(outcome);
        true
    }
}
