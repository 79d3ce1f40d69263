//! Input and event bindings between a UI host and the task store.
//!
//! # Responsibility
//! - Hold the text input state.
//! - Translate UI events into task store operations.
//!
//! # Invariants
//! - Add is triggered by the add control or by Enter in the text input.
//! - The input is cleared only after the new task is durably written.

use crate::model::clock::{Clock, SystemClock};
use crate::model::filter::FilterKind;
use crate::model::task::TaskId;
use crate::store::TaskStore;
use log::debug;

/// Key pressed while the text input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// User action reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The text input now holds this value.
    InputChanged(String),
    AddClicked,
    KeyPressed(Key),
    /// Checkbox of the row carrying this id.
    CheckboxClicked(TaskId),
    /// Delete trigger of the row carrying this id.
    DeleteClicked(TaskId),
    FilterClicked(FilterKind),
}

/// Event dispatcher owning the store and the input field.
pub struct TodoBindings<C = SystemClock> {
    store: TaskStore<C>,
    input: String,
}

impl<C: Clock> TodoBindings<C> {
    pub fn new(store: TaskStore<C>) -> Self {
        Self {
            store,
            input: String::new(),
        }
    }

    /// Applies one UI event.
    ///
    /// Toggle and delete writes are fire-and-forget; their failures are
    /// logged by the storage writer. Add waits for its write so the input
    /// can be cleared on success.
    pub async fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::InputChanged(value) => self.input = value,
            UiEvent::AddClicked | UiEvent::KeyPressed(Key::Enter) => self.submit_input().await,
            UiEvent::KeyPressed(_) => {}
            UiEvent::CheckboxClicked(id) => {
                if self.store.toggle_completion(id).is_none() {
                    debug!("event=ui_toggle module=bindings status=ignored task_id={id}");
                }
            }
            UiEvent::DeleteClicked(id) => drop(self.store.delete(id)),
            UiEvent::FilterClicked(kind) => self.store.set_filter(kind),
        }
    }

    async fn submit_input(&mut self) {
        let Some(pending) = self.store.add(&self.input) else {
            return;
        };
        if pending.wait().await.is_ok() {
            self.input.clear();
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn store(&self) -> &TaskStore<C> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<C> {
        &mut self.store
    }
}
