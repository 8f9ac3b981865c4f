//! Local state of the todo form and the reducer that drives it.
//!
//! # Design
//! `TodoState` is changed in exactly two places. `dispatch` turns a user
//! `Command` into local transitions and, when the server must be involved,
//! an `Effect` describing the request. `apply` consumes the typed `Outcome`
//! of that request and reconciles the collection. Nothing is applied
//! optimistically: a failed outcome is logged and leaves state untouched.

use crate::error::ApiError;
use crate::types::{TodoId, TodoItem};

/// Shown when a submit is attempted with blank content.
pub const EMPTY_CONTENT_MESSAGE: &str = "Todo content cannot be empty.";

/// Whether a submit creates a new item or updates an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(TodoId),
}

/// The in-progress form: input text, mode and validation feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub content: String,
    pub mode: FormMode,
    pub validation_message: Option<String>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn edit_target(&self) -> Option<&TodoId> {
        match &self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Idle => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A discrete user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initial mount: fetch the whole collection.
    Load,
    /// The form input changed.
    SetContent(String),
    /// Create or update, depending on the form mode.
    Submit,
    /// Enter edit mode for an item. Purely local.
    Edit(TodoId),
    Delete(TodoId),
    ClearAll,
}

/// A request the caller has to perform on behalf of the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchAll,
    Create { content: String },
    Update { id: TodoId, content: String },
    Delete { id: TodoId },
    /// One delete per id, issued concurrently and joined.
    DeleteAll { ids: Vec<TodoId> },
}

/// The typed result of performing an `Effect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded(Result<Vec<TodoItem>, ApiError>),
    Created(Result<TodoItem, ApiError>),
    Updated {
        id: TodoId,
        result: Result<TodoItem, ApiError>,
    },
    Deleted {
        id: TodoId,
        result: Result<(), ApiError>,
    },
    /// Ok only when every constituent delete succeeded.
    Cleared(Result<(), ApiError>),
}

/// Cached collection plus form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<TodoItem>,
    form: FormState,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            form: FormState::default(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn pending_count(&self) -> usize {
        self.items.len()
    }

    /// Apply the local part of `command` and return the request it needs, if any.
    pub fn dispatch(&mut self, command: Command) -> Option<Effect> {
        match command {
            Command::Load => Some(Effect::FetchAll),
            Command::SetContent(content) => {
                self.form.content = content;
                None
            }
            Command::Submit => self.submit(),
            Command::Edit(id) => {
                match self.items.iter().find(|item| item.id == id) {
                    Some(item) => {
                        self.form.content = item.content.clone();
                        self.form.mode = FormMode::Editing(id);
                    }
                    None => tracing::warn!(%id, "edit requested for unknown todo"),
                }
                None
            }
            Command::Delete(id) => Some(Effect::Delete { id }),
            Command::ClearAll => Some(Effect::DeleteAll {
                ids: self.items.iter().map(|item| item.id.clone()).collect(),
            }),
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        if self.form.content.trim().is_empty() {
            self.form.validation_message = Some(EMPTY_CONTENT_MESSAGE.to_string());
            return None;
        }
        let content = self.form.content.clone();
        match &self.form.mode {
            FormMode::Idle => Some(Effect::Create { content }),
            FormMode::Editing(id) => Some(Effect::Update {
                id: id.clone(),
                content,
            }),
        }
    }

    /// Reconcile the collection with the result of a request.
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Loaded(Ok(items)) => {
                tracing::debug!(count = items.len(), "loaded todos");
                self.items = items;
            }
            Outcome::Loaded(Err(error)) => log_failure("load", &error),
            Outcome::Created(Ok(item)) => {
                tracing::debug!(id = %item.id, "created todo");
                self.items.push(item);
                // Mode is left alone: an edit entered while the create was in flight survives.
                self.form.content.clear();
                self.form.validation_message = None;
            }
            Outcome::Created(Err(error)) => log_failure("create", &error),
            Outcome::Updated { id, result: Ok(item) } => {
                for slot in self.items.iter_mut().filter(|slot| slot.id == id) {
                    *slot = item.clone();
                }
                self.form.reset();
            }
            Outcome::Updated { id, result: Err(error) } => {
                tracing::error!(operation = "update", %id, %error, "Something went wrong");
            }
            Outcome::Deleted { id, result: Ok(()) } => {
                self.items.retain(|item| item.id != id);
            }
            Outcome::Deleted { id, result: Err(error) } => {
                tracing::error!(operation = "delete", %id, %error, "Something went wrong");
            }
            Outcome::Cleared(Ok(())) => self.items.clear(),
            Outcome::Cleared(Err(error)) => log_failure("clear all", &error),
        }
    }
}

fn log_failure(operation: &str, error: &ApiError) {
    tracing::error!(operation, %error, "Something went wrong");
}
