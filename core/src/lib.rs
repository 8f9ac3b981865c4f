//! Client core for a todo list backed by a `/posts` REST resource.
//!
//! # Overview
//! Keeps a cached copy of the server's todo items plus the state of the
//! entry form, and synchronises the two with the server through an injected
//! transport. No network code lives here.
//!
//! # Design
//! - `PostsClient` is stateless: `build_*` produces requests, `parse_*`
//!   consumes responses.
//! - `TodoState` is a reducer. `dispatch` handles a user `Command` locally
//!   and returns the `Effect` to perform; `apply` consumes the `Outcome`.
//! - `Syncer` performs effects through a `Transport`; `TodoSession` ties
//!   the two together for callers that process one command at a time.
//! - Failures are logged through `tracing` and otherwise leave state as it
//!   was. Only blank input produces user-visible feedback.

pub mod client;
pub mod error;
pub mod http;
pub mod session;
pub mod state;
pub mod sync;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{PostsClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::TodoSession;
pub use state::{Command, Effect, FormMode, FormState, Outcome, TodoState, EMPTY_CONTENT_MESSAGE};
pub use sync::{Syncer, Transport};
pub use types::{PostContent, TodoId, TodoItem};
