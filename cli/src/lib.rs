//! Terminal front end for the todo form.
//!
//! Renders `TodoState` as text, reads intents from a prompt, and performs
//! requests with a blocking HTTP client on tokio's blocking pool.

pub mod input;
pub mod repl;
pub mod transport;
pub mod view;

pub use input::{parse_input, Action, InputError};
pub use repl::{run_lines, step, Step};
pub use transport::UreqTransport;
pub use view::render;
