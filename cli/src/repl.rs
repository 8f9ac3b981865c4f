//! One prompt step: parse a line, drive the session, produce the output.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use todoform_core::{TodoSession, Transport};

use crate::input::{parse_input, Action, HELP};
use crate::view::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this and prompt again.
    Continue(String),
    Quit,
}

pub async fn step<T: Transport>(session: &mut TodoSession<T>, line: &str) -> Step {
    let action = match parse_input(line, session.state()) {
        Ok(action) => action,
        Err(error) => return Step::Continue(error.to_string().red().to_string()),
    };

    match action {
        Action::Quit => Step::Quit,
        Action::Help => Step::Continue(HELP.to_string()),
        Action::List => Step::Continue(render(session.state())),
        Action::Run(commands) => {
            for command in commands {
                session.handle(command).await;
            }
            Step::Continue(render(session.state()))
        }
    }
}

/// Non-interactive mode: one prompt line per input line, each step's output
/// written to `output`. Stops at `quit` or end of input.
pub async fn run_lines<T, R, W>(session: &mut TodoSession<T>, input: R, mut output: W) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        match step(session, &line).await {
            Step::Continue(text) => writeln!(output, "{text}")?,
            Step::Quit => break,
        }
    }
    output.flush()
}
