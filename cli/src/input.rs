//! Prompt grammar: turns a typed line into commands for the session.

use thiserror::Error;
use todoform_core::{Command, TodoId, TodoState};

pub const HELP: &str = "\
add <text>     set the form to <text> and submit it
set <text>     set the form without submitting
submit         create, or update the todo being edited
edit <n>       load todo <n> into the form for editing
delete <n>     delete todo <n>
clear          delete every todo
list           show the list again
quit           leave";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Commands to hand to the session, in order.
    Run(Vec<Command>),
    List,
    Help,
    Quit,
}

/// A line that could not be understood. Purely local; nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{0}` needs a todo number")]
    MissingPosition(&'static str),

    #[error("there is no todo number {0}")]
    NoSuchPosition(String),
}

/// Parse one prompt line. Positions are 1-based indexes into the list as
/// currently rendered, resolved to ids against `state`.
pub fn parse_input(line: &str, state: &TodoState) -> Result<Action, InputError> {
    let line = line.trim_start();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.trim_end() {
        "" | "list" | "ls" => Ok(Action::List),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" | "q" => Ok(Action::Quit),
        "add" => Ok(Action::Run(vec![Command::SetContent(rest.to_string()), Command::Submit])),
        "set" => Ok(Action::Run(vec![Command::SetContent(rest.to_string())])),
        "submit" => Ok(Action::Run(vec![Command::Submit])),
        "clear" => Ok(Action::Run(vec![Command::ClearAll])),
        "edit" => Ok(Action::Run(vec![Command::Edit(position(rest, "edit", state)?)])),
        "delete" | "rm" => Ok(Action::Run(vec![Command::Delete(position(rest, "delete", state)?)])),
        other => Err(InputError::Unknown(other.to_string())),
    }
}

fn position(arg: &str, command: &'static str, state: &TodoState) -> Result<TodoId, InputError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(InputError::MissingPosition(command));
    }
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| state.items().get(index))
        .map(|item| item.id.clone())
        .ok_or_else(|| InputError::NoSuchPosition(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todoform_core::TodoItem;

    fn state() -> TodoState {
        TodoState::with_items(vec![
            TodoItem {
                id: TodoId::from("x1"),
                content: "a".to_string(),
            },
            TodoItem {
                id: TodoId::from("x2"),
                content: "b".to_string(),
            },
        ])
    }

    #[test]
    fn add_sets_content_then_submits() {
        assert_eq!(
            parse_input("add walk the dog", &state()),
            Ok(Action::Run(vec![
                Command::SetContent("walk the dog".to_string()),
                Command::Submit
            ]))
        );
    }

    #[test]
    fn any_whitespace_separates_command_from_text() {
        assert_eq!(
            parse_input("add\tmilk", &state()),
            Ok(Action::Run(vec![
                Command::SetContent("milk".to_string()),
                Command::Submit
            ]))
        );
        assert_eq!(
            parse_input("edit\t1", &state()),
            Ok(Action::Run(vec![Command::Edit(TodoId::from("x1"))]))
        );
    }

    #[test]
    fn bare_add_submits_empty_form() {
        assert_eq!(
            parse_input("add", &state()),
            Ok(Action::Run(vec![Command::SetContent(String::new()), Command::Submit]))
        );
    }

    #[test]
    fn positions_resolve_to_ids() {
        assert_eq!(
            parse_input("edit 2", &state()),
            Ok(Action::Run(vec![Command::Edit(TodoId::from("x2"))]))
        );
        assert_eq!(
            parse_input("delete 1", &state()),
            Ok(Action::Run(vec![Command::Delete(TodoId::from("x1"))]))
        );
    }

    #[test]
    fn bad_positions_are_rejected() {
        assert_eq!(
            parse_input("edit", &state()),
            Err(InputError::MissingPosition("edit"))
        );
        for bad in ["0", "3", "two", "-1"] {
            assert_eq!(
                parse_input(&format!("delete {bad}"), &state()),
                Err(InputError::NoSuchPosition(bad.to_string()))
            );
        }
    }

    #[test]
    fn simple_words() {
        let s = state();
        assert_eq!(parse_input("", &s), Ok(Action::List));
        assert_eq!(parse_input("  list", &s), Ok(Action::List));
        assert_eq!(parse_input("help", &s), Ok(Action::Help));
        assert_eq!(parse_input("quit", &s), Ok(Action::Quit));
        assert_eq!(parse_input("clear", &s), Ok(Action::Run(vec![Command::ClearAll])));
        assert_eq!(parse_input("submit", &s), Ok(Action::Run(vec![Command::Submit])));
    }

    #[test]
    fn unknown_word_is_an_error() {
        assert_eq!(
            parse_input("frobnicate 3", &state()),
            Err(InputError::Unknown("frobnicate".to_string()))
        );
    }
}
