//! Text rendering of the form and list.

use colored::Colorize;
use todoform_core::{FormMode, TodoState};

const PLACEHOLDER: &str = "Add your new todo";

pub fn render(state: &TodoState) -> String {
    let form = state.form();
    let mut lines = vec!["Todo App".bold().to_string()];

    let mode = match &form.mode {
        FormMode::Idle => "[new]".normal(),
        FormMode::Editing(_) => "[editing]".yellow(),
    };
    if form.content.is_empty() {
        lines.push(format!("{mode} {}", PLACEHOLDER.dimmed()));
    } else {
        lines.push(format!("{mode} {}", form.content));
    }
    if let Some(message) = &form.validation_message {
        lines.push(message.red().to_string());
    }

    for (index, item) in state.items().iter().enumerate() {
        let marker = if form.edit_target() == Some(&item.id) { "*" } else { " " };
        lines.push(format!("{marker}{:>3}. {}", index + 1, item.content));
    }

    let count = format!("You have {} pending tasks", state.pending_count());
    lines.push(count.bold().to_string());
    lines.join("\n")
}
