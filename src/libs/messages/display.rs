//! Display implementation for application messages.
//!
//! The single source of truth for all user-facing text. Variants with
//! parameters interpolate them here, so callers never format message text
//! themselves and the session transcript stays consistent.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

const HELP_TEXT: &str = "Available commands:
  add \"description\"        Add a new todo
  view                     List all todos
  update id \"description\"  Update a todo's description
  complete id              Mark a todo as complete
  delete id                Delete a todo
  help                     Show this help message
  quit, exit               Exit the application";

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Greeting => "Todo CLI Application".to_string(),
            Message::GreetingHint => "Type 'help' for available commands or 'quit' to exit.".to_string(),
            Message::Farewell => "Goodbye!".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(task) => format!("Added todo: {}", task),
            Message::TaskLine(task) => task.clone(),
            Message::NoTasks => "No todos in the list.".to_string(),
            Message::TaskUpdated(id) => format!("Updated todo {} successfully", id),
            Message::TaskCompleted(id) => format!("Marked todo {} as complete", id),
            Message::TaskDeleted(id) => format!("Deleted todo {} successfully", id),
            Message::TaskNotFound(id) => format!("Error: Todo with ID {} not found", id),

            // === VALIDATION MESSAGES ===
            Message::EmptyDescription => "Error: Description cannot be empty".to_string(),
            Message::InvalidIdFormat => "Error: Invalid ID format. ID must be a positive integer.".to_string(),
            Message::MissingDescription => "Error: Missing description. Usage: add \"description\"".to_string(),
            Message::MissingIdAndDescription => "Error: Missing ID or description. Usage: update id \"new description\"".to_string(),
            Message::MissingId(command) => format!("Error: Missing ID. Usage: {} id", command),

            // === DISPATCH MESSAGES ===
            Message::UnknownCommand(name) => format!("Unknown command: {}. Type 'help' for available commands.", name),
            Message::Help => HELP_TEXT.to_string(),
        };
        write!(f, "{}", text)
    }
}
