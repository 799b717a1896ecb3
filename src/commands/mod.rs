//! Command dispatch: one raw input line in, user-facing messages out.
//!
//! Each supported command lives in its own module with a `cmd` function
//! taking the store and the parsed argument tokens. The dispatcher itself is
//! a pure function: it performs no I/O and returns the messages for the
//! caller to print, plus whether the session should keep running.

pub mod add;
pub mod complete;
pub mod delete;
pub mod help;
pub mod update;
pub mod view;

use crate::libs::messages::Message;
use crate::libs::parser;
use crate::msg_debug;
use crate::store::tasks::TaskStore;

/// Whether the session loop keeps running after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Parses one input line and applies it to the store.
///
/// Empty and whitespace-only lines produce no messages. `quit` and `exit`
/// are handled here since they touch the loop state rather than the store.
pub fn dispatch(store: &mut TaskStore, line: &str) -> (Vec<Message>, Outcome) {
    let Some((command, args)) = parser::parse_command(line) else {
        return (Vec::new(), Outcome::Continue);
    };
    msg_debug!("dispatching '{}' with {} args", command, args.len());

    match command.as_str() {
        "quit" | "exit" => (vec![Message::Farewell], Outcome::Quit),
        "add" => (add::cmd(store, &args), Outcome::Continue),
        "view" => (view::cmd(store), Outcome::Continue),
        "update" => (update::cmd(store, &args), Outcome::Continue),
        "complete" => (complete::cmd(store, &args), Outcome::Continue),
        "delete" => (delete::cmd(store, &args), Outcome::Continue),
        "help" => (help::cmd(), Outcome::Continue),
        other => (vec![Message::UnknownCommand(other.to_string())], Outcome::Continue),
    }
}
