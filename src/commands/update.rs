use crate::libs::messages::Message;
use crate::libs::parser;
use crate::store::tasks::{StoreError, TaskStore};

/// Replaces a task's description.
///
/// Checks run in order: argument count, id format, description emptiness,
/// then existence. The store performs the emptiness check itself so the
/// ordering holds even for ids that turn out not to exist.
pub fn cmd(store: &mut TaskStore, args: &[String]) -> Vec<Message> {
    if args.len() < 2 {
        return vec![Message::MissingIdAndDescription];
    }

    let Some(id) = parser::parse_task_id(&args[0]) else {
        return vec![Message::InvalidIdFormat];
    };

    let description = args[1..].join(" ");
    match store.update(id, &description) {
        Ok(true) => vec![Message::TaskUpdated(id)],
        Ok(false) => vec![Message::TaskNotFound(id)],
        Err(StoreError::EmptyDescription) => vec![Message::EmptyDescription],
    }
}
