use crate::libs::messages::Message;
use crate::libs::parser;
use crate::store::tasks::TaskStore;

/// Marks a task as complete. Completing an already-complete task succeeds.
pub fn cmd(store: &mut TaskStore, args: &[String]) -> Vec<Message> {
    if args.is_empty() {
        return vec![Message::MissingId("complete")];
    }

    let Some(id) = parser::parse_task_id(&args[0]) else {
        return vec![Message::InvalidIdFormat];
    };

    if store.complete(id) {
        vec![Message::TaskCompleted(id)]
    } else {
        vec![Message::TaskNotFound(id)]
    }
}
