use crate::libs::messages::Message;
use crate::libs::parser;
use crate::store::tasks::TaskStore;

/// Removes a task. Its id is never allocated again.
pub fn cmd(store: &mut TaskStore, args: &[String]) -> Vec<Message> {
    if args.is_empty() {
        return vec![Message::MissingId("delete")];
    }

    let Some(id) = parser::parse_task_id(&args[0]) else {
        return vec![Message::InvalidIdFormat];
    };

    if store.delete(id) {
        vec![Message::TaskDeleted(id)]
    } else {
        vec![Message::TaskNotFound(id)]
    }
}
