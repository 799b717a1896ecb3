use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::tasks::{StoreError, TaskStore};

/// Creates a new task from the argument tokens joined with spaces.
pub fn cmd(store: &mut TaskStore, args: &[String]) -> Vec<Message> {
    if args.is_empty() {
        return vec![Message::MissingDescription];
    }

    let description = args.join(" ");
    match store.create(&description) {
        Ok(task) => vec![Message::TaskAdded(View::task(&task))],
        Err(StoreError::EmptyDescription) => vec![Message::EmptyDescription],
    }
}
