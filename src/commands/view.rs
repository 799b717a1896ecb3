use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::store::tasks::TaskStore;

/// Lists all tasks in insertion order, one rendered line each.
pub fn cmd(store: &TaskStore) -> Vec<Message> {
    let tasks = store.list();
    if tasks.is_empty() {
        return vec![Message::NoTasks];
    }

    tasks.into_iter().map(|task| Message::TaskLine(View::task(task))).collect()
}
