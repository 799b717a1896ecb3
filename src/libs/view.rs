use super::task::Task;

/// Console rendering for task records.
pub struct View {}

impl View {
    /// Renders a task as `<id> - <description> [X]` when completed and
    /// `<id> - <description> [ ]` otherwise.
    pub fn task(task: &Task) -> String {
        let marker = if task.completed { "X" } else { " " };
        format!("{} - {} [{}]", task.id, task.description, marker)
    }
}
