/// A single unit of work in the todo list.
///
/// The id is assigned by the store and never changes afterwards; the
/// description is stored trimmed and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, description: &str) -> Self {
        Task {
            id,
            description: description.to_string(),
            completed: false,
        }
    }
}
