/// Every user-facing message in the application.
///
/// All text lives in the `Display` implementation in `display.rs`; the rest
/// of the code only ever constructs variants, so wording changes stay in one
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === SESSION MESSAGES ===
    Greeting,
    GreetingHint,
    Farewell,

    // === TASK MESSAGES ===
    TaskAdded(String),   // rendered task
    TaskLine(String),    // rendered task, one row of a listing
    NoTasks,
    TaskUpdated(u64),
    TaskCompleted(u64),
    TaskDeleted(u64),
    TaskNotFound(u64),

    // === VALIDATION MESSAGES ===
    EmptyDescription,
    InvalidIdFormat,
    MissingDescription,
    MissingIdAndDescription,
    MissingId(&'static str), // command name, e.g. "complete"

    // === DISPATCH MESSAGES ===
    UnknownCommand(String),
    Help,
}
