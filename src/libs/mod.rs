//! Core building blocks shared across the application.
//!
//! - `task`: the task record type
//! - `parser`: command-line tokenization and id validation
//! - `view`: task rendering for console output
//! - `repl`: the interactive read-eval-print loop boundary
//! - `messages`: centralized user-facing message system

pub mod messages;
pub mod parser;
pub mod repl;
pub mod task;
pub mod view;
