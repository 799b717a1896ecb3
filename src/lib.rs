//! # Tido - Tiny Interactive to-DO list
//!
//! An interactive command-line utility for managing a session-scoped todo
//! list: create, view, update, complete, and delete short text tasks.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete, and delete tasks
//! - **Sequential IDs**: Auto-incrementing identifiers, never reused
//! - **Quote-Aware Parsing**: Double-quoted arguments keep their spaces
//! - **Session Scope**: All tasks live in memory and vanish on exit
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tido::libs::repl::Repl;
//!
//! fn main() -> anyhow::Result<()> {
//!     Repl::new().run()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
