//! In-memory task storage.
//!
//! The store is the sole owner of task records and of id allocation; every
//! mutation goes through its methods. Nothing here touches the filesystem:
//! the whole collection lives and dies with the process.

pub mod tasks;
