// src/exec/mod.rs

//! Process execution layer.
//!
//! One session task per spawned child: it owns the child's stdout pipe and
//! process handle, drains the pipe, reaps the process, and reports a
//! completion event back to the supervisor.

pub mod session;

pub use session::{SessionEvent, SessionReport, spawn_sessions};
