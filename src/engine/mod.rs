// src/engine/mod.rs

//! Supervision runtime.
//!
//! The supervisor spawns all child sessions, consumes their completion
//! events from a single loop, classifies each one into the tally, and only
//! hands the tally out once every underlying OS process has been reaped.

pub mod supervisor;

pub use supervisor::{Supervisor, SupervisorOptions};
