// src/lib.rs

pub mod child;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod verdict;

use anyhow::{Context, Result};

use crate::engine::{Supervisor, SupervisorOptions};
use crate::verdict::{OutcomeKind, Tally};

/// High-level entry point used by `main.rs` for parent mode.
///
/// Spawns `children` sessions re-invoking the current executable in child
/// mode, waits for every one of them, prints the tally report, and fails
/// the run if the announced and received counts disagree anywhere.
pub async fn run(children: u32) -> Result<()> {
    let exe = std::env::current_exe().context("resolving current executable")?;

    println!("children to spawn: {children}");

    let supervisor = Supervisor::new(SupervisorOptions { exe, children });
    let tally = supervisor.run().await?;

    print_summary(&tally);
    tally.reconcile()?;
    Ok(())
}

/// Print the six counters, one per line, followed by `done`.
fn print_summary(tally: &Tally) {
    for kind in OutcomeKind::ALL {
        println!("{kind} announced = {}", tally.announced(kind));
        println!("{kind} received = {}", tally.received(kind));
    }
    println!("done");
}
