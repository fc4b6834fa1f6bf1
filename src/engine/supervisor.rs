// src/engine/supervisor.rs

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::exec::{SessionEvent, spawn_sessions};
use crate::verdict::{ExitKind, Tally, classify_session};

/// Options for one supervision run.
#[derive(Debug, Clone)]
pub struct SupervisorOptions {
    /// Executable to re-invoke in child mode (normally the current one).
    pub exe: PathBuf,
    /// How many children to spawn; tokens are assigned `0..children`.
    pub children: u32,
}

/// Drives one run: spawns the sessions, consumes their completion events,
/// and produces the final tally.
pub struct Supervisor {
    options: SupervisorOptions,
}

impl Supervisor {
    pub fn new(options: SupervisorOptions) -> Self {
        Self { options }
    }

    /// Run every session to completion and return the resulting tally.
    ///
    /// Classification happens here, one event at a time, so the tally is
    /// only ever touched from this loop. The join set is drained afterwards
    /// to guarantee every OS process has been reaped before the tally
    /// escapes.
    pub async fn run(self) -> Result<Tally> {
        let count = self.options.children;
        info!(children = count, "supervisor starting");

        let (events_tx, mut events_rx) = mpsc::channel::<SessionEvent>(count.max(1) as usize);
        let mut sessions = spawn_sessions(&self.options.exe, count, events_tx);

        let mut tally = Tally::new();
        let mut finished = 0u32;
        while let Some(event) = events_rx.recv().await {
            debug!(?event, "supervisor received event");

            match event {
                SessionEvent::Finished(report) => {
                    classify_session(
                        report.token,
                        &report.output,
                        ExitKind::from_status(report.status),
                        &mut tally,
                    );
                }
                SessionEvent::Failed { token } => {
                    warn!(token, "session did not complete; nothing to classify");
                }
            }

            finished += 1;
            if finished == count {
                break;
            }
        }

        // All events are in; every session task (and with it every child
        // process) must be fully finished before the tally is handed out.
        while sessions.join_next().await.is_some() {}

        info!(children = count, "supervisor finished");
        Ok(tally)
    }
}
