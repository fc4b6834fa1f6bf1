// src/exec/session.rs

//! Individual child session: spawn, drain stdout, reap, report.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

/// Size of the fixed buffer used to drain a child's stdout.
const READ_BUF_SIZE: usize = 32;

/// Everything observed about one finished child.
#[derive(Debug)]
pub struct SessionReport {
    pub token: u32,
    /// Complete stdout of the child, accumulated until the pipe closed.
    pub output: String,
    pub status: ExitStatus,
}

/// Events sent from session tasks back to the supervisor loop.
#[derive(Debug)]
pub enum SessionEvent {
    /// The child exited and its pipe has been fully drained.
    Finished(SessionReport),
    /// The session could not run to completion (spawn, read, or wait failed).
    Failed { token: u32 },
}

/// Spawn one session task per token in `0..count`, wired to `events_tx`.
///
/// Each task owns its child process end to end. The returned `JoinSet`
/// completes only once every child has been waited on, so draining it is
/// the caller's guarantee that all OS processes are reaped.
pub fn spawn_sessions(
    exe: &Path,
    count: u32,
    events_tx: mpsc::Sender<SessionEvent>,
) -> JoinSet<()> {
    let mut set = JoinSet::new();
    for token in 0..count {
        let exe = exe.to_path_buf();
        let events_tx = events_tx.clone();
        set.spawn(async move { run_session(exe, token, events_tx).await });
    }
    set
}

/// Run one child session to completion.
///
/// Errors are converted into a `Failed` event so the supervisor still sees
/// exactly one event per token.
async fn run_session(exe: PathBuf, token: u32, events_tx: mpsc::Sender<SessionEvent>) {
    match run_session_inner(&exe, token).await {
        Ok(report) => {
            let _ = events_tx.send(SessionEvent::Finished(report)).await;
        }
        Err(err) => {
            error!(token, error = %err, "session error");
            let _ = events_tx.send(SessionEvent::Failed { token }).await;
        }
    }
}

async fn run_session_inner(exe: &Path, token: u32) -> Result<SessionReport> {
    info!(token, "spawning child");

    let mut child = Command::new(exe)
        .arg("--child")
        .arg(token.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("spawning child for token {token}"))?;

    let mut stdout = child
        .stdout
        .take()
        .context("child stdout pipe was not captured")?;

    // Drain the pipe with one outstanding read at a time; a zero-length
    // read means the child closed its end.
    let mut raw = Vec::new();
    let mut buf = [0u8; READ_BUF_SIZE];
    loop {
        let n = stdout
            .read(&mut buf)
            .await
            .with_context(|| format!("reading stdout of child {token}"))?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }

    // The pipe is closed, so classification can never observe a partially
    // written stream; reap the process before reporting.
    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for child {token}"))?;

    debug!(token, bytes = raw.len(), status = ?status, "child finished");

    Ok(SessionReport {
        token,
        output: String::from_utf8_lossy(&raw).into_owned(),
        status,
    })
}
