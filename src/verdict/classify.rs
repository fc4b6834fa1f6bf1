// src/verdict/classify.rs

use std::fmt;
use std::process::ExitStatus;

use tracing::warn;

use crate::verdict::lines::split_lines;
use crate::verdict::tally::Tally;

/// Exit code a child uses to report an application-level failure.
///
/// Returning a negative value from `main` shows up as 255 on POSIX; the
/// scripted child exits with the same value explicitly.
pub const ERROR_EXIT_CODE: i32 = 255;

/// How a child session ended, as seen from either side of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Clean exit, status 0.
    NormalExit,
    /// Explicit application-level failure, status [`ERROR_EXIT_CODE`].
    ErrorExit,
    /// Abnormal termination (the OS killed the process with a signal).
    Crash,
}

impl OutcomeKind {
    /// Every kind, in report order.
    pub const ALL: [OutcomeKind; 3] = [
        OutcomeKind::NormalExit,
        OutcomeKind::ErrorExit,
        OutcomeKind::Crash,
    ];

    /// The sentinel line a child prints to announce this outcome.
    pub fn sentinel(self) -> &'static str {
        match self {
            OutcomeKind::NormalExit => "exit",
            OutcomeKind::ErrorExit => "error",
            OutcomeKind::Crash => "crash",
        }
    }

    /// Parse a sentinel line back into an outcome kind.
    pub fn from_sentinel(line: &str) -> Option<Self> {
        match line {
            "exit" => Some(OutcomeKind::NormalExit),
            "error" => Some(OutcomeKind::ErrorExit),
            "crash" => Some(OutcomeKind::Crash),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::NormalExit => write!(f, "normal-exit"),
            OutcomeKind::ErrorExit => write!(f, "error-exit"),
            OutcomeKind::Crash => write!(f, "crash"),
        }
    }
}

/// Decoded OS exit status for one child.
///
/// `code` is set when the process exited on its own; `signal` when the OS
/// terminated it (unix only). Decoupled from `std::process::ExitStatus` so
/// classification stays pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitKind {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl ExitKind {
    /// Decode a standard library exit status.
    pub fn from_status(status: ExitStatus) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            Self {
                code: status.code(),
                signal: status.signal(),
            }
        }
        #[cfg(not(unix))]
        {
            Self {
                code: status.code(),
                signal: None,
            }
        }
    }

    /// A process that exited on its own with `code`.
    pub const fn exited(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    /// A process the OS terminated with `signal`.
    pub const fn signalled(signal: i32) -> Self {
        Self {
            code: None,
            signal: Some(signal),
        }
    }

    /// Map the decoded status onto an outcome, if the protocol knows it.
    ///
    /// Signal termination is a crash; only 0 and [`ERROR_EXIT_CODE`] are
    /// recognised status codes. Anything else is unclassified.
    pub fn outcome(self) -> Option<OutcomeKind> {
        if self.signal.is_some() {
            return Some(OutcomeKind::Crash);
        }
        match self.code {
            Some(0) => Some(OutcomeKind::NormalExit),
            Some(ERROR_EXIT_CODE) => Some(OutcomeKind::ErrorExit),
            _ => None,
        }
    }
}

/// Classify one finished session and record it into `tally`.
///
/// The child's self-report (sentinel line) and the OS-observed exit status
/// are counted independently; disagreements between the two are logged but
/// never fatal. A session that produced no output records nothing at all.
pub fn classify_session(token: u32, output: &str, exit: ExitKind, tally: &mut Tally) {
    let lines = split_lines(output);
    let Some((&sentinel, token_lines)) = lines.split_last() else {
        warn!(token, "child produced no output");
        return;
    };

    let announced = OutcomeKind::from_sentinel(sentinel);
    match announced {
        Some(kind) => tally.record_announced(kind),
        None => warn!(token, line = %sentinel, "last line is not a known sentinel"),
    }

    let expected = token.to_string();
    if let Some(bad) = token_lines.iter().find(|line| **line != expected) {
        warn!(token, line = %bad, "unexpected output line");
    }

    match exit.outcome() {
        Some(kind) => {
            tally.record_received(kind);
            if announced != Some(kind) {
                warn!(
                    token,
                    status = ?exit,
                    sentinel = %sentinel,
                    "exit status disagrees with announced outcome"
                );
            }
        }
        None => warn!(token, status = ?exit, "unclassified exit status"),
    }
}
