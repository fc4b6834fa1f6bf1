// src/child.rs

//! Scripted child process used to exercise the supervisor.
//!
//! A child sleeps briefly, prints its token a few times, then announces one
//! of three fates on its last line and terminates accordingly: a clean
//! return, an explicit error status, or an abort.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::verdict::{ERROR_EXIT_CODE, OutcomeKind};

const STARTUP_DELAY: Duration = Duration::from_secs(1);
const LINE_DELAY: Duration = Duration::from_millis(100);

/// Run the scripted child to completion.
///
/// Only the clean ending actually returns; the other two terminate the
/// process on the spot.
pub async fn run(token: u32) {
    sleep(STARTUP_DELAY).await;

    let token_line = token.to_string();
    let mut rng = rand::rng();
    let repeats = rng.random_range(3..13);
    for _ in 0..repeats {
        print_line(&token_line).await;
    }

    // Aborting only reads back as a distinct outcome where the OS reports
    // termination signals, so elsewhere the child sticks to the two
    // status-coded endings.
    let endings = if cfg!(unix) { 3 } else { 2 };
    match rng.random_range(0..endings) {
        0 => print_line(OutcomeKind::NormalExit.sentinel()).await,
        1 => {
            print_line(OutcomeKind::ErrorExit.sentinel()).await;
            std::process::exit(ERROR_EXIT_CODE);
        }
        _ => {
            print_line(OutcomeKind::Crash.sentinel()).await;
            std::process::abort();
        }
    }
}

/// Print one protocol line and pause.
///
/// Stdout is line-buffered, so the line is flushed before any abrupt
/// termination that follows.
async fn print_line(line: &str) {
    println!("{line}");
    sleep(LINE_DELAY).await;
}
