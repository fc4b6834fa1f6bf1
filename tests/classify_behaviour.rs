use std::error::Error;

use exitcheck::errors::HarnessError;
use exitcheck::verdict::{ERROR_EXIT_CODE, ExitKind, OutcomeKind, Tally, classify_session};

type TestResult = Result<(), Box<dyn Error>>;

fn classified(token: u32, output: &str, exit: ExitKind) -> Tally {
    let mut tally = Tally::new();
    classify_session(token, output, exit, &mut tally);
    tally
}

#[test]
fn clean_exit_with_matching_sentinel_balances() -> TestResult {
    let tally = classified(0, "0\n0\n0\nexit\n", ExitKind::exited(0));

    assert_eq!(tally.announced(OutcomeKind::NormalExit), 1);
    assert_eq!(tally.received(OutcomeKind::NormalExit), 1);
    assert_eq!(tally.announced(OutcomeKind::ErrorExit), 0);
    assert_eq!(tally.announced(OutcomeKind::Crash), 0);
    tally.reconcile()?;

    Ok(())
}

#[test]
fn error_exit_with_error_status_balances() -> TestResult {
    let tally = classified(0, "0\nerror\n", ExitKind::exited(ERROR_EXIT_CODE));

    assert_eq!(tally.announced(OutcomeKind::ErrorExit), 1);
    assert_eq!(tally.received(OutcomeKind::ErrorExit), 1);
    assert_eq!(tally.announced(OutcomeKind::NormalExit), 0);
    tally.reconcile()?;

    Ok(())
}

#[test]
fn signal_termination_scores_as_crash() -> TestResult {
    // SIGABRT on the platforms where signals are reported at all.
    let tally = classified(3, "3\ncrash\n", ExitKind::signalled(6));

    assert_eq!(tally.announced(OutcomeKind::Crash), 1);
    assert_eq!(tally.received(OutcomeKind::Crash), 1);
    tally.reconcile()?;

    Ok(())
}

#[test]
fn no_output_records_nothing() -> TestResult {
    let tally = classified(1, "", ExitKind::exited(0));

    assert_eq!(tally, Tally::new());
    tally.reconcile()?;

    Ok(())
}

#[test]
fn unknown_exit_status_leaves_tally_unbalanced() {
    let tally = classified(1, "1\nexit\n", ExitKind::exited(7));

    assert_eq!(tally.announced(OutcomeKind::NormalExit), 1);
    assert_eq!(tally.received(OutcomeKind::NormalExit), 0);

    match tally.reconcile() {
        Err(HarnessError::TallyMismatch {
            kind,
            announced,
            received,
        }) => {
            assert_eq!(kind, OutcomeKind::NormalExit);
            assert_eq!(announced, 1);
            assert_eq!(received, 0);
        }
        other => panic!("expected a tally mismatch, got {other:?}"),
    }
}

#[test]
fn unknown_sentinel_is_not_announced() {
    let tally = classified(2, "2\n2\n", ExitKind::exited(0));

    for kind in OutcomeKind::ALL {
        assert_eq!(tally.announced(kind), 0);
    }
    assert_eq!(tally.received(OutcomeKind::NormalExit), 1);
    assert!(tally.reconcile().is_err());
}

#[test]
fn token_mismatch_does_not_affect_counts() -> TestResult {
    // A stray non-token line is a diagnostic, never a tally change.
    let tally = classified(5, "5\n99\n5\nexit\n", ExitKind::exited(0));

    assert_eq!(tally.announced(OutcomeKind::NormalExit), 1);
    assert_eq!(tally.received(OutcomeKind::NormalExit), 1);
    tally.reconcile()?;

    Ok(())
}

#[test]
fn classification_is_idempotent() {
    let output = "4\n4\nerror\n";
    let exit = ExitKind::exited(ERROR_EXIT_CODE);

    let once = classified(4, output, exit);

    let mut twice = Tally::new();
    classify_session(4, output, exit, &mut twice);
    classify_session(4, output, exit, &mut twice);

    for kind in OutcomeKind::ALL {
        assert_eq!(twice.announced(kind), 2 * once.announced(kind));
        assert_eq!(twice.received(kind), 2 * once.received(kind));
    }
}

#[test]
fn carriage_returns_classify_like_newlines() {
    let with_cr = classified(0, "0\r0\rexit\r", ExitKind::exited(0));
    let with_nl = classified(0, "0\n0\nexit\n", ExitKind::exited(0));

    assert_eq!(with_cr, with_nl);
}

#[test]
fn mixed_outcomes_sum_independently_of_order() -> TestResult {
    let sessions: Vec<(u32, &str, ExitKind)> = vec![
        (0, "0\nexit\n", ExitKind::exited(0)),
        (1, "1\nerror\n", ExitKind::exited(ERROR_EXIT_CODE)),
        (2, "2\n2\nexit\n", ExitKind::exited(0)),
        (3, "3\ncrash\n", ExitKind::signalled(6)),
        (4, "", ExitKind::exited(0)),
    ];

    let mut forward = Tally::new();
    for (token, output, exit) in &sessions {
        classify_session(*token, output, *exit, &mut forward);
    }

    let mut backward = Tally::new();
    for (token, output, exit) in sessions.iter().rev() {
        classify_session(*token, output, *exit, &mut backward);
    }

    assert_eq!(forward, backward);
    assert_eq!(forward.announced(OutcomeKind::NormalExit), 2);
    assert_eq!(forward.announced(OutcomeKind::ErrorExit), 1);
    assert_eq!(forward.announced(OutcomeKind::Crash), 1);
    forward.reconcile()?;

    Ok(())
}
