// src/verdict/tally.rs

use crate::errors::HarnessError;
use crate::verdict::classify::OutcomeKind;

/// Six counters: announced and received totals per outcome kind.
///
/// Owned by the supervisor loop for the duration of a run and handed to the
/// reconciliation check once every session has completed. All mutation goes
/// through [`record_announced`](Tally::record_announced) and
/// [`record_received`](Tally::record_received) on that single loop, so no
/// synchronization is involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    normal_announced: u64,
    normal_received: u64,
    error_announced: u64,
    error_received: u64,
    crash_announced: u64,
    crash_received: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a child's self-reported outcome.
    pub fn record_announced(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::NormalExit => self.normal_announced += 1,
            OutcomeKind::ErrorExit => self.error_announced += 1,
            OutcomeKind::Crash => self.crash_announced += 1,
        }
    }

    /// Count an outcome observed through the OS exit status.
    pub fn record_received(&mut self, kind: OutcomeKind) {
        match kind {
            OutcomeKind::NormalExit => self.normal_received += 1,
            OutcomeKind::ErrorExit => self.error_received += 1,
            OutcomeKind::Crash => self.crash_received += 1,
        }
    }

    pub fn announced(&self, kind: OutcomeKind) -> u64 {
        match kind {
            OutcomeKind::NormalExit => self.normal_announced,
            OutcomeKind::ErrorExit => self.error_announced,
            OutcomeKind::Crash => self.crash_announced,
        }
    }

    pub fn received(&self, kind: OutcomeKind) -> u64 {
        match kind {
            OutcomeKind::NormalExit => self.normal_received,
            OutcomeKind::ErrorExit => self.error_received,
            OutcomeKind::Crash => self.crash_received,
        }
    }

    /// Check that the children's self-reports agree with what the OS said.
    ///
    /// A mismatch means the classification protocol itself was unsound for
    /// this run, not that a single child misbehaved; callers must treat it
    /// as fatal.
    pub fn reconcile(&self) -> Result<(), HarnessError> {
        for kind in OutcomeKind::ALL {
            let announced = self.announced(kind);
            let received = self.received(kind);
            if announced != received {
                return Err(HarnessError::TallyMismatch {
                    kind,
                    announced,
                    received,
                });
            }
        }
        Ok(())
    }
}
