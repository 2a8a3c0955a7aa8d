//! Password gate in front of admin mode.

use log::warn;

/// Result of one password attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Granted,
    /// Wrong code, more attempts left
    Retry { remaining: u32 },
    /// Wrong code, no attempts left
    LockedOut,
}

/// Fixed-code gate with a bounded number of attempts.
#[derive(Debug)]
pub struct AdminGate {
    code: i32,
    remaining: u32,
}

impl AdminGate {
    pub fn new(code: i32, tries: u32) -> Self {
        Self {
            code,
            remaining: tries,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn attempt(&mut self, code: i32) -> GateOutcome {
        if self.remaining == 0 {
            return GateOutcome::LockedOut;
        }
        if code == self.code {
            return GateOutcome::Granted;
        }
        self.remaining -= 1;
        warn!("wrong admin code, {} attempts left", self.remaining);
        if self.remaining == 0 {
            GateOutcome::LockedOut
        } else {
            GateOutcome::Retry {
                remaining: self.remaining,
            }
        }
    }
}
