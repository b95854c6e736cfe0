use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTiming {
    pub step_interval: Duration,
    pub step_percent: u8,
    pub settle_delay: Duration,
}

impl Default for UploadTiming {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(200),
            step_percent: 10,
            settle_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Transferring {
        percent: u8,
        next_step_at: Instant,
    },
    Settling {
        ready_at: Instant,
    },
}

/// Fake transfer progress. Nothing is read or written; the counter climbs
/// on a fixed cadence and the cycle ends after a short settle delay.
///
/// Deadline based: callers feed the current instant to [`advance`], so a
/// late or coalesced tick catches up instead of slowing the animation.
///
/// [`advance`]: UploadSimulation::advance
#[derive(Debug, Clone, Default)]
pub struct UploadSimulation {
    timing: UploadTiming,
    phase: Phase,
}

impl UploadSimulation {
    pub fn with_timing(timing: UploadTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
        }
    }

    pub fn timing(&self) -> UploadTiming {
        self.timing
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn percent(&self) -> u8 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Transferring { percent, .. } => percent,
            Phase::Settling { .. } => 100,
        }
    }

    /// Returns `false` (and changes nothing) if a cycle is already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = Phase::Transferring {
            percent: 0,
            next_step_at: now + self.timing.step_interval,
        };
        true
    }

    /// Apply every step due at `now`. Returns `true` on the call that ends
    /// the cycle.
    pub fn advance(&mut self, now: Instant) -> bool {
        loop {
            match self.phase {
                Phase::Idle => return false,
                Phase::Transferring {
                    percent,
                    next_step_at,
                } => {
                    if now < next_step_at {
                        return false;
                    }
                    self.phase = if percent >= 100 {
                        Phase::Settling {
                            ready_at: next_step_at + self.timing.settle_delay,
                        }
                    } else {
                        Phase::Transferring {
                            percent: percent.saturating_add(self.timing.step_percent).min(100),
                            next_step_at: next_step_at + self.timing.step_interval,
                        }
                    };
                }
                Phase::Settling { ready_at } => {
                    if now < ready_at {
                        return false;
                    }
                    self.phase = Phase::Idle;
                    return true;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
