//! Countdown timer engine.
//!
//! Two states: idle (duration being configured) and running (counting
//! down against a monotonic millisecond reference supplied by the
//! caller). Expiry is reported exactly once, then the timer is idle
//! again with its configured duration intact so it can be re-armed
//! with a single confirm.

use crate::joystick::Intent;

/// Minutes added or removed per adjustment step.
pub const ADJUST_STEP_MINUTES: u32 = 5;

const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

/// What the timer reports for one poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerStatus {
    /// Not counting; shows the configured duration.
    Idle { set_minutes: u32 },
    /// Counting down; remaining time split for display.
    Running { minutes: u32, seconds: u32 },
    /// The countdown just hit zero. Reported on exactly one poll.
    Expired,
}

pub struct CountdownTimer {
    set_minutes: u32,
    running: bool,
    // Monotonic millis captured at confirm; meaningful only while running.
    started_at: u64,
}

impl CountdownTimer {
    pub fn new() -> CountdownTimer {
        CountdownTimer {
            set_minutes: 0,
            running: false,
            started_at: 0,
        }
    }

    pub fn set_minutes(&self) -> u32 {
        self.set_minutes
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds one step to the configured duration. Ignored while running.
    pub fn increase(&mut self) {
        if !self.running {
            self.set_minutes = self.set_minutes.saturating_add(ADJUST_STEP_MINUTES);
        }
    }

    /// Removes one step from the configured duration, floored at zero.
    /// Ignored while running.
    pub fn decrease(&mut self) {
        if !self.running {
            self.set_minutes = self.set_minutes.saturating_sub(ADJUST_STEP_MINUTES);
        }
    }

    /// Starts the countdown from `now_ms`. Confirming while already
    /// running restarts the countdown from the new reference.
    pub fn confirm(&mut self, now_ms: u64) {
        self.running = true;
        self.started_at = now_ms;
    }

    /// Routes a decoded timer-page intent into the state machine.
    pub fn apply(&mut self, intent: Intent, now_ms: u64) {
        match intent {
            Intent::Increase => self.increase(),
            Intent::Decrease => self.decrease(),
            Intent::Confirm => self.confirm(now_ms),
            _ => {}
        }
    }

    /// Advances the engine against the monotonic clock.
    /// Expired transitions the timer back to idle and is reported only
    /// for the poll on which the countdown reached zero.
    pub fn poll(&mut self, now_ms: u64) -> TimerStatus {
        if !self.running {
            return TimerStatus::Idle {
                set_minutes: self.set_minutes,
            };
        }

        let elapsed = now_ms.saturating_sub(self.started_at);
        let remaining = (self.set_minutes as u64 * MILLIS_PER_MINUTE).saturating_sub(elapsed);

        if remaining == 0 {
            self.running = false;
            return TimerStatus::Expired;
        }

        TimerStatus::Running {
            minutes: (remaining / MILLIS_PER_MINUTE) as u32,
            seconds: ((remaining % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}
