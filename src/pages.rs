//! Page state and the per-cycle control flow.
//!
//! The controller owns the current page and the countdown timer. Each
//! poll it applies any page-switch gesture, dispatches to the active
//! page, and returns the two display lines for the cycle plus a
//! one-shot expiry marker for the speaker.

use crate::clock;
use crate::joystick::{self, Intent, JoystickSample};
use crate::rendering::{self, Line1, Line2};
use crate::thermistor;
use crate::timer::{CountdownTimer, TimerStatus};

/// Delay between poll cycles. The sole scheduling primitive: input
/// latency and display refresh are both bounded by it.
pub const POLL_INTERVAL_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    Clock,
    Timer,
}

impl Page {
    pub const TOTAL: u8 = 2;

    /// 1-based position shown in the page indicator.
    pub fn number(self) -> u8 {
        match self {
            Page::Clock => 1,
            Page::Timer => 2,
        }
    }
}

/// Everything one poll cycle produces for the outside world.
pub struct PollOutput {
    pub page: Page,
    pub line1: Line1,
    pub line2: Line2,
    /// Set on the single cycle the countdown reaches zero; the caller
    /// owes the beep pattern for it.
    pub timer_expired: bool,
}

pub struct PageController {
    page: Page,
    timer: CountdownTimer,
    daylight_saving: bool,
}

impl PageController {
    pub fn new(daylight_saving: bool) -> PageController {
        PageController {
            page: Page::Clock,
            timer: CountdownTimer::new(),
            daylight_saving,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// Runs one decode→dispatch→render cycle.
    /// param stick: this cycle's joystick sample
    /// param now_ms: monotonic milliseconds
    /// param utc_epoch: wall-clock seconds from the time source
    /// param thermistor_raw: this cycle's thermistor ADC counts
    pub fn poll(
        &mut self,
        stick: &JoystickSample,
        now_ms: u64,
        utc_epoch: u64,
        thermistor_raw: u16,
    ) -> PollOutput {
        // Page-switch bands are checked before dispatch on every
        // cycle, whichever page is showing.
        match joystick::page_switch_intent(stick) {
            Intent::PageNext => self.page = Page::Timer,
            Intent::PagePrev => self.page = Page::Clock,
            _ => {}
        }

        match self.page {
            Page::Clock => self.clock_cycle(utc_epoch, thermistor_raw),
            Page::Timer => self.timer_cycle(stick, now_ms),
        }
    }

    fn clock_cycle(&self, utc_epoch: u64, thermistor_raw: u16) -> PollOutput {
        let time = clock::local_time(utc_epoch, self.daylight_saving);
        let temperature = thermistor::celsius_from_raw(thermistor_raw);
        let (line1, line2) = rendering::clock_lines(&time, temperature);

        PollOutput {
            page: self.page,
            line1,
            line2,
            timer_expired: false,
        }
    }

    fn timer_cycle(&mut self, stick: &JoystickSample, now_ms: u64) -> PollOutput {
        self.timer
            .apply(joystick::timer_adjust_intent(stick), now_ms);

        let (timer_expired, (line1, line2)) = match self.timer.poll(now_ms) {
            TimerStatus::Idle { set_minutes } => (false, rendering::timer_idle_lines(set_minutes)),
            TimerStatus::Running { minutes, seconds } => {
                (false, rendering::timer_running_lines(minutes, seconds))
            }
            TimerStatus::Expired => (true, rendering::timer_done_lines()),
        };

        PollOutput {
            page: self.page,
            line1,
            line2,
            timer_expired,
        }
    }
}
