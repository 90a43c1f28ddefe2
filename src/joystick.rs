//! Joystick intent decoding.
//!
//! One sample of both analog axes plus the push-button is classified
//! against fixed threshold bands. The bands are asymmetric and
//! non-overlapping so the rest position (~2048 on both axes) always
//! decodes to None without a calibration step.

/// One poll cycle's worth of joystick input. `pressed` is the
/// debounce-free level of the active-low push-button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
    pub pressed: bool,
}

impl JoystickSample {
    /// A sample with the stick at rest and the button released.
    pub const fn rest() -> Self {
        JoystickSample {
            x: 2048,
            y: 2048,
            pressed: false,
        }
    }
}

/// Discrete intent decoded from one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Intent {
    None,
    PageNext,
    PagePrev,
    Increase,
    Decrease,
    Confirm,
}

// Page-switch bands: stick held left plus a full vertical deflection.
const PAGE_SWITCH_X_MAX: u16 = 2300;
const PAGE_NEXT_Y_MAX: u16 = 100;
const PAGE_PREV_Y_MIN: u16 = 4000;

// Timer-adjust bands: full horizontal deflection with the stick not
// pushed down past the vertical guard.
const ADJUST_Y_MAX: u16 = 1900;
const INCREASE_X_MAX: u16 = 100;
const DECREASE_X_MIN: u16 = 4000;

/// Classifies a sample against the page-switch bands.
/// Only PageNext, PagePrev or None can come back.
pub fn page_switch_intent(sample: &JoystickSample) -> Intent {
    if sample.x < PAGE_SWITCH_X_MAX && sample.y < PAGE_NEXT_Y_MAX {
        Intent::PageNext
    } else if sample.x < PAGE_SWITCH_X_MAX && sample.y > PAGE_PREV_Y_MIN {
        Intent::PagePrev
    } else {
        Intent::None
    }
}

/// Classifies a sample against the timer-adjust bands.
/// The button overrides the axes: a held button is always Confirm.
pub fn timer_adjust_intent(sample: &JoystickSample) -> Intent {
    if sample.pressed {
        Intent::Confirm
    } else if sample.x < INCREASE_X_MAX && sample.y < ADJUST_Y_MAX {
        Intent::Increase
    } else if sample.x > DECREASE_X_MIN && sample.y < ADJUST_Y_MAX {
        Intent::Decrease
    } else {
        Intent::None
    }
}
