//! Line rendering for the 16x2 display.
//!
//! Every function here is pure formatting: state in, two text lines
//! out. The actual LCD writes happen in the firmware, which hands
//! line 2 through [`with_page_indicator`] so the page marker always
//! survives truncation.

use crate::clock::{twelve_hour, LocalTime};
use crate::pages::Page;
use heapless::String;
use ufmt::uwrite;

/// Visible columns on the character display.
pub const DISPLAY_COLUMNS: usize = 16;

/// Line 1 needs headroom for the two-byte degree sign; line 2 is
/// composed down to the visible width before it reaches the display.
pub type Line1 = String<24>;
pub type Line2 = String<16>;

/// Formats the clock page: time plus temperature on top, date below.
/// The sentinel temperature (-999) is rendered like any other value.
pub fn clock_lines(time: &LocalTime, temperature_c: i16) -> (Line1, Line2) {
    let (hour, pm) = twelve_hour(time.hour);
    let meridiem = if pm { "PM" } else { "AM" };

    let mut line1: Line1 = String::new();
    uwrite!(
        &mut line1,
        "{}:{} {}     {}\u{b0}C",
        hour,
        pad_number(time.minute),
        meridiem,
        temperature_c
    )
    .unwrap(); // Max str size 20

    let mut line2: Line2 = String::new();
    uwrite!(
        &mut line2,
        "{}/{}/{}",
        pad_number(time.day),
        pad_number(time.month),
        time.year
    )
    .unwrap(); // Max str size 10

    (line1, line2)
}

/// Formats the timer page while the duration is being set.
pub fn timer_idle_lines(set_minutes: u32) -> (Line1, Line2) {
    let mut line1: Line1 = String::new();
    uwrite!(&mut line1, "Set Timer:").unwrap();

    let mut line2: Line2 = String::new();
    uwrite!(&mut line2, "{} min", set_minutes).unwrap(); // Max str size 14

    (line1, line2)
}

/// Formats the timer page while counting down.
pub fn timer_running_lines(minutes: u32, seconds: u32) -> (Line1, Line2) {
    let mut line1: Line1 = String::new();
    uwrite!(&mut line1, "Timer:").unwrap();

    let mut line2: Line2 = String::new();
    uwrite!(&mut line2, "{}m {}s", minutes, seconds).unwrap(); // Max str size 15

    (line1, line2)
}

/// Formats the one-shot expiry frame.
pub fn timer_done_lines() -> (Line1, Line2) {
    let mut line2: Line2 = String::new();
    uwrite!(&mut line2, "Timer Done!").unwrap();
    (String::new(), line2)
}

/// Composes the final second line: the text, a space-padded gap, then
/// the page indicator flush right. The text is truncated if it would
/// collide with the indicator; the indicator itself never is.
pub fn with_page_indicator(text: &str, page: Page) -> String<16> {
    let mut indicator: String<8> = String::new();
    uwrite!(&mut indicator, "({}/{})", page.number(), Page::TOTAL).unwrap();

    let available = DISPLAY_COLUMNS - indicator.len();

    let mut line: String<16> = String::new();
    for c in text.chars().take(available) {
        line.push(c).unwrap();
    }
    while line.len() < available {
        line.push(' ').unwrap();
    }
    line.push_str(&indicator).unwrap();
    line
}

/// Pads a number with a zero before it if < 10
/// NOTE: Only supports values <100
/// param num: number to be padded
/// returns: String with formatted value
fn pad_number(num: u8) -> String<2> {
    let mut padded = String::new();
    if num < 10 {
        uwrite!(padded, "0{}", num).unwrap();
    } else {
        uwrite!(padded, "{}", num).unwrap();
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> LocalTime {
        LocalTime {
            second: 56,
            minute: 34,
            hour: 12,
            day: 6,
            month: 8,
            year: 2026,
        }
    }

    #[test]
    fn clock_lines_match_the_fixed_layout() {
        let (line1, line2) = clock_lines(&noon(), 25);
        assert_eq!(line1.as_str(), "12:34 PM     25\u{b0}C");
        assert_eq!(line2.as_str(), "06/08/2026");
    }

    #[test]
    fn clock_lines_zero_pad_minutes_but_not_hours() {
        let mut t = noon();
        t.hour = 9;
        t.minute = 5;
        let (line1, _) = clock_lines(&t, 25);
        assert_eq!(line1.as_str(), "9:05 AM     25\u{b0}C");
    }

    #[test]
    fn midnight_renders_as_twelve_am() {
        let mut t = noon();
        t.hour = 0;
        t.minute = 0;
        let (line1, _) = clock_lines(&t, 18);
        assert_eq!(line1.as_str(), "12:00 AM     18\u{b0}C");
    }

    #[test]
    fn sensor_fault_is_still_rendered() {
        let (line1, _) = clock_lines(&noon(), -999);
        assert_eq!(line1.as_str(), "12:34 PM     -999\u{b0}C");
    }

    #[test]
    fn timer_lines_cover_all_three_shapes() {
        let (line1, line2) = timer_idle_lines(15);
        assert_eq!((line1.as_str(), line2.as_str()), ("Set Timer:", "15 min"));

        let (line1, line2) = timer_running_lines(4, 59);
        assert_eq!((line1.as_str(), line2.as_str()), ("Timer:", "4m 59s"));

        let (line1, line2) = timer_done_lines();
        assert_eq!((line1.as_str(), line2.as_str()), ("", "Timer Done!"));
    }

    #[test]
    fn rendering_is_free_of_hidden_state() {
        let t = noon();
        assert_eq!(clock_lines(&t, 25), clock_lines(&t, 25));
        assert_eq!(timer_running_lines(1, 30), timer_running_lines(1, 30));
    }

    #[test]
    fn indicator_sits_flush_right_with_padding() {
        let line = with_page_indicator("06/08/2026", Page::Clock);
        assert_eq!(line.as_str(), "06/08/2026 (1/2)");
        assert_eq!(line.len(), DISPLAY_COLUMNS);
    }

    #[test]
    fn overflowing_text_is_truncated_never_the_indicator() {
        let line = with_page_indicator("0123456789ABCDEF", Page::Timer);
        assert_eq!(line.as_str(), "0123456789A(2/2)");
        assert_eq!(line.len(), DISPLAY_COLUMNS);
    }

    #[test]
    fn exact_fit_text_is_kept_whole() {
        // "Timer Done!" is eleven characters, exactly the space left
        // beside the indicator.
        let line = with_page_indicator("Timer Done!", Page::Timer);
        assert_eq!(line.as_str(), "Timer Done!(2/2)");
    }

    #[test]
    fn empty_text_pads_up_to_the_indicator() {
        let line = with_page_indicator("", Page::Timer);
        assert_eq!(line.as_str(), "           (2/2)");
    }
}
