#![no_std]
#![no_main]

use bsp::entry;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::digital::OutputPin;
use embedded_hal_0_2::adc::OneShot;
use panic_probe as _;
use rp_pico::hal::Timer;

// Provide an alias for our BSP so we can switch targets quickly.
use rp_pico as bsp;

use bsp::hal::{clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use deskclock_rs::joystick::JoystickSample;
use deskclock_rs::pages::{PageController, PollOutput, POLL_INTERVAL_MS};
use deskclock_rs::rendering;
use hd44780_driver::bus::FourBitBus;
use hd44780_driver::charset::{CharsetUniversal, EmptyFallback};
use hd44780_driver::memory_map::StandardMemoryMap;
use hd44780_driver::setup::DisplayOptions4Bit;
use hd44780_driver::HD44780;
use rp_pico::hal;
use rp_pico::hal::adc::AdcPin;
use rp_pico::hal::gpio::bank0::{Gpio0, Gpio1, Gpio2, Gpio3, Gpio4, Gpio5, Gpio6};
use rp_pico::hal::gpio::{FunctionSio, Pin, PullDown, SioOutput};

// Pin map:
//   GPIO0..GPIO5  LCD rs / en / d4..d7 (4-bit bus)
//   GPIO6         speaker
//   GPIO22        joystick push-button (pull-up, active low)
//   GPIO26 (ADC0) joystick X axis
//   GPIO27 (ADC1) joystick Y axis
//   GPIO28 (ADC2) thermistor divider

type Lcd = HD44780<
    FourBitBus<
        Pin<Gpio0, FunctionSio<SioOutput>, PullDown>,
        Pin<Gpio1, FunctionSio<SioOutput>, PullDown>,
        Pin<Gpio2, FunctionSio<SioOutput>, PullDown>,
        Pin<Gpio3, FunctionSio<SioOutput>, PullDown>,
        Pin<Gpio4, FunctionSio<SioOutput>, PullDown>,
        Pin<Gpio5, FunctionSio<SioOutput>, PullDown>,
    >,
    StandardMemoryMap<16, 2>,
    EmptyFallback<CharsetUniversal>,
>;

type Speaker = Pin<Gpio6, FunctionSio<SioOutput>, PullDown>;

// Wall-clock seed: 2026-01-01 00:00:00 UTC. A network time source
// would replace this seed at startup and re-sync about once a minute;
// until then the monotonic timer carries the clock forward.
const BOOT_EPOCH_UTC: u64 = 1_767_225_600;

// Manual daylight-saving toggle, +1 hour when set.
const DAYLIGHT_SAVING: bool = false;

// Expiry beep pattern: two groups of three short beeps.
const BEEP_TONE_HZ: u32 = 5_000;
const BEEP_ON_MS: u32 = 200;
const BEEP_GAP_MS: u32 = 100;
const GROUP_GAP_MS: u32 = 500;
const BEEPS_PER_GROUP: u32 = 3;
const BEEP_GROUPS: u32 = 2;

#[entry]
fn main() -> ! {
    info!("DeskClockPi Starting");
    // Grab our singleton objects
    let mut pac = pac::Peripherals::take().unwrap();
    let _core = pac::CorePeripherals::take().unwrap();

    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure the clocks
    //
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // The single-cycle I/O block controls our GPIO pins
    let sio = hal::Sio::new(pac.SIO);

    // Set the pins up according to their function on this particular board
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let mut delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    // Set up the joystick: both axes on the ADC, button on GPIO
    let mut adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
    let mut stick_x = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let mut stick_y = AdcPin::new(pins.gpio27.into_floating_input()).unwrap();
    let mut stick_button = pins.gpio22.into_pull_up_input();

    // Set up the thermistor divider
    let mut thermistor_pin = AdcPin::new(pins.gpio28.into_floating_input()).unwrap();

    // Set up LCD1602
    let mut lcd: Lcd = HD44780::new(
        DisplayOptions4Bit::new(StandardMemoryMap::new()).with_pins(
            pins.gpio0.into_push_pull_output(),
            pins.gpio1.into_push_pull_output(),
            pins.gpio2.into_push_pull_output(),
            pins.gpio3.into_push_pull_output(),
            pins.gpio4.into_push_pull_output(),
            pins.gpio5.into_push_pull_output(),
        ),
        &mut delay,
    )
    .ok()
    .unwrap();

    // Set up speaker
    let mut speaker: Speaker = pins.gpio6.into_push_pull_output();

    let mut controller = PageController::new(DAYLIGHT_SAVING);

    info!("DeskClockPi Ready");

    loop {
        delay.delay_ms(POLL_INTERVAL_MS);

        let sample = JoystickSample {
            x: adc.read(&mut stick_x).unwrap(),
            y: adc.read(&mut stick_y).unwrap(),
            pressed: stick_button.is_low().unwrap(),
        };
        let thermistor_raw: u16 = adc.read(&mut thermistor_pin).unwrap();

        let now_us = delay.get_counter().ticks();
        let now_ms = now_us / 1_000;
        let utc_epoch = BOOT_EPOCH_UTC + now_us / 1_000_000;

        let out = controller.poll(&sample, now_ms, utc_epoch, thermistor_raw);
        debug!("page: {}", out.page);

        lcd_print(&mut lcd, &mut delay, &out);

        if out.timer_expired {
            info!("Timer expired");
            speaker_beeps(&mut speaker, &mut delay);
        }
    }
}

/// Writes one frame: line 1 as-is, line 2 composed with the page
/// indicator. The display drops anything past the visible width.
/// param lcd: LCD instance
/// param delay: Timer instance
/// param out: the poll cycle's output
fn lcd_print(lcd: &mut Lcd, delay: &mut Timer, out: &PollOutput) {
    lcd.clear(delay).unwrap();
    lcd.set_cursor_pos(0, delay).unwrap();
    lcd.write_str(&out.line1, delay).unwrap();

    let line2 = rendering::with_page_indicator(&out.line2, out.page);
    lcd.set_cursor_xy((0, 1), delay).unwrap();
    lcd.write_str(&line2, delay).unwrap();
}

/// Plays the full expiry pattern. Blocking; the poll loop resumes
/// only after the last beep.
fn speaker_beeps(speaker: &mut Speaker, delay: &mut Timer) {
    for group in 0..BEEP_GROUPS {
        for _ in 0..BEEPS_PER_GROUP {
            beep(speaker, delay, BEEP_ON_MS);
            delay.delay_ms(BEEP_GAP_MS);
        }
        if group + 1 < BEEP_GROUPS {
            delay.delay_ms(GROUP_GAP_MS);
        }
    }
}

/// Drives a square wave on the speaker pin for the given duration.
fn beep(speaker: &mut Speaker, delay: &mut Timer, duration_ms: u32) {
    let half_period_us = 1_000_000 / (2 * BEEP_TONE_HZ);
    let cycles = duration_ms * BEEP_TONE_HZ / 1_000;
    for _ in 0..cycles {
        speaker.set_high().unwrap();
        delay.delay_us(half_period_us);
        speaker.set_low().unwrap();
        delay.delay_us(half_period_us);
    }
}
