//! Krotos - Interactive Greeter Prop Firmware
//!
//! Main firmware binary for RP2040-based greeter props. Two palm buttons
//! trigger a coordinated dual-servo arm sweep and a sound cue from a
//! serial MP3 module.
//!
//! Named after the Greek "krotos" (κρότος) meaning "clap".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use krotos_core::config::CycleConfig;
use krotos_core::control::Device;
use krotos_core::traits::CueBackend;
use krotos_drivers::audio::CueModule;
use krotos_drivers::servo::ServoPair;

mod tasks;

/// Servo PWM frame: 125 MHz / 100 / 25_000 = 50 Hz
const PWM_DIVIDER: u8 = 100;
const PWM_TOP: u16 = 24_999;

/// Cue module UART baud rate
const CUE_BAUD: u32 = 9_600;

/// Settle time after a cue module reset before it accepts commands
const RESET_SETTLE_MS: u64 = 600;

/// Settle time between ordinary bring-up commands
const COMMAND_SETTLE_MS: u64 = 50;

/// Fixed backoff between failed bring-up attempts
const BRINGUP_RETRY_MS: u64 = 500;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Krotos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = CycleConfig::default();

    // Palm buttons: active-low with internal pull-ups
    let left_button = Input::new(p.PIN_14, Pull::Up);
    let right_button = Input::new(p.PIN_15, Pull::Up);

    // Arm servos: one PWM slice each, channel A, 50 Hz frame
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = PWM_DIVIDER.into();
    pwm_config.top = PWM_TOP;

    let (left_servo, _) = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config.clone()).split();
    let (right_servo, _) = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, pwm_config).split();
    let arms = ServoPair::new(unwrap!(left_servo), unwrap!(right_servo));

    // Cue module: TX-only UART, framed commands are fire-and-forget
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = CUE_BAUD;
    let cue_uart = UartTx::new_blocking(p.UART1, p.PIN_8, uart_config);
    let mut cue = CueModule::new(cue_uart);

    // Bring up the cue module (reset, storage scan, volume) with a fixed
    // backoff. The prop stays unresponsive until this succeeds: arming
    // the control loop without a working cue path is worse than halting.
    let mut attempt = 1u32;
    loop {
        match bring_up_cue(&mut cue, config.volume).await {
            Ok(()) => {
                info!("Cue module ready (attempt {})", attempt);
                break;
            }
            Err(_) => {
                warn!("Cue module bring-up failed (attempt {}), retrying", attempt);
                attempt += 1;
                Timer::after_millis(BRINGUP_RETRY_MS).await;
            }
        }
    }

    // Seed the controller from the current button reads
    let device = Device::new(
        config,
        arms,
        cue,
        left_button.is_high(),
        right_button.is_high(),
        0,
    );

    unwrap!(spawner.spawn(tasks::control::control_task(
        device,
        left_button,
        right_button
    )));
    info!("Control loop running");
}

/// Cue module bring-up sequence
///
/// The module rescans its microSD card after a reset and ignores commands
/// until the scan finishes, hence the settle delays between steps.
async fn bring_up_cue<W: embedded_io::Write>(
    cue: &mut CueModule<W>,
    volume: u8,
) -> Result<(), W::Error> {
    cue.reset()?;
    Timer::after_millis(RESET_SETTLE_MS).await;

    cue.select_sd()?;
    Timer::after_millis(COMMAND_SETTLE_MS).await;

    cue.set_volume(volume)
}
