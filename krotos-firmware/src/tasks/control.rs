//! Control task
//!
//! The single cooperative thread of control: polls the palm buttons every
//! millisecond and feeds the device, which debounces input, advances the
//! greeting cycle, and drives the servos and the cue module. All shared
//! mutable state lives inside the device, so no locking is needed.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_rp::pwm::PwmOutput;
use embassy_rp::uart::{Blocking, UartTx};
use embassy_time::{Duration, Instant, Ticker};

use krotos_core::control::Device;
use krotos_drivers::audio::CueModule;
use krotos_drivers::servo::ServoPair;

/// Poll interval in milliseconds
///
/// Well under the 5 ms sweep step delay, so step deadlines are hit with
/// at most a millisecond of jitter.
pub const POLL_INTERVAL_MS: u64 = 1;

/// The concrete actuator pair on this board
pub type Arms = ServoPair<PwmOutput<'static>, PwmOutput<'static>>;

/// The concrete cue backend on this board
pub type Cue = CueModule<UartTx<'static, Blocking>>;

/// Control task - polls buttons and runs the greeting cycle
#[embassy_executor::task]
pub async fn control_task(
    mut device: Device<Arms, Cue>,
    left_button: Input<'static>,
    right_button: Input<'static>,
) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let start = Instant::now();
    let mut last_state = device.state();

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        device.poll(left_button.is_high(), right_button.is_high(), now_ms);

        let state = device.state();
        if state != last_state {
            debug!("State: {:?} -> {:?}", last_state, state);
            last_state = state;
        }
    }
}
