//! Serial sound cue module driver
//!
//! The cue module is a microSD-backed MP3 player on a UART line,
//! commanded with the framed protocol in [`frame`]. The driver is generic
//! over any `embedded-io` writer so the transport can be a hardware UART
//! in firmware and a byte buffer in tests.
//!
//! Bring-up (reset, source selection, initial volume) needs settle time
//! between commands, so it is sequenced by the caller with its own delay
//! source and retried with backoff there; see the firmware crate.

pub mod frame;

use embedded_io::Write;

use krotos_core::traits::CueBackend;

use self::frame::{
    command_frame, CMD_PLAY_TRACK, CMD_RESET, CMD_SELECT_SOURCE, CMD_SET_VOLUME, CMD_STOP,
    MAX_VOLUME, SOURCE_SD,
};

/// Driver for the serial cue module
pub struct CueModule<W> {
    port: W,
}

impl<W> CueModule<W>
where
    W: Write,
{
    /// Create a driver over the given transport
    pub fn new(port: W) -> Self {
        Self { port }
    }

    /// Send one command frame
    fn send(&mut self, cmd: u8, param: u16) -> Result<(), W::Error> {
        self.port.write_all(&command_frame(cmd, param))?;
        self.port.flush()
    }

    /// Reset the module
    ///
    /// The module needs several hundred milliseconds after a reset before
    /// it accepts further commands; the caller owns that delay.
    pub fn reset(&mut self) -> Result<(), W::Error> {
        self.send(CMD_RESET, 0)
    }

    /// Select the microSD card as the playback source
    pub fn select_sd(&mut self) -> Result<(), W::Error> {
        self.send(CMD_SELECT_SOURCE, SOURCE_SD)
    }
}

impl<W> CueBackend for CueModule<W>
where
    W: Write,
{
    type Error = W::Error;

    fn set_volume(&mut self, level: u8) -> Result<(), W::Error> {
        self.send(CMD_SET_VOLUME, level.min(MAX_VOLUME) as u16)
    }

    fn stop(&mut self) -> Result<(), W::Error> {
        self.send(CMD_STOP, 0)
    }

    fn play(&mut self, track: u16) -> Result<(), W::Error> {
        self.send(CMD_PLAY_TRACK, track)
    }
}
