//! Audio cue backend trait

/// Playback control for the sound cue module
///
/// The core treats playback as fire-and-forget: it commands `stop` and
/// `play` at the right moments but never waits for or observes playback
/// completion. Errors are transport errors; the control loop logs and
/// drops them, while the firmware bring-up sequence propagates them to
/// drive its retry loop.
pub trait CueBackend {
    /// Transport error type
    type Error;

    /// Set the playback volume on the module's native scale
    fn set_volume(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Stop any active playback
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Start playback of the given track
    fn play(&mut self, track: u16) -> Result<(), Self::Error>;
}
