//! Cue module command frames
//!
//! The serial MP3 module speaks a fixed 10-byte frame format:
//!
//! ```text
//! ┌───────┬─────────┬────────┬─────┬──────┬─────────┬──────────┬─────┐
//! │ START │ VERSION │ LENGTH │ CMD │ FDBK │ PARAM   │ CHECKSUM │ END │
//! │ 0x7E  │ 0xFF    │ 0x06   │ 1B  │ 0x00 │ 2B (BE) │ 2B (BE)  │0xEF │
//! └───────┴─────────┴────────┴─────┴──────┴─────────┴──────────┴─────┘
//! ```
//!
//! The checksum is the two's complement of the summed body bytes
//! (version through parameter low). Frame building is pure so it can be
//! verified against known-good captures without hardware.

/// Total frame length in bytes
pub const FRAME_LEN: usize = 10;

/// Frame start marker
pub const FRAME_START: u8 = 0x7E;

/// Frame end marker
pub const FRAME_END: u8 = 0xEF;

/// Protocol version byte
const VERSION: u8 = 0xFF;

/// Body length byte (version through parameter, fixed by the protocol)
const LENGTH: u8 = 0x06;

/// No-acknowledge feedback flag
const NO_FEEDBACK: u8 = 0x00;

/// Play a track by number
pub const CMD_PLAY_TRACK: u8 = 0x03;

/// Set playback volume (0-30)
pub const CMD_SET_VOLUME: u8 = 0x06;

/// Select the playback source
pub const CMD_SELECT_SOURCE: u8 = 0x09;

/// Reset the module
pub const CMD_RESET: u8 = 0x0C;

/// Stop playback
pub const CMD_STOP: u8 = 0x16;

/// Source parameter for the microSD card slot
pub const SOURCE_SD: u16 = 0x0002;

/// Maximum volume on the module's native scale
pub const MAX_VOLUME: u8 = 30;

/// Build a command frame
pub fn command_frame(cmd: u8, param: u16) -> [u8; FRAME_LEN] {
    let param_hi = (param >> 8) as u8;
    let param_lo = param as u8;

    let sum = VERSION as u16
        + LENGTH as u16
        + cmd as u16
        + NO_FEEDBACK as u16
        + param_hi as u16
        + param_lo as u16;
    let checksum = 0u16.wrapping_sub(sum);

    [
        FRAME_START,
        VERSION,
        LENGTH,
        cmd,
        NO_FEEDBACK,
        param_hi,
        param_lo,
        (checksum >> 8) as u8,
        checksum as u8,
        FRAME_END,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_track_frame() {
        // Known-good capture: play track 1
        assert_eq!(
            command_frame(CMD_PLAY_TRACK, 1),
            [0x7E, 0xFF, 0x06, 0x03, 0x00, 0x00, 0x01, 0xFE, 0xF7, 0xEF]
        );
    }

    #[test]
    fn test_set_volume_frame() {
        // Known-good capture: volume 30 (maximum)
        assert_eq!(
            command_frame(CMD_SET_VOLUME, 30),
            [0x7E, 0xFF, 0x06, 0x06, 0x00, 0x00, 0x1E, 0xFE, 0xD7, 0xEF]
        );
    }

    #[test]
    fn test_stop_frame() {
        assert_eq!(
            command_frame(CMD_STOP, 0),
            [0x7E, 0xFF, 0x06, 0x16, 0x00, 0x00, 0x00, 0xFE, 0xE5, 0xEF]
        );
    }

    #[test]
    fn test_select_sd_frame() {
        assert_eq!(
            command_frame(CMD_SELECT_SOURCE, SOURCE_SD),
            [0x7E, 0xFF, 0x06, 0x09, 0x00, 0x00, 0x02, 0xFE, 0xF0, 0xEF]
        );
    }

    #[test]
    fn test_checksum_balances_body() {
        // Body bytes plus checksum must sum to zero mod 2^16
        for (cmd, param) in [
            (CMD_PLAY_TRACK, 0u16),
            (CMD_PLAY_TRACK, 0x1234),
            (CMD_SET_VOLUME, 15),
            (CMD_RESET, 0),
            (CMD_STOP, 0xFFFF),
        ] {
            let frame = command_frame(cmd, param);
            let body_sum: u16 = frame[1..7].iter().map(|b| *b as u16).sum();
            let checksum = u16::from_be_bytes([frame[7], frame[8]]);
            assert_eq!(body_sum.wrapping_add(checksum), 0);
        }
    }

    #[test]
    fn test_frame_markers() {
        let frame = command_frame(CMD_RESET, 0);
        assert_eq!(frame[0], FRAME_START);
        assert_eq!(frame[FRAME_LEN - 1], FRAME_END);
    }
}
