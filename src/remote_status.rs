use std::fmt;

use crate::color::Color;
use crate::indicator::BLINK_DELAY_MS;

/// Everything the light can show. Created as `Unknown` at start-up and
/// replaced on every poll tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RemoteStatus {
    Unknown,  // Grey
    Offline,  // Orange
    Online,   // Yellow
    /// Color and pace chosen by the remote status command.
    ServerSpecified { color: Color, delay_ms: u64 },
    BuildGrey,  // Teal
    BuildBlack, // Blue
    BuildRed,   // Red
    BuildGreen, // Green
}

impl RemoteStatus {
    pub fn color(&self) -> Color {
        match *self {
            RemoteStatus::Unknown => Color::GREY,
            RemoteStatus::Offline => Color::ORANGE,
            RemoteStatus::Online => Color::YELLOW,
            RemoteStatus::ServerSpecified { color, .. } => color,
            RemoteStatus::BuildGrey => Color::TEAL,
            RemoteStatus::BuildBlack => Color::BLUE,
            RemoteStatus::BuildRed => Color::RED,
            RemoteStatus::BuildGreen => Color::GREEN,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        match *self {
            RemoteStatus::ServerSpecified { delay_ms, .. } => delay_ms,
            _ => BLINK_DELAY_MS,
        }
    }

    /// Whether the next tick should ask the remote host rather than probe
    /// for connectivity.
    pub fn is_online(&self) -> bool {
        match *self {
            RemoteStatus::Unknown | RemoteStatus::Offline => false,
            _ => true,
        }
    }
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RemoteStatus::Unknown => write!(f, "unknown"),
            RemoteStatus::Offline => write!(f, "offline"),
            RemoteStatus::Online => write!(f, "online"),
            RemoteStatus::ServerSpecified { color, delay_ms } => write!(
                f,
                "server-specified status ({} every {} ms)",
                color, delay_ms
            ),
            RemoteStatus::BuildGrey => write!(f, "build grey"),
            RemoteStatus::BuildBlack => write!(f, "build black"),
            RemoteStatus::BuildRed => write!(f, "build red"),
            RemoteStatus::BuildGreen => write!(f, "build green"),
        }
    }
}
