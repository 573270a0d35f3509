// slipstream_core/src/intent.rs

use crate::types::SteerDirection;
use serde::Deserialize;

/// Snapshot of the driver's discrete inputs for one frame. An external input
/// collaborator (keyboard handler, scripted driver, AI) mutates this between
/// frames; the motion model only ever reads it.
///
/// `brake` and `reverse` are tracked for completeness but do not alter the
/// base speed integration law.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverIntent {
    pub throttle: bool,
    pub brake: bool,
    pub reverse: bool,
    pub jump: bool,
    pub boost: bool,
    pub steer: SteerDirection,
}

impl DriverIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press a steering direction. The latest press wins, as with opposing
    /// arrow keys.
    pub fn press_steer(&mut self, direction: SteerDirection) {
        self.steer = direction;
    }

    /// Release a steering direction. Only clears the current steer if it
    /// matches: releasing Left while already steering Right must not cancel
    /// the Right input.
    pub fn release_steer(&mut self, direction: SteerDirection) {
        if self.steer == direction {
            self.steer = SteerDirection::None;
        }
    }
}
