// slipstream_sim/src/script.rs

//! Scripted driver for headless runs: a timeline of timed intent segments.
//! At any simulation time the active segment is the latest one whose start
//! has passed; before the first segment the kart idles. This replaces the
//! keyboard collaborator without touching the motion model's intent contract.

use serde::Deserialize;

use slipstream_core::prelude::{DriverIntent, SteerDirection};

/// One timeline entry: from `start` seconds onward these are the held inputs,
/// until the next segment takes over.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptSegment {
    pub start: f64,
    #[serde(default)]
    pub throttle: bool,
    #[serde(default)]
    pub brake: bool,
    #[serde(default)]
    pub reverse: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub boost: bool,
    #[serde(default)]
    pub steer: SteerDirection,
}

impl ScriptSegment {
    fn intent(&self) -> DriverIntent {
        DriverIntent {
            throttle: self.throttle,
            brake: self.brake,
            reverse: self.reverse,
            jump: self.jump,
            boost: self.boost,
            steer: self.steer,
        }
    }
}

/// The resolved timeline. Segments are sorted by start time at construction
/// so lookup is a scan from the back.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    segments: Vec<ScriptSegment>,
}

impl ScriptedDriver {
    pub fn new(mut segments: Vec<ScriptSegment>) -> Self {
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { segments }
    }

    /// The intent snapshot for simulation time `t` seconds.
    pub fn intent_at(&self, t: f64) -> DriverIntent {
        self.segments
            .iter()
            .rev()
            .find(|segment| segment.start <= t)
            .map_or_else(DriverIntent::new, ScriptSegment::intent)
    }
}
