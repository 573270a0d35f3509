// slipstream_core/src/prelude.rs

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::intent::DriverIntent;
pub use crate::timer::SimTimer;
pub use crate::tuning::{
    AccelerationTuning, AudioTuning, BodyTuning, HandlingTuning, HopTuning, KartTuning,
    LeanTuning, SlideTuning,
};
pub use crate::types::{forward_vector, heading_quat, Heading, SteerDirection, TurboTier};

// --- Frame Models (everything that advances once per frame) ---
pub use crate::models::engine_audio::detune_cents;
pub use crate::models::hop::HopGate;
pub use crate::models::lean::LeanModel;
pub use crate::models::slide::SlideMachine;
pub use crate::models::speed::SpeedModel;
pub use crate::models::steering::SteeringModel;

// --- Errors ---
pub use crate::error::TuningError;
