// slipstream_core/src/models/engine_audio.rs

use crate::tuning::AudioTuning;

/// Engine pitch as a detune offset in cents, linear in speed: idle sits at
/// `detune_start` and every unit of speed adds `detune_modifier` cents. The
/// audio emitter itself is an external collaborator; this number is the whole
/// contract.
pub fn detune_cents(current_speed: f64, tuning: &AudioTuning) -> f64 {
    tuning.detune_start + current_speed * tuning.detune_modifier
}
