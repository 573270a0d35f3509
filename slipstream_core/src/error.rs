// slipstream_core/src/error.rs

use thiserror::Error;

/// Rejections from `KartTuning::validate()`. These surface once at prefab
/// resolution time; the per-frame path never produces them.
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("tuning field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("hop windows must be non-negative (cooldown_ms={cooldown_ms}, coyote_ms={coyote_ms})")]
    NegativeWindow { cooldown_ms: f64, coyote_ms: f64 },

    #[error("slide.min_turbo ({min_turbo}) cannot exceed slide.max_value ({max_value})")]
    SlideThresholdAboveCap { min_turbo: f64, max_value: f64 },

    #[error("body.damping must be in [0, 1), got {value}")]
    DampingOutOfRange { value: f64 },
}
