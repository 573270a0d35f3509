// slipstream_core/src/timer.rs

// One restartable stopwatch for everything that is tick-gated (slide charge
// accumulation, exhaust flipbook cadence, wheel blink). The simulation is
// frame-driven with an explicit delta, so the timer is advanced manually by
// the owner instead of sampling a wall clock; identical input sequences give
// identical timer states.

/// Restartable stopwatch. `tick()` advances it by one frame's delta,
/// `reset()` returns it to the zero state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimTimer {
    elapsed: f64,
    delta: f64,
}

impl SimTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Negative or non-finite deltas are ignored so a
    /// degenerate frame cannot run the stopwatch backwards.
    pub fn tick(&mut self, delta_seconds: f64) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            self.delta = 0.0;
            return;
        }
        self.delta = delta_seconds;
        self.elapsed += delta_seconds;
    }

    /// Delta of the most recent `tick()`, seconds.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Total time since construction or the last `reset()`, seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed * 1000.0
    }

    /// Zero the whole stopwatch state, elapsed and delta both.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_tick_accumulates_elapsed_and_tracks_delta() {
        let mut timer = SimTimer::new();
        timer.tick(0.03);
        timer.tick(0.03);
        timer.tick(0.01);
        assert_abs_diff_eq!(timer.elapsed(), 0.07, epsilon = EPS);
        assert_abs_diff_eq!(timer.delta(), 0.01, epsilon = EPS);
        assert_abs_diff_eq!(timer.elapsed_ms(), 70.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reset_returns_to_zero_state() {
        let mut timer = SimTimer::new();
        timer.tick(1.5);
        timer.reset();
        assert_abs_diff_eq!(timer.elapsed(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(timer.delta(), 0.0, epsilon = EPS);

        // Restartable: ticking again starts a fresh measurement.
        timer.tick(0.25);
        assert_abs_diff_eq!(timer.elapsed(), 0.25, epsilon = EPS);
    }

    #[test]
    fn test_degenerate_deltas_are_ignored() {
        let mut timer = SimTimer::new();
        timer.tick(0.5);
        timer.tick(-1.0);
        timer.tick(f64::NAN);
        timer.tick(0.0);
        assert_abs_diff_eq!(timer.elapsed(), 0.5, epsilon = EPS);
        assert_abs_diff_eq!(timer.delta(), 0.0, epsilon = EPS);
    }
}
