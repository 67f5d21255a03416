//! Per-object motion strategies.
//!
//! Two modes exist and stay strictly separate: [`Oscillation`] derives a
//! position purely from elapsed time, while [`Follow`] pursues a noisy 2D
//! target through exponential smoothing followed by a positional lerp. Both
//! stages of the follow filter are convex combinations, so for factors in
//! `(0, 1]` the position converges monotonically onto a constant target and
//! can neither overshoot nor diverge. State lives in these values and is
//! threaded through the per-frame update call; nothing here reads or writes
//! ambient scene state.

use glam::Vec2;

use super::Wave;
use crate::error::VetroError;

/// Smoothing factor pulling the intermediate target toward the raw target.
pub const FOLLOW_SMOOTHING: f32 = 0.08;
/// Lerp factor pulling the rendered position toward the smoothed target.
pub const FOLLOW_EASING: f32 = 0.1;

/// Per-frame inputs to a motion update, captured once per accepted tick.
#[derive(Debug, Clone, Copy)]
pub struct MotionInput {
    /// Latest normalized pointer position.
    pub raw_target: Vec2,
    /// Seconds since the previous accepted tick.
    pub dt: f32,
    /// Seconds since the scene clock started.
    pub elapsed: f32,
}

/// Snapshot of follow-filter state after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Target as last supplied by the pointer signal.
    pub raw_target: Vec2,
    /// Exponentially smoothed target.
    pub smoothed_target: Vec2,
    /// Position actually handed to the renderer.
    pub position: Vec2,
    /// Elapsed seconds at the time of the snapshot.
    pub elapsed: f32,
}

// ==================== DRIFT ====================

/// Time-driven oscillation around a fixed base point, one independent
/// [`Wave`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    /// Center of the drift.
    pub base: Vec2,
    /// Horizontal wave.
    pub x: Wave,
    /// Vertical wave.
    pub y: Wave,
}

impl Oscillation {
    /// Offset from the base point at `elapsed` seconds.
    #[must_use]
    pub fn offset_at(&self, elapsed: f32) -> Vec2 {
        Vec2::new(self.x.eval(elapsed), self.y.eval(elapsed))
    }

    /// Absolute position at `elapsed` seconds.
    #[must_use]
    pub fn position_at(&self, elapsed: f32) -> Vec2 {
        self.base + self.offset_at(elapsed)
    }
}

// ==================== FOLLOW ====================

/// Two-stage pointer follower: exponential smoothing into a positional lerp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follow {
    smoothing: f32,
    easing: f32,
    raw_target: Vec2,
    smoothed: Vec2,
    position: Vec2,
}

impl Follow {
    /// Follower at `initial` with the stock factors.
    #[must_use]
    pub fn new(initial: Vec2) -> Self {
        Self {
            smoothing: FOLLOW_SMOOTHING,
            easing: FOLLOW_EASING,
            raw_target: initial,
            smoothed: initial,
            position: initial,
        }
    }

    /// Follower with custom filter factors.
    ///
    /// # Errors
    /// [`VetroError::InvalidParameter`] unless both factors lie in `(0, 1]`.
    pub fn with_factors(
        initial: Vec2,
        smoothing: f32,
        easing: f32,
    ) -> Result<Self, VetroError> {
        for (name, factor) in [("smoothing", smoothing), ("easing", easing)]
        {
            if factor == 0.0 || !(0.0..=1.0).contains(&factor) {
                return Err(VetroError::InvalidParameter(format!(
                    "{name} factor must be in (0, 1], got {factor}"
                )));
            }
        }
        Ok(Self {
            smoothing,
            easing,
            raw_target: initial,
            smoothed: initial,
            position: initial,
        })
    }

    /// Advance the filter one tick toward `raw_target`.
    pub fn update_toward(&mut self, raw_target: Vec2) -> Vec2 {
        self.raw_target = raw_target;
        self.smoothed += (raw_target - self.smoothed) * self.smoothing;
        self.position = self.position.lerp(self.smoothed, self.easing);
        self.position
    }

    /// Position from the most recent tick.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Full filter snapshot at `elapsed` seconds.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> MotionSample {
        MotionSample {
            raw_target: self.raw_target,
            smoothed_target: self.smoothed,
            position: self.position,
            elapsed,
        }
    }
}

// ==================== STRATEGY SELECTION ====================

/// Either motion strategy, selected per object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionState {
    /// Elapsed-time oscillation around a base point.
    Drift(Oscillation),
    /// Smoothed pursuit of the raw target.
    Follow(Follow),
}

impl MotionState {
    /// Produce this tick's position from the shared frame input.
    pub fn update(&mut self, input: &MotionInput) -> Vec2 {
        match self {
            Self::Drift(osc) => osc.position_at(input.elapsed),
            Self::Follow(follow) => follow.update_toward(input.raw_target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn drift() -> Oscillation {
        Oscillation {
            base: Vec2::new(0.6, -1.2),
            x: Wave::sine(0.4, 0.07),
            y: Wave::cosine(0.2, 0.05),
        }
    }

    #[test]
    fn test_drift_matches_its_waves() {
        let osc = drift();
        let p = osc.position_at(0.0);
        // sin(0) = 0 on x, cos(0) = 1 on y.
        assert!((p.x - 0.6).abs() < EPSILON);
        assert!((p.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_drift_offset_bounded_by_amplitude() {
        let osc = drift();
        let mut t = 0.0;
        while t < 200.0 {
            let offset = osc.offset_at(t);
            assert!(offset.x.abs() <= 0.4 + EPSILON);
            assert!(offset.y.abs() <= 0.2 + EPSILON);
            t += 0.37;
        }
    }

    #[test]
    fn test_follow_converges_monotonically() {
        let target = Vec2::new(0.8, -0.9);
        let mut follow = Follow::new(Vec2::ZERO);
        let mut last_err = (target - follow.position()).length();

        for _ in 0..500 {
            let p = follow.update_toward(target);
            let err = (target - p).length();
            assert!(err <= last_err + EPSILON, "error grew: {err}");
            last_err = err;
        }
        assert!(last_err < 1e-3, "did not converge: {last_err}");
    }

    #[test]
    fn test_follow_never_overshoots() {
        let target = Vec2::new(1.0, -1.0);
        let mut follow = Follow::new(Vec2::ZERO);
        for _ in 0..500 {
            let p = follow.update_toward(target);
            // Both axes stay on their start side of the target.
            assert!(p.x <= target.x + EPSILON);
            assert!(p.y >= target.y - EPSILON);
        }
    }

    #[test]
    fn test_unit_factors_snap_to_target() {
        let target = Vec2::new(0.25, 0.5);
        let mut follow =
            Follow::with_factors(Vec2::ZERO, 1.0, 1.0).unwrap();
        let p = follow.update_toward(target);
        assert!((p - target).length() < EPSILON);
    }

    #[test]
    fn test_out_of_range_factors_rejected() {
        for (smoothing, easing) in
            [(0.0, 0.1), (1.1, 0.1), (0.08, 0.0), (0.08, -0.2)]
        {
            assert!(matches!(
                Follow::with_factors(Vec2::ZERO, smoothing, easing),
                Err(VetroError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_sample_reports_filter_state() {
        let mut follow = Follow::new(Vec2::ZERO);
        let target = Vec2::new(1.0, 0.0);
        let _ = follow.update_toward(target);
        let sample = follow.sample(2.5);
        assert_eq!(sample.raw_target, target);
        assert!((sample.smoothed_target.x - 0.08).abs() < EPSILON);
        assert!((sample.position.x - 0.008).abs() < EPSILON);
        assert!((sample.elapsed - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_strategies_read_disjoint_inputs() {
        let input_a = MotionInput {
            raw_target: Vec2::new(5.0, 5.0),
            dt: 0.016,
            elapsed: 1.0,
        };
        let input_b = MotionInput {
            raw_target: Vec2::new(-5.0, -5.0),
            ..input_a
        };

        // Drift ignores the pointer entirely.
        let mut drift_state = MotionState::Drift(drift());
        assert_eq!(
            drift_state.update(&input_a),
            drift_state.update(&input_b)
        );

        // Follow ignores elapsed time.
        let mut follow_a = MotionState::Follow(Follow::new(Vec2::ZERO));
        let mut follow_b = MotionState::Follow(Follow::new(Vec2::ZERO));
        let late = MotionInput {
            elapsed: 99.0,
            ..input_a
        };
        assert_eq!(follow_a.update(&input_a), follow_b.update(&late));
    }
}
