//! orbit.rs
//!
//! Central animation state for the whole scene: four cyclic angle
//! accumulators plus the run/pause flag and speed factor that gate them.

use bevy::prelude::*;

use crate::config::{
    EARTH_ORBIT_PERIOD, EARTH_SPIN_PERIOD, INITIAL_RATE, MOON_ORBIT_PERIOD, MOON_SPIN_PERIOD,
};

pub struct OrbitClockPlugin;

impl Plugin for OrbitClockPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(OrbitClock::default())
            .add_systems(Update, tick);
    }
}

/// One frame's worth of angles, handed to the rendering side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitAngles {
    /// Earth rotation about its own axis, in [0, 24)
    pub earth_spin: f64,
    /// Earth position along its orbit, in [0, 365)
    pub earth_orbit: f64,
    /// Moon rotation about its own axis, in [0, 24)
    pub moon_spin: f64,
    /// Moon position along its orbit, in [0, 365)
    pub moon_orbit: f64,
}

/// Clock state for the orbit animation
#[derive(Resource)]
pub struct OrbitClock {
    earth_spin: f64,
    earth_orbit: f64,
    moon_spin: f64,
    moon_orbit: f64,
    rate: f64,
    running: bool,
    elapsed: f64,
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self {
            earth_spin: 0.0,
            earth_orbit: 0.0,
            moon_spin: 0.0,
            moon_orbit: 0.0,
            rate: INITIAL_RATE,
            running: true,
            elapsed: 0.0,
        }
    }
}

impl OrbitClock {
    /// Step every accumulator by one tick and wrap it back into its
    /// period. Does nothing while paused.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }

        self.earth_spin = wrap(self.earth_spin + self.rate, EARTH_SPIN_PERIOD);
        self.earth_orbit = wrap(
            self.earth_orbit + self.rate / EARTH_SPIN_PERIOD,
            EARTH_ORBIT_PERIOD,
        );
        self.moon_spin = wrap(self.moon_spin + self.rate / 2.0, MOON_SPIN_PERIOD);
        self.moon_orbit = wrap(self.moon_orbit + self.rate / 2.0, MOON_ORBIT_PERIOD);

        self.elapsed += self.rate;
    }

    /// Current angles, read-only.
    pub fn snapshot(&self) -> OrbitAngles {
        OrbitAngles {
            earth_spin: self.earth_spin,
            earth_orbit: self.earth_orbit,
            moon_spin: self.moon_spin,
            moon_orbit: self.moon_orbit,
        }
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Multiply the per-tick increment.
    ///
    /// No clamp: repeated calls can drive the rate toward zero or toward
    /// very large values, matching the unbounded keyboard behavior of
    /// the demo. See the notes in DESIGN.md.
    pub fn scale_rate(&mut self, factor: f64) {
        self.rate *= factor;
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Total spin units accumulated while running, unwrapped.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Reduce `value` into `[0, period)`.
fn wrap(value: f64, period: f64) -> f64 {
    value - (value / period).floor() * period
}

// One fixed-size step per rendered frame. The animation is deliberately
// frame-coupled rather than scaled by elapsed wall-clock time, so a run
// is deterministic for a given frame count.
pub fn tick(mut clock: ResMut<OrbitClock>) {
    clock.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-9;

    #[test]
    fn accumulators_follow_mod_arithmetic() {
        let mut clock = OrbitClock::default();
        let n = 1000;
        for _ in 0..n {
            clock.advance();
        }

        let expected = |inc: f64, period: f64| wrap(n as f64 * inc, period);
        let angles = clock.snapshot();
        assert!((angles.earth_spin - expected(INITIAL_RATE, EARTH_SPIN_PERIOD)).abs() < EPS);
        assert!(
            (angles.earth_orbit - expected(INITIAL_RATE / 24.0, EARTH_ORBIT_PERIOD)).abs() < EPS
        );
        assert!((angles.moon_spin - expected(INITIAL_RATE / 2.0, MOON_SPIN_PERIOD)).abs() < EPS);
        assert!((angles.moon_orbit - expected(INITIAL_RATE / 2.0, MOON_ORBIT_PERIOD)).abs() < EPS);
    }

    #[test]
    fn angles_stay_within_periods() {
        let mut clock = OrbitClock::default();
        clock.scale_rate(7.3);
        for _ in 0..5000 {
            clock.advance();
            let angles = clock.snapshot();
            assert!((0.0..EARTH_SPIN_PERIOD).contains(&angles.earth_spin));
            assert!((0.0..EARTH_ORBIT_PERIOD).contains(&angles.earth_orbit));
            assert!((0.0..MOON_SPIN_PERIOD).contains(&angles.moon_spin));
            assert!((0.0..MOON_ORBIT_PERIOD).contains(&angles.moon_orbit));
        }
    }

    #[test]
    fn four_ticks_at_default_rate() {
        // rate 6.0: earth spin lands exactly on a full turn, orbit on day 1
        let mut clock = OrbitClock::default();
        for _ in 0..4 {
            clock.advance();
        }
        let angles = clock.snapshot();
        assert!((angles.earth_spin - 0.0).abs() < EPS);
        assert!((angles.earth_orbit - 1.0).abs() < EPS);
    }

    #[test]
    fn paused_clock_is_frozen() {
        let mut clock = OrbitClock::default();
        for _ in 0..3 {
            clock.advance();
        }
        let before = clock.snapshot();

        clock.set_running(false);
        for _ in 0..100 {
            clock.advance();
        }
        assert_eq!(clock.snapshot(), before);
    }

    #[test]
    fn paused_from_start_stays_at_zero() {
        let mut clock = OrbitClock::default();
        clock.set_running(false);
        for _ in 0..100 {
            clock.advance();
        }
        let angles = clock.snapshot();
        assert_eq!(angles.earth_spin, 0.0);
        assert_eq!(angles.earth_orbit, 0.0);
        assert_eq!(angles.moon_spin, 0.0);
        assert_eq!(angles.moon_orbit, 0.0);
    }

    #[test]
    fn resume_does_not_catch_up() {
        let mut paused = OrbitClock::default();
        paused.set_running(false);
        for _ in 0..50 {
            paused.advance();
        }
        paused.set_running(true);
        paused.advance();

        let mut straight = OrbitClock::default();
        straight.advance();

        assert_eq!(paused.snapshot(), straight.snapshot());
    }

    #[test]
    fn rate_scaling_round_trips() {
        let mut clock = OrbitClock::default();
        let before = clock.rate();
        clock.scale_rate(3.0);
        clock.scale_rate(1.0 / 3.0);
        assert!((clock.rate() - before).abs() < EPS);
    }

    #[test]
    fn rate_scaling_is_unbounded() {
        // no clamp on purpose; this pins the behavior down
        let mut clock = OrbitClock::default();
        for _ in 0..40 {
            clock.scale_rate(1.0 / 3.0);
        }
        assert!(clock.rate() > 0.0);
        assert!(clock.rate() < 1e-12);
    }

    #[rstest]
    #[case(0.0, 24.0, 0.0)]
    #[case(23.5, 24.0, 23.5)]
    #[case(24.0, 24.0, 0.0)]
    #[case(389.0, 365.0, 24.0)]
    #[case(730.0, 365.0, 0.0)]
    #[case(-6.0, 24.0, 18.0)]
    fn wrap_reduces_into_period(#[case] value: f64, #[case] period: f64, #[case] expected: f64) {
        assert!((wrap(value, period) - expected).abs() < EPS);
    }

    #[rstest]
    #[case(17.25, 24.0)]
    #[case(364.9, 365.0)]
    #[case(0.0, 24.0)]
    fn wrap_is_idempotent(#[case] value: f64, #[case] period: f64) {
        let once = wrap(value, period);
        assert_eq!(wrap(once, period), once);
    }

    #[test]
    fn elapsed_tracks_applied_increments() {
        let mut clock = OrbitClock::default();
        clock.advance();
        clock.scale_rate(3.0);
        clock.advance();
        assert!((clock.elapsed() - (INITIAL_RATE + INITIAL_RATE * 3.0)).abs() < EPS);

        clock.set_running(false);
        clock.advance();
        assert!((clock.elapsed() - (INITIAL_RATE + INITIAL_RATE * 3.0)).abs() < EPS);
    }
}
