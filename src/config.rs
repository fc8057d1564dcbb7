// Accumulator periods (simulation units, not real hours/days)
pub const EARTH_SPIN_PERIOD: f64 = 24.0;
pub const EARTH_ORBIT_PERIOD: f64 = 365.0;
pub const MOON_SPIN_PERIOD: f64 = 24.0;
pub const MOON_ORBIT_PERIOD: f64 = 365.0;

// Animation pacing
pub const INITIAL_RATE: f64 = 24.0 / 4.0; // spin units advanced per frame
pub const RATE_STEP: f64 = 3.0;

// Body sizes (scene units)
pub const SUN_RADIUS: f32 = 5.0;
pub const EARTH_RADIUS: f32 = 1.0;
pub const MOON_RADIUS: f32 = 0.3;

// Orbit distances
pub const EARTH_ORBIT_RADIUS: f32 = 10.0;
pub const MOON_ORBIT_RADIUS: f32 = 1.5;

// Camera
pub const CAMERA_DISTANCE: f32 = 30.0;
pub const CAMERA_MIN_DISTANCE: f32 = 8.0;
pub const CAMERA_MAX_DISTANCE: f32 = 120.0;

// UI sim-time readout starts here
pub const SIM_EPOCH: &str = "2000-01-01T00:00:00Z";
