//! Configuration constants for the racetrack environment.

// Presentation surface (only used to place the default track)
pub const SCREEN_WIDTH: u32 = 1200;
pub const SCREEN_HEIGHT: u32 = 800;

// Episode rules
pub const MAX_STEPS: u32 = 1200; // Step limit before an episode is cut off

// Reward shaping
pub const CRASH_PENALTY: f64 = -200.0; // Reward for every step taken while dead
pub const MIN_SPEED_FACTOR: f64 = 0.3; // Floor so slow progress still earns something
pub const PROGRESS_REWARD_SCALE: f64 = 10.0;

// Car footprint (screen units)
pub const CAR_LENGTH: f64 = 40.0;
pub const CAR_WIDTH: f64 = 20.0;

// Car kinematics (per step)
pub const MAX_SPEED: f64 = 8.0;
pub const MAX_REVERSE_SPEED: f64 = 2.0;
pub const ACCELERATION: f64 = 0.5;
pub const BRAKE_DECELERATION: f64 = 0.5;
pub const TURN_RATE: f64 = 5.0; // Degrees per turn action

// Distance sensors
pub const SENSOR_ANGLES: [f64; 5] = [-90.0, -45.0, 0.0, 45.0, 90.0]; // Relative to heading
pub const SENSOR_COUNT: usize = SENSOR_ANGLES.len();
pub const SENSOR_RANGE: f64 = 200.0;
pub const SENSOR_STEP: f64 = 2.0; // Ray marching increment
pub const OBSERVATION_LEN: usize = SENSOR_COUNT + 1; // Sensors followed by normalized speed

// Default ring track
pub const DEFAULT_INNER_RADIUS: f64 = 200.0;
pub const DEFAULT_OUTER_RADIUS: f64 = 350.0;
