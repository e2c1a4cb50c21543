use crate::action::{Action, Steering};
use crate::car::{Car, Vehicle};
use crate::config::{CRASH_PENALTY, MAX_STEPS, MIN_SPEED_FACTOR, PROGRESS_REWARD_SCALE};
use crate::track::Track;
use crate::types::Point;
use std::sync::Arc;

/// Auxiliary data reported alongside each step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub distance_traveled: f64,
    pub is_alive: bool,
    pub speed: f64,
    pub position: Point, // Snapshot, unaffected by later car updates
    pub crashed: bool,   // Died before the step limit
}

/// Result of a single environment step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Vec<f32>,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// Episode controller for one car on a shared track.
///
/// Each instance is single-owner and sequential; run one instance per
/// worker for parallel rollouts. Once a step reports `done`, the caller is
/// expected to `reset` before stepping again. Stepping past `done` is not
/// rejected: the counter keeps advancing and a dead car keeps earning
/// `CRASH_PENALTY`.
pub struct Environment<T: ?Sized, C = Car> {
    track: Arc<T>,
    car: C,
    current_step: u32,
    last_distance: f64,
    episode: u32,
}

impl<T: Track + ?Sized> Environment<T, Car> {
    pub fn new(track: Arc<T>) -> Self {
        let car = Car::new(track.start_position(), track.start_angle());
        Self::with_car(track, car)
    }
}

impl<T: Track + ?Sized, C: Vehicle> Environment<T, C> {
    /// Use a custom vehicle. It is reset to the track's start pose.
    pub fn with_car(track: Arc<T>, mut car: C) -> Self {
        car.reset(track.start_position(), track.start_angle());
        Environment {
            track,
            car,
            current_step: 0,
            last_distance: 0.0,
            episode: 0,
        }
    }

    /// Start a new episode and return its first observation.
    pub fn reset(&mut self) -> Vec<f32> {
        self.car
            .reset(self.track.start_position(), self.track.start_angle());
        self.current_step = 0;
        self.last_distance = 0.0;
        self.episode += 1;
        crate::debug_env!("Episode {} started", self.episode);
        self.observation()
    }

    /// Step with a raw action code. Codes outside 0-6 are treated as a no-op;
    /// use `Action::try_from` first to reject them instead.
    pub fn step(&mut self, code: i64) -> StepResult {
        let action = Action::from_code(code).unwrap_or_else(|| {
            crate::debug_env!(
                "Episode {} Step {}: unknown action code {}, treating as no-op",
                self.episode,
                self.current_step + 1,
                code
            );
            Action::Noop
        });
        self.step_action(action)
    }

    pub fn step_action(&mut self, action: Action) -> StepResult {
        self.current_step += 1;
        self.execute_action(action);
        self.car.update_position();
        self.check_collision();

        let reward = self.calculate_reward();
        let done = self.is_done();
        let observation = self.observation();

        let is_alive = self.car.is_alive();
        let info = StepInfo {
            distance_traveled: self.car.total_distance(),
            is_alive,
            speed: self.car.speed(),
            position: self.car.position(),
            crashed: !is_alive && self.current_step < MAX_STEPS,
        };

        crate::debug_env!(
            "Episode {} Step {}: {:?} -> reward {:.3}, done {}",
            self.episode,
            self.current_step,
            action,
            reward,
            done
        );

        StepResult {
            observation,
            reward,
            done,
            info,
        }
    }

    fn execute_action(&mut self, action: Action) {
        if action.accelerates() {
            self.car.increase_speed();
        }
        if action.brakes() {
            self.car.decrease_speed();
        }
        match action.steering() {
            Some(Steering::Left) => self.car.turn_left(),
            Some(Steering::Right) => self.car.turn_right(),
            None => {}
        }
    }

    // Samples only the rect's corners and center, so a boundary that cuts
    // between samples goes unnoticed and a rotated bounding box can poke
    // off the track while the body is still on it.
    fn check_collision(&mut self) {
        if !self.car.is_alive() {
            return;
        }

        let rect = self.car.rect();
        let off_track = rect
            .critical_points()
            .into_iter()
            .find(|p| !self.track.is_on_track(*p));

        if let Some(point) = off_track {
            crate::debug_collision!(
                "Episode {} Step {}: ({:.1}, {:.1}) off track, car destroyed",
                self.episode,
                self.current_step,
                point.x,
                point.y
            );
            self.car.kill();
        }
    }

    /// Progress reward for this step.
    ///
    /// While alive this also advances `last_distance` to the car's odometer,
    /// so it must run exactly once per step: a second call would see a zero
    /// delta.
    fn calculate_reward(&mut self) -> f64 {
        if !self.car.is_alive() {
            return CRASH_PENALTY;
        }

        let total = self.car.total_distance();
        let delta_distance = total - self.last_distance;
        self.last_distance = total;

        let speed_factor = (self.car.speed() / self.car.max_speed()).max(MIN_SPEED_FACTOR);
        let reward = delta_distance * speed_factor * PROGRESS_REWARD_SCALE;
        crate::debug_reward!(
            "Step {}: delta {:.3} x factor {:.3} -> {:.3}",
            self.current_step,
            delta_distance,
            speed_factor,
            reward
        );
        reward
    }

    fn is_done(&self) -> bool {
        !self.car.is_alive() || self.current_step >= MAX_STEPS
    }

    fn observation(&self) -> Vec<f32> {
        self.car.get_state(&*self.track)
    }

    pub fn observation_len(&self) -> usize {
        self.observation().len()
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn last_distance(&self) -> f64 {
        self.last_distance
    }

    /// Number of resets so far
    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn car(&self) -> &C {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut C {
        &mut self.car
    }

    pub fn track(&self) -> &Arc<T> {
        &self.track
    }
}
