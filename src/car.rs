use crate::config;
use crate::track::Track;
use crate::types::{Point, Rect};
use crate::utils;

/// What the environment needs from a vehicle.
///
/// Angles are in degrees, counter-clockwise on a y-down screen.
pub trait Vehicle {
    /// Restore kinematic state at the given pose, clear the crashed flag and zero the odometer.
    fn reset(&mut self, position: Point, angle: f64);

    fn increase_speed(&mut self);
    fn decrease_speed(&mut self);
    fn turn_left(&mut self);
    fn turn_right(&mut self);

    /// Advance the simulation by one tick.
    fn update_position(&mut self);

    /// Axis-aligned footprint used for collision sampling.
    fn rect(&self) -> Rect;

    /// Irreversible until the next `reset`.
    fn kill(&mut self);

    fn is_alive(&self) -> bool;
    fn speed(&self) -> f64;
    fn max_speed(&self) -> f64;
    fn total_distance(&self) -> f64;

    /// Returned by value, so callers never alias the vehicle's state.
    fn position(&self) -> Point;

    /// Track-relative observation. Must have the same length on every call.
    fn get_state<T: Track + ?Sized>(&self, track: &T) -> Vec<f32>;
}

// Represents the possible states of a car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarStatus {
    Alive,
    Crashed,
}

// A simple arcade car: speed along a heading, no slip or inertia
#[derive(Debug, Clone)]
pub struct Car {
    pub position: Point,
    pub angle: f64, // Heading in degrees [0, 360)
    pub speed: f64, // Units per step, negative when reversing
    pub max_speed: f64,
    pub status: CarStatus,
    pub total_distance: f64,
}

impl Car {
    pub fn new(position: Point, angle: f64) -> Self {
        Car {
            position,
            angle: utils::wrap_degrees(angle),
            speed: 0.0,
            max_speed: config::MAX_SPEED,
            status: CarStatus::Alive,
            total_distance: 0.0,
        }
    }
}

impl Vehicle for Car {
    fn reset(&mut self, position: Point, angle: f64) {
        *self = Car::new(position, angle);
        crate::debug_car!(
            "Reset to ({:.1}, {:.1}) heading {:.1}",
            position.x,
            position.y,
            self.angle
        );
    }

    fn increase_speed(&mut self) {
        self.speed = (self.speed + config::ACCELERATION).min(self.max_speed);
    }

    fn decrease_speed(&mut self) {
        self.speed = (self.speed - config::BRAKE_DECELERATION).max(-config::MAX_REVERSE_SPEED);
    }

    fn turn_left(&mut self) {
        self.angle = utils::wrap_degrees(self.angle + config::TURN_RATE);
    }

    fn turn_right(&mut self) {
        self.angle = utils::wrap_degrees(self.angle - config::TURN_RATE);
    }

    fn update_position(&mut self) {
        if self.status == CarStatus::Crashed {
            return;
        }
        let old = self.position;
        self.position = old.offset(self.angle, self.speed);
        // Odometer counts reversing too, so it never decreases
        self.total_distance += old.distance(&self.position);
        crate::debug_car!(
            "Moved ({:.2}, {:.2}) -> ({:.2}, {:.2}) speed {:.2}, total {:.2}",
            old.x,
            old.y,
            self.position.x,
            self.position.y,
            self.speed,
            self.total_distance
        );
    }

    fn rect(&self) -> Rect {
        let (width, height) =
            utils::rotated_extent(config::CAR_LENGTH, config::CAR_WIDTH, self.angle);
        Rect::from_center(self.position, width, height)
    }

    fn kill(&mut self) {
        if self.status == CarStatus::Alive {
            crate::debug_car!(
                "Crashed at ({:.1}, {:.1}) after {:.1} units",
                self.position.x,
                self.position.y,
                self.total_distance
            );
        }
        self.status = CarStatus::Crashed;
    }

    fn is_alive(&self) -> bool {
        self.status == CarStatus::Alive
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn max_speed(&self) -> f64 {
        self.max_speed
    }

    fn total_distance(&self) -> f64 {
        self.total_distance
    }

    fn position(&self) -> Point {
        self.position
    }

    // Layout: one normalized ray reading per sensor, then speed / max_speed
    fn get_state<T: Track + ?Sized>(&self, track: &T) -> Vec<f32> {
        let mut state = Vec::with_capacity(config::OBSERVATION_LEN);
        for relative in config::SENSOR_ANGLES {
            let reading = cast_ray(track, self.position, self.angle + relative);
            state.push(utils::normalize_reading(reading, config::SENSOR_RANGE));
        }
        state.push((self.speed / self.max_speed) as f32);
        state
    }
}

/// Distance along `angle_degrees` from `origin` to the first off-track sample,
/// or `SENSOR_RANGE` if the ray stays on the track.
pub fn cast_ray<T: Track + ?Sized>(track: &T, origin: Point, angle_degrees: f64) -> f64 {
    let mut distance = 0.0;
    while distance < config::SENSOR_RANGE {
        distance = (distance + config::SENSOR_STEP).min(config::SENSOR_RANGE);
        if !track.is_on_track(origin.offset(angle_degrees, distance)) {
            return distance;
        }
    }
    config::SENSOR_RANGE
}
