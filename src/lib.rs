//! A single-car racetrack environment for training discrete-action driving agents.
//!
//! [`Environment`] owns a [`Car`] (or any [`Vehicle`]) and steps it around a
//! shared [`Track`], reporting an observation, reward and termination flag each
//! step.

pub mod action;
pub mod car;
pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod rollout;
pub mod track;
pub mod types;
pub mod utils;

pub use action::{Action, Steering};
pub use car::{Car, CarStatus, Vehicle};
pub use environment::{Environment, StepInfo, StepResult};
pub use error::{ActionError, TrackError};
pub use rollout::{ConstantPolicy, EpisodeSummary, Policy, RandomPolicy, run_episode};
pub use track::{RingTrack, Track};
pub use types::{Point, Rect};
