// Policies and a single-episode driver loop

use crate::action::Action;
use crate::car::Vehicle;
use crate::environment::Environment;
use crate::track::Track;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Chooses an action from the latest observation
pub trait Policy {
    fn select_action(&mut self, observation: &[f32]) -> Action;
}

/// Uniformly random actions, reproducible when seeded
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &[f32]) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::COUNT)]
    }
}

/// Always returns the same action
#[derive(Debug, Clone, Copy)]
pub struct ConstantPolicy(pub Action);

impl Policy for ConstantPolicy {
    fn select_action(&mut self, _observation: &[f32]) -> Action {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub episode: u32,
    pub steps: u32,
    pub total_reward: f64,
    pub distance_traveled: f64,
    pub crashed: bool,
}

/// Reset `env` and step it with `policy` until the episode is done.
pub fn run_episode<T, C, P>(env: &mut Environment<T, C>, policy: &mut P) -> EpisodeSummary
where
    T: Track + ?Sized,
    C: Vehicle,
    P: Policy + ?Sized,
{
    let mut observation = env.reset();
    let mut total_reward = 0.0;

    loop {
        let action = policy.select_action(&observation);
        let result = env.step_action(action);
        total_reward += result.reward;
        observation = result.observation;

        if result.done {
            let summary = EpisodeSummary {
                episode: env.episode(),
                steps: env.current_step(),
                total_reward,
                distance_traveled: result.info.distance_traveled,
                crashed: result.info.crashed,
            };
            crate::debug_rollout!(
                "Episode {} finished after {} steps, reward {:.2}",
                summary.episode,
                summary.steps,
                summary.total_reward
            );
            return summary;
        }
    }
}
