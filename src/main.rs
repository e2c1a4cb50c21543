use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use racetrack_env::config;
use racetrack_env::logging;
use racetrack_env::{
    Action, ConstantPolicy, Environment, Policy, RandomPolicy, RingTrack, run_episode,
};
use std::process;
use std::sync::Arc;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PolicyKind {
    Random,
    Constant,
}

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of episodes to run.
    #[arg(long, default_value_t = 1)]
    episodes: u32,

    /// Policy used to pick actions.
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    policy: PolicyKind,

    /// Action code (0-6) for the constant policy.
    #[arg(long, default_value_t = 1)]
    action: i64,

    /// Seed for the random policy.
    #[arg(long)]
    seed: Option<u64>,

    /// Inner radius of the ring track.
    #[arg(long, default_value_t = config::DEFAULT_INNER_RADIUS)]
    inner_radius: f64,

    /// Outer radius of the ring track.
    #[arg(long, default_value_t = config::DEFAULT_OUTER_RADIUS)]
    outer_radius: f64,

    /// Debug filter to specify log topics (e.g., "env,collision,reward")
    /// Available topics: env, car, collision, reward, rollout
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_policy(args: &Args) -> Result<Box<dyn Policy>, Box<dyn std::error::Error>> {
    let policy: Box<dyn Policy> = match args.policy {
        PolicyKind::Random => match args.seed {
            Some(seed) => Box::new(RandomPolicy::seeded(seed)),
            None => Box::new(RandomPolicy::new()),
        },
        PolicyKind::Constant => Box::new(ConstantPolicy(Action::try_from(args.action)?)),
    };
    Ok(policy)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let track = RingTrack::centered(args.inner_radius, args.outer_radius)?;
    info!(
        "Ring track centred at ({:.0}, {:.0}), radii {:.0}..{:.0}",
        track.center.x, track.center.y, track.inner_radius, track.outer_radius
    );

    let mut policy = build_policy(args)?;
    let mut env = Environment::new(Arc::new(track));
    info!(
        "Running {} episode(s), {} observations per step, step limit {}",
        args.episodes,
        env.observation_len(),
        config::MAX_STEPS
    );

    let mut crashes = 0;
    let mut reward_sum = 0.0;
    for _ in 0..args.episodes {
        let summary = run_episode(&mut env, policy.as_mut());
        if summary.crashed {
            crashes += 1;
        }
        reward_sum += summary.total_reward;
        info!(
            "Episode {}: {} steps, reward {:.2}, distance {:.1}, {}",
            summary.episode,
            summary.steps,
            summary.total_reward,
            summary.distance_traveled,
            if summary.crashed { "crashed" } else { "finished" }
        );
    }

    if args.episodes > 0 {
        info!(
            "Mean reward {:.2}, {} of {} episodes crashed",
            reward_sum / args.episodes as f64,
            crashes,
            args.episodes
        );
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if let Some(filter) = &args.debug_filter {
        for topic in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if !logging::TOPICS.contains(&topic) {
                warn!("Unknown debug topic '{}'", topic);
            }
        }
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
