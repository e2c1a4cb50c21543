use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Log topics accepted by `--debug-filter`
pub const TOPICS: [&str; 5] = ["env", "car", "collision", "reward", "rollout"];

// Custom logger structure
#[derive(Debug)]
struct RaceLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for RaceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Topic filters only narrow debug and trace output
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = context_prefix(&message);

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout().lock();
        // Write failures on a closed stdout are ignored
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Read the number following `label` in `message`, e.g. "Step 12" -> 12
fn number_after(message: &str, label: &str) -> Option<u32> {
    let start = message.find(label)? + label.len();
    let rest = &message[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Builds the "[E001][S0042] " prefix from "Episode N" / "Step N" mentions
fn context_prefix(message: &str) -> String {
    let mut context = String::new();
    if let Some(episode) = number_after(message, "Episode ") {
        context.push_str(&format!("[E{:03}]", episode));
    }
    if let Some(step) = number_after(message, "Step ") {
        context.push_str(&format!("[S{:04}]", step));
    }
    if !context.is_empty() {
        context.push(' ');
    }
    context
}

/// Parse a `--log-level` value; unknown names fall back to info
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn parse_filters(filter_str: &str) -> HashSet<String> {
    filter_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

static LOGGER: OnceLock<RaceLogger> = OnceLock::new();

/// Install the global logger. Later calls keep the first configuration.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RaceLogger {
        level,
        debug_filters: debug_filter.as_deref().map(parse_filters),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

#[macro_export]
macro_rules! debug_env {
    ($($arg:tt)*) => {
        log::debug!(target: "env", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_car {
    ($($arg:tt)*) => {
        log::debug!(target: "car", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_collision {
    ($($arg:tt)*) => {
        log::debug!(target: "collision", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_reward {
    ($($arg:tt)*) => {
        log::debug!(target: "reward", $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_rollout {
    ($($arg:tt)*) => {
        log::debug!(target: "rollout", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn meta(level: log::Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn test_context_prefix() {
        assert_eq!(context_prefix("Episode 3 Step 42 done"), "[E003][S0042] ");
        assert_eq!(context_prefix("Step 7: reward"), "[S0007] ");
        assert_eq!(context_prefix("Episode 12"), "[E012] ");
        assert_eq!(context_prefix("nothing to see"), "");
        assert_eq!(context_prefix("Step x"), "");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("bogus"), LevelFilter::Info);
    }

    #[test]
    fn test_topic_filters_only_narrow_debug() {
        let logger = RaceLogger {
            level: LevelFilter::Trace,
            debug_filters: Some(parse_filters("collision, reward")),
        };

        assert!(logger.enabled(&meta(log::Level::Debug, "collision")));
        assert!(logger.enabled(&meta(log::Level::Trace, "reward")));
        assert!(!logger.enabled(&meta(log::Level::Debug, "car")));
        assert!(logger.enabled(&meta(log::Level::Info, "car")));
        assert!(logger.enabled(&meta(log::Level::Warn, "env")));
    }

    #[test]
    fn test_level_cutoff() {
        let logger = RaceLogger {
            level: LevelFilter::Warn,
            debug_filters: None,
        };
        assert!(logger.enabled(&meta(log::Level::Error, "env")));
        assert!(logger.enabled(&meta(log::Level::Warn, "env")));
        assert!(!logger.enabled(&meta(log::Level::Info, "env")));
        assert!(!logger.enabled(&meta(log::Level::Debug, "env")));
    }
}
