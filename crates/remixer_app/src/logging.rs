//! Logging initialization for remixer_app.
//!
//! The destination is chosen through the `REMIXER_LOG` environment
//! variable: `file` (the default, writes `./remixer.log`), `terminal`,
//! or `both`.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./remixer.log";
const DESTINATION_ENV: &str = "REMIXER_LOG";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

impl LogDestination {
    /// Reads the destination from `REMIXER_LOG`, defaulting to the log file.
    pub fn from_env() -> Self {
        Self::parse(std::env::var(DESTINATION_ENV).ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("terminal") => LogDestination::Terminal,
            Some(v) if v.eq_ignore_ascii_case("both") => LogDestination::Both,
            _ => LogDestination::File,
        }
    }

    fn wants_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn wants_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Initialize the global logger. Falls back to the terminal when the
/// log file cannot be created, so startup never goes unlogged.
pub fn initialize(destination: LogDestination) {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.wants_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.wants_file() {
        match File::create(LOG_PATH) {
            Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
            Err(err) => {
                eprintln!("Warning: could not create log file at {LOG_PATH}: {err}");
                if loggers.is_empty() {
                    loggers.push(TermLogger::new(
                        level,
                        config,
                        TerminalMode::Mixed,
                        ColorChoice::Auto,
                    ));
                }
            }
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
