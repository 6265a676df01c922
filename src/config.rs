//! Runtime configuration read from `MINDCHECK_*` environment variables.
//!
//! Invalid values fall back to their defaults with a warning; configuration never stops
//! the server from starting.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::Timings;

pub const APP_NAME: &str = "Mindcheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;
pub const DEFAULT_LOG_FILE: &str = "mindcheck.log";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Stdout,
    /// Append to `MINDCHECK_LOG_FILE`
    File,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub mode: LogMode,
    pub file: PathBuf,
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: SocketAddr,
    pub timings: Timings,
    /// Fixed seed for the report generator; entropy when absent
    pub rng_seed: Option<u64>,
    pub session_capacity: usize,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8501)),
            timings: Timings::default(),
            rng_seed: None,
            session_capacity: DEFAULT_SESSION_CAPACITY,
            log: LogConfig {
                mode: LogMode::Stdout,
                file: PathBuf::from(DEFAULT_LOG_FILE),
            },
        }
    }
}

fn parsed<T: std::str::FromStr>(
    key: &str,
    raw: Option<String>,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid {key}={raw:?}"));
            None
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Returns the configuration and one message per ignored value. Logging is not set up
    /// yet when this runs, so the caller emits the messages.
    #[must_use]
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut warnings = Vec::new();
        let w = &mut warnings;
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = parsed("MINDCHECK_BIND", get("MINDCHECK_BIND"), w).unwrap_or(defaults.bind);
        let ingest =
            parsed::<u64>("MINDCHECK_INGEST_DELAY_MS", get("MINDCHECK_INGEST_DELAY_MS"), w)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timings.ingest);
        let analysis =
            parsed::<u64>("MINDCHECK_ANALYSIS_DELAY_MS", get("MINDCHECK_ANALYSIS_DELAY_MS"), w)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timings.analysis);
        let rng_seed = parsed("MINDCHECK_RNG_SEED", get("MINDCHECK_RNG_SEED"), w);
        let capacity =
            parsed::<usize>("MINDCHECK_SESSION_CAPACITY", get("MINDCHECK_SESSION_CAPACITY"), w);
        let session_capacity = match capacity {
            Some(0) => {
                w.push("Ignoring MINDCHECK_SESSION_CAPACITY=0".to_string());
                defaults.session_capacity
            }
            Some(n) => n,
            None => defaults.session_capacity,
        };

        let mode = match get("MINDCHECK_LOG_MODE").as_deref().map(str::trim) {
            None | Some("stdout") => LogMode::Stdout,
            Some("file") => LogMode::File,
            Some(other) => {
                w.push(format!("Ignoring invalid MINDCHECK_LOG_MODE={other:?}"));
                LogMode::Stdout
            }
        };
        let file = get("MINDCHECK_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.log.file);

        let config = Self {
            bind,
            timings: Timings { ingest, analysis },
            rng_seed,
            session_capacity,
            log: LogConfig { mode, file },
        };
        (config, warnings)
    }
}
