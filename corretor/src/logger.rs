// corretor/src/logger.rs
//! Logger initialisation for the corretor binary and its tests.
//!
//! `RUST_LOG` is honoured unless an explicit level is passed, in which case
//! that level wins (used by `--debug` and `--quiet`).

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor an explicit level is given.
const DEFAULT_FILTER: &str = "warn";

/// Initialises the global logger. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);

    // Already initialised (e.g. by another test in the same binary).
    let _ = builder.try_init();
}

/// Maps the global CLI flags onto an explicit level, if any.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
    }
}
