//! Engine configuration, read from environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HANOI_DISKS` | 3 | Disk count for the first game |
//! | `HANOI_SOLVE_DELAY_MS` | 400 | Pause before each auto-solve move |
//! | `HANOI_SOLVE_BUFFER` | 64 | Auto-solve events buffered before the solver waits for the host |
//!
//! Unset, unparsable or out-of-range values fall back to the defaults.

use std::time::Duration;

use crate::types::{DEFAULT_DISKS, DEFAULT_SOLVE_DELAY_MS, MAX_DISKS, MIN_DISKS};

/// Default number of buffered auto-solve events
pub const DEFAULT_SOLVE_BUFFER: usize = 64;

/// Auto-solve pacing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    /// Pause before each move; zero yields to the runtime instead of sleeping
    pub delay: Duration,
    /// Capacity of the event channel handed to the host
    pub buffer: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_SOLVE_DELAY_MS),
            buffer: DEFAULT_SOLVE_BUFFER,
        }
    }
}

impl SolveConfig {
    /// No pacing: moves are applied back to back
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let delay_ms = lookup("HANOI_SOLVE_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_SOLVE_DELAY_MS);
        let buffer = lookup("HANOI_SOLVE_BUFFER")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(DEFAULT_SOLVE_BUFFER);

        Self {
            delay: Duration::from_millis(delay_ms),
            buffer,
        }
    }
}

/// Everything a host needs to start playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub disks: u8,
    pub solve: SolveConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            disks: DEFAULT_DISKS,
            solve: SolveConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let disks = lookup("HANOI_DISKS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n: &u8| (MIN_DISKS..=MAX_DISKS).contains(&n))
            .unwrap_or(DEFAULT_DISKS);

        Self {
            disks,
            solve: SolveConfig::from_lookup(lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = EngineConfig::from_lookup(vars(&[]));
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.disks, 3);
        assert_eq!(cfg.solve.delay, Duration::from_millis(400));
        assert_eq!(cfg.solve.buffer, 64);
    }

    #[test]
    fn test_reads_values() {
        let cfg = EngineConfig::from_lookup(vars(&[
            ("HANOI_DISKS", "5"),
            ("HANOI_SOLVE_DELAY_MS", " 0 "),
            ("HANOI_SOLVE_BUFFER", "8"),
        ]));
        assert_eq!(cfg.disks, 5);
        assert_eq!(cfg.solve.delay, Duration::ZERO);
        assert_eq!(cfg.solve.buffer, 8);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = EngineConfig::from_lookup(vars(&[
            ("HANOI_DISKS", "many"),
            ("HANOI_SOLVE_DELAY_MS", "-1"),
            ("HANOI_SOLVE_BUFFER", "0"),
        ]));
        assert_eq!(cfg, EngineConfig::default());

        for disks in ["0", "2", "8", "9"] {
            let cfg = EngineConfig::from_lookup(vars(&[("HANOI_DISKS", disks)]));
            assert_eq!(cfg.disks, DEFAULT_DISKS, "HANOI_DISKS={disks}");
            assert!(crate::SharedGame::new(cfg.disks).is_ok());
        }
    }

    #[test]
    fn test_disk_bounds_accepted() {
        for disks in MIN_DISKS..=MAX_DISKS {
            let value = disks.to_string();
            let cfg = EngineConfig::from_lookup(vars(&[("HANOI_DISKS", value.as_str())]));
            assert_eq!(cfg.disks, disks);
        }
    }

    #[test]
    fn test_immediate() {
        let cfg = SolveConfig::immediate().with_delay(Duration::from_millis(5));
        assert_eq!(cfg.delay, Duration::from_millis(5));
        assert!(SolveConfig::immediate().delay.is_zero());
    }
}
