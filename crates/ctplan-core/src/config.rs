//! Planner configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Radices registered as decimation-in-time Cooley-Tukey solvers.
    pub radices: Vec<usize>,

    /// Radices additionally registered as decimation-in-frequency solvers.
    pub dif_radices: Vec<usize>,

    /// Hard cap (bytes) on live coefficient tables.
    pub twiddle_cap_bytes: usize,

    /// Remember the winning solver per problem during a search.
    pub memoize: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            radices: vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 32, 64],
            dif_radices: vec![2, 4, 8],
            twiddle_cap_bytes: 64 * 1024 * 1024,
            memoize: true,
        }
    }
}

impl PlannerConfig {
    /// Start from defaults and apply `CTPLAN_*` environment overrides.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("CTPLAN_RADICES") {
            if let Some(v) = parse_radix_list(&s) {
                cfg.radices = v;
            }
        }

        if let Ok(s) = std::env::var("CTPLAN_DIF_RADICES") {
            if let Some(v) = parse_radix_list(&s) {
                cfg.dif_radices = v;
            }
        }

        if let Ok(s) = std::env::var("CTPLAN_TWIDDLE_CAP_BYTES") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.twiddle_cap_bytes = v;
            }
        }

        if let Ok(s) = std::env::var("CTPLAN_MEMOIZE") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.memoize = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(r) = self
            .radices
            .iter()
            .chain(&self.dif_radices)
            .find(|&&r| r < 2)
        {
            return Err(Error::Config(format!("radix must be at least 2, got {r}")));
        }
        if self.twiddle_cap_bytes == 0 {
            return Err(Error::Config("twiddle_cap_bytes must be non-zero".into()));
        }
        Ok(())
    }
}

/// Parse `"2,3, 4"` into radices. `None` on any malformed entry.
pub fn parse_radix_list(s: &str) -> Option<Vec<usize>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<usize>().ok())
        .collect()
}
