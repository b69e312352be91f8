//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Pair width used by pairwise operations when the caller does not pick one.
pub const DEFAULT_PAIR_STEP: usize = 2;

/// Partition count used by `tee_with` when no configuration overrides it.
pub const DEFAULT_TEE_PARTS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Step between the first elements of consecutive pairs in `pair_op`.
    pub pair_step: usize,

    /// Number of partitions `tee_with` splits a sequence into.
    pub tee_parts: usize,

    /// Release the spare capacity of grow-as-needed outputs (filter, where,
    /// double_comp) once they are complete.
    pub compact_filtered: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pair_step: DEFAULT_PAIR_STEP,
            tee_parts: DEFAULT_TEE_PARTS,
            compact_filtered: true,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQTOOLS_PAIR_STEP`: pair step for `pair_op_with`
    /// - `SEQTOOLS_TEE_PARTS`: partition count for `tee_with`
    /// - `SEQTOOLS_COMPACT_FILTERED`: `true`/`false`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SEQTOOLS_PAIR_STEP") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.pair_step = v;
            }
        }

        if let Some(s) = lookup("SEQTOOLS_TEE_PARTS") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.tee_parts = v;
            }
        }

        if let Some(s) = lookup("SEQTOOLS_COMPACT_FILTERED") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.compact_filtered = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.pair_step < 2 {
            return Err(Error::Config(format!(
                "pair_step must be at least 2, got {}",
                self.pair_step
            )));
        }
        if self.tee_parts == 0 {
            return Err(Error::Config("tee_parts must be at least 1".into()));
        }
        Ok(())
    }
}
