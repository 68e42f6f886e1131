//! Run configuration.
//!
//! The horizon and pool size are passed explicitly to the factory and the
//! allocator; nothing is read from process-wide state.

use serde::{Deserialize, Serialize};

use crate::allocator::{GreedyAllocator, ReusePolicy};
use crate::error::{PartitionError, PartitionResult};
use crate::models::{Hour, DEFAULT_MAX_HOUR};

/// Default number of generated activities.
pub const DEFAULT_ACTIVITY_COUNT: usize = 500_000;

/// Parameters for one generate-and-allocate run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Number of activities to generate.
    pub activity_count: usize,
    /// Last hour of the horizon (inclusive).
    pub max_hour: Hour,
    /// RNG seed; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Reuse order for released resources.
    pub reuse: ReusePolicy,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            activity_count: DEFAULT_ACTIVITY_COUNT,
            max_hour: DEFAULT_MAX_HOUR,
            seed: None,
            reuse: ReusePolicy::Lifo,
        }
    }
}

impl PartitionConfig {
    pub fn with_activity_count(mut self, activity_count: usize) -> Self {
        self.activity_count = activity_count;
        self
    }

    pub fn with_max_hour(mut self, max_hour: Hour) -> Self {
        self.max_hour = max_hour;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reuse(mut self, reuse: ReusePolicy) -> Self {
        self.reuse = reuse;
        self
    }

    /// Rejects an empty pool or an empty horizon.
    pub fn validate(&self) -> PartitionResult<()> {
        if self.activity_count == 0 {
            return Err(PartitionError::Config(
                "activity_count must be at least 1".into(),
            ));
        }
        if self.max_hour == 0 {
            return Err(PartitionError::Config("max_hour must be at least 1".into()));
        }
        Ok(())
    }

    /// Allocator configured with this run's reuse policy.
    pub fn allocator(&self) -> GreedyAllocator {
        GreedyAllocator::new().with_policy(self.reuse)
    }
}
