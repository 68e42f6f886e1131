//! Free-resource pool.
//!
//! Holds the ids released by finished activities plus the highest id minted
//! so far. A fresh pool lives for exactly one allocation run.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::models::ResourceId;

/// Order in which released resources are handed out again.
///
/// Both orders mint the same number of resources; they differ only in which
/// concrete id an activity receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReusePolicy {
    /// Most recently released first (stack).
    #[default]
    Lifo,
    /// Longest idle first (queue).
    Fifo,
}

#[derive(Debug, Clone)]
pub(crate) struct ResourcePool {
    free: VecDeque<ResourceId>,
    last_minted: Option<ResourceId>,
    policy: ReusePolicy,
}

impl ResourcePool {
    pub(crate) fn new(policy: ReusePolicy) -> Self {
        Self {
            free: VecDeque::new(),
            last_minted: None,
            policy,
        }
    }

    /// Takes a free resource, minting a new one when none is idle.
    pub(crate) fn acquire(&mut self) -> ResourceId {
        let reused = match self.policy {
            ReusePolicy::Lifo => self.free.pop_back(),
            ReusePolicy::Fifo => self.free.pop_front(),
        };
        reused.unwrap_or_else(|| {
            let minted = self.last_minted.map_or(ResourceId::FIRST, ResourceId::next);
            self.last_minted = Some(minted);
            minted
        })
    }

    pub(crate) fn release(&mut self, resource: ResourceId) {
        self.free.push_back(resource);
    }

    /// Highest id minted, i.e. the number of distinct resources in use.
    pub(crate) fn minted(&self) -> u32 {
        self.last_minted.map_or(0, |r| r.0)
    }

    pub(crate) fn idle(&self) -> usize {
        self.free.len()
    }
}
