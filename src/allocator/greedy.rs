//! Greedy sweep allocator.
//!
//! # Algorithm
//!
//! 1. Clear any previous assignment.
//! 2. Build the merged event stream (see [`crate::sequencer`]).
//! 3. Walk the stream once: a START takes a free resource (or mints the
//!    next id), an END gives the activity's resource back.
//!
//! The highest id minted equals the largest number of mutually overlapping
//! activities, which is a lower bound for any valid assignment.
//!
//! # Complexity
//! O(n log n) sequencing + O(n) sweep.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)

use serde::{Deserialize, Serialize};

use super::pool::{ResourcePool, ReusePolicy};
use crate::error::{PartitionError, PartitionResult};
use crate::models::Activity;
use crate::sequencer::{sequence, EventKind};

/// Summary of one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Distinct resources minted (`R1..=R{resource_count}`).
    pub resource_count: u32,
    /// Activities that received a resource.
    pub activity_count: usize,
}

/// Interval-partitioning allocator.
///
/// # Example
///
/// ```
/// use u_partition::allocator::GreedyAllocator;
/// use u_partition::models::{Activity, ResourceId};
///
/// let mut acts = vec![
///     Activity::in_day(0, 0, 1).unwrap(),
///     Activity::in_day(1, 1, 2).unwrap(),
///     Activity::in_day(2, 0, 3).unwrap(),
/// ];
/// let allocation = GreedyAllocator::new().allocate(&mut acts).unwrap();
///
/// assert_eq!(allocation.resource_count, 2);
/// assert_eq!(acts[1].resource(), acts[0].resource());
/// assert_ne!(acts[0].resource(), acts[2].resource());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator {
    policy: ReusePolicy,
}

impl GreedyAllocator {
    /// Creates an allocator with LIFO reuse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reuse order for released resources.
    pub fn with_policy(mut self, policy: ReusePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReusePolicy {
        self.policy
    }

    /// Assigns a resource to every activity in place.
    ///
    /// Re-running on the same slice starts from scratch and produces the
    /// same assignment.
    ///
    /// # Errors
    /// `Invariant` if the event stream is inconsistent (an END without a
    /// resource, or resources still in use after the sweep). These indicate
    /// a defect, not bad input.
    pub fn allocate(&self, activities: &mut [Activity]) -> PartitionResult<Allocation> {
        for activity in activities.iter_mut() {
            activity.clear_resource();
        }

        let events = sequence(activities);
        let mut pool = ResourcePool::new(self.policy);

        for event in &events {
            let activity = &mut activities[event.index];
            match event.kind {
                EventKind::Start => {
                    let resource = pool.acquire();
                    activity.assign_resource(resource)?;
                    tracing::trace!(activity = %activity.id(), %resource, hour = event.time, "assigned");
                }
                EventKind::End => {
                    let resource = activity.resource().ok_or_else(|| {
                        PartitionError::Invariant(format!(
                            "activity {} ended at hour {} without a resource",
                            activity.id(),
                            event.time
                        ))
                    })?;
                    pool.release(resource);
                }
            }
        }

        if pool.idle() != pool.minted() as usize {
            return Err(PartitionError::Invariant(format!(
                "{} idle of {} minted resources after the sweep",
                pool.idle(),
                pool.minted()
            )));
        }

        let allocation = Allocation {
            resource_count: pool.minted(),
            activity_count: activities.len(),
        };
        tracing::debug!(
            activities = allocation.activity_count,
            resources = allocation.resource_count,
            policy = ?self.policy,
            "allocation complete"
        );
        Ok(allocation)
    }
}

/// Allocates with the default (LIFO) allocator.
pub fn allocate(activities: &mut [Activity]) -> PartitionResult<Allocation> {
    GreedyAllocator::new().allocate(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::AllocationKpi;
    use crate::factory::ActivityFactory;
    use crate::models::{Hour, ResourceId, DEFAULT_MAX_HOUR};
    use crate::validation::validate_allocation;

    fn acts(intervals: &[(Hour, Hour)]) -> Vec<Activity> {
        intervals
            .iter()
            .enumerate()
            .map(|(i, &(s, e))| Activity::in_day(i as u64, s, e).unwrap())
            .collect()
    }

    fn resources(activities: &[Activity]) -> Vec<u32> {
        activities
            .iter()
            .map(|a| a.resource().map(|r| r.0).unwrap_or(0))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let mut empty: Vec<Activity> = Vec::new();
        let allocation = allocate(&mut empty).unwrap();
        assert_eq!(allocation.resource_count, 0);
        assert_eq!(allocation.activity_count, 0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // 0: [0,1], 1: [1,2], 2: [0,3]
        let mut a = acts(&[(0, 1), (1, 2), (0, 3)]);
        let allocation = allocate(&mut a).unwrap();

        assert_eq!(allocation.resource_count, 2);
        assert_eq!(resources(&a), vec![1, 1, 2]);
    }

    #[test]
    fn test_chain_of_touching_intervals() {
        // Max overlap is 2; [2,4] reuses the resource freed by [0,2].
        let mut a = acts(&[(0, 2), (1, 3), (2, 4)]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 2);
        assert_eq!(a[0].resource(), a[2].resource());
        assert_ne!(a[0].resource(), a[1].resource());
    }

    #[test]
    fn test_disjoint_share_one_resource() {
        let mut a = acts(&[(0, 3), (3, 6), (6, 9), (9, 24)]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 1);
        assert!(a.iter().all(|x| x.resource() == Some(ResourceId(1))));
    }

    #[test]
    fn test_identical_intervals_need_one_each() {
        let mut a = acts(&[(4, 8); 5]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 5);
        let mut ids = resources(&a);
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_width_receives_resource() {
        let mut a = acts(&[(5, 5)]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 1);
        assert_eq!(a[0].resource(), Some(ResourceId(1)));
    }

    #[test]
    fn test_zero_width_reuses_at_boundaries() {
        // Points at a boundary share with both neighbours and with each other.
        let mut a = acts(&[(3, 5), (5, 5), (5, 5), (5, 7)]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 1);
    }

    #[test]
    fn test_zero_width_inside_interval() {
        let mut a = acts(&[(2, 8), (5, 5)]);
        let allocation = allocate(&mut a).unwrap();
        assert_eq!(allocation.resource_count, 2);
        assert_ne!(a[0].resource(), a[1].resource());
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let mut a = acts(&[(0, 4), (2, 6), (4, 8), (1, 1), (6, 9), (0, 24), (8, 8)]);
        let first = allocate(&mut a).unwrap();
        let before = resources(&a);
        let second = allocate(&mut a).unwrap();
        assert_eq!(first, second);
        assert_eq!(resources(&a), before);
    }

    #[test]
    fn test_fifo_same_count() {
        let mut factory = ActivityFactory::new(DEFAULT_MAX_HOUR);
        let mut lifo = factory.generate_seeded(2_000, 11).unwrap();
        let mut fifo = lifo.clone();

        let l = GreedyAllocator::new().allocate(&mut lifo).unwrap();
        let f = GreedyAllocator::new()
            .with_policy(ReusePolicy::Fifo)
            .allocate(&mut fifo)
            .unwrap();

        assert_eq!(l.resource_count, f.resource_count);
        assert!(validate_allocation(&fifo).is_ok());
    }

    #[test]
    fn test_random_pools_are_valid_and_minimal() {
        for seed in 0..20 {
            let mut factory = ActivityFactory::new(DEFAULT_MAX_HOUR);
            let mut a = factory.generate_seeded(500, seed).unwrap();
            let allocation = allocate(&mut a).unwrap();

            assert!(validate_allocation(&a).is_ok(), "seed {seed}");
            let kpi = AllocationKpi::calculate(&a, DEFAULT_MAX_HOUR);
            assert_eq!(
                allocation.resource_count as usize, kpi.peak_concurrency,
                "seed {seed}"
            );
            assert!(kpi.is_minimal());
        }
    }

    /// Largest pairwise-overlapping subset, by exhaustive search.
    fn max_clique(activities: &[Activity]) -> usize {
        let n = activities.len();
        (0u32..1u32 << n)
            .filter(|&mask| {
                (0..n).all(|i| {
                    (i + 1..n).all(|j| {
                        (mask >> i) & 1 == 0
                            || (mask >> j) & 1 == 0
                            || activities[i].overlaps(&activities[j])
                    })
                })
            })
            .map(|mask| mask.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_small_pools_match_exhaustive_search() {
        for seed in 0..300 {
            let mut factory = ActivityFactory::new(6);
            let mut a = factory.generate_seeded(9, seed).unwrap();
            let expected = max_clique(&a);
            let allocation = allocate(&mut a).unwrap();

            assert_eq!(allocation.resource_count as usize, expected, "seed {seed}");
            assert!(validate_allocation(&a).is_ok(), "seed {seed}");
        }
    }

    #[test]
    fn test_exhaustive_search_on_boundary_cases() {
        let mut a = acts(&[(0, 2), (1, 3), (2, 4)]);
        assert_eq!(max_clique(&a), 2);
        assert_eq!(allocate(&mut a).unwrap().resource_count, 2);

        let mut points = acts(&[(3, 5), (5, 5), (5, 5), (5, 7), (4, 6)]);
        assert_eq!(max_clique(&points), 2);
        assert_eq!(allocate(&mut points).unwrap().resource_count, 2);
    }

    #[test]
    fn test_small_horizon_with_many_points() {
        let mut factory = ActivityFactory::new(1);
        let mut a = factory.generate_seeded(300, 3).unwrap();
        let allocation = allocate(&mut a).unwrap();
        let kpi = AllocationKpi::calculate(&a, 1);
        assert_eq!(allocation.resource_count as usize, kpi.peak_concurrency);
        assert!(validate_allocation(&a).is_ok());
    }
}
