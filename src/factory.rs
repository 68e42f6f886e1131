//! Random activity generation.
//!
//! Draws two uniform hours per activity and orders them into `(start, end)`,
//! so every generated activity is valid by construction. Ids are sequential
//! per factory and never handed out twice.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::PartitionConfig;
use crate::error::PartitionResult;
use crate::models::{Activity, Hour};

/// Generator for pools of random valid activities.
#[derive(Debug, Clone)]
pub struct ActivityFactory {
    max_hour: Hour,
    next_id: u64,
}

impl ActivityFactory {
    /// Creates a factory for the horizon `0..=max_hour`.
    pub fn new(max_hour: Hour) -> Self {
        Self {
            max_hour,
            next_id: 0,
        }
    }

    /// Creates a factory for the configured horizon.
    pub fn from_config(config: &PartitionConfig) -> Self {
        Self::new(config.max_hour)
    }

    pub fn max_hour(&self) -> Hour {
        self.max_hour
    }

    /// Builds one activity with the next free id.
    pub fn create<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PartitionResult<Activity> {
        let a = rng.random_range(0..=self.max_hour);
        let b = rng.random_range(0..=self.max_hour);
        let activity = Activity::new(self.next_id, a.min(b), a.max(b), self.max_hour)?;
        self.next_id += 1;
        Ok(activity)
    }

    /// Builds `count` activities.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> PartitionResult<Vec<Activity>> {
        (0..count).map(|_| self.create(&mut *rng)).collect()
    }

    /// Builds `count` activities from a deterministic seed.
    pub fn generate_seeded(&mut self, count: usize, seed: u64) -> PartitionResult<Vec<Activity>> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(count, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityId;
    use crate::validation::validate_activities;

    #[test]
    fn test_generates_requested_count() {
        let mut factory = ActivityFactory::new(24);
        let acts = factory.generate_seeded(1_000, 42).unwrap();
        assert_eq!(acts.len(), 1_000);
        assert!(validate_activities(&acts, 24).is_ok());
    }

    #[test]
    fn test_ids_never_reused() {
        let mut factory = ActivityFactory::new(24);
        let first = factory.generate_seeded(10, 1).unwrap();
        let second = factory.generate_seeded(10, 1).unwrap();
        assert_eq!(first[0].id(), ActivityId(0));
        assert_eq!(second[0].id(), ActivityId(10));
        assert_eq!(second[9].id(), ActivityId(19));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = ActivityFactory::new(24).generate_seeded(200, 9).unwrap();
        let b = ActivityFactory::new(24).generate_seeded(200, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bounds_respected() {
        let mut factory = ActivityFactory::new(6);
        for act in factory.generate_seeded(500, 5).unwrap() {
            assert!(act.start() <= act.end());
            assert!(act.end() <= 6);
        }
    }

    #[test]
    fn test_zero_horizon() {
        let mut factory = ActivityFactory::new(0);
        let acts = factory.generate_seeded(5, 0).unwrap();
        assert_eq!(acts.len(), 5);
        assert!(acts.iter().all(|a| a.is_zero_width() && a.start() == 0));
    }

    #[test]
    fn test_from_config() {
        let config = PartitionConfig::default().with_max_hour(12);
        let factory = ActivityFactory::from_config(&config);
        assert_eq!(factory.max_hour(), 12);
    }
}
