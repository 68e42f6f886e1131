//! Allocation quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Resource count | Distinct resources assigned |
//! | Peak concurrency | Largest set of mutually overlapping activities |
//! | Busy hours | Sum of activity durations per resource |
//! | Utilization | Busy hours / horizon length |
//!
//! Peak concurrency is computed from interval bounds alone, without the
//! event sequencer, so it can be used to cross-check an allocation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Activity, Hour, ResourceId};

/// Allocation performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationKpi {
    pub activity_count: usize,
    /// Activities without a resource.
    pub unassigned: usize,
    /// Distinct resources assigned.
    pub resource_count: usize,
    /// Lower bound on the number of resources any valid assignment needs.
    pub peak_concurrency: usize,
    /// Hours each resource spends busy.
    pub busy_hours_by_resource: BTreeMap<ResourceId, u64>,
    /// Fraction of the horizon each resource spends busy (0.0..1.0).
    pub utilization_by_resource: BTreeMap<ResourceId, f64>,
    /// Mean of `utilization_by_resource`.
    pub avg_utilization: f64,
}

impl AllocationKpi {
    /// Computes KPIs for allocated activities on the horizon `0..=max_hour`.
    pub fn calculate(activities: &[Activity], max_hour: Hour) -> Self {
        let mut busy: BTreeMap<ResourceId, u64> = BTreeMap::new();
        let mut unassigned = 0;

        for activity in activities {
            match activity.resource() {
                Some(r) => *busy.entry(r).or_default() += u64::from(activity.duration()),
                None => unassigned += 1,
            }
        }

        let utilization_by_resource: BTreeMap<ResourceId, f64> = busy
            .iter()
            .map(|(&r, &hours)| {
                let u = if max_hour == 0 {
                    0.0
                } else {
                    hours as f64 / f64::from(max_hour)
                };
                (r, u)
            })
            .collect();

        let avg_utilization = if utilization_by_resource.is_empty() {
            0.0
        } else {
            utilization_by_resource.values().sum::<f64>() / utilization_by_resource.len() as f64
        };

        Self {
            activity_count: activities.len(),
            unassigned,
            resource_count: busy.len(),
            peak_concurrency: peak_concurrency(activities),
            busy_hours_by_resource: busy,
            utilization_by_resource,
            avg_utilization,
        }
    }

    /// Whether every activity is assigned and no resource could be saved.
    pub fn is_minimal(&self) -> bool {
        self.unassigned == 0 && self.resource_count == self.peak_concurrency
    }
}

/// Size of the largest set of mutually overlapping activities.
///
/// At each hour `t`: activities ending at `t` leave first, a zero-width
/// activity at `t` conflicts only with what is still running, then
/// activities starting at `t` join.
pub fn peak_concurrency(activities: &[Activity]) -> usize {
    // hour -> (ending, zero-width, starting)
    let mut marks: BTreeMap<Hour, (usize, bool, usize)> = BTreeMap::new();
    for a in activities {
        if a.is_zero_width() {
            marks.entry(a.start()).or_default().1 = true;
        } else {
            marks.entry(a.start()).or_default().2 += 1;
            marks.entry(a.end()).or_default().0 += 1;
        }
    }

    let mut running = 0usize;
    let mut peak = 0usize;
    for (ending, has_point, starting) in marks.into_values() {
        running -= ending;
        if has_point {
            peak = peak.max(running + 1);
        }
        running += starting;
        peak = peak.max(running);
    }
    peak
}
