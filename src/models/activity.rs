//! Activity (interval) model.
//!
//! An activity is a closed interval of whole hours `[start, end]` that needs
//! exclusive use of one resource for its duration. The resource is unknown
//! at construction and filled in by the allocator.
//!
//! # Occupancy
//!
//! Two activities overlap when `a.start < b.end && b.start < a.end`, so
//! activities that only touch at an endpoint may share a resource. A
//! zero-width activity `[t, t]` conflicts only with activities that strictly
//! contain `t`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ResourceId;
use crate::error::{PartitionError, PartitionResult};

/// Hour-of-horizon timestamp.
pub type Hour = u16;

/// Default horizon: one day.
pub const DEFAULT_MAX_HOUR: Hour = 24;

/// Stable activity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivityId(pub u64);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A time-bounded activity and its assigned resource.
///
/// Deserialization goes through [`Activity::new`] with the widest horizon,
/// so reversed intervals are rejected; check a narrower horizon with
/// [`crate::validation::validate_activities`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActivityRecord")]
pub struct Activity {
    id: ActivityId,
    start: Hour,
    end: Hour,
    resource: Option<ResourceId>,
}

/// Wire shape of [`Activity`], checked on the way in.
#[derive(Deserialize)]
struct ActivityRecord {
    id: ActivityId,
    start: Hour,
    end: Hour,
    #[serde(default)]
    resource: Option<ResourceId>,
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = PartitionError;

    fn try_from(record: ActivityRecord) -> PartitionResult<Self> {
        let mut activity = Activity::new(record.id.0, record.start, record.end, Hour::MAX)?;
        activity.resource = record.resource;
        Ok(activity)
    }
}

impl Activity {
    /// Creates an activity on the horizon `0..=max_hour`.
    ///
    /// # Errors
    /// `InvalidInterval` when either bound exceeds `max_hour` or
    /// `start > end`.
    pub fn new(id: u64, start: Hour, end: Hour, max_hour: Hour) -> PartitionResult<Self> {
        if start > max_hour || end > max_hour || start > end {
            return Err(PartitionError::InvalidInterval {
                id: ActivityId(id),
                start,
                end,
                max_hour,
            });
        }
        Ok(Self {
            id: ActivityId(id),
            start,
            end,
            resource: None,
        })
    }

    /// Creates an activity on the default 24-hour horizon.
    pub fn in_day(id: u64, start: Hour, end: Hour) -> PartitionResult<Self> {
        Self::new(id, start, end, DEFAULT_MAX_HOUR)
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }

    pub fn start(&self) -> Hour {
        self.start
    }

    pub fn end(&self) -> Hour {
        self.end
    }

    /// Assigned resource, `None` before allocation.
    pub fn resource(&self) -> Option<ResourceId> {
        self.resource
    }

    /// Length in hours (`end - start`).
    #[inline]
    pub fn duration(&self) -> Hour {
        self.end - self.start
    }

    #[inline]
    pub fn is_zero_width(&self) -> bool {
        self.start == self.end
    }

    /// Whether the two activities cannot share a resource.
    #[inline]
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `hour` lies within `[start, end]`, both ends inclusive.
    ///
    /// Used for display; conflicts are decided by [`Activity::overlaps`].
    #[inline]
    pub fn occupies(&self, hour: Hour) -> bool {
        self.start <= hour && hour <= self.end
    }

    /// Records the resource chosen by the allocator.
    ///
    /// # Errors
    /// `Invariant` if a resource was already assigned in this pass.
    pub fn assign_resource(&mut self, resource: ResourceId) -> PartitionResult<()> {
        if let Some(existing) = self.resource {
            return Err(PartitionError::Invariant(format!(
                "activity {} already holds resource {existing}, refusing {resource}",
                self.id
            )));
        }
        self.resource = Some(resource);
        Ok(())
    }

    /// Forgets the assignment before a fresh allocation pass.
    pub(crate) fn clear_resource(&mut self) {
        self.resource = None;
    }
}
