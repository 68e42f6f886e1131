//! Input and result validation for interval partitioning.
//!
//! Checks structural integrity of activities before allocation and the
//! exclusivity of an assignment after it. Detects:
//! - Duplicate activity IDs
//! - Intervals reaching past the horizon
//! - Activities left without a resource
//! - Overlapping activities on one resource
//!
//! Every check runs to completion, so callers see all issues at once.

use std::collections::{HashMap, HashSet};

use crate::models::{Activity, Hour, ResourceId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two activities share the same ID.
    DuplicateId,
    /// Interval ends after the horizon.
    OutOfRange,
    /// An activity has no resource after allocation.
    Unassigned,
    /// Two activities on one resource overlap in time.
    ResourceOverlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates activities before allocation.
///
/// Checks:
/// 1. No duplicate activity IDs
/// 2. `end <= max_hour` for every activity (`start <= end` holds by
///    construction)
pub fn validate_activities(activities: &[Activity], max_hour: Hour) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for act in activities {
        if !seen.insert(act.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate activity ID: {}", act.id()),
            ));
        }
        if act.end() > max_hour {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRange,
                format!(
                    "Activity {} spans [{}, {}] outside 0..={max_hour}",
                    act.id(),
                    act.start(),
                    act.end()
                ),
            ));
        }
    }

    finish(errors)
}

/// Validates a finished allocation.
///
/// Checks:
/// 1. Every activity holds a resource
/// 2. No two activities on the same resource overlap (touching is allowed)
pub fn validate_allocation(activities: &[Activity]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut by_resource: HashMap<ResourceId, Vec<&Activity>> = HashMap::new();

    for act in activities {
        match act.resource() {
            Some(r) => by_resource.entry(r).or_default().push(act),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::Unassigned,
                format!("Activity {} has no resource", act.id()),
            )),
        }
    }

    let mut resources: Vec<_> = by_resource.into_iter().collect();
    resources.sort_unstable_by_key(|(r, _)| *r);

    for (resource, mut acts) in resources {
        acts.sort_unstable_by_key(|a| (a.start(), a.end(), a.id()));

        // Compare each activity against the one reaching furthest so far.
        let mut frontier: Option<&Activity> = None;
        for act in acts {
            if let Some(prev) = frontier {
                if prev.overlaps(act) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::ResourceOverlap,
                        format!(
                            "Activities {} [{}, {}] and {} [{}, {}] overlap on {resource}",
                            prev.id(),
                            prev.start(),
                            prev.end(),
                            act.id(),
                            act.start(),
                            act.end()
                        ),
                    ));
                }
            }
            match frontier {
                Some(prev) if prev.end() >= act.end() => {}
                _ => frontier = Some(act),
            }
        }
    }

    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
