//! Event sequencing.
//!
//! Turns every activity into a START and an END event and merges them into
//! one chronological stream for the allocator's sweep.
//!
//! # Algorithm
//!
//! 1. Sort START events by `(start, positive-width, index)`.
//! 2. Sort END events by `(end, zero-width, index)`.
//! 3. Two-pointer merge: the earlier timestamp wins. On equal timestamps the
//!    END wins, unless the head START belongs to the same activity.
//!
//! At hour `H` this emits, in order: ENDs of activities that started before
//! `H`, then each zero-width `[H, H]` activity as an adjacent START/END
//! pair, then STARTs of activities spanning past `H`. A resource freed at
//! `H` is therefore available to everything starting at `H`.
//!
//! # Complexity
//! O(n log n) for the two sorts, O(n) for the merge.

use std::cmp::Ordering;

use crate::models::{Activity, Hour};

/// START or END marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
}

/// A timestamped view of one activity boundary.
///
/// `index` points into the activity slice the event was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub time: Hour,
    pub kind: EventKind,
    pub index: usize,
}

impl Event {
    fn start(index: usize, activity: &Activity) -> Self {
        Self {
            time: activity.start(),
            kind: EventKind::Start,
            index,
        }
    }

    fn end(index: usize, activity: &Activity) -> Self {
        Self {
            time: activity.end(),
            kind: EventKind::End,
            index,
        }
    }
}

/// Produces the merged event stream for `activities`.
///
/// The result holds exactly `2 * activities.len()` events, and calling it
/// twice on the same slice yields the same order.
///
/// # Example
///
/// ```
/// use u_partition::models::Activity;
/// use u_partition::sequencer::{sequence, EventKind};
///
/// let acts = vec![
///     Activity::in_day(0, 0, 2).unwrap(),
///     Activity::in_day(1, 2, 4).unwrap(),
/// ];
/// let events = sequence(&acts);
/// let kinds: Vec<_> = events.iter().map(|e| (e.index, e.kind)).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         (0, EventKind::Start),
///         (0, EventKind::End),
///         (1, EventKind::Start),
///         (1, EventKind::End),
///     ]
/// );
/// ```
pub fn sequence(activities: &[Activity]) -> Vec<Event> {
    let mut starts: Vec<Event> = activities
        .iter()
        .enumerate()
        .map(|(i, a)| Event::start(i, a))
        .collect();
    let mut ends: Vec<Event> = activities
        .iter()
        .enumerate()
        .map(|(i, a)| Event::end(i, a))
        .collect();

    // Zero-width starts lead their hour; zero-width ends trail it.
    starts.sort_unstable_by_key(|e| (e.time, !activities[e.index].is_zero_width(), e.index));
    ends.sort_unstable_by_key(|e| (e.time, activities[e.index].is_zero_width(), e.index));

    let merged = merge(&starts, &ends);
    tracing::trace!(events = merged.len(), "sequenced activity events");
    merged
}

/// Two-pointer merge of the sorted START and END runs.
fn merge(starts: &[Event], ends: &[Event]) -> Vec<Event> {
    let mut out = Vec::with_capacity(starts.len() + ends.len());
    let (mut i, mut j) = (0, 0);

    while i < starts.len() && j < ends.len() {
        let (s, e) = (starts[i], ends[j]);
        let take_start = match s.time.cmp(&e.time) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => s.index == e.index,
        };
        if take_start {
            out.push(s);
            i += 1;
        } else {
            out.push(e);
            j += 1;
        }
    }
    out.extend_from_slice(&starts[i..]);
    out.extend_from_slice(&ends[j..]);
    out
}
