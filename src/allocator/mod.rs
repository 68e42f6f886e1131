//! Resource allocation and allocation metrics.
//!
//! # Algorithm
//!
//! `GreedyAllocator` sweeps the merged event stream once, handing out the
//! most recently freed resource (or a new one) at every START and taking it
//! back at the matching END. The result uses the minimum possible number of
//! resources.
//!
//! # KPI
//!
//! `AllocationKpi` reports resource count, peak concurrency, and per-resource
//! utilization for a finished allocation.

mod greedy;
mod kpi;
mod pool;

pub use greedy::{allocate, Allocation, GreedyAllocator};
pub use kpi::{peak_concurrency, AllocationKpi};
pub use pool::ReusePolicy;
