//! Interval partitioning for the U-Engine ecosystem.
//!
//! Assigns the minimum number of interchangeable resources to a set of
//! time-bounded activities so that no two activities sharing a resource
//! overlap. Activities that merely touch at an endpoint may share.
//!
//! # Modules
//!
//! - **`models`**: `Activity`, `ActivityId`, `ResourceId`, hour bounds
//! - **`sequencer`**: START/END event stream with the boundary tie-break
//! - **`allocator`**: `GreedyAllocator` sweep and `AllocationKpi`
//! - **`factory`**: random valid activity pools
//! - **`validation`**: input integrity and exclusivity checks
//! - **`render`**: text timeline
//! - **`config`**: run parameters
//!
//! # Pipeline
//!
//! ```
//! use u_partition::allocator::{AllocationKpi, GreedyAllocator};
//! use u_partition::factory::ActivityFactory;
//! use u_partition::validation::validate_allocation;
//!
//! let mut activities = ActivityFactory::new(24).generate_seeded(1_000, 7).unwrap();
//! let allocation = GreedyAllocator::new().allocate(&mut activities).unwrap();
//!
//! assert!(validate_allocation(&activities).is_ok());
//! let kpi = AllocationKpi::calculate(&activities, 24);
//! assert_eq!(allocation.resource_count as usize, kpi.peak_concurrency);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-1

pub mod allocator;
pub mod config;
pub mod error;
pub mod factory;
pub mod models;
pub mod render;
pub mod sequencer;
pub mod validation;

pub use error::{PartitionError, PartitionResult};
