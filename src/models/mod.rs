//! Interval partitioning domain models.
//!
//! # Domain Mappings
//!
//! | u-partition | Facilities | Manufacturing | Transport |
//! |-------------|------------|---------------|-----------|
//! | Activity | Lecture / Meeting | Job | Arrival |
//! | Resource | Room | Machine | Gate / Platform |

mod activity;
mod resource;

pub use activity::{Activity, ActivityId, Hour, DEFAULT_MAX_HOUR};
pub use resource::ResourceId;
