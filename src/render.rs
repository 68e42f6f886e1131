//! Text timeline rendering.
//!
//! One row per activity: a cell per hour of the horizon, `#` where the
//! activity occupies the hour and `-` elsewhere, followed by its resource
//! and bounds.
//!
//! ```text
//! [ -  #  #  #  -  - ] resource R1 start 1 end 3
//! ```

use std::io::{self, Write};

use crate::models::{Activity, Hour};

/// Writes the timeline for `activities` on the horizon `0..=max_hour`.
pub fn render_timeline<W: Write>(
    activities: &[Activity],
    max_hour: Hour,
    out: &mut W,
) -> io::Result<()> {
    for activity in activities {
        write!(out, "[")?;
        for hour in 0..=max_hour {
            let cell = if activity.occupies(hour) { " # " } else { " - " };
            write!(out, "{cell}")?;
        }
        match activity.resource() {
            Some(r) => write!(out, "] resource {r}")?,
            None => write!(out, "] resource -")?,
        }
        writeln!(out, " start {} end {}", activity.start(), activity.end())?;
    }
    Ok(())
}
