//! Resource identifiers.
//!
//! Resources are fungible: rooms, machines, lanes. The only thing that
//! distinguishes one from another is its number, minted by the allocator
//! starting at 1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;

/// A resource number. Minted and deserialized ids are always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32")]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// The first id the allocator mints.
    pub const FIRST: ResourceId = ResourceId(1);

    /// The id minted after this one.
    #[inline]
    pub fn next(self) -> ResourceId {
        ResourceId(self.0 + 1)
    }
}

impl TryFrom<u32> for ResourceId {
    type Error = PartitionError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(PartitionError::InvalidResource(n));
        }
        Ok(ResourceId(n))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_sequence() {
        assert_eq!(ResourceId::FIRST, ResourceId(1));
        assert_eq!(ResourceId::FIRST.next(), ResourceId(2));
    }

    #[test]
    fn test_resource_id_display() {
        assert_eq!(ResourceId(12).to_string(), "R12");
        assert!(ResourceId(1) < ResourceId(2));
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            ResourceId::try_from(0),
            Err(PartitionError::InvalidResource(0))
        );
        assert_eq!(ResourceId::try_from(4), Ok(ResourceId(4)));
        assert!(serde_json::from_str::<ResourceId>("0").is_err());
        assert_eq!(serde_json::from_str::<ResourceId>("7").unwrap(), ResourceId(7));
    }
}
