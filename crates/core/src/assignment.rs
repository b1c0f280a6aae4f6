//! Store assignment with the backend's `0` sentinel.
//!
//! Admin and clerk accounts carry a `store_id` field where `0` means
//! "not assigned to any store". The wire keeps the sentinel (the backend
//! depends on it); everything above this type sees an explicit optional.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::StoreId;

/// A possibly-absent store assignment.
///
/// Serializes as the raw integer the backend expects: `0` for
/// [`StoreAssignment::Unassigned`], the store id otherwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum StoreAssignment {
    Assigned(StoreId),
    #[default]
    Unassigned,
}

impl StoreAssignment {
    pub fn store_id(&self) -> Option<StoreId> {
        match self {
            StoreAssignment::Assigned(id) => Some(*id),
            StoreAssignment::Unassigned => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, StoreAssignment::Assigned(_))
    }

    /// Wire representation (`0` = unassigned).
    pub fn as_i64(&self) -> i64 {
        match self {
            StoreAssignment::Assigned(id) => id.as_i64(),
            StoreAssignment::Unassigned => 0,
        }
    }
}

impl From<Option<StoreId>> for StoreAssignment {
    fn from(value: Option<StoreId>) -> Self {
        match value {
            Some(id) if id.as_i64() != 0 => StoreAssignment::Assigned(id),
            _ => StoreAssignment::Unassigned,
        }
    }
}

impl Serialize for StoreAssignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for StoreAssignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(if raw == 0 {
            StoreAssignment::Unassigned
        } else {
            StoreAssignment::Assigned(StoreId::new(raw))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_deserializes_as_unassigned() {
        let a: StoreAssignment = serde_json::from_str("0").unwrap();
        assert_eq!(a, StoreAssignment::Unassigned);
        assert_eq!(a.store_id(), None);
    }

    #[test]
    fn nonzero_deserializes_as_assigned() {
        let a: StoreAssignment = serde_json::from_str("7").unwrap();
        assert_eq!(a, StoreAssignment::Assigned(StoreId::new(7)));
    }

    #[test]
    fn unassigned_serializes_as_the_sentinel() {
        let json = serde_json::to_string(&StoreAssignment::Unassigned).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn assigned_serializes_as_the_raw_id() {
        let json = serde_json::to_string(&StoreAssignment::Assigned(StoreId::new(3))).unwrap();
        assert_eq!(json, "3");
    }
}
