use crate::model::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// zone resolution of a movement record's endpoints. `None` marks an
/// endpoint that fell within no zone.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ZoneAssignment {
    /// zone containing the record origin, if any
    pub origin_zone: Option<ZoneId>,
    /// zone containing the record destination, if any
    pub destination_zone: Option<ZoneId>,
    /// weight carried through unchanged from the movement record
    pub weight: f64,
}

impl ZoneAssignment {
    pub fn new(
        origin_zone: Option<ZoneId>,
        destination_zone: Option<ZoneId>,
        weight: f64,
    ) -> ZoneAssignment {
        ZoneAssignment {
            origin_zone,
            destination_zone,
            weight,
        }
    }

    /// true when both endpoints resolved to a zone
    pub fn is_assigned(&self) -> bool {
        self.origin_zone.is_some() && self.destination_zone.is_some()
    }
}
