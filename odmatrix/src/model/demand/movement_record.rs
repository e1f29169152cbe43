use super::DemandError;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a single movement between two locations, in the same planar coordinate
/// system as the zone set. for graph-like sources the loader resolves an
/// edge to its endpoint coordinates before building a record.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MovementRecord {
    /// location where the movement began
    pub origin: Point<f32>,
    /// location where the movement ended
    pub destination: Point<f32>,
    /// count contribution of this record. trip-based sources use one per
    /// trip, event-based sources may carry observed volumes.
    pub weight: f64,
}

impl MovementRecord {
    /// creates a weighted record. negative (or NaN) weights are a caller
    /// contract violation and are rejected rather than allowed to produce
    /// negative demand downstream.
    pub fn new(
        origin: Point<f32>,
        destination: Point<f32>,
        weight: f64,
    ) -> Result<MovementRecord, DemandError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(DemandError::InvalidWeight(weight));
        }
        Ok(MovementRecord {
            origin,
            destination,
            weight,
        })
    }

    /// creates a record carrying the default weight of one trip.
    pub fn unweighted(origin: Point<f32>, destination: Point<f32>) -> MovementRecord {
        MovementRecord {
            origin,
            destination,
            weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_weight_rejected() {
        let result = MovementRecord::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), -1.0);
        assert!(matches!(result, Err(DemandError::InvalidWeight(w)) if w == -1.0));
    }

    #[test]
    fn test_unweighted_record_counts_one_trip() {
        let record = MovementRecord::unweighted(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert_eq!(record.weight, 1.0);
    }
}
