use super::{ZoneError, ZoneId};
use geo::{Area, Polygon, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use wkt::ToWkt;

/// a named polygonal region of the zone system.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Zone {
    /// identifier, unique within a zone set
    pub id: ZoneId,
    /// region boundary, possibly holed, in the planar coordinate system
    /// shared by the whole zone set
    pub boundary: Polygon<f32>,
}

impl Zone {
    pub fn new(id: ZoneId, boundary: Polygon<f32>) -> Zone {
        Zone { id, boundary }
    }

    /// confirms this zone can participate in a zone index. boundaries must
    /// have at least 3 distinct exterior vertices, nonzero area, and pass
    /// OGC validity (no self-intersection, holes contained in the shell).
    pub fn validate(&self) -> Result<(), ZoneError> {
        // f32 has no Eq, compare bit patterns
        let distinct = self
            .boundary
            .exterior()
            .coords()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .collect::<HashSet<_>>()
            .len();
        if distinct < 3 {
            return Err(ZoneError::DegenerateBoundary(
                self.id.clone(),
                self.boundary.to_wkt().to_string(),
            ));
        }
        if self.boundary.unsigned_area() == 0.0 {
            return Err(ZoneError::ZeroAreaBoundary(
                self.id.clone(),
                self.boundary.to_wkt().to_string(),
            ));
        }
        if !self.boundary.is_valid() {
            return Err(ZoneError::SelfIntersectingBoundary(
                self.id.clone(),
                self.boundary.to_wkt().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, LineString};

    #[test]
    fn test_simple_boundary_is_valid() {
        let zone = Zone::new(
            ZoneId::from("ok"),
            polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
        );
        assert!(zone.validate().is_ok());
    }

    #[test]
    fn test_two_vertex_boundary_is_degenerate() {
        let boundary = Polygon::new(LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]), vec![]);
        let zone = Zone::new(ZoneId::from("segment"), boundary);
        match zone.validate() {
            Err(ZoneError::DegenerateBoundary(id, _)) => assert_eq!(id, ZoneId::from("segment")),
            other => panic!("expected DegenerateBoundary, found {:?}", other),
        }
    }

    #[test]
    fn test_collinear_boundary_has_zero_area() {
        let boundary = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            vec![],
        );
        let zone = Zone::new(ZoneId::from("line"), boundary);
        match zone.validate() {
            Err(ZoneError::ZeroAreaBoundary(id, _)) => assert_eq!(id, ZoneId::from("line")),
            other => panic!("expected ZeroAreaBoundary, found {:?}", other),
        }
    }

    #[test]
    fn test_bowtie_boundary_is_self_intersecting() {
        // crossing quad with nonzero net area so it is not caught by the
        // zero-area check first
        let boundary = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (1.0, 2.0), (3.0, 2.0)]),
            vec![],
        );
        let zone = Zone::new(ZoneId::from("bowtie"), boundary);
        match zone.validate() {
            Err(ZoneError::SelfIntersectingBoundary(id, _)) => {
                assert_eq!(id, ZoneId::from("bowtie"))
            }
            other => panic!("expected SelfIntersectingBoundary, found {:?}", other),
        }
    }

    #[test]
    fn test_hole_outside_shell_is_invalid() {
        let boundary = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]),
            vec![LineString::from(vec![
                (10.0, 10.0),
                (11.0, 10.0),
                (11.0, 11.0),
                (10.0, 11.0),
            ])],
        );
        let zone = Zone::new(ZoneId::from("escaped-hole"), boundary);
        assert!(matches!(
            zone.validate(),
            Err(ZoneError::SelfIntersectingBoundary(_, _))
        ));
    }
}
