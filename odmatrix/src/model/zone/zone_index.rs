use super::{BoundaryRule, Zone, ZoneError, ZoneId};
use crate::util::geo_utils;
use geo::Point;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};
use std::collections::HashSet;

/// rtree entry pairing a zone's bounding box with its offset into the zone
/// vector. containment is only decided against the exact boundary, the
/// envelope just prunes candidates.
type ZoneEnvelope = GeomWithData<Rectangle<(f32, f32)>, usize>;

/// spatial index over a validated zone set, answering "which zone contains
/// this point" queries. read-only once built, so it can be shared freely
/// across threads without locking.
#[derive(Debug)]
pub struct ZoneIndex {
    zones: Vec<Zone>,
    rtree: RTree<ZoneEnvelope>,
    boundary_rule: BoundaryRule,
}

impl ZoneIndex {
    /// builds an index over the zone set. every zone boundary is validated
    /// and zone ids must be unique; the first problem found aborts the build
    /// with no partial index. all boundaries must share one planar
    /// coordinate system, coordinate transformation is the loader's concern.
    pub fn new(zones: Vec<Zone>, boundary_rule: BoundaryRule) -> Result<ZoneIndex, ZoneError> {
        if zones.is_empty() {
            return Err(ZoneError::EmptyZoneSet);
        }
        {
            let mut seen: HashSet<&ZoneId> = HashSet::new();
            for zone in zones.iter() {
                if !seen.insert(&zone.id) {
                    return Err(ZoneError::DuplicateZoneId(zone.id.clone()));
                }
                zone.validate()?;
            }
        }

        let envelopes = zones
            .iter()
            .enumerate()
            .map(|(index, zone)| {
                let rect = geo_utils::polygon_envelope(&zone.boundary)
                    .map_err(|e| ZoneError::InvalidBounds(zone.id.clone(), e))?;
                Ok(GeomWithData::new(rect, index))
            })
            .collect::<Result<Vec<_>, ZoneError>>()?;
        let rtree = RTree::bulk_load(envelopes);

        log::info!("built zone index over {} zones", zones.len());
        Ok(ZoneIndex {
            zones,
            rtree,
            boundary_rule,
        })
    }

    /// finds the zone containing this point. candidates are gathered by
    /// bounding box intersection, then confirmed against the exact boundary
    /// under the index's boundary rule. when overlapping zones both contain
    /// the point, the lowest zone id wins, independent of build order. a
    /// point contained by no zone returns None.
    pub fn locate(&self, point: &Point<f32>) -> Option<&ZoneId> {
        let envelope = AABB::from_point((point.x(), point.y()));
        self.rtree
            .locate_in_envelope_intersecting(&envelope)
            .filter_map(|candidate| self.zones.get(candidate.data))
            .filter(|zone| self.boundary_rule.contains(&zone.boundary, point))
            .map(|zone| &zone.id)
            .min()
    }

    pub fn boundary_rule(&self) -> BoundaryRule {
        self.boundary_rule
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
