use super::ZoneId;
use thiserror::Error;

/// failures detected while building a zone index. all of these abort the
/// build; a zone index is never partially constructed.
#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("cannot build a zone index from an empty zone set")]
    EmptyZoneSet,
    #[error("zone id '{0}' appears more than once in the zone set")]
    DuplicateZoneId(ZoneId),
    #[error("boundary of zone '{0}' has fewer than 3 distinct vertices: {1}")]
    DegenerateBoundary(ZoneId, String),
    #[error("boundary of zone '{0}' has zero area: {1}")]
    ZeroAreaBoundary(ZoneId, String),
    #[error("boundary of zone '{0}' is self-intersecting or otherwise invalid: {1}")]
    SelfIntersectingBoundary(ZoneId, String),
    #[error("cannot compute bounding box for zone '{0}': {1}")]
    InvalidBounds(ZoneId, String),
}
