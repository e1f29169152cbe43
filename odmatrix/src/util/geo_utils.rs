use geo::{BoundingRect, Polygon};
use rstar::primitives::Rectangle;
use wkt::ToWkt;

/// creates a rectangular rtree envelope from the bounding box of a polygon.
///
/// the result is an error only when the polygon has no bounds, which occurs
/// for empty geometries.
pub fn polygon_envelope(polygon: &Polygon<f32>) -> Result<Rectangle<(f32, f32)>, String> {
    let bbox = polygon.bounding_rect().ok_or_else(|| {
        format!(
            "internal error: cannot get bounds of geometry: '{}'",
            polygon.to_wkt()
        )
    })?;
    Ok(Rectangle::from_corners(
        bbox.min().x_y(),
        bbox.max().x_y(),
    ))
}
