use geo::{Contains, Intersects, Point, Polygon};
use serde::{Deserialize, Serialize};

/// decides whether a point lying exactly on a zone boundary belongs to the
/// zone. applies to the outer ring and to hole rings alike.
///
/// `Inclusive` is the default: a point on an edge or vertex is contained,
/// extending the usual "within" predicate to the boundary. `Exclusive`
/// restricts membership to the interior.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRule {
    #[default]
    Inclusive,
    Exclusive,
}

impl BoundaryRule {
    /// exact containment test of a point against a zone boundary under this
    /// rule. holes are respected: a point inside a hole is outside the zone.
    pub fn contains(&self, boundary: &Polygon<f32>, point: &Point<f32>) -> bool {
        match self {
            BoundaryRule::Inclusive => boundary.intersects(point),
            BoundaryRule::Exclusive => boundary.contains(point),
        }
    }
}
