mod boundary_rule;
mod zone;
mod zone_error;
mod zone_id;
mod zone_index;

pub use boundary_rule::BoundaryRule;
pub use zone::Zone;
pub use zone_error::ZoneError;
pub use zone_id::ZoneId;
pub use zone_index::ZoneIndex;
