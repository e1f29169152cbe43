use thiserror::Error;

/// contract violations in the demand aggregation path. unassigned endpoints
/// are not errors, they are handled by the drop policy on [`super::OdMatrix`].
#[derive(Error, Debug)]
pub enum DemandError {
    #[error("movement record weight must be a non-negative number, found {0}")]
    InvalidWeight(f64),
}
