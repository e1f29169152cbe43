use super::{DemandError, OdMatrixEntry, ZoneAssignment};
use crate::model::zone::ZoneId;
use itertools::Itertools;
use std::collections::BTreeMap;

/// accumulates demand per (origin zone, destination zone) pair.
///
/// assignments with an unassigned endpoint are dropped from the matrix
/// rather than bucketed into a synthetic outside zone; the drop totals are
/// retained as diagnostics. accumulation is
/// commutative and associative, so partial matrices built over any
/// partition of the input stream merge into the same result as a single
/// pass (see [`OdMatrix::merge`]).
#[derive(Debug, Clone, Default)]
pub struct OdMatrix {
    cells: BTreeMap<(ZoneId, ZoneId), f64>,
    dropped_records: u64,
    dropped_weight: f64,
}

impl OdMatrix {
    pub fn new() -> OdMatrix {
        OdMatrix::default()
    }

    /// folds one assignment into the running totals. a negative weight is a
    /// caller contract violation; an unassigned endpoint is not an error and
    /// routes the assignment to the drop diagnostics instead.
    pub fn add(&mut self, assignment: ZoneAssignment) -> Result<(), DemandError> {
        if assignment.weight < 0.0 || assignment.weight.is_nan() {
            return Err(DemandError::InvalidWeight(assignment.weight));
        }
        match (assignment.origin_zone, assignment.destination_zone) {
            (Some(from), Some(to)) => {
                *self.cells.entry((from, to)).or_insert(0.0) += assignment.weight;
            }
            _ => {
                self.dropped_records += 1;
                self.dropped_weight += assignment.weight;
            }
        }
        Ok(())
    }

    /// combines another matrix into this one by pairwise summation of cells
    /// and of drop diagnostics. this is the fan-in step for partial matrices
    /// built concurrently over chunks of the record stream.
    pub fn merge(&mut self, other: OdMatrix) {
        for (pair, demand) in other.cells.into_iter() {
            *self.cells.entry(pair).or_insert(0.0) += demand;
        }
        self.dropped_records += other.dropped_records;
        self.dropped_weight += other.dropped_weight;
    }

    /// number of assignments dropped for having an unassigned endpoint
    pub fn dropped_records(&self) -> u64 {
        self.dropped_records
    }

    /// total weight carried by dropped assignments
    pub fn dropped_weight(&self) -> f64 {
        self.dropped_weight
    }

    /// sum of demand over all cells
    pub fn total_demand(&self) -> f64 {
        self.cells.values().sum()
    }

    /// produces the matrix rows, ascending by (from zone, to zone) under the
    /// zone id total order, so output is deterministic and diffable. pairs
    /// that only ever accumulated zero weight are not materialized.
    pub fn finalize(self) -> Vec<OdMatrixEntry> {
        if self.dropped_records > 0 {
            log::info!(
                "dropped {} records with unassigned endpoints ({} total weight)",
                self.dropped_records,
                self.dropped_weight
            );
        }
        self.cells
            .into_iter()
            .filter(|(_, demand)| *demand > 0.0)
            .map(|((from_zone, to_zone), demand)| OdMatrixEntry::new(from_zone, to_zone, demand))
            .collect_vec()
    }
}
