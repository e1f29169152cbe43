use super::{DemandError, MovementRecord, OdMatrix, ZoneAssignment};
use crate::model::zone::ZoneIndex;
use itertools::Itertools;
use kdam::tqdm;
use rayon::prelude::*;

/// resolves both endpoints of a record against the zone index, carrying the
/// weight through unchanged. pure, so it may run concurrently over any
/// partition of the record stream.
pub fn locate_record(record: &MovementRecord, index: &ZoneIndex) -> ZoneAssignment {
    ZoneAssignment::new(
        index.locate(&record.origin).cloned(),
        index.locate(&record.destination).cloned(),
        record.weight,
    )
}

/// resolves a batch of records with progress reporting.
pub fn locate_batch(records: &[MovementRecord], index: &ZoneIndex) -> Vec<ZoneAssignment> {
    let iter = tqdm!(
        records.iter(),
        total = records.len(),
        desc = "locating record endpoints"
    );
    let assignments = iter.map(|record| locate_record(record, index)).collect_vec();
    eprintln!();
    assignments
}

/// locates and aggregates a record stream in one pass.
pub fn build_matrix(
    records: &[MovementRecord],
    index: &ZoneIndex,
) -> Result<OdMatrix, DemandError> {
    let mut matrix = OdMatrix::new();
    for record in records.iter() {
        matrix.add(locate_record(record, index))?;
    }
    Ok(matrix)
}

/// parallel variant of [`build_matrix`]: rayon workers build one partial
/// matrix per chunk of records, merged at the end. aggregation is
/// commutative and associative, so the result matches the single-pass
/// matrix exactly regardless of chunking.
pub fn build_matrix_parallel(
    records: &[MovementRecord],
    index: &ZoneIndex,
    chunk_size: usize,
) -> Result<OdMatrix, DemandError> {
    let partials = records
        .par_chunks(chunk_size.max(1))
        .map(|chunk| {
            let mut partial = OdMatrix::new();
            for record in chunk.iter() {
                partial.add(locate_record(record, index))?;
            }
            Ok(partial)
        })
        .collect::<Result<Vec<_>, DemandError>>()?;

    log::debug!("merging {} partial od matrices", partials.len());
    let mut matrix = OdMatrix::new();
    for partial in partials.into_iter() {
        matrix.merge(partial);
    }
    Ok(matrix)
}
