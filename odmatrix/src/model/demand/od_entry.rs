use crate::model::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// one cell of the finalized OD matrix. fields serialize under the
/// FROM/TO/DEMAND names of the demand table consumed downstream, so a
/// writer needs no renaming step.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct OdMatrixEntry {
    #[serde(rename = "FROM")]
    pub from_zone: ZoneId,
    #[serde(rename = "TO")]
    pub to_zone: ZoneId,
    #[serde(rename = "DEMAND")]
    pub demand: f64,
}

impl OdMatrixEntry {
    pub fn new(from_zone: ZoneId, to_zone: ZoneId, demand: f64) -> OdMatrixEntry {
        OdMatrixEntry {
            from_zone,
            to_zone,
            demand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_demand_table_column_names() {
        let entry = OdMatrixEntry::new(ZoneId::from("A"), ZoneId::from("B"), 3.0);
        let json = serde_json::to_string(&entry).expect("test invariant failed");
        assert_eq!(json, "{\"FROM\":\"A\",\"TO\":\"B\",\"DEMAND\":3.0}");
    }
}
