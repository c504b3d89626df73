//! `parchi-export` — tabular export collaborator.
//!
//! Serializes challan records to CSV bytes. Row order mirrors input order and
//! the column set is the record's own field set; no aggregation here.

use thiserror::Error;

use parchi_challans::ChallanRecord;

/// Export failure.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export buffer error: {0}")]
    Buffer(String),
}

/// Serialize records to CSV bytes, header row first.
///
/// Empty input yields empty output (no lone header row).
pub fn to_csv(records: &[ChallanRecord]) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parchi_challans::{Amount, Cnic, NewChallan, Semester};
    use parchi_core::{ChallanId, RollNumber};

    fn record(id: i64, name: &str) -> ChallanRecord {
        NewChallan {
            student_name: name.to_string(),
            roll_number: RollNumber::new(format!("2021-CS-{id:03}")),
            id_card_number: Cnic::parse("3520112345671").unwrap(),
            semester: Semester::Third,
            amount: Amount::new(500).unwrap(),
            reason: "Late Submission".to_string(),
        }
        .into_record(ChallanId::new(id), Utc::now())
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(to_csv(&[]).unwrap().is_empty());
    }

    #[test]
    fn rows_keep_input_order_under_a_header() {
        let records = vec![record(2, "Sara Ahmed"), record(1, "Ali Khan")];
        let bytes = to_csv(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,student_name,roll_number"));

        let first = lines.next().unwrap();
        let second = lines.next().unwrap();
        assert!(first.starts_with("2,Sara Ahmed,2021-CS-002"));
        assert!(second.starts_with("1,Ali Khan,2021-CS-001"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn semester_and_status_use_their_display_labels() {
        let text = String::from_utf8(to_csv(&[record(1, "Ali Khan")]).unwrap()).unwrap();
        assert!(text.contains("3rd Semester"));
        assert!(text.contains("pending"));
    }
}
