//! Predicate filtering for admin listings.
//!
//! Plain predicate composition over `list_all` results; deliberately not a
//! query DSL.

use parchi_challans::{ChallanRecord, ChallanStatus, Semester};

/// Optional predicates combined with AND; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallanFilter {
    pub status: Option<ChallanStatus>,
    pub semester: Option<Semester>,
    pub name_contains: Option<String>,
    pub roll_contains: Option<String>,
}

impl ChallanFilter {
    pub fn matches(&self, record: &ChallanRecord) -> bool {
        if let Some(status) = self.status {
            if record.status() != status {
                return false;
            }
        }
        if let Some(semester) = self.semester {
            if record.semester() != semester {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            if !contains_ignore_case(record.student_name(), needle) {
                return false;
            }
        }
        if let Some(needle) = &self.roll_contains {
            if !contains_ignore_case(record.roll_number().as_str(), needle) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, mut records: Vec<ChallanRecord>) -> Vec<ChallanRecord> {
        records.retain(|record| self.matches(record));
        records
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
