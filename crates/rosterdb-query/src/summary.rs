use serde::Serialize;
use std::collections::HashSet;

use rosterdb_core::types::StudentRecord;

/// Headline numbers for a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    pub total_records: usize,
    pub department_count: usize,
    /// 0.0 for an empty roster.
    pub average_score: f64,
}

pub fn summarize(records: &[StudentRecord]) -> RosterSummary {
    let department_count = records.iter().map(|r| r.department.as_str()).collect::<HashSet<_>>().len();
    let average_score = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.score).sum::<f64>() / records.len() as f64
    };
    RosterSummary { total_records: records.len(), department_count, average_score }
}
