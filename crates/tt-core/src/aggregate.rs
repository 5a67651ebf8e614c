//! Per-tag duration totals for the priority report.

use std::collections::HashMap;

use serde::Serialize;

use crate::TimeRecord;

/// Total minutes recorded under one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagTotal {
    pub tag: String,
    pub total_minutes: i64,
}

/// Sums durations by exact tag and orders the totals largest first.
///
/// Tags with equal totals keep the order in which they first appear in
/// `records`.
pub fn aggregate_by_tag(records: &[TimeRecord]) -> Vec<TagTotal> {
    let mut totals: Vec<TagTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if let Some(&i) = index.get(record.tag.as_str()) {
            totals[i].total_minutes += record.duration;
        } else {
            index.insert(record.tag.as_str(), totals.len());
            totals.push(TagTotal {
                tag: record.tag.clone(),
                total_minutes: record.duration,
            });
        }
    }

    // sort_by is stable, which keeps first-seen order among ties.
    totals.sort_by(|a, b| b.total_minutes.cmp(&a.total_minutes));
    totals
}
