use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::booking::RequestActivity;

/// Key under which requests without a moment id are counted.
pub const UNKNOWN_MOMENT: &str = "unknown";

/// Summary of all booking requests, recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub requests_per_moment: BTreeMap<String, u64>,
    pub most_requested_moment: Option<String>,
    pub last_activity: Option<DateTime<Utc>>,
}

impl MetricsSnapshot {
    pub fn empty() -> Self {
        Self {
            total_requests: 0,
            requests_per_moment: BTreeMap::new(),
            most_requested_moment: None,
            last_activity: None,
        }
    }

    /// Aggregates the given rows.
    ///
    /// Ties for the most requested moment go to the key seen first in `rows`
    /// (counts are ranked with a stable sort over first-seen order). Callers
    /// should treat the tie winner as unspecified.
    pub fn compute(rows: &[RequestActivity]) -> Self {
        let mut first_seen: Vec<(&str, u64)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut last_activity: Option<DateTime<Utc>> = None;

        for row in rows {
            let key = match row.moment_id.as_deref() {
                Some(id) if !id.is_empty() => id,
                _ => UNKNOWN_MOMENT,
            };

            match slots.get(key) {
                Some(&slot) => first_seen[slot].1 += 1,
                None => {
                    slots.insert(key, first_seen.len());
                    first_seen.push((key, 1));
                }
            }

            if let Some(created_at) = row.created_at {
                if last_activity.map_or(true, |latest| created_at > latest) {
                    last_activity = Some(created_at);
                }
            }
        }

        let requests_per_moment = first_seen
            .iter()
            .map(|(key, count)| (key.to_string(), *count))
            .collect();

        // sort_by is stable
        first_seen.sort_by(|a, b| b.1.cmp(&a.1));
        let most_requested_moment = first_seen.first().map(|(key, _)| key.to_string());

        Self {
            total_requests: rows.len() as u64,
            requests_per_moment,
            most_requested_moment,
            last_activity,
        }
    }
}
