// 🔗 Merge Engine - left join of case data onto county boundaries
// Every boundary appears exactly once in the output, matched or not

use crate::attributes::AttributeTable;
use crate::boundaries::FeatureCollection;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

// ============================================================================
// MERGE SUMMARY
// ============================================================================

/// Counts describing one join run, for status output and sanity checks
#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub boundary_count: usize,
    pub attribute_count: usize,
    pub matched: usize,
    pub unmatched_boundaries: usize,
    /// Attribute rows with no boundary on the left side - silently dropped
    pub dropped_attributes: usize,
    /// CSV columns appended to every feature, in header order
    pub appended_columns: Vec<String>,
    pub merged_at: DateTime<Utc>,
}

impl MergeSummary {
    pub fn summary(&self) -> String {
        format!(
            "Merged {} boundaries: {} matched, {} without case data, {} attribute rows dropped",
            self.boundary_count, self.matched, self.unmatched_boundaries, self.dropped_attributes
        )
    }

    /// True when every boundary found a matching attribute row
    pub fn is_complete(&self) -> bool {
        self.unmatched_boundaries == 0
    }
}

// ============================================================================
// LEFT JOIN
// ============================================================================

/// Join the attribute table onto the boundary collection in place
///
/// Both sides must already be normalized - the lookup is a plain string
/// comparison of GEOID values. Matched features gain every non-GEOID CSV
/// column (overwriting on a name collision); unmatched features gain the
/// same columns as null. Attribute rows that match no boundary are only
/// counted, never emitted. Output order is boundary order.
pub fn left_join(collection: &mut FeatureCollection, table: &AttributeTable) -> MergeSummary {
    // First occurrence wins when the table repeats a GEOID, keeping the
    // one-output-row-per-boundary guarantee
    let mut index = HashMap::new();
    for row in &table.rows {
        index.entry(row.geoid()).or_insert(row);
    }

    let columns = table.metric_columns();
    let mut matched = 0;
    let mut matched_keys: HashSet<String> = HashSet::new();

    for feature in &mut collection.features {
        let geoid = feature.geoid().to_string();

        match index.get(geoid.as_str()) {
            Some(row) => {
                matched += 1;
                for column in &columns {
                    feature
                        .properties
                        .insert((*column).to_string(), row.json_value(column));
                }
                matched_keys.insert(geoid);
            }
            None => {
                for column in &columns {
                    feature
                        .properties
                        .insert((*column).to_string(), Value::Null);
                }
            }
        }
    }

    let dropped_attributes = table
        .rows
        .iter()
        .filter(|row| !matched_keys.contains(row.geoid()))
        .count();

    MergeSummary {
        boundary_count: collection.len(),
        attribute_count: table.len(),
        matched,
        unmatched_boundaries: collection.len() - matched,
        dropped_attributes,
        appended_columns: columns.iter().map(|c| c.to_string()).collect(),
        merged_at: Utc::now(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
