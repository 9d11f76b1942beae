// 🔧 Identifier Normalization
// FIPS codes must be fixed-width strings on both sides before the join

use crate::attributes::AttributeTable;
use crate::boundaries::FeatureCollection;
use serde_json::Value;

/// Width of a county FIPS code: 2 state digits + 3 county digits
pub const GEOID_WIDTH: usize = 5;

/// Left-pad a value with '0' characters to the given width
///
/// Values already at or beyond the width pass through unchanged - no
/// truncation. Comparing padded strings instead of numbers is what keeps
/// "06001" distinct from 6001 through the whole pipeline.
pub fn zfill(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }

    let mut padded = String::with_capacity(width);
    for _ in len..width {
        padded.push('0');
    }
    padded.push_str(value);
    padded
}

/// Rewrite every feature's GEOID property as its padded string form
///
/// Numeric GEOIDs are stringified first, so a source file that lost its
/// leading zeros to number encoding gets them back here.
pub fn normalize_boundaries(collection: &mut FeatureCollection) {
    for feature in &mut collection.features {
        if let Some(raw) = feature.geoid_raw() {
            feature.properties.insert(
                crate::GEOID_COLUMN.to_string(),
                Value::String(zfill(&raw, GEOID_WIDTH)),
            );
        }
    }
}

/// Pad the GEOID cell of every table row in place
pub fn normalize_table(table: &mut AttributeTable) {
    for row in &mut table.rows {
        if let Some(cell) = row.values.get_mut(crate::GEOID_COLUMN) {
            *cell = zfill(cell, GEOID_WIDTH);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
