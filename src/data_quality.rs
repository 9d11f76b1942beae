// ✅ Data Quality - missing-data report after the join
// Flags merged counties that still carry empty fields, split by region

use crate::boundaries::{Feature, FeatureCollection};
use serde::Serialize;
use serde_json::Value;

/// FIPS state prefix identifying Puerto Rico
pub const NON_MAINLAND_PREFIX: &str = "72";

/// Column holding the county display name
pub const NAME_COLUMN: &str = "NAME";

// ============================================================================
// REPORT TYPES
// ============================================================================

/// One county flagged for missing data
#[derive(Debug, Clone, Serialize)]
pub struct MissingCounty {
    pub geoid: String,
    pub name: String,
}

/// The missing-data subset of a merged collection, partitioned by the
/// Puerto Rico FIPS prefix
///
/// Purely diagnostic: building and printing this never mutates the merged
/// data and never halts the run.
#[derive(Debug, Clone, Serialize)]
pub struct MissingDataReport {
    pub mainland: Vec<MissingCounty>,
    pub non_mainland: Vec<MissingCounty>,
}

impl MissingDataReport {
    pub fn total(&self) -> usize {
        self.mainland.len() + self.non_mainland.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} counties with missing data ({} mainland, {} non-mainland)",
            self.total(),
            self.mainland.len(),
            self.non_mainland.len()
        )
    }

    /// Both groups as human-readable GEOID/NAME tables
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Mainland USA counties with missing data:\n");
        out.push_str(&render_group(&self.mainland));
        out.push_str("\nNon-mainland counties with missing data:\n");
        out.push_str(&render_group(&self.non_mainland));
        out
    }

    /// Print the diagnostic tables to stdout
    pub fn print(&self) {
        println!("\n📋 Missing data check: {}", self.summary());
        println!("{}", self.render());
    }
}

fn render_group(counties: &[MissingCounty]) -> String {
    if counties.is_empty() {
        return "  (none)\n".to_string();
    }

    let mut out = format!("  {:<8} {}\n", "GEOID", "NAME");
    for county in counties {
        out.push_str(&format!("  {:<8} {}\n", county.geoid, county.name));
    }
    out
}

// ============================================================================
// MISSING-DATA SCAN
// ============================================================================

/// A merged record is flagged when any property - not just a metric
/// column - is null or empty text
fn has_missing_value(feature: &Feature) -> bool {
    feature.properties.values().any(|value| match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    })
}

fn display_name(feature: &Feature) -> String {
    match feature.properties.get(NAME_COLUMN) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Scan a merged collection and partition its missing-data subset
///
/// The two groups are disjoint and exhaustive over the flagged records:
/// a county lands in exactly one of them, decided solely by the "72"
/// prefix test on its normalized GEOID.
pub fn missing_data_report(collection: &FeatureCollection) -> MissingDataReport {
    let mut mainland = Vec::new();
    let mut non_mainland = Vec::new();

    for feature in &collection.features {
        if !has_missing_value(feature) {
            continue;
        }

        let entry = MissingCounty {
            geoid: feature.geoid().to_string(),
            name: display_name(feature),
        };

        if entry.geoid.starts_with(NON_MAINLAND_PREFIX) {
            non_mainland.push(entry);
        } else {
            mainland.push(entry);
        }
    }

    MissingDataReport {
        mainland,
        non_mainland,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_collection(rows: &[(&str, &str, Value)]) -> FeatureCollection {
        let features = rows
            .iter()
            .map(|(geoid, name, cases)| {
                serde_json::json!({
                    "type": "Feature",
                    "properties": {"GEOID": geoid, "NAME": name, "Cases": cases},
                    "geometry": null
                })
            })
            .collect::<Vec<_>>();

        serde_json::from_value(serde_json::json!({
            "type": "FeatureCollection",
            "features": features
        }))
        .unwrap()
    }

    #[test]
    fn test_complete_records_are_not_flagged() {
        let collection = create_test_collection(&[
            ("06001", "Alameda", Value::from(27)),
            ("09001", "Fairfield", Value::from(310)),
        ]);

        let report = missing_data_report(&collection);

        assert!(report.is_clean());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_null_metric_flags_record() {
        let collection = create_test_collection(&[
            ("06001", "Alameda", Value::from(27)),
            ("09001", "Fairfield", Value::Null),
        ]);

        let report = missing_data_report(&collection);

        assert_eq!(report.total(), 1);
        assert_eq!(report.mainland[0].geoid, "09001");
        assert_eq!(report.mainland[0].name, "Fairfield");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let collection = create_test_collection(&[("06001", "", Value::from(27))]);

        let report = missing_data_report(&collection);

        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_puerto_rico_prefix_partitions_groups() {
        let collection = create_test_collection(&[
            ("72001", "Adjuntas", Value::Null),
            ("06001", "Alameda", Value::Null),
            ("72003", "Aguada", Value::Null),
        ]);

        let report = missing_data_report(&collection);

        // Disjoint and exhaustive over the flagged subset
        assert_eq!(report.total(), 3);
        assert_eq!(report.mainland.len(), 1);
        assert_eq!(report.non_mainland.len(), 2);
        assert_eq!(report.mainland[0].geoid, "06001");
        assert!(report
            .non_mainland
            .iter()
            .all(|c| c.geoid.starts_with(NON_MAINLAND_PREFIX)));
    }

    #[test]
    fn test_prefix_test_is_textual_not_numeric() {
        // "7201" normalized would be "07201" - must NOT be non-mainland
        let collection = create_test_collection(&[("07201", "Somewhere", Value::Null)]);

        let report = missing_data_report(&collection);

        assert_eq!(report.mainland.len(), 1);
        assert!(report.non_mainland.is_empty());
    }

    #[test]
    fn test_render_lists_both_groups() {
        let collection = create_test_collection(&[
            ("72001", "Adjuntas", Value::Null),
            ("06001", "Alameda", Value::Null),
        ]);

        let report = missing_data_report(&collection);
        let rendered = report.render();

        assert!(rendered.contains("Mainland USA counties with missing data:"));
        assert!(rendered.contains("Non-mainland counties with missing data:"));
        assert!(rendered.contains("06001"));
        assert!(rendered.contains("Adjuntas"));
        println!("✅ {}", report.summary());
    }

    #[test]
    fn test_render_empty_group_shows_placeholder() {
        let collection = create_test_collection(&[("06001", "Alameda", Value::Null)]);

        let rendered = missing_data_report(&collection).render();

        assert!(rendered.contains("(none)"));
    }
}
