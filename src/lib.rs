// County Data Merge - Core Library
// Joins per-county case-count tables onto boundary geometries by FIPS code

pub mod attributes;     // CSV side of the join - case-count tables
pub mod boundaries;     // GeoJSON side of the join - county polygons
pub mod data_quality;   // Missing-data scan and mainland/non-mainland report
pub mod merge;          // Left-join engine
pub mod normalization;  // Fixed-width FIPS code padding

// Re-export commonly used types
pub use attributes::{load_table, AttributeRow, AttributeTable};
pub use boundaries::{load_boundaries, write_boundaries, Feature, FeatureCollection};
pub use data_quality::{missing_data_report, MissingCounty, MissingDataReport};
pub use merge::{left_join, MergeSummary};
pub use normalization::{normalize_boundaries, normalize_table, zfill, GEOID_WIDTH};

/// Join key column, present in both input files
pub const GEOID_COLUMN: &str = "GEOID";

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PIPELINE TESTS
// ============================================================================
