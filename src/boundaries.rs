// 🗺️ Boundary Layer - GeoJSON feature collections
// Loads county polygons with their attributes, writes the merged output

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

// ============================================================================
// FEATURE MODEL
// ============================================================================

/// A GeoJSON FeatureCollection with open-ended per-feature properties
///
/// The property column set is only known from the input file at runtime,
/// so features carry a map instead of a fixed struct. Geometry is held as
/// raw JSON - this pipeline never interprets coordinates, it only passes
/// them through to the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,

    /// Optional layer name (GDAL-produced files carry one)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Coordinate reference system, passed through untouched
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,

    pub features: Vec<Feature>,
}

/// One county: geometry plus an open-ended attribute map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// Non-spatial attributes, keyed by column name
    pub properties: Map<String, Value>,

    /// Polygon/MultiPolygon as raw JSON
    pub geometry: Value,
}

impl Feature {
    /// GEOID property as text, whatever JSON type the source used
    ///
    /// Source files sometimes encode FIPS codes as numbers, which is how
    /// leading zeros get lost in the first place. Returns None when the
    /// property is absent or some other type entirely.
    pub fn geoid_raw(&self) -> Option<String> {
        match self.properties.get(crate::GEOID_COLUMN) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Normalized GEOID - valid after the padding pass has run
    pub fn geoid(&self) -> &str {
        match self.properties.get(crate::GEOID_COLUMN) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Load a county boundary file from disk
///
/// Fails if the file is missing, is not valid GeoJSON, or contains a
/// feature with no usable GEOID property - the join key must exist on
/// every record before the merge can work.
pub fn load_boundaries(path: &Path) -> Result<FeatureCollection> {
    let file = File::open(path)
        .with_context(|| format!("Boundary file not found at {}", path.display()))?;

    read_boundaries(BufReader::new(file))
        .with_context(|| format!("Failed to load GeoJSON from {}", path.display()))
}

fn read_boundaries(reader: impl Read) -> Result<FeatureCollection> {
    let collection: FeatureCollection =
        serde_json::from_reader(reader).context("Malformed GeoJSON")?;

    if collection.collection_type != "FeatureCollection" {
        bail!(
            "Expected a FeatureCollection, found type \"{}\"",
            collection.collection_type
        );
    }

    for (index, feature) in collection.features.iter().enumerate() {
        if feature.geoid_raw().is_none() {
            bail!(
                "Feature #{} has no usable {} property",
                index,
                crate::GEOID_COLUMN
            );
        }
    }

    Ok(collection)
}

// ============================================================================
// WRITER
// ============================================================================

/// Serialize the full collection to a GeoJSON file, overwriting any
/// existing file at that path
///
/// Callers only reach this after the join has completed, so a partial
/// merge is never written to disk.
pub fn write_boundaries(collection: &FeatureCollection, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file at {}", path.display()))?;

    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, collection)
        .with_context(|| format!("Failed to write GeoJSON to {}", path.display()))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
