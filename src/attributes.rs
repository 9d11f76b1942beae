// 📊 Attribute Layer - case-count tables
// Reads the CSV side of the join; every cell is kept as text

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

// ============================================================================
// TABLE MODEL
// ============================================================================

/// A delimited table read schema-on-read: column names come from the
/// header row, values stay raw text until they are copied into the output
#[derive(Debug, Clone)]
pub struct AttributeTable {
    /// Column names in file order
    pub headers: Vec<String>,
    pub rows: Vec<AttributeRow>,
}

/// One CSV row, keyed by column name
///
/// Cells are stored as the exact text from the file so identifiers keep
/// their leading zeros - numeric parsing happens only on the way out.
#[derive(Debug, Clone)]
pub struct AttributeRow {
    pub values: HashMap<String, String>,
}

impl AttributeRow {
    /// Raw cell text for a column, empty string if the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }

    /// The join key cell
    pub fn geoid(&self) -> &str {
        self.get(crate::GEOID_COLUMN)
    }

    /// Cell converted for the output file: empty text becomes null,
    /// numeric-looking text becomes a JSON number, anything else stays text
    pub fn json_value(&self, column: &str) -> Value {
        let raw = self.get(column);
        if raw.is_empty() {
            return Value::Null;
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Value::from(n);
        }
        if let Ok(f) = raw.parse::<f64>() {
            return Value::from(f);
        }
        Value::String(raw.to_string())
    }
}

impl AttributeTable {
    /// Every column except the join key, in header order
    pub fn metric_columns(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| *h != crate::GEOID_COLUMN)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ============================================================================
// LOADER
// ============================================================================

/// Load a case-count CSV from disk
///
/// Fails if the file is missing, the header has no GEOID column, or any
/// record is malformed. Identifier cells are never parsed as numbers.
pub fn load_table(path: &Path) -> Result<AttributeTable> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("Attribute file not found at {}", path.display()))?;

    read_table(reader).with_context(|| format!("Failed to load CSV from {}", path.display()))
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<AttributeTable> {
    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    if !headers.iter().any(|h| h == crate::GEOID_COLUMN) {
        bail!("CSV header has no {} column", crate::GEOID_COLUMN);
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .with_context(|| format!("Failed to parse CSV record #{}", index + 1))?;

        let values = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(AttributeRow { values });
    }

    Ok(AttributeTable { headers, rows })
}

// ============================================================================
// TESTS
// ============================================================================
