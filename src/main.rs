use anyhow::Result;
use std::path::Path;

use county_merge::{
    left_join, load_boundaries, load_table, missing_data_report, normalize_boundaries,
    normalize_table, write_boundaries, GEOID_WIDTH,
};

// Fixed input/output locations - this is a one-shot batch tool, no flags
const GEOJSON_PATH: &str = "counties.geojson";
const CSV_PATH: &str = "lyme_disease_2022.csv";
const OUTPUT_PATH: &str = "merged_county_data.geojson";

fn main() -> Result<()> {
    println!("🗺️  County Data Merge - boundaries + case counts → enriched GeoJSON");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load both inputs
    println!("\n📂 Loading input files...");
    let mut boundaries = load_boundaries(Path::new(GEOJSON_PATH))?;
    println!(
        "✓ Loaded {} county boundaries from {}",
        boundaries.len(),
        GEOJSON_PATH
    );

    let mut table = load_table(Path::new(CSV_PATH))?;
    println!("✓ Loaded {} attribute rows from {}", table.len(), CSV_PATH);

    // 2. Normalize the join key on both sides
    println!("\n🔧 Normalizing FIPS codes...");
    normalize_boundaries(&mut boundaries);
    normalize_table(&mut table);
    println!("✓ GEOID values padded to {} characters", GEOID_WIDTH);

    // 3. Left join: case columns onto boundary features
    println!("\n🔗 Merging case data onto boundaries...");
    let summary = left_join(&mut boundaries, &table);
    println!("✓ {}", summary.summary());

    // 4. Diagnostic only - never blocks the write
    let report = missing_data_report(&boundaries);
    report.print();

    // 5. Write the enriched collection
    println!("💾 Writing merged GeoJSON...");
    write_boundaries(&boundaries, Path::new(OUTPUT_PATH))?;
    println!("✅ New GeoJSON file saved at: {}", OUTPUT_PATH);

    Ok(())
}
