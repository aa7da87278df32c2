//! Basic usage example for tzfind-rs
//!
//! This example demonstrates how to:
//! - Inspect the built-in zone table
//! - Rank it against short phrases and whole requests
//! - Look up zones by country code and identifier

use tzfind_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== tzfind-rs Basic Usage Example ===\n");

    let table = zone_table();

    // Example 1: Table overview
    println!("--- Example 1: Table overview ---");
    let stats = table.stats();
    println!(
        "Rows: {} ({} canonical, {} links)",
        stats.rows,
        stats.canonical,
        stats.links + stats.backward_links
    );
    println!("Countries: {}", stats.countries);
    for (i, row) in table.rows().iter().take(3).enumerate() {
        println!("{}. {}", i + 1, row);
    }
    println!();

    // Example 2: Rank a short phrase
    println!("--- Example 2: Rank \"Tokyo\" ---");
    for (i, row) in table.rank("Tokyo", 5)?.iter().enumerate() {
        println!("{}. {}", i + 1, row);
    }
    println!();

    // Example 3: Rank a whole request, with scores
    println!("--- Example 3: Scores for a whole request ---");
    let request = "what time is it in Tokyo vs Berlin?";
    for c in table.score_all(request)?.iter().take(5) {
        println!("{:.4}  {}", c.score, c.row);
    }
    println!();

    // Example 4: Zones of a country
    println!("--- Example 4: Zones listing DE ---");
    for z in table.find_by_country_code("DE") {
        println!("- {} ({} / {})", z.identifier(), z.std_offset(), z.dst_offset());
    }
    println!();

    // Example 5: One zone in detail
    println!("--- Example 5: Look up asia/kolkata ---");
    if let Some(z) = table.find_by_identifier("asia/kolkata") {
        println!("Zone: {}", z.identifier());
        println!("Type: {}", z.kind());
        println!("STD offset: {} ({} minutes)", z.std_offset(), z.std_offset().minutes());
        println!("Abbreviation: {}", z.abbreviation());
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
