//! Error handling example for tzfind-rs
//!
//! This example demonstrates the error cases and edge cases of the ranker

use tzfind_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== tzfind-rs Error Handling Example ===\n");

    // Example 1: k must be positive
    println!("--- Example 1: Ranking with k = 0 ---");
    match zone_table().rank("Tokyo", 0) {
        Ok(rows) => println!("  Unexpected: {} rows", rows.len()),
        Err(e) => println!("  ✓ Rejected: {e}"),
    }
    println!();

    // Example 2: an empty table cannot be ranked
    println!("--- Example 2: Ranking an empty table ---");
    let empty: Vec<String> = Vec::new();
    match rank("Tokyo", &empty, 5) {
        Ok(rows) => println!("  Unexpected: {} rows", rows.len()),
        Err(TzFindError::InvalidArgument(msg)) => println!("  ✓ Invalid argument: {msg}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: an empty query is fine and keeps table order
    println!("--- Example 3: Empty query ---");
    for row in zone_table().rank("", 3)? {
        println!("  {row}");
    }
    println!();

    // Example 4: rows that don't parse into records
    println!("--- Example 4: Parsing rows ---");
    for row in ["JP\tAsia/Tokyo\t\tCanonical\t+09:00\t+09:00\tJST", "US  America/New_York  EST"] {
        match ZoneRecord::parse(row) {
            Ok(z) => println!("  ✓ {} at {}", z.identifier(), z.std_offset()),
            Err(e) => println!("  ✗ {e}"),
        }
    }
    println!();

    // Example 5: lookups that miss
    println!("--- Example 5: Unknown zone ---");
    match zone_table().find_by_identifier("Mars/Olympus_Mons") {
        Some(z) => println!("  Found: {}", z.identifier()),
        None => println!("  Not found: Mars/Olympus_Mons"),
    }

    Ok(())
}
