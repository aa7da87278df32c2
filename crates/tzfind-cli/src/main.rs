//! tzfind: command-line interface for tzfind-core
//!
//! This binary ranks the built-in timezone reference table against a query
//! and shows what the answer generator would be given.
//!
//! Usage examples
//! --------------
//!
//! - Show table statistics
//!   $ tzfind stats
//!
//! - Rank the table against a request (top 5, with scores)
//!   $ tzfind rank "what time is it in Tokyo?" -k 5 --scores
//!
//! - Render the prompt for a request, ranking an extracted phrase instead
//!   $ tzfind prompt "Tokyo vs Berlin, what's the difference?" --phrase Tokyo
//!
//! - List zones of a country / look up one zone
//!   $ tzfind country de
//!   $ tzfind zone europe/berlin
//!
//! Logging goes to stderr; set `RUST_LOG=tzfind_core=debug` or pass `-v`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tzfind_core::{
    zone_table, PromptEcho, QuerySource, ResolverConfig, TimezoneResolver, ZoneRecord, ZoneTable,
};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // Table: built-in unless --table points at a file
    let custom_table = match &args.table {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading table {path}"))?;
            let table = ZoneTable::from_text(&text);
            anyhow::ensure!(!table.is_empty(), "table {path} has no rows");
            tracing::debug!(rows = table.len(), %path, "loaded custom table");
            Some(table)
        }
        None => None,
    };
    let table: &ZoneTable = match &custom_table {
        Some(t) => t,
        None => zone_table(),
    };

    let config = load_config(args.config.as_deref())?;

    match args.command {
        Commands::Stats => {
            let stats = table.stats();
            if args.json {
                print_json(&stats)?;
            } else {
                println!("Table statistics:");
                println!("  Rows: {}", stats.rows);
                println!("  Canonical: {}", stats.canonical);
                println!("  Links: {}", stats.links);
                println!("  Backward links: {}", stats.backward_links);
                println!("  Countries: {}", stats.countries);
                if stats.malformed > 0 {
                    println!("  Malformed rows: {}", stats.malformed);
                }
            }
        }

        Commands::Rank { query, k, scores } => {
            let k = k.unwrap_or(config.k);
            if scores {
                let scored = table.score_top(&query, k)?;
                if args.json {
                    print_json(&scored)?;
                } else {
                    for c in scored {
                        println!("{:.4}  {}", c.score, c.row);
                    }
                }
            } else {
                let rows = table.rank(&query, k)?;
                if args.json {
                    print_json(&rows)?;
                } else {
                    for row in rows {
                        println!("{row}");
                    }
                }
            }
        }

        Commands::Prompt {
            request,
            k,
            phrase,
            no_global,
        } => {
            let config = prompt_config(config, k, phrase.is_some(), no_global);

            // PromptEcho turns the pipeline into a dry run
            let mut resolver = TimezoneResolver::new(PromptEcho)
                .with_table(table)
                .with_config(config)?;
            // --phrase stands in for the extractor
            if let Some(phrase) = phrase {
                resolver = resolver.with_extractor(move |_: &str| -> tzfind_core::Result<String> {
                    Ok(phrase.clone())
                });
            }
            let resolution = resolver.resolve(&request)?;
            if args.json {
                print_json(&resolution.prompt)?;
            } else {
                print!("{}", resolution.answer);
            }
        }

        Commands::Country { code } => {
            let zones = table.find_by_country_code(&code);
            if zones.is_empty() {
                eprintln!("No zones found for country: {code}");
            } else if args.json {
                print_json(&zones)?;
            } else {
                for z in zones {
                    println!(
                        "{} ({}, {} / {})",
                        z.identifier(),
                        z.kind(),
                        z.std_offset(),
                        z.dst_offset()
                    );
                }
            }
        }

        Commands::Zone { identifier } => match table.find_by_identifier(&identifier) {
            Some(z) if args.json => print_json(&z)?,
            Some(z) => print_zone(&z),
            None => eprintln!("Zone {identifier} not found"),
        },
    }

    Ok(())
}

/// Command-line overrides on top of the loaded config. A `--phrase` switches
/// ranking to the phrase.
fn prompt_config(
    mut config: ResolverConfig,
    k: Option<usize>,
    has_phrase: bool,
    no_global: bool,
) -> ResolverConfig {
    if let Some(k) = k {
        config.k = k;
    }
    if no_global {
        config.include_global_zones = false;
    }
    if has_phrase {
        config.query_source = QuerySource::Phrase;
    }
    config
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(feature = "json")]
fn load_config(path: Option<&str>) -> anyhow::Result<ResolverConfig> {
    match path {
        Some(p) => ResolverConfig::load_from_path(p).with_context(|| format!("loading config {p}")),
        None => Ok(ResolverConfig::default()),
    }
}

#[cfg(not(feature = "json"))]
fn load_config(path: Option<&str>) -> anyhow::Result<ResolverConfig> {
    anyhow::ensure!(path.is_none(), "config files need the `json` feature");
    Ok(ResolverConfig::default())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_zone(z: &ZoneRecord<'_>) {
    println!("Zone: {}", z.identifier());
    let codes: Vec<&str> = z.country_codes().collect();
    if !codes.is_empty() {
        println!("Countries: {}", codes.join(", "));
    }
    if let Some(comment) = z.comment() {
        println!("Comment: {comment}");
    }
    println!("Type: {}", z.kind());
    println!("UTC offset (STD): {}", z.std_offset());
    println!("UTC offset (DST): {}", z.dst_offset());
    println!("Abbreviation: {}", z.abbreviation());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_switches_the_query_source() {
        let config = prompt_config(ResolverConfig::default(), None, true, false);
        assert_eq!(config.query_source, QuerySource::Phrase);
        assert!(config.include_global_zones);
        assert_eq!(config.k, 10);
    }

    #[test]
    fn overrides_keep_config_values_when_absent() {
        let loaded = ResolverConfig {
            k: 4,
            query_source: QuerySource::Phrase,
            include_global_zones: true,
        };
        assert_eq!(prompt_config(loaded.clone(), None, false, false), loaded);

        let config = prompt_config(loaded, Some(2), false, true);
        assert_eq!(config.k, 2);
        assert!(!config.include_global_zones);
        assert_eq!(config.query_source, QuerySource::Phrase);
    }

    #[test]
    fn phrase_ranks_the_phrase_end_to_end() {
        let config = prompt_config(ResolverConfig::default(), Some(1), true, true);
        let resolver = TimezoneResolver::new(PromptEcho)
            .with_config(config)
            .unwrap()
            .with_extractor(|_: &str| -> tzfind_core::Result<String> { Ok("Tokyo".into()) });
        let c = resolver.candidates("what time is it there?").unwrap();
        assert_eq!(c.query, "Tokyo");
        assert!(c.rows[0].contains("Asia/Tokyo"));
    }
}
