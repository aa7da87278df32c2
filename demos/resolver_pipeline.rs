//! Resolver pipeline example for tzfind-rs
//!
//! Wires a phrase extractor and an answer generator around the ranker.
//! Both collaborators are stand-ins here; in production they call a model.

use tzfind_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== tzfind-rs Resolver Pipeline Example ===\n");

    let request = "It's 9am in Tokyo, what time is it in Berlin?";

    // A naive extractor: the first capitalized word that isn't at the start
    let extractor = |request: &str| -> Result<String> {
        request
            .split(|c: char| !c.is_alphanumeric())
            .skip(1)
            .find(|w| w.chars().next().is_some_and(char::is_uppercase))
            .map(str::to_owned)
            .ok_or_else(|| TzFindError::Extractor("no place name found".into()))
    };

    // A generator that only reports what it was given
    let generator = |prompt: &Prompt| -> Result<String> {
        Ok(format!(
            "(would answer {:?} using {} candidate rows)",
            prompt.request,
            prompt.candidates.len()
        ))
    };

    for source in [QuerySource::Request, QuerySource::Phrase] {
        let config = ResolverConfig {
            k: 5,
            query_source: source,
            include_global_zones: false,
        };
        let resolver = TimezoneResolver::new(generator)
            .with_extractor(extractor)
            .with_config(config)?;

        let res = resolver.resolve(request)?;
        println!("--- Query source: {source:?} ---");
        println!("Phrase: {:?}", res.candidates.phrase);
        println!("Ranked against: {:?}", res.candidates.query);
        for (i, row) in res.candidates.rows.iter().enumerate() {
            println!("{}. {}", i + 1, row);
        }
        println!("Answer: {}\n", res.answer);
    }

    // The prompt itself, as the generator would see it
    println!("--- Rendered prompt ---");
    let (_, prompt) = TimezoneResolver::new(PromptEcho)
        .with_config(ResolverConfig {
            k: 3,
            include_global_zones: false,
            ..ResolverConfig::default()
        })?
        .prompt(request)?;
    print!("{}", prompt.render());

    Ok(())
}
