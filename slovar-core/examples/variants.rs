//! Example of converting one sentence into every variant

use slovar_core::{Ingestor, MemoryStore, TextConverter, Variant};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Идем у Београд, хлеб купујем.";

    println!("=== Example 1: Table only ===");
    let converter = TextConverter::embedded()?;
    for variant in Variant::ALL {
        println!("{:>12}: {}", variant, converter.convert(text, variant)?);
    }

    println!("\n=== Example 2: With a dictionary ===");
    let store = Arc::new(MemoryStore::embedded()?);
    let ingestor = Ingestor::new(store.clone(), store.transliterator().clone());
    let report = ingestor.ingest(["сат", "воз", "хлеб"])?;
    println!("Ingested {} words, skipped {}", report.added, report.skipped);

    let converter = TextConverter::embedded()?.with_store(store);
    let (out, stats) = converter.convert_with_stats("Воз у пет сати, хлеб.", Variant::HrLanguage)?;
    println!("Output: {out}");
    println!(
        "Dictionary hits: {}, fallbacks: {}",
        stats.dictionary_hits, stats.fallbacks
    );

    Ok(())
}
