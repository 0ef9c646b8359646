//! Concurrent ingestion into one shared store

use slovar_core::{DictionaryStore, IngestReport, Ingestor, MemoryStore};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const WORDS: &str = "Прича о човеку који је ишао од града до града и у сваком граду \
                     остављао по једну књигу, а књиге су читали сви који су знали да читају";

#[test]
fn test_two_threads_add_each_word_once() {
    let store = Arc::new(MemoryStore::embedded().unwrap());
    let words: Vec<String> = WORDS
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();
    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let ingestor = Ingestor::new(store.clone(), store.transliterator().clone());
            let words = words.clone();
            thread::spawn(move || ingestor.ingest(&words).unwrap())
        })
        .collect();

    let mut total = IngestReport::default();
    for handle in handles {
        total += handle.join().unwrap();
    }

    assert_eq!(total.added, distinct.len());
    assert_eq!(total.skipped, 2 * words.len() - distinct.len());
    assert_eq!(store.len().unwrap(), distinct.len());
}

#[test]
fn test_cyrillic_and_latin_racers_agree() {
    let store = Arc::new(MemoryStore::embedded().unwrap());
    let cyrillic = vec!["Београд", "Нови", "Сад", "Ниш", "Крагујевац"];
    let latin = vec!["beograd", "novi", "sad", "niš", "kragujevac"];

    let spawn = |words: Vec<&'static str>| {
        let ingestor = Ingestor::new(store.clone(), store.transliterator().clone());
        thread::spawn(move || ingestor.ingest(words).unwrap())
    };
    let a = spawn(cyrillic);
    let b = spawn(latin);

    let mut total = a.join().unwrap();
    total += b.join().unwrap();

    assert_eq!(total.added, 5);
    assert_eq!(total.skipped, 5);
    assert_eq!(store.len().unwrap(), 5);
}
