//! End-to-end conversion scenarios through the public API

use slovar_core::{
    Column, DictionaryStore, Ingestor, MemoryStore, TextConverter, Variant, WordEntry,
};
use std::sync::Arc;

const SENTENCE: &str = "Идем у Београд, хлеб купујем.";

#[test]
fn test_sentence_in_every_variant() {
    let converter = TextConverter::embedded().unwrap();

    assert_eq!(
        converter.convert(SENTENCE, Variant::SrLatinica).unwrap(),
        "Idem u Beograd, hleb kupujem."
    );
    assert_eq!(
        converter.convert(SENTENCE, Variant::HrLanguage).unwrap(),
        "Idem u Beograd, kruh kupujem."
    );
    assert_eq!(
        converter.convert(SENTENCE, Variant::SrCirilica).unwrap(),
        SENTENCE
    );
}

#[test]
fn test_latin_input_reaches_cyrillic_and_back() {
    let converter = TextConverter::embedded().unwrap();
    let latin = "Idem u Beograd, hleb kupujem.";

    let cyrillic = converter.convert(latin, Variant::SrCirilica).unwrap();
    assert_eq!(cyrillic, SENTENCE);
    assert_eq!(
        converter.convert(&cyrillic, Variant::SrLatinica).unwrap(),
        latin
    );
}

#[test]
fn test_identity_word_stays_unchanged_in_croatian() {
    let store = Arc::new(MemoryStore::embedded().unwrap());
    let translit = store.transliterator().clone();
    store
        .insert(WordEntry::checked("воз", "voz", None, &translit).unwrap())
        .unwrap();

    let converter = TextConverter::embedded().unwrap().with_store(store);
    assert_eq!(
        converter.convert("воз, хлеб", Variant::HrLanguage).unwrap(),
        "voz, kruh"
    );
}

#[test]
fn test_ingested_dictionary_drives_conversion() {
    let store = Arc::new(MemoryStore::embedded().unwrap());
    let ingestor = Ingestor::new(store.clone(), store.transliterator().clone());

    let report = ingestor
        .ingest(
            "Хлеб и кафа су на столу, хлеб је свеж"
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty()),
        )
        .unwrap();
    // the second хлеб is already known
    assert_eq!(report.added, 8);
    assert_eq!(report.skipped, 1);

    let row = store.lookup("kafa", Column::Latinica).unwrap().unwrap();
    assert_eq!(row.hr_language.as_deref(), Some("kava"));

    let converter = TextConverter::embedded().unwrap().with_store(store);
    let (out, stats) = converter
        .convert_with_stats("Кафа и хлеб.", Variant::HrLanguage)
        .unwrap();
    assert_eq!(out, "Kava i kruh.");
    assert_eq!(stats.dictionary_hits, 3);
}
