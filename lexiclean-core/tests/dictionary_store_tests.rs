// lexiclean-core/tests/dictionary_store_tests.rs
use std::sync::Arc;
use std::thread;

use lexiclean_core::{
    DictionaryStore, DictionaryVariant, DirectorySource, LoadError, MemorySource, WordCategory,
};

const SMALL: &str = r#"{"words": [
    {"originalWord": "bad", "replacementOptions": ["unpleasant"], "category": "Mild"},
    {"originalWord": "awful", "replacementOptions": ["poor", "weak"]}
]}"#;

const BUZZ: &str = r#"[{"original_word": "synergy", "replacement_options": ["teamwork"]}]"#;

fn memory_store() -> DictionaryStore {
    DictionaryStore::new(
        MemorySource::new()
            .with_resource("word_replacements", SMALL)
            .with_resource("word_replacements_buzzwords", BUZZ),
    )
}

#[test]
fn test_missing_resource_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = DictionaryStore::new(DirectorySource::new(dir.path()));

    let err = store.load("missing-variant-resource").unwrap_err();
    assert!(matches!(err, LoadError::ResourceNotFound { .. }));
    assert!(!store.is_ready());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_missing_resource_in_memory_source() {
    let store = DictionaryStore::new(MemorySource::new());
    match store.load("missing-variant-resource") {
        Err(LoadError::ResourceNotFound { variant, resource }) => {
            assert_eq!(variant, "missing-variant-resource");
            assert_eq!(resource, "word_replacements");
        }
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
}

#[test]
fn test_embedded_variants_load() {
    let store = DictionaryStore::embedded();
    for variant in DictionaryVariant::all() {
        store.load(variant.as_str()).unwrap();
        assert!(store.is_ready());
        assert_eq!(store.active_variant(), variant.as_str());
        assert!(!store.is_empty());
    }
    assert!(store.lookup("synergy").is_some());
}

#[test]
fn test_unknown_variant_falls_back_to_default() {
    let store = memory_store();
    store.load("no-such-variant").unwrap();
    assert_eq!(store.active_variant(), "default");
    assert!(store.lookup("bad").is_some());
}

#[test]
fn test_variant_switch_replaces_entries() {
    let store = memory_store();
    store.load("default").unwrap();
    assert!(store.lookup("awful").is_some());

    store.load("Buzzwords").unwrap();
    assert_eq!(store.active_variant(), "buzzwords");
    assert!(store.lookup("awful").is_none());
    assert!(store.lookup("SYNERGY").is_some());
}

#[test]
fn test_failed_reload_leaves_store_not_ready() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("word_replacements.json"), SMALL).unwrap();
    std::fs::write(dir.path().join("word_replacements_buzzwords.json"), "{ not json").unwrap();
    let store = DictionaryStore::new(DirectorySource::new(dir.path()));

    store.load("default").unwrap();
    assert!(store.is_ready());

    let err = store.load("buzzwords").unwrap_err();
    assert!(matches!(err, LoadError::MalformedData { .. }));
    assert!(!store.is_ready());
    assert_eq!(store.active_variant(), "default");
    assert!(store.lookup("bad").is_none());
}

#[test]
fn test_record_without_options_fails_load() {
    let store = DictionaryStore::new(MemorySource::new().with_resource(
        "word_replacements",
        r#"[{"original_word": "bad", "replacement_options": [""]}]"#,
    ));
    assert!(matches!(store.load("default"), Err(LoadError::MalformedData { .. })));
    assert!(!store.is_ready());
}

#[test]
fn test_unknown_category_fails_load() {
    let store = DictionaryStore::new(MemorySource::new().with_resource(
        "word_replacements",
        r#"[{"original_word": "bad", "replacement_options": ["meh"], "category": "Spicy"}]"#,
    ));
    assert!(store.load("default").is_err());
}

#[test]
fn test_entry_fields_survive_load() {
    let store = memory_store();
    store.load("default").unwrap();
    let entry = store.lookup("Bad").unwrap();
    assert_eq!(entry.original_word, "bad");
    assert_eq!(entry.category, WordCategory::Mild);
    assert_eq!(entry.replacement_options, vec!["unpleasant"]);
    assert_eq!(store.lookup("awful").unwrap().category, WordCategory::Profanity);
}

#[test]
fn test_yaml_directory_resource() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("word_replacements.yml"),
        "words:\n  - originalWord: grim\n    replacementOptions: [bright]\n",
    )
    .unwrap();
    let store = DictionaryStore::new(DirectorySource::new(dir.path()));
    store.load("default").unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn test_concurrent_reads_during_reloads() {
    let store = Arc::new(memory_store());
    store.load("default").unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    // A held snapshot is always complete, whichever variant it is.
                    if let Some(snapshot) = store.snapshot() {
                        match snapshot.variant() {
                            DictionaryVariant::Default => assert_eq!(snapshot.len(), 2),
                            DictionaryVariant::Buzzwords => assert_eq!(snapshot.len(), 1),
                        }
                    }
                }
            })
        })
        .collect();

    let loaders: Vec<_> = ["default", "buzzwords"]
        .into_iter()
        .map(|variant| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..50 {
                    store.load(variant).unwrap();
                }
            })
        })
        .collect();

    for handle in readers.into_iter().chain(loaders) {
        handle.join().unwrap();
    }
    assert!(store.is_ready());
}
