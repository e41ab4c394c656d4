use super::*;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = load_settings_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.import.mode, "merge");
    assert_eq!(settings.import.chunk_size, 50);
    assert_eq!(settings.lookup.concurrency, 5);
    assert!(settings.import.backfill_images);
}

#[test]
fn partial_file_fills_in_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[import]\nchunk_size = 10\n\n[collection]\npath = \"/data/cards.json\"\n")
        .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.import.chunk_size, 10);
    assert_eq!(settings.import.mode, "merge");
    assert_eq!(settings.collection_path(), PathBuf::from("/data/cards.json"));
    assert_eq!(settings.lookup, LookupSettings::default());
}

#[test]
fn corrupt_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    std::fs::write(&path, "[import\nchunk_size = ").unwrap();
    let err = load_settings_from(&path).unwrap_err();
    assert!(matches!(err, StoreError::Settings { .. }));
}

#[test]
fn save_then_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.import.mode = "replace".into();
    settings.collection.max_bytes = Some(5_000_000);
    settings.lookup.min_interval_ms = 1000;
    save_settings_to(&path, &settings).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(load_settings_from(&path).unwrap(), settings);
}

#[test]
fn set_by_key() {
    let mut settings = Settings::default();
    settings.set("import.chunk_size", "20").unwrap();
    settings.set("import.mode", "Replace").unwrap();
    settings.set("import.backfill_images", "false").unwrap();
    settings.set("collection.path", "/data/cards.json").unwrap();
    settings.set("collection.max_bytes", "5000000").unwrap();

    assert_eq!(settings.import.chunk_size, 20);
    assert_eq!(settings.import.mode, "replace");
    assert!(!settings.import.backfill_images);
    assert_eq!(settings.collection_path(), PathBuf::from("/data/cards.json"));
    assert_eq!(settings.collection.max_bytes, Some(5_000_000));

    settings.set("collection.path", "").unwrap();
    settings.set("collection.max_bytes", "").unwrap();
    assert_eq!(settings.collection, CollectionSettings::default());
}

#[test]
fn set_rejects_bad_values() {
    let mut settings = Settings::default();
    for (key, value) in [
        ("import.chunk_size", "lots"),
        ("import.mode", "append"),
        ("import.backfill_images", "yes"),
        ("lookup.nope", "1"),
    ] {
        let err = settings.set(key, value).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSetting { .. }), "{key}={value}");
    }
    assert_eq!(settings, Settings::default());
}
