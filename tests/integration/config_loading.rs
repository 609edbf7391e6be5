use std::fs;
use std::path::PathBuf;
use strucid::config::ConfigLoader;
use tempfile::TempDir;

#[test]
fn defaults_without_workspace_file() {
    let temp = TempDir::new().unwrap();
    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.storage.tree, "tags");
    assert!(config.drift.cache_ids);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn workspace_file_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".strucid");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("config.toml"),
        r#"
[storage]
path = "identity-db"
tree = "replica"

[drift]
cache_ids = false

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(temp.path()).unwrap();
    assert_eq!(config.storage.path, Some(PathBuf::from("identity-db")));
    assert_eq!(config.storage.tree, "replica");
    assert!(!config.drift.cache_ids);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn load_from_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    let config = ConfigLoader::default();
    fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded.storage, config.storage);
    assert_eq!(loaded.drift, config.drift);
}
