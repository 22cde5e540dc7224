//! Registry persistence against the real on-disk store.

use grepjump_app::{EditorRegistry, LegacySource, TomlConfigStore};
use grepjump_core::EditorProfile;
use tempfile::TempDir;

struct NoLegacy;

impl LegacySource for NoLegacy {
    fn import(&self) -> Vec<EditorProfile> {
        Vec::new()
    }
}

fn sample_profiles() -> Vec<EditorProfile> {
    let mut subl = EditorProfile::new(".cpp|.h", "subl", "%1:%2:%3");
    subl.quote_path = false;
    subl.tab_size = 4;
    vec![
        EditorProfile::new(".rs|.toml", "/usr/bin/vim", "+%2 %1"),
        subl,
        EditorProfile::os_default(),
    ]
}

#[test]
fn saved_profiles_survive_a_process_restart() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("grepjump").join("config.toml");

    let mut registry = EditorRegistry::new(TomlConfigStore::open(&config_path));
    registry.save(sample_profiles()).unwrap();
    drop(registry);

    // A fresh store instance reads only what was persisted.
    let mut reloaded = EditorRegistry::new(TomlConfigStore::open(&config_path));
    reloaded.load(&NoLegacy).unwrap();

    assert_eq!(reloaded.profiles(), Some(sample_profiles().as_slice()));
}

#[test]
fn first_run_seeds_the_store_on_disk() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut registry = EditorRegistry::new(TomlConfigStore::open(&config_path));
    registry
        .load(&grepjump_app::BuiltinDefaults)
        .expect("first load seeds defaults");

    assert!(config_path.exists());
    let seeded = registry.profiles().unwrap().to_vec();
    assert!(!seeded.is_empty());

    // The next process loads the seeded list without consulting defaults.
    let mut next = EditorRegistry::new(TomlConfigStore::open(&config_path));
    next.load(&NoLegacy).unwrap();
    assert_eq!(next.profiles(), Some(seeded.as_slice()));
}

#[test]
fn cleared_registry_stays_empty_after_restart() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut registry = EditorRegistry::new(TomlConfigStore::open(&config_path));
    registry.save(sample_profiles()).unwrap();
    registry.clear().unwrap();
    drop(registry);

    // The empty configuration string re-triggers the import hook, which
    // hands back nothing here.
    let mut reloaded = EditorRegistry::new(TomlConfigStore::open(&config_path));
    reloaded.load(&NoLegacy).unwrap();
    assert_eq!(reloaded.profiles(), Some(&[][..]));
}
