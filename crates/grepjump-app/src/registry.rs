//! Ordered editor-profile list backed by the configuration store.

use grepjump_core::codec;
use grepjump_core::prelude::*;
use grepjump_core::EditorProfile;

use crate::defaults::LegacySource;
use crate::store::{ConfigStore, TEXT_EDITORS_KEY};

/// Holds the current editor profiles and mediates persistence.
///
/// Order is significant: the resolver walks the list front to back and the
/// first matching profile wins. The list is replaced wholesale on every
/// save; there is no per-profile update primitive.
///
/// Intended for single-threaded use from the application's composition
/// root; concurrent access is not protected.
pub struct EditorRegistry<S: ConfigStore> {
    store: S,
    profiles: Option<Vec<EditorProfile>>,
}

impl<S: ConfigStore> EditorRegistry<S> {
    /// Registry over `store`, with nothing loaded yet.
    pub fn new(store: S) -> Self {
        Self {
            store,
            profiles: None,
        }
    }

    /// Load profiles from the store.
    ///
    /// An absent or empty configuration string triggers the one-time
    /// `legacy` import; the imported list is saved back immediately so the
    /// next load reads it from the store.
    pub fn load(&mut self, legacy: &dyn LegacySource) -> Result<()> {
        match self.store.get(TEXT_EDITORS_KEY) {
            Some(raw) if !raw.is_empty() => {
                let profiles = codec::decode_profiles(&raw);
                debug!("Loaded {} editor profiles", profiles.len());
                self.profiles = Some(profiles);
                Ok(())
            }
            _ => {
                let imported = legacy.import();
                info!(
                    "No stored editor configuration; importing {} initial profiles",
                    imported.len()
                );
                self.save(imported)
            }
        }
    }

    /// Replace the profile list, persist it, and flush the store.
    pub fn save(&mut self, profiles: Vec<EditorProfile>) -> Result<()> {
        let raw = codec::encode_profiles(&profiles);
        self.store.set(TEXT_EDITORS_KEY, &raw);
        self.profiles = Some(profiles);
        self.store.flush()
    }

    /// Drop all profiles and persist the empty configuration string.
    pub fn clear(&mut self) -> Result<()> {
        self.profiles = None;
        self.store.set(TEXT_EDITORS_KEY, "");
        self.store.flush()
    }

    /// Current profiles; `None` until loaded, or after [`clear`](Self::clear).
    pub fn profiles(&self) -> Option<&[EditorProfile]> {
        self.profiles.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryConfigStore;
    use std::cell::Cell;

    /// Import hook that counts invocations.
    struct CountingSource {
        profiles: Vec<EditorProfile>,
        calls: Cell<u32>,
    }

    impl CountingSource {
        fn with(profiles: Vec<EditorProfile>) -> Self {
            Self {
                profiles,
                calls: Cell::new(0),
            }
        }
    }

    impl LegacySource for CountingSource {
        fn import(&self) -> Vec<EditorProfile> {
            self.calls.set(self.calls.get() + 1);
            self.profiles.clone()
        }
    }

    fn sample() -> Vec<EditorProfile> {
        vec![
            EditorProfile::new(".rs", "/usr/bin/vim", "+%2 %1"),
            EditorProfile::os_default(),
        ]
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut registry = EditorRegistry::new(MemoryConfigStore::default());
        registry.save(sample()).unwrap();

        // Simulate a fresh process reading the same backend state.
        let store = std::mem::take(&mut registry.store);
        let mut fresh = EditorRegistry::new(store);
        fresh.load(&CountingSource::with(Vec::new())).unwrap();

        assert_eq!(fresh.profiles(), Some(sample().as_slice()));
    }

    #[test]
    fn test_save_flushes_the_store() {
        let mut registry = EditorRegistry::new(MemoryConfigStore::default());
        registry.save(sample()).unwrap();
        assert_eq!(registry.store.flushes, 1);
    }

    #[test]
    fn test_clear_persists_empty_string() {
        let mut registry = EditorRegistry::new(MemoryConfigStore::default());
        registry.save(sample()).unwrap();

        registry.clear().unwrap();

        assert!(registry.profiles().is_none());
        assert_eq!(registry.store.get(TEXT_EDITORS_KEY).as_deref(), Some(""));
    }

    #[test]
    fn test_empty_store_runs_import_once_and_saves() {
        let source = CountingSource::with(sample());
        let mut registry = EditorRegistry::new(MemoryConfigStore::default());
        registry.load(&source).unwrap();

        assert_eq!(source.calls.get(), 1);
        assert_eq!(registry.profiles(), Some(sample().as_slice()));

        // The imported list was persisted: a second load on the same store
        // never consults the hook again.
        let store = std::mem::take(&mut registry.store);
        let mut fresh = EditorRegistry::new(store);
        let second_source = CountingSource::with(Vec::new());
        fresh.load(&second_source).unwrap();

        assert_eq!(second_source.calls.get(), 0);
        assert_eq!(fresh.profiles(), Some(sample().as_slice()));
    }

    #[test]
    fn test_corrupt_record_degrades_to_remaining_profiles() {
        let good = EditorProfile::new(".rs", "vim", "+%2 %1");
        let raw = format!("{}|;;|garbage", codec::encode_profile(&good));

        let mut store = MemoryConfigStore::default();
        store.set(TEXT_EDITORS_KEY, &raw);

        let mut registry = EditorRegistry::new(store);
        registry.load(&CountingSource::with(Vec::new())).unwrap();

        assert_eq!(registry.profiles(), Some(&[good][..]));
    }
}
