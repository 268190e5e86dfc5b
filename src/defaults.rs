//! Shared defaults store, read at owner-construction time

use crate::config::Config;
use crate::value::OptionValue;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe store of default option values
///
/// Owners read the store once, at construction, to seed their [`Config`]
/// snapshot; the snapshot is independent of any later store mutation. A
/// store is an explicit value the caller owns and passes around, not a
/// process-wide singleton.
///
/// Stores can be layered: [`DefaultsStore::scoped`] creates a child whose
/// entries override a shared parent during resolution. Wiring several
/// owner types to one parent is how defaults are deliberately shared
/// across types; each type's own overrides live in its scoped store.
pub struct DefaultsStore {
    parent: Option<Arc<DefaultsStore>>,
    values: RwLock<HashMap<String, OptionValue>>,
}

impl DefaultsStore {
    /// Create a new empty store with no parent
    pub fn new() -> Self {
        Self {
            parent: None,
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store scoped under a shared parent
    ///
    /// Resolution overlays this store's entries on top of the parent's;
    /// mutations through `configure`, `set` and `set_all` touch only this
    /// store, never the parent.
    pub fn scoped(parent: &Arc<DefaultsStore>) -> Self {
        Self {
            parent: Some(parent.clone()),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Run a configure block against a draft seeded from current defaults
    ///
    /// The draft starts as a copy of the resolved defaults, so the block
    /// can read values established by earlier configuration. After the
    /// block returns, every option the block added or changed is upserted
    /// into this store (last writer wins). Options the block left at their
    /// seeded value are not written, so inherited parent entries keep
    /// resolving live through the parent. Returns the draft.
    pub fn configure<F>(&self, f: F) -> Config
    where
        F: FnOnce(&mut Config),
    {
        let seed = self.resolve();
        let mut draft = Config::new();
        for (name, value) in seed.iter() {
            draft.set(name.clone(), value.clone());
        }

        f(&mut draft);

        let mut values = self.values.write().unwrap();
        let mut committed = 0;
        for (name, value) in draft.iter() {
            if seed.get(name) != Some(value) {
                values.insert(name.clone(), value.clone());
                committed += 1;
            }
        }
        log::debug!("Committed {} default(s) from configure block", committed);

        draft
    }

    /// Replace this store's entire mapping
    pub fn set_all(&self, defaults: HashMap<String, OptionValue>) {
        let mut values = self.values.write().unwrap();
        *values = defaults;
    }

    /// Upsert a single default
    pub fn set(&self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        log::debug!("Set default: {} = {}", name, value);
        self.values.write().unwrap().insert(name, value);
    }

    /// Get a default, resolving through the parent chain
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        if let Some(value) = self.values.read().unwrap().get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.get(name))
    }

    /// Materialize the full resolved mapping (parent entries overlaid by own)
    pub fn resolve(&self) -> HashMap<String, OptionValue> {
        let mut resolved = match &self.parent {
            Some(parent) => parent.resolve(),
            None => HashMap::new(),
        };
        for (name, value) in self.values.read().unwrap().iter() {
            resolved.insert(name.clone(), value.clone());
        }
        resolved
    }

    /// All resolved option names, sorted for consistent ordering
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.resolve().into_keys().collect();
        names.sort();
        names
    }

    /// Number of resolved defaults
    pub fn count(&self) -> usize {
        self.resolve().len()
    }

    /// Whether no defaults resolve through this store
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for DefaultsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_commits_draft() {
        let store = DefaultsStore::new();

        let draft = store.configure(|config| {
            config.set("some_config", "default_value");
        });

        assert_eq!(
            draft.get_string("some_config").unwrap(),
            Some("default_value".to_string())
        );
        assert_eq!(
            store.get("some_config"),
            Some(OptionValue::String("default_value".to_string()))
        );
    }

    #[test]
    fn test_configure_draft_sees_earlier_defaults() {
        let store = DefaultsStore::new();
        store.set("base_url", "http://localhost");

        store.configure(|config| {
            let base = config.get_string("base_url").unwrap().unwrap();
            config.set("health_url", format!("{}/health", base));
        });

        assert_eq!(
            store.get("health_url"),
            Some(OptionValue::String("http://localhost/health".to_string()))
        );
    }

    #[test]
    fn test_last_writer_wins() {
        let store = DefaultsStore::new();
        store.configure(|config| config.set("mode", "fast"));
        store.configure(|config| config.set("mode", "safe"));

        assert_eq!(
            store.get("mode"),
            Some(OptionValue::String("safe".to_string()))
        );
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_set_all_replaces_mapping() {
        let store = DefaultsStore::new();
        store.set("old", 1u64);

        let mut defaults = HashMap::new();
        defaults.insert("new".to_string(), OptionValue::UInt(2));
        store.set_all(defaults);

        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("new"), Some(OptionValue::UInt(2)));
    }

    #[test]
    fn test_scoped_store_overlays_parent() {
        let parent = Arc::new(DefaultsStore::new());
        parent.set("anything", "anything");
        parent.set("shared", true);

        let scoped = DefaultsStore::scoped(&parent);
        scoped.set("anything", "something");

        // Own entry wins, parent entries shine through
        assert_eq!(
            scoped.get("anything"),
            Some(OptionValue::String("something".to_string()))
        );
        assert_eq!(scoped.get("shared"), Some(OptionValue::Bool(true)));

        // Parent is untouched by the scoped override
        assert_eq!(
            parent.get("anything"),
            Some(OptionValue::String("anything".to_string()))
        );
    }

    #[test]
    fn test_scoped_configure_never_writes_parent() {
        let parent = Arc::new(DefaultsStore::new());
        let scoped = DefaultsStore::scoped(&parent);

        scoped.configure(|config| config.set("local_only", 1i64));

        assert_eq!(parent.get("local_only"), None);
        assert_eq!(scoped.get("local_only"), Some(OptionValue::Int(1)));
    }

    #[test]
    fn test_configure_leaves_untouched_parent_entries_live() {
        let parent = Arc::new(DefaultsStore::new());
        parent.set("anything", "anything");

        let scoped = DefaultsStore::scoped(&parent);
        scoped.configure(|config| config.set("own", 1i64));

        // The block never touched "anything", so it must not have been
        // frozen into the scoped store's own mapping
        parent.set("anything", "updated");
        assert_eq!(
            scoped.get("anything"),
            Some(OptionValue::String("updated".to_string()))
        );

        let fresh = Config::from_defaults(&scoped);
        assert_eq!(
            fresh.get_string("anything").unwrap(),
            Some("updated".to_string())
        );
        assert_eq!(fresh.get_int("own").unwrap(), Some(1));
    }

    #[test]
    fn test_names_sorted() {
        let store = DefaultsStore::new();
        store.set("b", 1u64);
        store.set("a", 2u64);
        store.set("c", 3u64);

        assert_eq!(store.names(), vec!["a", "b", "c"]);
    }
}
