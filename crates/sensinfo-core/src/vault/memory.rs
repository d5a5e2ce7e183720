//! In-memory vault backend

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{Vault, VaultResult};

/// In-memory vault for testing and ephemeral use
///
/// Records live in a nested map keyed by collection, then by item key.
/// Everything is lost when the vault is dropped.
///
/// # Thread Safety
///
/// The vault uses `RwLock` internally and is safe to use from multiple
/// threads.
///
/// # Example
///
/// ```
/// use sensinfo_core::vault::{Vault, MemoryVault};
///
/// let vault = MemoryVault::new();
/// vault.store("shared_preferences", "token", "abc123").unwrap();
/// assert_eq!(
///     vault.retrieve("shared_preferences", "token").unwrap(),
///     Some("abc123".to_string())
/// );
/// ```
#[derive(Debug, Default)]
pub struct MemoryVault {
    collections: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl MemoryVault {
    /// Create a new empty vault
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Create a vault seeded with initial records
    pub fn with_records(initial: HashMap<String, HashMap<String, String>>) -> Self {
        Self {
            collections: RwLock::new(initial),
        }
    }

    /// Remove every record from every collection
    pub fn clear(&self) {
        let mut collections = self.collections.write().unwrap();
        collections.clear();
    }

    /// Number of records in one collection
    pub fn len(&self, collection: &str) -> usize {
        let collections = self.collections.read().unwrap();
        collections.get(collection).map_or(0, HashMap::len)
    }

    /// Check whether a collection holds no records
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl Vault for MemoryVault {
    fn name(&self) -> &str {
        "memory"
    }

    fn retrieve(&self, collection: &str, key: &str) -> VaultResult<Option<String>> {
        let collections = self.collections.read().unwrap();
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(key))
            .cloned())
    }

    fn store(&self, collection: &str, key: &str, value: &str) -> VaultResult<()> {
        let mut collections = self.collections.write().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, collection: &str, key: &str) -> VaultResult<()> {
        let mut collections = self.collections.write().unwrap();
        if let Some(records) = collections.get_mut(collection) {
            records.remove(key);
        }
        Ok(())
    }

    fn keys(&self, collection: &str) -> VaultResult<Vec<String>> {
        let collections = self.collections.read().unwrap();
        Ok(collections
            .get(collection)
            .map(|records| records.keys().cloned().collect())
            .unwrap_or_default())
    }
}

impl Clone for MemoryVault {
    fn clone(&self) -> Self {
        let collections = self.collections.read().unwrap();
        Self {
            collections: RwLock::new(collections.clone()),
        }
    }
}
