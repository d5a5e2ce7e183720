//! Secure-storage adapter over a vault backend

use std::collections::HashMap;
use std::sync::Arc;

use super::keychain::KeychainVault;
use super::options::AccessOptions;
use super::traits::{Vault, VaultError, VaultResult};

/// Key/value secure-storage facade
///
/// Validates keys, resolves the target collection from per-call
/// [`AccessOptions`], delegates to the vault backend, and maps results
/// into the three-outcome error taxonomy of [`VaultError`]. It holds no
/// state besides the backend handle: no caching, no record buffering,
/// and no coordination between calls — concurrent operations race with
/// whatever guarantees the underlying vault provides.
///
/// # Example
///
/// ```
/// use sensinfo_core::vault::{SensitiveInfo, MemoryVault, AccessOptions};
/// use std::sync::Arc;
///
/// let info = SensitiveInfo::with_vault(Arc::new(MemoryVault::new()));
/// let opts = AccessOptions::default();
///
/// info.set_item("token", "abc123", &opts).unwrap();
/// assert_eq!(info.get_item("token", &opts).unwrap(), "abc123");
/// ```
pub struct SensitiveInfo {
    vault: Arc<dyn Vault>,
}

impl SensitiveInfo {
    /// Create an adapter over the system keychain
    pub fn new() -> Self {
        Self::with_vault(Arc::new(KeychainVault::new()))
    }

    /// Create an adapter over a specific backend
    pub fn with_vault(vault: Arc<dyn Vault>) -> Self {
        Self { vault }
    }

    /// Name of the backend this adapter delegates to
    pub fn vault_name(&self) -> &str {
        self.vault.name()
    }

    /// Check if the backend is usable
    pub fn is_available(&self) -> bool {
        self.vault.is_available()
    }

    /// Read the value stored under `key`
    ///
    /// Fails with `EmptyKey` before any vault access when `key` is
    /// empty, and with `NotFound` when no record exists in the resolved
    /// collection.
    pub fn get_item(&self, key: &str, options: &AccessOptions) -> VaultResult<String> {
        if key.is_empty() {
            return Err(VaultError::EmptyKey);
        }
        self.vault
            .retrieve(options.collection(), key)?
            .ok_or(VaultError::NotFound)
    }

    /// Store `value` under `key`, overwriting any existing record
    ///
    /// Returns the value that was stored (echoed, not re-read).
    pub fn set_item(&self, key: &str, value: &str, options: &AccessOptions) -> VaultResult<String> {
        if key.is_empty() {
            return Err(VaultError::EmptyKey);
        }
        self.vault.store(options.collection(), key, value)?;
        Ok(value.to_string())
    }

    /// Delete the record stored under `key`
    ///
    /// Looks the record up first and fails with `NotFound` when absent;
    /// returns the key on success.
    pub fn delete_item(&self, key: &str, options: &AccessOptions) -> VaultResult<String> {
        if key.is_empty() {
            return Err(VaultError::EmptyKey);
        }
        let collection = options.collection();
        if self.vault.retrieve(collection, key)?.is_none() {
            return Err(VaultError::NotFound);
        }
        self.vault.remove(collection, key)?;
        Ok(key.to_string())
    }

    /// Read every record in the resolved collection
    ///
    /// Enumerates the collection, then re-reads each key; one backend
    /// failure anywhere fails the whole call and partial results are
    /// discarded. A record removed by a concurrent writer between
    /// enumeration and re-read is skipped. Order is backend-defined.
    pub fn get_all_items(&self, options: &AccessOptions) -> VaultResult<HashMap<String, String>> {
        let collection = options.collection();
        let mut items = HashMap::new();
        for key in self.vault.keys(collection)? {
            if let Some(value) = self.vault.retrieve(collection, &key)? {
                items.insert(key, value);
            }
        }
        Ok(items)
    }

    /// Whether a biometric sensor is available
    ///
    /// Always `false`: biometrics are not wired up on this target.
    pub fn is_sensor_available(&self) -> bool {
        false
    }

    /// Whether any fingerprints are enrolled
    ///
    /// Always `false`, same reason as [`Self::is_sensor_available`].
    pub fn has_enrolled_fingerprints(&self) -> bool {
        false
    }
}

impl Default for SensitiveInfo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryVault;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn adapter() -> SensitiveInfo {
        SensitiveInfo::with_vault(Arc::new(MemoryVault::new()))
    }

    /// Backend that counts every call, to prove preconditions short-circuit
    struct CountingVault {
        inner: MemoryVault,
        calls: AtomicUsize,
    }

    impl CountingVault {
        fn new() -> Self {
            Self {
                inner: MemoryVault::new(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Vault for CountingVault {
        fn name(&self) -> &str {
            "counting"
        }

        fn retrieve(&self, collection: &str, key: &str) -> VaultResult<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.retrieve(collection, key)
        }

        fn store(&self, collection: &str, key: &str, value: &str) -> VaultResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.store(collection, key, value)
        }

        fn remove(&self, collection: &str, key: &str) -> VaultResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.remove(collection, key)
        }

        fn keys(&self, collection: &str) -> VaultResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.keys(collection)
        }
    }

    /// Backend that fails every operation, to exercise StoreAccess mapping
    struct BrokenVault;

    impl BrokenVault {
        fn failure() -> VaultError {
            VaultError::store_access(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "vault locked",
            ))
        }
    }

    impl Vault for BrokenVault {
        fn name(&self) -> &str {
            "broken"
        }

        fn retrieve(&self, _collection: &str, _key: &str) -> VaultResult<Option<String>> {
            Err(Self::failure())
        }

        fn store(&self, _collection: &str, _key: &str, _value: &str) -> VaultResult<()> {
            Err(Self::failure())
        }

        fn remove(&self, _collection: &str, _key: &str) -> VaultResult<()> {
            Err(Self::failure())
        }

        fn keys(&self, _collection: &str) -> VaultResult<Vec<String>> {
            Err(Self::failure())
        }
    }

    #[test]
    fn test_empty_key_rejected_without_touching_vault() {
        let vault = Arc::new(CountingVault::new());
        let info = SensitiveInfo::with_vault(vault.clone());
        let opts = AccessOptions::default();

        assert_eq!(
            info.get_item("", &opts).unwrap_err().to_string(),
            "key is empty"
        );
        assert_eq!(
            info.set_item("", "value", &opts).unwrap_err().to_string(),
            "key is empty"
        );
        assert_eq!(
            info.delete_item("", &opts).unwrap_err().to_string(),
            "key is empty"
        );
        assert_eq!(vault.call_count(), 0);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let info = adapter();
        let opts = AccessOptions::default();

        let echoed = info.set_item("token", "abc123", &opts).unwrap();
        assert_eq!(echoed, "abc123");
        assert_eq!(info.get_item("token", &opts).unwrap(), "abc123");
    }

    #[test]
    fn test_get_missing_key_not_found() {
        let info = adapter();
        let err = info
            .get_item("never_set", &AccessOptions::default())
            .unwrap_err();
        assert!(matches!(err, VaultError::NotFound));
        assert_eq!(err.to_string(), "key not found");
    }

    #[test]
    fn test_delete_missing_key_not_found() {
        let info = adapter();
        let err = info
            .delete_item("never_set", &AccessOptions::default())
            .unwrap_err();
        assert!(matches!(err, VaultError::NotFound));
    }

    #[test]
    fn test_delete_removes_record() {
        let info = adapter();
        let opts = AccessOptions::default();

        info.set_item("token", "abc", &opts).unwrap();
        assert_eq!(info.delete_item("token", &opts).unwrap(), "token");

        let err = info.get_item("token", &opts).unwrap_err();
        assert!(matches!(err, VaultError::NotFound));
    }

    #[test]
    fn test_set_twice_last_write_wins() {
        let info = adapter();
        let opts = AccessOptions::default();

        info.set_item("token", "first", &opts).unwrap();
        info.set_item("token", "second", &opts).unwrap();
        assert_eq!(info.get_item("token", &opts).unwrap(), "second");
    }

    #[test]
    fn test_get_all_items() {
        let info = adapter();
        let opts = AccessOptions::default();

        info.set_item("a", "1", &opts).unwrap();
        info.set_item("b", "2", &opts).unwrap();

        let items = info.get_all_items(&opts).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.get("a"), Some(&"1".to_string()));
        assert_eq!(items.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_get_all_items_empty_collection() {
        let info = adapter();
        let items = info
            .get_all_items(&AccessOptions::with_collection("unused"))
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_sensor_probes_always_false() {
        let info = adapter();
        let opts = AccessOptions::default();

        assert!(!info.is_sensor_available());
        assert!(!info.has_enrolled_fingerprints());

        // Unchanged by prior operations
        info.set_item("token", "abc", &opts).unwrap();
        assert!(!info.is_sensor_available());
        assert!(!info.has_enrolled_fingerprints());
    }

    #[test]
    fn test_default_collection_matches_explicit_literal() {
        let info = adapter();
        let omitted = AccessOptions::default();
        let explicit = AccessOptions::with_collection("shared_preferences");

        info.set_item("token", "abc", &omitted).unwrap();
        assert_eq!(info.get_item("token", &explicit).unwrap(), "abc");
    }

    #[test]
    fn test_collections_do_not_leak() {
        let info = adapter();
        let first = AccessOptions::with_collection("first");
        let second = AccessOptions::with_collection("second");

        info.set_item("token", "one", &first).unwrap();
        info.set_item("token", "two", &second).unwrap();

        assert_eq!(info.get_item("token", &first).unwrap(), "one");
        assert_eq!(info.get_item("token", &second).unwrap(), "two");

        info.delete_item("token", &first).unwrap();
        assert!(info.get_item("token", &first).is_err());
        assert_eq!(info.get_item("token", &second).unwrap(), "two");
    }

    #[test]
    fn test_backend_failures_surface_as_store_access() {
        let info = SensitiveInfo::with_vault(Arc::new(BrokenVault));
        let opts = AccessOptions::default();

        for err in [
            info.get_item("key", &opts).unwrap_err(),
            info.set_item("key", "value", &opts).unwrap_err(),
            info.delete_item("key", &opts).unwrap_err(),
            info.get_all_items(&opts).unwrap_err(),
        ] {
            assert!(matches!(err, VaultError::StoreAccess(_)));
            assert_eq!(err.to_string(), "cannot access datastore");
        }
    }

    #[test]
    fn test_get_all_items_skips_vanished_record() {
        // A key that enumerates but no longer resolves was removed by a
        // concurrent writer; the remaining records still come back.
        let vault = Arc::new(MemoryVault::new());
        vault.store("shared_preferences", "a", "1").unwrap();
        vault.store("shared_preferences", "b", "2").unwrap();

        struct StaleIndexVault(Arc<MemoryVault>);

        impl Vault for StaleIndexVault {
            fn name(&self) -> &str {
                "stale"
            }

            fn retrieve(&self, collection: &str, key: &str) -> VaultResult<Option<String>> {
                self.0.retrieve(collection, key)
            }

            fn store(&self, collection: &str, key: &str, value: &str) -> VaultResult<()> {
                self.0.store(collection, key, value)
            }

            fn remove(&self, collection: &str, key: &str) -> VaultResult<()> {
                self.0.remove(collection, key)
            }

            fn keys(&self, collection: &str) -> VaultResult<Vec<String>> {
                let mut keys = self.0.keys(collection)?;
                keys.push("vanished".to_string());
                Ok(keys)
            }
        }

        let info = SensitiveInfo::with_vault(Arc::new(StaleIndexVault(vault)));
        let items = info.get_all_items(&AccessOptions::default()).unwrap();
        assert_eq!(items.len(), 2);
        assert!(!items.contains_key("vanished"));
    }

    #[test]
    fn test_value_stored_verbatim() {
        let info = adapter();
        let opts = AccessOptions::default();
        let value = "  spaces, unicode: héllo, json: {\"a\": 1}, empty next: ";

        info.set_item("key", value, &opts).unwrap();
        assert_eq!(info.get_item("key", &opts).unwrap(), value);

        // Empty values are legal; only keys must be non-empty
        info.set_item("key", "", &opts).unwrap();
        assert_eq!(info.get_item("key", &opts).unwrap(), "");
    }
}
