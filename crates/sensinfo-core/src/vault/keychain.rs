//! System keychain vault backend
//!
//! Uses the OS credential store for persistent secure storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;

use super::traits::{Vault, VaultError, VaultResult};
use crate::logging::file_logger as log;

/// Reserved per-collection record holding the JSON list of stored keys.
/// The keyring API has no enumeration call, so the backend maintains
/// this index itself; it is invisible to `retrieve` and `keys`.
const KEY_INDEX_ENTRY: &str = "__sensinfo_keys__";

const AVAILABILITY_CHECK_ENTRY: &str = "__sensinfo_availability_check__";

/// Vault backed by the system keychain
///
/// Each record maps onto one platform credential: the collection name
/// becomes the keychain *service* and the item key the *user*, matching
/// the resource/username split of the Windows PasswordVault. Values are
/// stored verbatim; encryption and persistence belong to the OS.
///
/// # Example
///
/// ```no_run
/// use sensinfo_core::vault::{Vault, KeychainVault};
///
/// let vault = KeychainVault::new();
/// vault.store("shared_preferences", "token", "abc123").unwrap();
/// let value = vault.retrieve("shared_preferences", "token").unwrap();
/// assert_eq!(value, Some("abc123".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct KeychainVault {
    _private: (),
}

impl KeychainVault {
    /// Create a new keychain vault
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Get a keyring entry for one record
    fn entry(&self, collection: &str, key: &str) -> VaultResult<Entry> {
        Entry::new(collection, key).map_err(VaultError::store_access)
    }

    /// Read the key index for a collection
    ///
    /// A missing index means an empty collection; a corrupt index reads
    /// as empty rather than failing every enumeration after it.
    fn read_index(&self, collection: &str) -> VaultResult<Vec<String>> {
        let entry = self.entry(collection, KEY_INDEX_ENTRY)?;
        match entry.get_password() {
            Ok(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            Err(keyring::Error::NoEntry) => Ok(Vec::new()),
            Err(e) => {
                log::warn(
                    "KeychainVault",
                    &format!("failed to read key index for '{}': {:?}", collection, e),
                );
                Err(VaultError::store_access(e))
            }
        }
    }

    /// Write the key index for a collection
    fn write_index(&self, collection: &str, keys: &[String]) -> VaultResult<()> {
        let raw = serde_json::to_string(keys).map_err(VaultError::store_access)?;
        let entry = self.entry(collection, KEY_INDEX_ENTRY)?;
        entry.set_password(&raw).map_err(VaultError::store_access)
    }
}

impl Vault for KeychainVault {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // Entry creation fails on headless hosts without a keychain daemon
        match Entry::new("sensinfo", AVAILABILITY_CHECK_ENTRY) {
            Ok(_) => true,
            Err(e) => {
                log::warn("KeychainVault", &format!("is_available() = false: {:?}", e));
                false
            }
        }
    }

    fn retrieve(&self, collection: &str, key: &str) -> VaultResult<Option<String>> {
        if key == KEY_INDEX_ENTRY {
            return Ok(None);
        }
        let entry = self.entry(collection, key)?;
        match entry.get_password() {
            Ok(value) => {
                log::debug(
                    "KeychainVault",
                    &format!(
                        "retrieve '{}' from '{}': hit, value len={}",
                        key,
                        collection,
                        value.len()
                    ),
                );
                Ok(Some(value))
            }
            Err(keyring::Error::NoEntry) => {
                log::debug(
                    "KeychainVault",
                    &format!("retrieve '{}' from '{}': no entry", key, collection),
                );
                Ok(None)
            }
            Err(e) => {
                log::error(
                    "KeychainVault",
                    &format!("retrieve '{}' from '{}' failed: {:?}", key, collection, e),
                );
                Err(VaultError::store_access(e))
            }
        }
    }

    fn store(&self, collection: &str, key: &str, value: &str) -> VaultResult<()> {
        let entry = self.entry(collection, key)?;
        entry.set_password(value).map_err(|e| {
            log::error(
                "KeychainVault",
                &format!("store '{}' in '{}' failed: {:?}", key, collection, e),
            );
            VaultError::store_access(e)
        })?;
        log::debug(
            "KeychainVault",
            &format!(
                "store '{}' in '{}': ok, value len={}",
                key,
                collection,
                value.len()
            ),
        );

        if key != KEY_INDEX_ENTRY {
            let mut index = self.read_index(collection)?;
            if !index.iter().any(|k| k == key) {
                index.push(key.to_string());
                self.write_index(collection, &index)?;
            }
        }
        Ok(())
    }

    fn remove(&self, collection: &str, key: &str) -> VaultResult<()> {
        let entry = self.entry(collection, key)?;
        match entry.delete_credential() {
            Ok(()) => {}
            // Already gone, nothing to do
            Err(keyring::Error::NoEntry) => {}
            Err(e) => {
                log::error(
                    "KeychainVault",
                    &format!("remove '{}' from '{}' failed: {:?}", key, collection, e),
                );
                return Err(VaultError::store_access(e));
            }
        }

        if key != KEY_INDEX_ENTRY {
            let mut index = self.read_index(collection)?;
            if index.iter().any(|k| k == key) {
                index.retain(|k| k != key);
                self.write_index(collection, &index)?;
            }
        }
        Ok(())
    }

    fn keys(&self, collection: &str) -> VaultResult<Vec<String>> {
        let mut keys = self.read_index(collection)?;
        keys.retain(|k| k != KEY_INDEX_ENTRY);
        Ok(keys)
    }
}
