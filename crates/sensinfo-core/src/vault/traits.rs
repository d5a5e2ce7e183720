//! Core trait and error types for vault backends

use thiserror::Error;

/// Errors surfaced by vault operations
///
/// `Display` produces the exact rejection reasons the host scripting
/// layer pattern-matches on, so these strings are part of the public
/// contract and must not change:
///
/// - `EmptyKey` → `"key is empty"`
/// - `NotFound` → `"key not found"`
/// - `StoreAccess` → `"cannot access datastore"`
///
/// `StoreAccess` keeps the underlying platform error as its `source` so
/// diagnostics (logs, `Debug` output, `Error::source` chains) still see
/// the real cause; the boundary only ever sees the generic string.
#[derive(Error, Debug)]
pub enum VaultError {
    /// The caller passed an empty key to an operation that requires one.
    #[error("key is empty")]
    EmptyKey,

    /// No record exists for the key in the resolved collection.
    #[error("key not found")]
    NotFound,

    /// The platform credential store failed.
    #[error("cannot access datastore")]
    StoreAccess(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl VaultError {
    /// Wrap a platform error as a `StoreAccess` failure
    pub fn store_access(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StoreAccess(Box::new(err))
    }
}

pub type VaultResult<T> = Result<T, VaultError>;

/// Trait for credential vault backends
///
/// A backend stores opaque string values addressed by
/// `(collection, key)`, where the collection is a namespace within the
/// vault and the key identifies one record inside it. At most one
/// record exists per pair; storing an existing key overwrites it.
///
/// Implementations:
/// - `KeychainVault`: the OS credential store (production)
/// - `MemoryVault`: in-memory for testing and ephemeral use
///
/// Backends do not validate keys — the adapter rejects empty keys
/// before a backend is ever reached.
pub trait Vault: Send + Sync {
    /// Human-readable name of this backend
    fn name(&self) -> &str;

    /// Check if this backend is usable
    ///
    /// For example, the keychain backend is unavailable on a headless
    /// host without a keychain daemon.
    fn is_available(&self) -> bool {
        true
    }

    /// Read the record at `(collection, key)`
    ///
    /// Returns `Ok(None)` when no record exists; `Err` only for store
    /// failures.
    fn retrieve(&self, collection: &str, key: &str) -> VaultResult<Option<String>>;

    /// Create or overwrite the record at `(collection, key)`
    fn store(&self, collection: &str, key: &str, value: &str) -> VaultResult<()>;

    /// Remove the record at `(collection, key)`
    ///
    /// Removing an absent record is not an error; `Err` only for store
    /// failures.
    fn remove(&self, collection: &str, key: &str) -> VaultResult<()>;

    /// Enumerate the keys of every record in `collection`
    ///
    /// Order is backend-defined and not guaranteed stable across calls.
    fn keys(&self, collection: &str) -> VaultResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_matches_boundary_strings() {
        assert_eq!(VaultError::EmptyKey.to_string(), "key is empty");
        assert_eq!(VaultError::NotFound.to_string(), "key not found");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        assert_eq!(
            VaultError::store_access(io).to_string(),
            "cannot access datastore"
        );
    }

    #[test]
    fn test_store_access_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err = VaultError::store_access(io);
        let source = err.source().expect("source should be preserved");
        assert!(source.to_string().contains("locked"));
    }
}
