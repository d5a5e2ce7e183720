//! SensInfo Core
//!
//! Runtime-agnostic secure key/value storage over the operating system's
//! credential vault. This crate provides the core functionality that can
//! be used from any environment (Node.js via napi-rs, native CLI, etc.);
//! the embedding runtime only adds the async call boundary.
//!
//! ## Storage model
//!
//! Records are `(collection, key) -> value` entries owned by the
//! platform vault. The [`vault::SensitiveInfo`] adapter validates keys,
//! resolves the collection from per-call options, and maps every outcome
//! into a small fixed error taxonomy:
//!
//! ```
//! use sensinfo_core::vault::{SensitiveInfo, MemoryVault, AccessOptions};
//! use std::sync::Arc;
//!
//! let info = SensitiveInfo::with_vault(Arc::new(MemoryVault::new()));
//! let opts = AccessOptions::default();
//!
//! info.set_item("token", "abc123", &opts)?;
//! assert_eq!(info.get_item("token", &opts)?, "abc123");
//! # Ok::<(), sensinfo_core::vault::VaultError>(())
//! ```

pub mod logging;
pub mod vault;

// Re-export commonly used types
pub use vault::{
    create_vault, has_vault, list_vaults, register_vault, AccessOptions, KeychainVault,
    MemoryVault, SensitiveInfo, Vault, VaultError, VaultResult, DEFAULT_COLLECTION,
};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};
