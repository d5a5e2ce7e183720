//! Vault abstraction and the secure-storage adapter
//!
//! This module provides:
//! - `Vault` trait for credential vault backends
//! - Built-in backends: `KeychainVault` (platform store), `MemoryVault`
//! - `SensitiveInfo`, the adapter hosts call: key validation, collection
//!   resolution, and the three-outcome error taxonomy
//! - A registry for discovering and creating backends by name

mod adapter;
mod keychain;
mod memory;
mod options;
mod registry;
mod traits;

pub use adapter::SensitiveInfo;
pub use keychain::KeychainVault;
pub use memory::MemoryVault;
pub use options::{AccessOptions, DEFAULT_COLLECTION};
pub use registry::{
    create_vault, has_vault, list_vaults, register_vault, unregister_vault, VaultDefinition,
    VaultFactory,
};
pub use traits::{Vault, VaultError, VaultResult};
