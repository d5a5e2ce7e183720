//! Vault registry for discovering and creating backends by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::keychain::KeychainVault;
use super::memory::MemoryVault;
use super::traits::Vault;

/// Factory function type for creating vault backends
pub type VaultFactory = Box<dyn Fn() -> Arc<dyn Vault> + Send + Sync>;

/// Definition of a registered vault backend
pub struct VaultDefinition {
    /// Unique name for this backend
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: VaultFactory,
}

impl std::fmt::Debug for VaultDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of vault backends
static REGISTRY: Lazy<RwLock<HashMap<String, VaultDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        "keychain".to_string(),
        VaultDefinition {
            name: "keychain".to_string(),
            description: "System keychain (macOS Keychain, Windows Credential Manager, Linux Secret Service)"
                .to_string(),
            factory: Box::new(|| Arc::new(KeychainVault::new())),
        },
    );

    map.insert(
        "memory".to_string(),
        VaultDefinition {
            name: "memory".to_string(),
            description: "In-memory storage for testing".to_string(),
            factory: Box::new(|| Arc::new(MemoryVault::new())),
        },
    );

    RwLock::new(map)
});

/// Register a new vault backend type
///
/// # Example
///
/// ```
/// use sensinfo_core::vault::{register_vault, MemoryVault};
/// use std::sync::Arc;
///
/// register_vault(
///     "custom",
///     "My custom vault",
///     Box::new(|| Arc::new(MemoryVault::new())),
/// );
/// ```
pub fn register_vault(name: &str, description: &str, factory: VaultFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(
        name.to_string(),
        VaultDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a vault backend by name
///
/// Returns `None` if the name is not registered.
///
/// # Example
///
/// ```
/// use sensinfo_core::vault::create_vault;
///
/// let vault = create_vault("memory").expect("memory vault should exist");
/// ```
pub fn create_vault(name: &str) -> Option<Arc<dyn Vault>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered vault backends as (name, description) pairs
pub fn list_vaults() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a backend is registered
pub fn has_vault(name: &str) -> bool {
    let registry = REGISTRY.read().unwrap();
    registry.contains_key(name)
}

/// Unregister a vault backend (mainly for testing)
pub fn unregister_vault(name: &str) -> bool {
    let mut registry = REGISTRY.write().unwrap();
    registry.remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vaults_registered() {
        assert!(has_vault("keychain"));
        assert!(has_vault("memory"));
    }

    #[test]
    fn test_create_memory_vault() {
        let vault = create_vault("memory").unwrap();
        assert_eq!(vault.name(), "memory");
    }

    #[test]
    fn test_create_keychain_vault() {
        let vault = create_vault("keychain").unwrap();
        assert_eq!(vault.name(), "keychain");
    }

    #[test]
    fn test_create_unknown_vault() {
        assert!(create_vault("nonexistent_xyz").is_none());
    }

    #[test]
    fn test_list_vaults() {
        let vaults = list_vaults();
        let names: Vec<_> = vaults.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"keychain"));
        assert!(names.contains(&"memory"));
    }

    #[test]
    fn test_register_custom_vault() {
        register_vault(
            "test_custom_vault",
            "A test vault",
            Box::new(|| Arc::new(MemoryVault::new())),
        );

        assert!(has_vault("test_custom_vault"));

        let vault = create_vault("test_custom_vault").unwrap();
        assert_eq!(vault.name(), "memory"); // It's a MemoryVault

        // Clean up
        unregister_vault("test_custom_vault");
    }
}
