//! Node.js bindings for SensInfo via napi-rs

#![deny(clippy::all)]

use napi::bindgen_prelude::*;
use napi_derive::napi;
use std::collections::HashMap;
use std::sync::Arc;

use sensinfo_core::vault::{
    create_vault as core_create_vault, list_vaults as core_list_vaults,
    AccessOptions as CoreAccessOptions, SensitiveInfo as CoreSensitiveInfo,
};

// ============================================================================
// Options
// ============================================================================

/// Per-call options; `sharedPreferencesName` selects the vault collection
/// (default: `"shared_preferences"`). Unknown fields are ignored.
#[napi(object)]
#[derive(Default)]
pub struct AccessOptions {
    pub shared_preferences_name: Option<String>,
}

impl From<AccessOptions> for CoreAccessOptions {
    fn from(options: AccessOptions) -> Self {
        CoreAccessOptions {
            shared_preferences_name: options.shared_preferences_name,
        }
    }
}

/// Omitted or `null` options mean defaults
fn resolve_options(options: Option<AccessOptions>) -> CoreAccessOptions {
    options.map(Into::into).unwrap_or_default()
}

// ============================================================================
// SensitiveInfo
// ============================================================================

/// Secure key/value storage over the system credential vault
///
/// Every method returns a Promise that resolves with the operation's
/// value or rejects with one of the literal reasons the JS layer
/// matches on: `"key is empty"`, `"key not found"`,
/// `"cannot access datastore"`.
#[napi]
pub struct SensitiveInfo {
    inner: Arc<CoreSensitiveInfo>,
}

#[napi]
impl SensitiveInfo {
    /// Create an instance over a named vault backend
    ///
    /// Known names come from `listVaults()`; omitting the argument
    /// selects the system keychain.
    #[napi(constructor)]
    pub fn new(vault: Option<String>) -> Result<Self> {
        let inner = match vault {
            Some(name) => {
                let vault = core_create_vault(&name).ok_or_else(|| {
                    Error::from_reason(format!("unknown vault backend: {}", name))
                })?;
                CoreSensitiveInfo::with_vault(vault)
            }
            None => CoreSensitiveInfo::new(),
        };
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    #[napi(getter)]
    pub fn vault_name(&self) -> String {
        self.inner.vault_name().to_string()
    }

    #[napi]
    pub fn is_available(&self) -> bool {
        self.inner.is_available()
    }

    /// Read the value stored under `key`
    #[napi]
    pub async fn get_item(&self, key: String, options: Option<AccessOptions>) -> Result<String> {
        self.inner
            .get_item(&key, &resolve_options(options))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Store `value` under `key`, overwriting any existing record;
    /// resolves with the value that was stored
    #[napi]
    pub async fn set_item(
        &self,
        key: String,
        value: String,
        options: Option<AccessOptions>,
    ) -> Result<String> {
        self.inner
            .set_item(&key, &value, &resolve_options(options))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Delete the record stored under `key`; resolves with the key
    #[napi]
    pub async fn delete_item(&self, key: String, options: Option<AccessOptions>) -> Result<String> {
        self.inner
            .delete_item(&key, &resolve_options(options))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Read every record in the resolved collection as a key→value object
    #[napi]
    pub async fn get_all_items(
        &self,
        options: Option<AccessOptions>,
    ) -> Result<HashMap<String, String>> {
        self.inner
            .get_all_items(&resolve_options(options))
            .map_err(|e| Error::from_reason(e.to_string()))
    }

    /// Whether a biometric sensor is available; always `false` on this
    /// target
    #[napi]
    pub async fn is_sensor_available(&self) -> bool {
        self.inner.is_sensor_available()
    }

    /// Whether any fingerprints are enrolled; always `false` on this
    /// target
    #[napi]
    pub async fn has_enrolled_fingerprints(&self) -> bool {
        self.inner.has_enrolled_fingerprints()
    }

    /// Accepted for API parity with biometric-capable targets; no key
    /// here is bound to biometric enrollment, so this is a no-op
    #[napi]
    pub async fn set_invalidated_by_biometric_enrollment(&self, _invalidated: bool) {}

    /// No biometric prompt ever exists on this target; no-op
    #[napi]
    pub fn cancel_fingerprint_auth(&self) {}
}

// ============================================================================
// Registry Functions
// ============================================================================

#[napi(object)]
pub struct VaultInfo {
    pub name: String,
    pub description: String,
}

/// List the registered vault backends
#[napi]
pub fn list_vaults() -> Vec<VaultInfo> {
    core_list_vaults()
        .into_iter()
        .map(|(name, description)| VaultInfo { name, description })
        .collect()
}

// ============================================================================
// Debug Logging
// ============================================================================

/// Get the path to the debug log file
#[napi]
pub fn get_debug_log_path() -> String {
    sensinfo_core::logging::log_file_path()
        .to_string_lossy()
        .to_string()
}

/// Clear the debug log file
#[napi]
pub fn clear_debug_log() {
    sensinfo_core::logging::clear_log();
}

/// Write a message to the debug log
#[napi]
pub fn debug_log(module: String, message: String) {
    sensinfo_core::logging::info(&module, &message);
}
