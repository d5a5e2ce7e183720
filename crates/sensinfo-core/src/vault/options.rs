//! Per-call options and collection name resolution

use serde::{Deserialize, Serialize};

/// Collection used when the caller does not name one
pub const DEFAULT_COLLECTION: &str = "shared_preferences";

/// Options accepted by every adapter operation
///
/// One field is recognized: `sharedPreferencesName`, the vault
/// collection (namespace) the operation runs against. Anything else in
/// an options bag is ignored, and a missing or wrong-typed field falls
/// back to [`DEFAULT_COLLECTION`] — malformed options are never an
/// error.
///
/// # Example
///
/// ```
/// use sensinfo_core::vault::{AccessOptions, DEFAULT_COLLECTION};
///
/// let opts = AccessOptions::default();
/// assert_eq!(opts.collection(), DEFAULT_COLLECTION);
///
/// let opts = AccessOptions::with_collection("myapp");
/// assert_eq!(opts.collection(), "myapp");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessOptions {
    /// Collection name; `None` means the default
    pub shared_preferences_name: Option<String>,
}

impl AccessOptions {
    /// Options targeting a specific collection
    pub fn with_collection(name: impl Into<String>) -> Self {
        Self {
            shared_preferences_name: Some(name.into()),
        }
    }

    /// Resolve the collection this call operates on
    pub fn collection(&self) -> &str {
        self.shared_preferences_name
            .as_deref()
            .unwrap_or(DEFAULT_COLLECTION)
    }

    /// Build options from a loosely-typed JSON bag
    ///
    /// Hosts that pass options as untyped objects get the original
    /// lookup semantics: a string `sharedPreferencesName` is honored,
    /// everything else (absent field, wrong type, unknown fields, or a
    /// non-object value) silently resolves to defaults.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let shared_preferences_name = value
            .get("sharedPreferencesName")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        Self {
            shared_preferences_name,
        }
    }
}
