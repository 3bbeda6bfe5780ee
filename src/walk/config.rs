//! Walk configuration
//!
//! [`WalkConfig`] is built with `Default` plus `with_*` methods, or
//! deserialized from a JSON options object:
//!
//! ```rust
//! use sajj::{Mode, WalkConfig};
//!
//! let config = WalkConfig::from_json(r#"{"mode":"JavaScript","distinguishKeysValues":true}"#).unwrap();
//! assert_eq!(config.mode, Mode::Extended);
//! assert!(config.distinguish_key_value);
//! assert!(config.iterate_own_only);
//! ```

use super::error::{WalkError, WalkResult};
use serde::{Deserialize, Serialize};

/// Default maximum nesting depth for walks and decodes
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Which value kinds are admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// JSON kinds only
    #[default]
    #[serde(rename = "JSON", alias = "Strict")]
    Strict,
    /// JSON kinds plus the JavaScript-only kinds
    #[serde(rename = "JavaScript", alias = "Extended")]
    Extended,
}

/// Configuration fixed at walker construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkConfig {
    /// Admitted value kinds
    pub mode: Mode,

    /// Enumerate own keys only (otherwise prototype keys follow)
    pub iterate_own_only: bool,

    /// Call key and value handlers separately for each entry
    #[serde(alias = "distinguishKeysValues")]
    pub distinguish_key_value: bool,

    /// Visit object entries (otherwise only the object wrappers are emitted)
    pub iterate_objects: bool,

    /// Visit array elements (otherwise only the array wrappers are emitted)
    pub iterate_arrays: bool,

    /// Maximum nesting depth before `RecursionLimitExceeded`
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Strict,
            iterate_own_only: true,
            distinguish_key_value: false,
            iterate_objects: true,
            iterate_arrays: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WalkConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config admitting the JavaScript-only kinds
    pub fn extended() -> Self {
        Self::default().with_mode(Mode::Extended)
    }

    /// Parse from a JSON options object; missing fields take their defaults
    pub fn from_json(json: &str) -> WalkResult<Self> {
        let config: WalkConfig =
            serde_json::from_str(json).map_err(|e| WalkError::InvalidConfig {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict enumeration to own keys, or include prototype keys
    pub fn with_iterate_own_only(mut self, own_only: bool) -> Self {
        self.iterate_own_only = own_only;
        self
    }

    /// Select distinguished (true) or combined (false) key/value dispatch
    pub fn with_distinguish_key_value(mut self, distinguish: bool) -> Self {
        self.distinguish_key_value = distinguish;
        self
    }

    /// Toggle visiting object entries
    pub fn with_iterate_objects(mut self, iterate: bool) -> Self {
        self.iterate_objects = iterate;
        self
    }

    /// Toggle visiting array elements
    pub fn with_iterate_arrays(mut self, iterate: bool) -> Self {
        self.iterate_arrays = iterate;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Whether the JavaScript-only kinds are admitted
    pub fn is_extended(&self) -> bool {
        self.mode == Mode::Extended
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> WalkResult<()> {
        if self.max_depth == 0 {
            return Err(WalkError::InvalidConfig {
                reason: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
