//! Runtime configuration and documented game constants
//!
//! Game constants are fixed by the game itself and must match it exactly.
//! Everything in `GearConfig` is a local choice and can be loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{GearError, Result};
use crate::core::types::ItemId;

// === GAME CONSTANTS ===

/// The portable pantogram itself (the configuring item)
pub const PANTOGRAM_ITEM: ItemId = ItemId(9573);

/// The pantogram pants produced by the pantogram (the output item)
///
/// Only one pair can exist at a time, so owning them blocks crafting.
pub const PANTOGRAM_PANTS_ITEM: ItemId = ItemId(9574);

/// Choice adventure number of the pantogram configuration screen
pub const PANTOGRAM_CHOICE: u32 = 1270;

/// Exponent of the sweat -> adventures curve of stillsuit distillate
///
/// Adventures = round(sweat ^ 0.4), so 100 sweat is worth 6 adventures
/// and 600 sweat is worth 13.
pub const DISTILLATE_EXPONENT: f64 = 0.4;

/// Configuration for the command line front end and table loading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Tolerance used when checking that a distribution sums to 1.0
    ///
    /// Each tag contributes 1/n, so accumulated rounding error grows with
    /// the tag count. 1e-9 is generous for the ~10 tags a familiar carries.
    pub weight_tolerance: f64,

    /// Optional TOML file replacing the built-in sacrifice tables
    pub pantogram_tables: Option<PathBuf>,

    /// Optional TOML file replacing the built-in familiar roster
    pub familiar_roster: Option<PathBuf>,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            log_filter: "gearcraft=info".into(),
            weight_tolerance: 1e-9,
            pantogram_tables: None,
            familiar_roster: None,
        }
    }
}

impl GearConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a TOML string and validate it
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: GearConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.weight_tolerance.is_finite() || self.weight_tolerance <= 0.0 {
            return Err(GearError::InvalidConfig(format!(
                "weight_tolerance ({}) must be a positive finite number",
                self.weight_tolerance
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(GearError::InvalidConfig("log_filter must not be empty".into()));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GearConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static GearConfig {
    CONFIG.get_or_init(GearConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GearConfig) -> std::result::Result<(), GearConfig> {
    CONFIG.set(config)
}
