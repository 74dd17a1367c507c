//! Configuration for the demonstration driver.
//!
//! This module defines the configuration consumed by the `mantissa` binary.
//! It provides:
//! 1. **Defaults:** Output options and the built-in scenario set.
//! 2. **Structures:** [`Config`] with [`GeneralConfig`] output settings and a
//!    list of [`Scenario`]s.
//! 3. **Loading:** [`Config::from_json`] and [`Config::load`].
//!
//! Every field is optional in JSON; anything omitted falls back to the
//! defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scenario::{Op, Scenario};

/// Default configuration constants for the driver.
mod defaults {
    /// Print raw bit patterns next to the scientific strings.
    pub const SHOW_BITS: bool = false;

    /// Print both operands before each result.
    pub const SHOW_OPERANDS: bool = true;

    /// `3.99999976158142089844`, the largest binary32 value below 4.
    pub const JUST_BELOW_FOUR: u32 = 0x407F_FFFF;

    /// Native square of [`JUST_BELOW_FOUR`]: `16 - 2^-19`.
    pub const JUST_BELOW_FOUR_SQUARED: u32 = 0x417F_FFFE;
}

/// Root configuration structure.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mantissa_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.show_bits);
/// assert!(!config.scenarios.is_empty());
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mantissa_core::config::Config;
/// use mantissa_core::Op;
///
/// let json = r#"{
///     "general": { "show_bits": true },
///     "scenarios": [
///         { "name": "regression", "lhs": 4.2, "op": "*", "rhs": 10.0, "expected": 42.0 },
///         { "lhs": 2.1, "op": "add", "rhs": 8.1 }
///     ]
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.show_bits);
/// assert!(config.general.show_operands);
/// assert_eq!(config.scenarios.len(), 2);
/// assert_eq!(config.scenarios[0].op, Op::Mul);
/// assert_eq!(config.scenarios[1].expected, None);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Scenarios to run, in order
    #[serde(default = "Config::default_scenarios")]
    pub scenarios: Vec<Scenario>,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// The built-in scenarios: the driver's sample sums plus the regression
    /// checks for each operation.
    pub fn default_scenarios() -> Vec<Scenario> {
        let just_below_four = f32::from_bits(defaults::JUST_BELOW_FOUR);
        vec![
            Scenario::new(2.1, Op::Add, 2.1)
                .expecting(4.2)
                .named("sum of equals"),
            Scenario::new(2.1, Op::Add, 8.1).named("sum across exponents"),
            Scenario::new(-2.4, Op::Add, -2.6)
                .expecting(-5.0)
                .named("sum of negatives"),
            Scenario::new(2.1, Op::Add, -4.2)
                .expecting(-2.1)
                .named("add positive and negative"),
            Scenario::new(-1.0, Op::Add, 1.0)
                .expecting(0.0)
                .named("add to zero"),
            Scenario::new(-4.2, Op::Sub, -2.1)
                .expecting(-2.1)
                .named("subtract negatives"),
            Scenario::new(-2.1, Op::Sub, 2.1)
                .expecting(-4.2)
                .named("subtract positive from negative"),
            Scenario::new(4.20, Op::Mul, 10.0)
                .expecting(42.0)
                .named("multiply 4.2 by 10"),
            Scenario::new(-4.20, Op::Mul, -10.0)
                .expecting(42.0)
                .named("multiply negatives"),
            Scenario::new(-42.0, Op::Mul, -10.0)
                .expecting(420.0)
                .named("multiply exact negatives"),
            Scenario::new(just_below_four, Op::Mul, just_below_four)
                .expecting(f32::from_bits(defaults::JUST_BELOW_FOUR_SQUARED))
                .named("square just below four"),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scenarios: Self::default_scenarios(),
        }
    }
}

/// Output settings for the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print raw bit patterns next to the scientific strings
    #[serde(default = "GeneralConfig::default_show_bits")]
    pub show_bits: bool,

    /// Print both operands before each result
    #[serde(default = "GeneralConfig::default_show_operands")]
    pub show_operands: bool,
}

impl GeneralConfig {
    /// Returns the default for [`GeneralConfig::show_bits`].
    const fn default_show_bits() -> bool {
        defaults::SHOW_BITS
    }

    /// Returns the default for [`GeneralConfig::show_operands`].
    const fn default_show_operands() -> bool {
        defaults::SHOW_OPERANDS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_bits: defaults::SHOW_BITS,
            show_operands: defaults::SHOW_OPERANDS,
        }
    }
}
