//! Configuration loading and management

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Default upper bound for `isAcronym`
pub const DEFAULT_ACRONYM_MAX_LEN: usize = 6;

/// Which filter set a registry exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Every filter, including extended cases and collection helpers
    #[default]
    Full,
    /// Basic case, text and inflection filters only
    Minimal,
}

/// Complete configuration for a filter registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// Filter set to register
    pub profile: Profile,

    /// Longest string (in characters) `isAcronym` accepts
    pub acronym_max_len: usize,

    /// Extra names (alias -> existing filter name)
    pub aliases: BTreeMap<String, String>,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Full,
            acronym_max_len: DEFAULT_ACRONYM_MAX_LEN,
            aliases: BTreeMap::new(),
        }
    }
}

impl KitConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

/// Whether `name` can be used as a filter name
///
/// Names start with a letter or underscore and continue with letters,
/// digits, underscores or hyphens.
pub fn is_valid_filter_name(name: &str) -> bool {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("filter name pattern is valid")
    });
    regex.is_match(name)
}
