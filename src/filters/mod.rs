//! Named string filters for template engines
//!
//! A [`FilterRegistry`] is a read-only lookup table from filter name to a
//! plain function pointer. The default registry is built once per process
//! and shared; custom registries come from a [`KitConfig`].

pub mod builtin;
pub mod template;

use crate::config::{KitConfig, Profile, is_valid_filter_name};
use crate::core::error::{CasekitError, Result};
use crate::core::value::HostValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Signature shared by every filter
pub type FilterFn = fn(&HostValue, &FilterArgs<'_>) -> HostValue;

/// Registry-wide settings handed to every filter call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Longest string `isAcronym` accepts
    pub acronym_max_len: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            acronym_max_len: crate::config::DEFAULT_ACRONYM_MAX_LEN,
        }
    }
}

impl From<&KitConfig> for FilterOptions {
    fn from(config: &KitConfig) -> Self {
        Self {
            acronym_max_len: config.acronym_max_len,
        }
    }
}

/// Arguments of a single filter invocation
#[derive(Debug, Clone, Copy)]
pub struct FilterArgs<'a> {
    /// Arguments in the order of the entry's declared params
    pub positional: &'a [HostValue],
    pub options: &'a FilterOptions,
}

impl<'a> FilterArgs<'a> {
    pub fn new(positional: &'a [HostValue], options: &'a FilterOptions) -> Self {
        Self {
            positional,
            options,
        }
    }

    /// Positional argument `index`, if present
    pub fn get(&self, index: usize) -> Option<&'a HostValue> {
        self.positional.get(index)
    }

    /// Positional argument `index`, if present and a string
    pub fn string(&self, index: usize) -> Option<&'a str> {
        self.get(index).and_then(HostValue::as_string)
    }
}

/// Broad category of a filter, used to select profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    /// camel, pascal, snake, kebab
    Case,
    /// constant, dot, path, sentence, header
    ExtendedCase,
    Text,
    Inflection,
    Collection,
}

impl FilterGroup {
    /// Whether filters of this group belong to `profile`
    pub fn in_profile(self, profile: Profile) -> bool {
        match profile {
            Profile::Full => true,
            Profile::Minimal => matches!(
                self,
                FilterGroup::Case | FilterGroup::Text | FilterGroup::Inflection
            ),
        }
    }
}

/// One filter and every name it answers to
#[derive(Clone, Copy)]
pub struct FilterEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub group: FilterGroup,
    /// Names of the arguments the filter reads, in positional order
    pub params: &'static [&'static str],
    pub func: FilterFn,
}

impl FilterEntry {
    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        group: FilterGroup,
        func: FilterFn,
    ) -> Self {
        Self {
            name,
            aliases,
            group,
            params: &[],
            func,
        }
    }

    pub const fn with_params(mut self, params: &'static [&'static str]) -> Self {
        self.params = params;
        self
    }

    /// Canonical name followed by aliases
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let aliases = self.aliases;
        std::iter::once(self.name).chain(aliases.iter().copied())
    }
}

impl fmt::Debug for FilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEntry")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("group", &self.group)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Lookup table from filter name to implementation
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    entries: HashMap<String, FilterEntry>,
    options: FilterOptions,
    profile: Profile,
}

impl FilterRegistry {
    /// Built-in filters for `profile`
    pub fn builtin(profile: Profile, options: FilterOptions) -> Self {
        let mut entries = HashMap::new();
        for entry in builtin::BUILTINS
            .iter()
            .filter(|e| e.group.in_profile(profile))
        {
            for name in entry.names() {
                entries.insert(name.to_string(), *entry);
            }
        }

        tracing::debug!(profile = ?profile, filters = entries.len(), "filter registry built");

        Self {
            entries,
            options,
            profile,
        }
    }

    /// Registry described by `config`, including its aliases
    ///
    /// Aliases must be valid filter names, must not shadow an existing name
    /// and must point at a filter present in the selected profile.
    pub fn from_config(config: &KitConfig) -> Result<Self> {
        let mut registry = Self::builtin(config.profile, FilterOptions::from(config));

        for (alias, target) in &config.aliases {
            let invalid = |reason: String| CasekitError::InvalidAlias {
                alias: alias.clone(),
                reason,
            };

            if !is_valid_filter_name(alias) {
                return Err(invalid("not a valid filter name".to_string()));
            }
            if registry.contains(alias) {
                return Err(invalid("name is already registered".to_string()));
            }
            let entry = *registry
                .get(target)
                .ok_or_else(|| invalid(format!("unknown target filter '{}'", target)))?;

            registry.entries.insert(alias.clone(), entry);
        }

        Ok(registry)
    }

    /// The process-wide registry: full profile, default options
    pub fn global() -> &'static FilterRegistry {
        static GLOBAL: OnceLock<FilterRegistry> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::builtin(Profile::Full, FilterOptions::default()))
    }

    pub fn get(&self, name: &str) -> Option<&FilterEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered names (aliases included)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every (name, entry) pair, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FilterEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Run the filter registered as `name`
    pub fn apply(&self, name: &str, value: &HostValue, args: &[HostValue]) -> Result<HostValue> {
        let entry = self
            .get(name)
            .ok_or_else(|| CasekitError::UnknownFilter(name.to_string()))?;
        Ok((entry.func)(value, &FilterArgs::new(args, &self.options)))
    }
}
