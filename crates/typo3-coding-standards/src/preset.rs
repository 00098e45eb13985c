//! The TYPO3 preset on top of [`Config`]

use std::ops::{Deref, DerefMut};
use std::path::Path;

use tracing::debug;
use typo3_cs_config::{Config, ConfigError, RuleSet};

use crate::header::{header_comment_rule, render_header, DEFAULT_HEADER_LINE, HEADER_RULE};
use crate::rules::{EXCLUDED_DIRECTORIES, TYPO3_RULES};

/// Configuration name used by [`CsFixerConfig::create`]
pub const DEFAULT_NAME: &str = "TYPO3";

/// PHP-CS-Fixer configuration following the TYPO3 coding standards.
///
/// Wraps a [`Config`] and only changes it through its public setters, so
/// the same rules apply as for any hand-written configuration: rule names
/// and options are not validated here, none of the operations can fail.
///
/// ```
/// use typo3_coding_standards::CsFixerConfig;
/// use typo3_cs_config::RuleSet;
///
/// let mut config = CsFixerConfig::create();
/// config
///     .add_rules(RuleSet::from_iter([("single_quote", false)]))
///     .set_header("This file is part of my extension.", false);
///
/// assert!(!config.is_rule_enabled("single_quote"));
/// assert!(config.is_rule_enabled("header_comment"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsFixerConfig {
    config: Config,
}

impl Default for CsFixerConfig {
    fn default() -> Self {
        Self::create()
    }
}

impl CsFixerConfig {
    /// Empty configuration with the given name and no TYPO3 defaults applied
    pub fn new(name: impl Into<String>) -> Self {
        Self { config: Config::new(name) }
    }

    /// TYPO3 configuration named [`DEFAULT_NAME`]
    pub fn create() -> Self {
        Self::create_named(DEFAULT_NAME)
    }

    /// TYPO3 configuration: risky rules allowed, the TYPO3 rule set, and
    /// [`EXCLUDED_DIRECTORIES`] skipped by the finder
    pub fn create_named(name: impl Into<String>) -> Self {
        let mut preset = Self::new(name);
        preset
            .config
            .set_risky_allowed(true)
            .set_rules(TYPO3_RULES.clone());
        preset.config.finder_mut().exclude(EXCLUDED_DIRECTORIES);

        debug!(config = %preset.config.name(), rules = TYPO3_RULES.len(), "created TYPO3 configuration");
        preset
    }

    /// Deep-merge `rules` into the current rule set.
    ///
    /// Nested option maps are merged key by key; any other value (including
    /// lists) replaces what was there.
    pub fn add_rules(&mut self, rules: RuleSet) -> &mut Self {
        debug!(config = %self.config.name(), count = rules.len(), "adding rules");
        let mut merged = self.config.rules().clone();
        merged.merge_recursive(rules);
        self.config.set_rules(merged);
        self
    }

    /// [`CsFixerConfig::add_rules`] with overrides read from a TOML file
    pub fn add_rules_from_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ConfigError> {
        let rules = RuleSet::from_toml_file(path)?;
        Ok(self.add_rules(rules))
    }

    /// Install the `header_comment` rule.
    ///
    /// With `replace_all` unset, `header` fills the placeholder of the TYPO3
    /// license template; otherwise it is used verbatim. An existing
    /// `header_comment` entry is replaced.
    pub fn set_header(&mut self, header: &str, replace_all: bool) -> &mut Self {
        let header = render_header(header, replace_all);
        debug!(config = %self.config.name(), replace_all, "setting header");

        let mut rules = self.config.rules().clone();
        rules.insert(HEADER_RULE, header_comment_rule(header));
        self.config.set_rules(rules);
        self
    }

    /// [`CsFixerConfig::set_header`] with the TYPO3 CMS header line
    pub fn set_default_header(&mut self) -> &mut Self {
        self.set_header(DEFAULT_HEADER_LINE, false)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}

impl Deref for CsFixerConfig {
    type Target = Config;

    fn deref(&self) -> &Config {
        &self.config
    }
}

impl DerefMut for CsFixerConfig {
    fn deref_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl From<CsFixerConfig> for Config {
    fn from(preset: CsFixerConfig) -> Self {
        preset.config
    }
}
