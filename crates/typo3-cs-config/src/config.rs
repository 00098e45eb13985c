//! The configuration object handed to the fixer
//!
//! [`Config`] follows the shape of `PhpCsFixer\Config`: a name, a rule set,
//! the risky flag, a finder and whitespace settings. Setters return
//! `&mut Self` so calls can be chained the way PHP configuration scripts do.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::finder::Finder;
use crate::value::{php_quote, RuleSet, RuleValue};
use crate::whitespace::{IndentStyle, LineEnding, WhitespaceConfig};

/// Name used by `PhpCsFixer\Config` when none is given
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// PHP-CS-Fixer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    name: String,
    rules: RuleSet,
    risky_allowed: bool,
    finder: Finder,
    whitespace: WhitespaceConfig,
    cache_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_NAME)
    }
}

impl Config {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: RuleSet::new(),
            risky_allowed: false,
            finder: Finder::default(),
            whitespace: WhitespaceConfig::default(),
            cache_file: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Replace the whole rule set
    pub fn set_rules(&mut self, rules: RuleSet) -> &mut Self {
        debug!(config = %self.name, count = rules.len(), "setting rules");
        self.rules = rules;
        self
    }

    pub fn risky_allowed(&self) -> bool {
        self.risky_allowed
    }

    pub fn set_risky_allowed(&mut self, allowed: bool) -> &mut Self {
        self.risky_allowed = allowed;
        self
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    pub fn finder_mut(&mut self) -> &mut Finder {
        &mut self.finder
    }

    pub fn set_finder(&mut self, finder: Finder) -> &mut Self {
        self.finder = finder;
        self
    }

    pub fn whitespace(&self) -> &WhitespaceConfig {
        &self.whitespace
    }

    pub fn set_indent(&mut self, indent: IndentStyle) -> &mut Self {
        self.whitespace.indent = indent;
        self
    }

    pub fn set_line_ending(&mut self, line_ending: LineEnding) -> &mut Self {
        self.whitespace.line_ending = line_ending;
        self
    }

    pub fn cache_file(&self) -> Option<&str> {
        self.cache_file.as_deref()
    }

    pub fn set_cache_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.cache_file = Some(path.into());
        self
    }

    /// Check if a specific rule is enabled
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        self.rules.get(name).map(RuleValue::is_enabled).unwrap_or(false)
    }

    /// Get configuration for a specific rule
    pub fn rule(&self, name: &str) -> Option<&RuleValue> {
        self.rules.get(name)
    }

    /// Render as a `.php-cs-fixer.dist.php` script.
    ///
    /// Rules are written in insertion order, so the output is stable for a
    /// given configuration.
    pub fn render_php(&self) -> String {
        let mut out = String::new();
        out.push_str("<?php\n\ndeclare(strict_types=1);\n\n");

        out.push_str("$finder = PhpCsFixer\\Finder::create()\n");
        if self.finder.paths.is_empty() {
            out.push_str("    ->in(__DIR__)\n");
        } else {
            let paths: Vec<String> = self
                .finder
                .paths
                .iter()
                .map(|p| format!("__DIR__ . {}", php_quote(&format!("/{}", p.trim_start_matches('/')))))
                .collect();
            let _ = writeln!(out, "    ->in([{}])", paths.join(", "));
        }
        for pattern in &self.finder.name_patterns {
            let _ = writeln!(out, "    ->name({})", php_quote(pattern));
        }
        for pattern in &self.finder.not_name_patterns {
            let _ = writeln!(out, "    ->notName({})", php_quote(pattern));
        }
        if !self.finder.exclude.is_empty() {
            let excluded: Vec<String> = self.finder.exclude.iter().map(|e| php_quote(e)).collect();
            let _ = writeln!(out, "    ->exclude([{}])", excluded.join(", "));
        }
        out.push_str(";\n\n");

        let _ = writeln!(out, "return (new PhpCsFixer\\Config({}))", php_quote(&self.name));
        let _ = writeln!(out, "    ->setRiskyAllowed({})", self.risky_allowed);
        out.push_str("    ->setRules([\n");
        for (name, value) in self.rules.iter() {
            let _ = writeln!(out, "        {} => {},", php_quote(name), value.to_php());
        }
        out.push_str("    ])\n");
        let _ = writeln!(out, "    ->setIndent({})", self.whitespace.indent.php_literal());
        let _ = writeln!(out, "    ->setLineEnding({})", self.whitespace.line_ending.php_literal());
        if let Some(cache_file) = &self.cache_file {
            let _ = writeln!(out, "    ->setCacheFile({})", php_quote(cache_file));
        }
        out.push_str("    ->setFinder($finder);\n");

        out
    }

    /// Write the rendered PHP configuration to `path`
    pub fn write_php(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        debug!(config = %self.name, path = %path.display(), "writing configuration");
        std::fs::write(path, self.render_php()).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pretty-printed JSON dump of the configuration
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::default();
        assert_eq!(config.name(), DEFAULT_CONFIG_NAME);
        assert!(config.rules().is_empty());
        assert!(!config.risky_allowed());
        assert!(config.finder().excluded().is_empty());
        assert_eq!(config.cache_file(), None);
    }

    #[test]
    fn test_is_rule_enabled() {
        let mut config = Config::new("test");
        let rules: RuleSet = [("single_quote", true), ("yoda_style", false)].into_iter().collect();
        config.set_rules(rules);

        assert!(config.is_rule_enabled("single_quote"));
        assert!(!config.is_rule_enabled("yoda_style"));
        assert!(!config.is_rule_enabled("missing"));
    }

    #[test]
    fn test_render_php() {
        let mut config = Config::new("Demo");
        let mut rules = RuleSet::new();
        rules.insert("@PSR12", true);
        rules.insert("concat_space", RuleSet::from_iter([("spacing", "one")]));
        config
            .set_rules(rules)
            .set_risky_allowed(true)
            .set_cache_file(".php-cs-fixer.cache");
        config.finder_mut().in_dir("src").exclude(["vendor", "var"]);

        let php = config.render_php();
        let expected = r#"<?php

declare(strict_types=1);

$finder = PhpCsFixer\Finder::create()
    ->in([__DIR__ . '/src'])
    ->name('*.php')
    ->exclude(['vendor', 'var'])
;

return (new PhpCsFixer\Config('Demo'))
    ->setRiskyAllowed(true)
    ->setRules([
        '@PSR12' => true,
        'concat_space' => ['spacing' => 'one'],
    ])
    ->setIndent('    ')
    ->setLineEnding("\n")
    ->setCacheFile('.php-cs-fixer.cache')
    ->setFinder($finder);
"#;
        assert_eq!(php, expected);
    }

    #[test]
    fn test_render_php_is_stable() {
        let mut config = Config::new("Demo");
        config.set_rules([("b", true), ("a", true)].into_iter().collect());
        assert_eq!(config.render_php(), config.render_php());
        let php = config.render_php();
        assert!(php.find("'b' => true").unwrap() < php.find("'a' => true").unwrap());
    }

    #[test]
    fn test_write_php() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".php-cs-fixer.dist.php");
        let config = Config::new("Demo");

        config.write_php(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), config.render_php());
    }

    #[test]
    fn test_write_php_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::new("Demo")
            .write_php(dir.path().join("missing/config.php"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Write { .. }));
    }

    #[test]
    fn test_to_json() {
        let mut config = Config::new("Demo");
        config.set_rules([("single_quote", true)].into_iter().collect());
        let json: serde_json::Value = serde_json::from_str(&config.to_json().unwrap()).unwrap();

        assert_eq!(json["name"], "Demo");
        assert_eq!(json["rules"]["single_quote"], true);
        assert_eq!(json["finder"]["name_patterns"][0], "*.php");
    }
}
