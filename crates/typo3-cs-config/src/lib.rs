//! typo3-cs-config: PHP-CS-Fixer compatible configuration model
//!
//! This crate holds the configuration object that PHP-CS-Fixer (and
//! `rustor-fixer`) consume: a named, ordered rule set, the risky flag, the
//! file finder and whitespace settings. It does not check or fix any code;
//! rule names and options are passed through unvalidated and are the
//! consuming tool's concern.
//!
//! # Example
//!
//! ```
//! use typo3_cs_config::{Config, RuleSet, RuleValue};
//!
//! let mut rules = RuleSet::new();
//! rules.insert("@PSR12", true);
//! rules.insert("array_syntax", RuleSet::from_iter([("syntax", "short")]));
//!
//! let mut config = Config::new("project");
//! config.set_risky_allowed(true).set_rules(rules);
//! config.finder_mut().exclude(["vendor"]);
//!
//! assert!(config.is_rule_enabled("array_syntax"));
//! assert_eq!(config.rule("@PSR12"), Some(&RuleValue::Bool(true)));
//! assert!(config.render_php().contains("'array_syntax' => ['syntax' => 'short'],"));
//! ```

mod config;
mod error;
mod finder;
mod value;
mod whitespace;

pub use config::{Config, DEFAULT_CONFIG_NAME};
pub use error::ConfigError;
pub use finder::Finder;
pub use value::{php_quote, RuleSet, RuleValue};
pub use whitespace::{IndentStyle, LineEnding, WhitespaceConfig};
