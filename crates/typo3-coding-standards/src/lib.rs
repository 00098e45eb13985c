//! typo3-coding-standards: TYPO3 preset for PHP-CS-Fixer compatible fixers
//!
//! Provides the TYPO3 rule set and a factory for a ready-to-use
//! configuration, plus helpers to merge project specific rules and to
//! install the TYPO3 license header. Checking and fixing files is left to
//! the tool that consumes the configuration.
//!
//! # Example
//!
//! ```
//! use typo3_coding_standards::CsFixerConfig;
//!
//! let mut config = CsFixerConfig::create();
//! config.set_default_header();
//! config.finder_mut().in_dir("Classes");
//!
//! let php = config.render_php();
//! assert!(php.contains("->exclude(['vendor', 'typo3temp', 'var', '.build'])"));
//! ```

pub mod header;
pub mod rules;
mod preset;

pub use header::{render_header, DEFAULT_HEADER, DEFAULT_HEADER_LINE};
pub use preset::{CsFixerConfig, DEFAULT_NAME};
pub use rules::{EXCLUDED_DIRECTORIES, TYPO3_RULES};
