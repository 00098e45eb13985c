//! File finder configuration
//!
//! Mirrors `PhpCsFixer\Finder`: which directories are scanned, which
//! directory names are skipped and which file names are picked up. The
//! traversal itself belongs to the consuming tool; [`Finder::accepts`] only
//! answers whether a given path would be selected.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Finder configuration for file discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finder {
    /// Directories to scan, relative to the configuration file
    pub paths: Vec<String>,
    /// Directory names to skip
    pub exclude: Vec<String>,
    /// File name patterns to include
    pub name_patterns: Vec<String>,
    /// File name patterns to ignore
    pub not_name_patterns: Vec<String>,
}

impl Default for Finder {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            name_patterns: vec!["*.php".to_string()],
            not_name_patterns: Vec::new(),
        }
    }
}

impl Finder {
    pub fn in_dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.paths.push(path.into());
        self
    }

    /// Skip directories with these names; already excluded names are ignored
    pub fn exclude<I, S>(&mut self, dirs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.exclude.contains(&dir) {
                self.exclude.push(dir);
            }
        }
        self
    }

    pub fn name(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.name_patterns.push(pattern.into());
        self
    }

    pub fn not_name(&mut self, pattern: impl Into<String>) -> &mut Self {
        self.not_name_patterns.push(pattern.into());
        self
    }

    pub fn excluded(&self) -> &[String] {
        &self.exclude
    }

    /// Whether any directory of `path` is excluded.
    ///
    /// `path` is taken relative to one of the scanned directories.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let mut dirs = path.components().collect::<Vec<_>>();
        dirs.pop();
        dirs.iter().any(|component| match component {
            Component::Normal(name) => self
                .exclude
                .iter()
                .any(|excluded| name.to_str() == Some(excluded.as_str())),
            _ => false,
        })
    }

    /// Whether the file at `path` would be selected
    pub fn accepts(&self, path: &Path) -> bool {
        if self.is_excluded(path) {
            return false;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };

        let matches = |pattern: &String| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(file_name))
                .unwrap_or(false)
        };

        self.name_patterns.iter().any(matches) && !self.not_name_patterns.iter().any(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_deduplicates() {
        let mut finder = Finder::default();
        finder.exclude(["vendor", "var"]).exclude(vec!["vendor".to_string()]);
        assert_eq!(finder.excluded(), &["vendor", "var"]);
    }

    #[test]
    fn test_is_excluded_matches_directory_components() {
        let mut finder = Finder::default();
        finder.exclude(["vendor", ".build"]);

        assert!(finder.is_excluded(Path::new("vendor/foo/Bar.php")));
        assert!(finder.is_excluded(Path::new("packages/x/.build/Cache.php")));
        assert!(!finder.is_excluded(Path::new("src/Vendor.php")));
        // a file named like an excluded directory is not excluded
        assert!(!finder.is_excluded(Path::new("src/vendor")));
    }

    #[test]
    fn test_accepts() {
        let mut finder = Finder::default();
        finder.exclude(["var"]).not_name("*.generated.php");

        assert!(finder.accepts(Path::new("src/Controller.php")));
        assert!(!finder.accepts(Path::new("src/README.md")));
        assert!(!finder.accepts(Path::new("var/cache/Container.php")));
        assert!(!finder.accepts(Path::new("src/Proxy.generated.php")));
    }

    #[test]
    fn test_custom_name_pattern() {
        let mut finder = Finder::default();
        finder.name("*.phtml");
        assert!(finder.accepts(Path::new("templates/list.phtml")));
    }
}
