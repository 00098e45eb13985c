//! Whitespace settings (`setIndent` / `setLineEnding`)

use serde::{Deserialize, Serialize};

/// Indentation style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    /// Use spaces for indentation
    Spaces(usize),
    /// Use tabs for indentation
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(4)
    }
}

impl IndentStyle {
    /// The indentation string for one level
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    /// PHP literal as passed to `setIndent()`
    pub fn php_literal(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => format!("'{}'", " ".repeat(*n)),
            IndentStyle::Tabs => "\"\\t\"".to_string(),
        }
    }
}

/// Line ending style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,
    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// PHP literal as passed to `setLineEnding()`
    pub fn php_literal(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\"\\n\"",
            LineEnding::CrLf => "\"\\r\\n\"",
        }
    }
}

/// Whitespace configuration, PSR-12 defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WhitespaceConfig {
    pub indent: IndentStyle,
    pub line_ending: LineEnding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_psr12() {
        let ws = WhitespaceConfig::default();
        assert_eq!(ws.indent, IndentStyle::Spaces(4));
        assert_eq!(ws.line_ending, LineEnding::Lf);
    }

    #[test]
    fn test_php_literals() {
        assert_eq!(IndentStyle::Spaces(2).php_literal(), "'  '");
        assert_eq!(IndentStyle::Tabs.php_literal(), r#""\t""#);
        assert_eq!(LineEnding::CrLf.php_literal(), r#""\r\n""#);
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_unit() {
        assert_eq!(IndentStyle::Spaces(3).unit(), "   ");
        assert_eq!(IndentStyle::Tabs.unit(), "\t");
    }
}
