//! License header for the `header_comment` rule

use typo3_cs_config::{RuleSet, RuleValue};

/// Rule that inserts the license header
pub const HEADER_RULE: &str = "header_comment";

/// Placeholder replaced by the project specific header line
pub const HEADER_PLACEHOLDER: &str = "{header}";

/// Header line used when none is given
pub const DEFAULT_HEADER_LINE: &str = "This file is part of the TYPO3 CMS project.";

/// License header template
pub const DEFAULT_HEADER: &str = "{header}

It is free software; you can redistribute it and/or modify it under
the terms of the GNU General Public License, either version 2
of the License, or any later version.

For the full copyright and license information, please read the
LICENSE.txt file that was distributed with this source code.

The TYPO3 project - inspiring people to share!";

/// Final header text.
///
/// Unless `replace_all` is set, `header` is substituted for the placeholder
/// in [`DEFAULT_HEADER`] in a single pass; a placeholder inside `header`
/// itself is left as is.
pub fn render_header(header: &str, replace_all: bool) -> String {
    if replace_all {
        header.to_string()
    } else {
        DEFAULT_HEADER.replace(HEADER_PLACEHOLDER, header)
    }
}

/// Options for the `header_comment` rule
pub fn header_comment_rule(header: String) -> RuleValue {
    RuleValue::Map(RuleSet::from_iter([
        ("header", header),
        ("comment_type", "comment".to_string()),
        ("location", "after_declare_strict".to_string()),
        ("separate", "both".to_string()),
    ]))
}
