//! The TYPO3 rule table

use once_cell::sync::Lazy;
use typo3_cs_config::{RuleSet, RuleValue};

/// Directory names never scanned by the TYPO3 preset
pub const EXCLUDED_DIRECTORIES: [&str; 4] = ["vendor", "typo3temp", "var", ".build"];

fn options<const N: usize>(pairs: [(&str, RuleValue); N]) -> RuleValue {
    RuleValue::Map(pairs.into_iter().collect())
}

fn list<const N: usize>(items: [&str; N]) -> RuleValue {
    RuleValue::List(items.into_iter().map(RuleValue::from).collect())
}

/// Default TYPO3 rules, in the order they are rendered
pub static TYPO3_RULES: Lazy<RuleSet> = Lazy::new(|| {
    let on = || RuleValue::Bool(true);
    RuleSet::from_iter([
        ("@DoctrineAnnotation", on()),
        ("@PSR2", on()),
        ("array_syntax", options([("syntax", "short".into())])),
        ("blank_line_after_opening_tag", on()),
        ("braces", options([("allow_single_line_closure", true.into())])),
        ("cast_spaces", options([("space", "none".into())])),
        ("compact_nullable_typehint", on()),
        ("concat_space", options([("spacing", "one".into())])),
        ("declare_equal_normalize", options([("space", "none".into())])),
        ("dir_constant", on()),
        ("function_typehint_space", on()),
        ("lowercase_cast", on()),
        ("method_argument_space", options([("on_multiline", "ensure_fully_multiline".into())])),
        ("modernize_types_casting", on()),
        ("native_function_casing", on()),
        ("new_with_braces", on()),
        ("no_alias_functions", on()),
        ("no_blank_lines_after_phpdoc", on()),
        ("no_empty_phpdoc", on()),
        ("no_empty_statement", on()),
        ("no_extra_blank_lines", on()),
        ("no_leading_import_slash", on()),
        ("no_leading_namespace_whitespace", on()),
        ("no_null_property_initialization", on()),
        ("no_short_bool_cast", on()),
        ("no_singleline_whitespace_before_semicolons", on()),
        ("no_superfluous_elseif", on()),
        ("no_trailing_comma_in_singleline_array", on()),
        ("no_unneeded_control_parentheses", on()),
        ("no_unused_imports", on()),
        ("no_useless_else", on()),
        ("no_whitespace_in_blank_line", on()),
        ("ordered_imports", on()),
        (
            "php_unit_construct",
            options([(
                "assertions",
                list(["assertEquals", "assertSame", "assertNotEquals", "assertNotSame"]),
            )]),
        ),
        ("php_unit_mock_short_will_return", on()),
        ("php_unit_test_case_static_method_calls", options([("call_type", "self".into())])),
        ("phpdoc_no_access", on()),
        ("phpdoc_no_empty_return", on()),
        ("phpdoc_no_package", on()),
        ("phpdoc_scalar", on()),
        ("phpdoc_trim", on()),
        ("phpdoc_types", on()),
        (
            "phpdoc_types_order",
            options([
                ("null_adjustment", "always_last".into()),
                ("sort_algorithm", "none".into()),
            ]),
        ),
        ("return_type_declaration", options([("space_before", "none".into())])),
        ("single_quote", on()),
        ("single_line_comment_style", options([("comment_types", list(["hash"]))])),
        ("single_trait_insert_per_statement", on()),
        ("trailing_comma_in_multiline", options([("elements", list(["arrays"]))])),
        ("whitespace_after_comma_in_array", on()),
    ])
});
