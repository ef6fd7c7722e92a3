// ABOUTME: Style materialization for slide directives
// ABOUTME: Turns effective directive values into inline CSS, classes and chrome text

use crate::directives::{DirectiveName, DirectiveSet};

const STYLE_PROPERTIES: [(DirectiveName, &str); 6] = [
    (DirectiveName::BackgroundColor, "background-color"),
    (DirectiveName::BackgroundImage, "background-image"),
    (DirectiveName::BackgroundPosition, "background-position"),
    (DirectiveName::BackgroundRepeat, "background-repeat"),
    (DirectiveName::BackgroundSize, "background-size"),
    (DirectiveName::Color, "color"),
];

/// Inline CSS for a slide, e.g. `background-color: #fff; color: red`.
pub fn slide_style(directives: &DirectiveSet) -> String {
    STYLE_PROPERTIES
        .iter()
        .filter_map(|(name, property)| {
            directives
                .effective(*name)
                .filter(|value| value.is_truthy())
                .map(|value| format!("{}: {}", property, value))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Extra classes requested by the `class` directive.
pub fn slide_classes(directives: &DirectiveSet) -> Vec<String> {
    directives
        .effective(DirectiveName::Class)
        .and_then(|value| value.as_str())
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Whether a page number is shown. A non-boolean value falls back to `default`.
pub fn is_paginated(directives: &DirectiveSet, default: bool) -> bool {
    directives
        .effective(DirectiveName::Paginate)
        .and_then(|value| value.as_bool())
        .unwrap_or(default)
}

pub fn header_text(directives: &DirectiveSet) -> Option<String> {
    chrome_text(directives, DirectiveName::Header)
}

pub fn footer_text(directives: &DirectiveSet) -> Option<String> {
    chrome_text(directives, DirectiveName::Footer)
}

fn chrome_text(directives: &DirectiveSet, name: DirectiveName) -> Option<String> {
    directives
        .effective(name)
        .filter(|value| value.is_truthy())
        .map(|value| value.to_string())
}
