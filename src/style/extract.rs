//! Locating style text inside markup

use std::sync::LazyLock;

use scraper::{Html, Selector};

static STYLE_BLOCKS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("style").expect("BUG: hardcoded CSS selector 'style' is invalid")
});

static STYLED_ELEMENTS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("[style]").expect("BUG: hardcoded CSS selector '[style]' is invalid")
});

/// Extract the aggregate style text embedded in `markup`.
///
/// Collects `<style>` block contents in document order, then rules
/// synthesized from `style="..."` attributes (element name as selector).
/// Returns `None` when the markup carries no style text at all.
#[must_use]
pub fn extract_styles(markup: &str) -> Option<String> {
    let document = Html::parse_document(markup);
    let mut aggregate = String::new();

    for block in document.select(&STYLE_BLOCKS) {
        let text: String = block.text().collect();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        if !aggregate.is_empty() {
            aggregate.push('\n');
        }
        aggregate.push_str(text);
    }

    for element in document.select(&STYLED_ELEMENTS) {
        let Some(declarations) = element.value().attr("style") else {
            continue;
        };
        let declarations = declarations.trim();
        if declarations.is_empty() {
            continue;
        }
        if !aggregate.is_empty() {
            aggregate.push('\n');
        }
        aggregate.push_str(element.value().name());
        aggregate.push_str(" { ");
        aggregate.push_str(declarations);
        aggregate.push_str(" }");
    }

    if aggregate.is_empty() {
        None
    } else {
        Some(aggregate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_style_blocks_in_document_order() {
        let html = r"<html><head>
            <style>h1 { color: red; }</style>
            <style>p { margin: 0; }</style>
            </head><body><p>x</p></body></html>";

        let css = extract_styles(html).expect("styles present");
        assert_eq!(css, "h1 { color: red; }\np { margin: 0; }");
    }

    #[test]
    fn synthesizes_rules_from_inline_style_attributes() {
        let html = r#"<html><body><div style="padding: 1em">x</div></body></html>"#;

        let css = extract_styles(html).expect("styles present");
        assert_eq!(css, "div { padding: 1em }");
    }

    #[test]
    fn markup_without_styles_yields_none() {
        assert!(extract_styles("<html><body><p>plain</p></body></html>").is_none());
        assert!(extract_styles("<html><head><style>  </style></head></html>").is_none());
    }
}
