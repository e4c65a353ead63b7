use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Elements whose text never counts as page content.
static BOILERPLATE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("script, style, nav, footer, header").expect("valid boilerplate selector")
});

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid paragraph selector"));

/// `<noscript>` open and close tags. The parser runs with scripting enabled
/// and would otherwise treat their content as raw text.
static NOSCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?noscript\b[^>]*>").expect("valid noscript pattern"));

/// Visible paragraph text of an HTML document.
///
/// Boilerplate elements are detached from the tree first, so a `<p>` inside a
/// `<footer>` (or a `<script>` inside a `<p>`) contributes nothing. The text
/// of each remaining `<p>` is joined with a single space. Paragraphs inside
/// `<noscript>` count as content.
pub fn paragraph_text(html: &str) -> String {
    let html = NOSCRIPT_TAG.replace_all(html, "");
    let mut document = Html::parse_document(&html);
    strip_boilerplate(&mut document);

    document
        .root_element()
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_boilerplate(document: &mut Html) {
    let doomed: Vec<_> = document
        .root_element()
        .select(&BOILERPLATE)
        .map(|element| element.id())
        .collect();

    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}
