use std::sync::LazyLock;

use regex::Regex;

// `<h1>`..`<h6>` opening tags, attributes allowed. `<header>`, `<hr>`, `<head>`
// and closing tags never match. Comments and `<script>`/`<style>` bodies are
// consumed whole so tag-like text inside them is skipped.
static HEADING_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?-->|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|(?P<heading><h[1-6](?:[\s/][^>]*)?>)",
    )
    .expect("heading tag pattern is valid")
});

/// Byte offset of the first heading opening tag outside comments and
/// script or style blocks.
pub fn find_splice_point(html: &str) -> Option<usize> {
    HEADING_OPEN_TAG
        .captures_iter(html)
        .find_map(|caps| caps.name("heading"))
        .map(|m| m.start())
}

/// Inserts `toc` immediately before the first heading. Content that precedes
/// the heading stays above the table of contents. Without a heading (or with
/// an empty `toc`) the input is returned as is.
pub fn splice(html: &str, toc: &str) -> String {
    if toc.is_empty() {
        return html.to_owned();
    }
    let Some(at) = find_splice_point(html) else {
        return html.to_owned();
    };

    let mut out = String::with_capacity(html.len() + toc.len());
    out.push_str(&html[..at]);
    out.push_str(toc);
    out.push_str(&html[at..]);
    out
}
