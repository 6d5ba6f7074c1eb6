use anyhow::Context as _;
use kuchikiki::traits::TendrilSink as _;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

const HEADING_LEVELS: [(&str, u8); 6] = [
    ("h1", 1),
    ("h2", 2),
    ("h3", 3),
    ("h4", 4),
    ("h5", 5),
    ("h6", 6),
];

/// Maps a tag name to its heading rank. Anything that is not `h1`..`h6` is `None`.
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_LEVELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, level)| *level)
}

/// A parsed copy of the caller's markup. Edits made through its headings never
/// touch the caller's string.
pub struct WorkingDocument {
    root: NodeRef,
    full_document: bool,
    headings: Vec<ScannedHeading>,
}

#[derive(Clone)]
pub struct ScannedHeading {
    element: NodeDataRef<ElementData>,
    level: u8,
}

impl ScannedHeading {
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Text content with tags stripped and whitespace runs collapsed.
    pub fn title(&self) -> String {
        self.element
            .as_node()
            .text_contents()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn id(&self) -> Option<String> {
        self.element
            .attributes
            .borrow()
            .get("id")
            .map(ToOwned::to_owned)
    }

    pub fn set_id(&self, id: &str) {
        self.element
            .attributes
            .borrow_mut()
            .insert("id", id.to_owned());
    }
}

pub fn scan(html: &str) -> WorkingDocument {
    let root = kuchikiki::parse_html().one(html);
    let headings = match root.select(HEADING_SELECTOR) {
        Ok(matches) => matches
            .filter_map(|element| {
                let level = heading_level(&element.name.local)?;
                Some(ScannedHeading { element, level })
            })
            .collect(),
        Err(()) => Vec::new(),
    };
    tracing::trace!(headings = headings.len(), "scanned document");

    WorkingDocument {
        root,
        full_document: looks_like_full_document(html),
        headings,
    }
}

impl WorkingDocument {
    /// Headings in document order.
    pub fn headings(&self) -> &[ScannedHeading] {
        &self.headings
    }

    pub fn is_full_document(&self) -> bool {
        self.full_document
    }

    /// Serializes the working tree. Fragments come back without the parser's
    /// implied `<html>`, `<head>` and `<body>` wrappers: their children are
    /// written in place, and every other node (comments before or after the
    /// markup, a leading `<style>` or `<script>`) is kept in document order.
    pub fn to_html(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        if self.full_document {
            self.root
                .serialize(&mut out)
                .context("serialize document")?;
        } else {
            write_unwrapped(&self.root, &mut out)?;
        }
        String::from_utf8(out).context("serialized html is not utf-8")
    }
}

fn write_unwrapped(parent: &NodeRef, out: &mut Vec<u8>) -> anyhow::Result<()> {
    for child in parent.children() {
        let implied_wrapper = child
            .as_element()
            .is_some_and(|element| matches!(&*element.name.local, "html" | "head" | "body"));
        if implied_wrapper {
            write_unwrapped(&child, out)?;
        } else {
            child.serialize(out).context("serialize node")?;
        }
    }
    Ok(())
}

fn looks_like_full_document(html: &str) -> bool {
    let head = skip_leading_comments(html);
    let head = head.get(..64).unwrap_or(head).to_ascii_lowercase();
    ["<!doctype", "<html", "<head>", "<head ", "<body"]
        .iter()
        .any(|prefix| head.starts_with(prefix))
}

fn skip_leading_comments(html: &str) -> &str {
    let mut rest = html.trim_start();
    while let Some(comment) = rest.strip_prefix("<!--") {
        let Some(end) = comment.find("-->") else {
            return "";
        };
        rest = comment[end + 3..].trim_start();
    }
    rest
}
