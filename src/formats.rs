use serde::{Deserialize, Serialize};

/// One heading found in a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub id: String,
    pub title: String,
    pub level: u8,
}

/// Result of running the whole pipeline over one content string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub headings: Vec<HeadingRecord>,
    /// Anchored markup with the table of contents spliced in before the first heading.
    pub html: String,
    /// The rendered table of contents on its own (empty when there are no headings).
    pub toc: String,
}

impl AnnotatedDocument {
    pub fn unchanged(html: &str) -> Self {
        Self {
            headings: Vec::new(),
            html: html.to_owned(),
            toc: String::new(),
        }
    }
}
