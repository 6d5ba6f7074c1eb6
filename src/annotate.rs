use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::anchor::assign;
use crate::config::TocOptions;
use crate::formats::{AnnotatedDocument, HeadingRecord};
use crate::render::render;
use crate::scan::scan;
use crate::splice::splice;

/// Runs scan, id assignment, rendering and splicing over one content string.
///
/// Never fails: if the markup cannot be processed the original string comes
/// back untouched with no headings, and the page simply renders without a
/// table of contents.
pub fn annotate(html: &str, options: &TocOptions) -> AnnotatedDocument {
    match contain(|| run_pipeline(html, options)) {
        Ok(Ok(document)) => document,
        Ok(Err(err)) => {
            tracing::warn!(error = %format!("{err:#}"), "annotate failed; leaving content untouched");
            AnnotatedDocument::unchanged(html)
        }
        Err(panic) => {
            tracing::warn!(panic = %describe_panic(panic.as_ref()), "html parser panicked; leaving content untouched");
            AnnotatedDocument::unchanged(html)
        }
    }
}

/// Heading records only, without touching the markup.
pub fn headings(html: &str, options: &TocOptions) -> Vec<HeadingRecord> {
    match contain(|| assign(scan(html).headings(), &options.id_prefix)) {
        Ok(records) => records,
        Err(panic) => {
            tracing::warn!(panic = %describe_panic(panic.as_ref()), "html parser panicked; no headings");
            Vec::new()
        }
    }
}

fn run_pipeline(html: &str, options: &TocOptions) -> anyhow::Result<AnnotatedDocument> {
    let document = scan(html);
    if document.headings().is_empty() {
        tracing::debug!("no headings; table of contents omitted");
        return Ok(AnnotatedDocument::unchanged(html));
    }

    let headings = assign(document.headings(), &options.id_prefix);
    let anchored = document.to_html()?;
    let toc = render(&headings, options);
    let html = splice(&anchored, &toc);
    tracing::debug!(headings = headings.len(), "annotated document");

    Ok(AnnotatedDocument {
        headings,
        html,
        toc,
    })
}

fn contain<T>(f: impl FnOnce() -> T) -> Result<T, Box<dyn Any + Send>> {
    panic::catch_unwind(AssertUnwindSafe(f))
}

fn describe_panic(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}
