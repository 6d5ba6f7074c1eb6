use crate::formats::HeadingRecord;
use crate::scan::ScannedHeading;

pub const DEFAULT_ID_PREFIX: &str = "toc-";

/// Gives every heading a positional anchor (`{prefix}{index}`) and returns the
/// records in document order. Existing `id` attributes are overwritten.
pub fn assign(headings: &[ScannedHeading], prefix: &str) -> Vec<HeadingRecord> {
    headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            let id = format!("{prefix}{index}");
            if let Some(previous) = heading.id()
                && previous != id
            {
                tracing::trace!(%previous, %id, "replacing heading id");
            }
            heading.set_id(&id);
            HeadingRecord {
                id,
                title: heading.title(),
                level: heading.level(),
            }
        })
        .collect()
}
