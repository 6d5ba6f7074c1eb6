use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::TocOptions;
use crate::formats::HeadingRecord;

/// Renders one `<li>` per record as a flat list. Nesting is expressed by
/// indentation only, so levels that skip ranks (an `h3` before any `h2`) still
/// render.
pub fn render_entries(records: &[HeadingRecord], options: &TocOptions) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut html = String::from("<ul class=\"");
    html.push_str(&encode_double_quoted_attribute(&options.class));
    html.push_str("-list\">\n");
    for record in records {
        let indent = u32::from(record.level).saturating_mul(options.indent_step);
        // Writing into a String cannot fail.
        let _ = writeln!(
            html,
            "<li data-level=\"{level}\" style=\"padding-left: {indent}{unit}\"><a href=\"#{id}\">{title}</a></li>",
            level = record.level,
            unit = encode_double_quoted_attribute(&options.indent_unit),
            id = encode_double_quoted_attribute(&record.id),
            title = encode_text(&record.title),
        );
    }
    html.push_str("</ul>");
    html
}

/// Wraps the entry list in a `<details>` toggle. Expanded unless
/// `options.collapsed` is set. Nothing is emitted for an empty list.
pub fn render(records: &[HeadingRecord], options: &TocOptions) -> String {
    let entries = render_entries(records, options);
    if entries.is_empty() {
        return entries;
    }

    let open = if options.collapsed { "" } else { " open" };
    format!(
        "<details class=\"{class}\"{open}>\n<summary>{heading}</summary>\n{entries}\n</details>\n",
        class = encode_double_quoted_attribute(&options.class),
        heading = encode_text(&options.heading),
    )
}
