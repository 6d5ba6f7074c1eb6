use pagetoc::anchor::assign;
use pagetoc::config::TocOptions;
use pagetoc::render::render;
use pagetoc::scan::scan;
use pagetoc::splice::splice;
use pagetoc::{HeadingRecord, annotate};

fn record(id: &str, title: &str, level: u8) -> HeadingRecord {
    HeadingRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        level,
    }
}

#[test]
fn id_assignment_is_idempotent_over_existing_ids() {
    let html = r#"<h1 id="a">One</h1><h2 id="toc-5">Two</h2><h2>Three</h2>"#;
    let first = assign(scan(html).headings(), "toc-");
    let second = assign(scan(html).headings(), "toc-");
    assert_eq!(first, second);
    let ids = first.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["toc-0", "toc-1", "toc-2"]);
}

#[test]
fn records_follow_source_order() {
    let html = "<h4>d</h4><article><h2>b</h2><aside><h6>f</h6></aside></article><h1>a</h1>";
    let titles = assign(scan(html).headings(), "toc-")
        .into_iter()
        .map(|r| r.title)
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["d", "b", "f", "a"]);
}

#[test]
fn level_matches_tag_numeral() {
    for level in 1..=6u8 {
        let html = format!("<h{level}>x</h{level}>");
        let records = assign(scan(&html).headings(), "toc-");
        assert_eq!(records, vec![record("toc-0", "x", level)], "{html}");
    }
}

#[test]
fn headless_html_renders_no_container_and_splices_nothing() {
    let html = "<p>No headings here.</p><ul><li>item</li></ul>";
    let records = assign(scan(html).headings(), "toc-");
    assert!(records.is_empty());

    let toc = render(&records, &TocOptions::default());
    assert!(toc.is_empty());
    assert_eq!(splice(html, &toc), html);
    assert_eq!(splice(html, "<nav>TOC</nav>"), html);
    assert_eq!(annotate(html, &TocOptions::default()).html, html);
}

#[test]
fn splice_point_is_first_heading() {
    assert_eq!(
        splice("<p>Intro</p><h2>First</h2><p>Body</p>", "<nav>TOC</nav>"),
        "<p>Intro</p><nav>TOC</nav><h2>First</h2><p>Body</p>"
    );
}

#[test]
fn toc_anchors_match_injected_ids() {
    let out = annotate(
        "<p>lead</p><h2>Admissions</h2><p>..</p><h3>Fees</h3><h3>Fees</h3><h2>Results</h2>",
        &TocOptions::default(),
    );
    let reparsed = scan(&out.html);
    assert_eq!(reparsed.headings().len(), out.headings.len());
    for (heading, record) in reparsed.headings().iter().zip(&out.headings) {
        assert_eq!(heading.id().as_deref(), Some(record.id.as_str()));
        assert_eq!(heading.level(), record.level);
        assert_eq!(heading.title(), record.title);
        assert!(out.toc.contains(&format!("href=\"#{}\"", record.id)));
    }
}

#[test]
fn multi_heading_scenario() {
    let out = annotate("<h1>A</h1><p>x</p><h3>B</h3><h2>C</h2>", &TocOptions::default());
    assert_eq!(
        out.headings,
        vec![
            record("toc-0", "A", 1),
            record("toc-1", "B", 3),
            record("toc-2", "C", 2),
        ]
    );
    assert!(out.html.starts_with("<details class=\"toc\" open>"), "{}", out.html);
}

#[test]
fn full_documents_keep_head_and_get_toc_in_body() {
    let html = "<!DOCTYPE html><html><head><title>Notice</title></head><body><p>lead</p><h2>Dates</h2></body></html>";
    let out = annotate(html, &TocOptions::default());
    assert!(out.html.contains("<title>Notice</title>"), "{}", out.html);
    let body_at = out.html.find("<body>").unwrap();
    let toc_at = out.html.find("<details").unwrap();
    let heading_at = out.html.find("<h2 id=\"toc-0\">Dates</h2>").unwrap();
    assert!(body_at < toc_at && toc_at < heading_at, "{}", out.html);
}
