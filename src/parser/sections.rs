use std::collections::BTreeMap;

use scraper::ElementRef;

use super::dom::{is_heading, Document, Matcher, HEADINGS};

/// Split the page into sections keyed by heading text.
///
/// A section holds the outer HTML of the heading's following element
/// siblings, up to the next heading of any level. Repeated heading text
/// keeps the last section.
pub fn segment(doc: &Document) -> BTreeMap<String, String> {
    let mut sections = BTreeMap::new();
    for heading in doc.find_all(&Matcher::tags(HEADINGS)) {
        let name = heading.text().collect::<String>().trim().to_string();
        sections.insert(name, section_body(heading));
    }
    sections
}

fn section_body(heading: ElementRef<'_>) -> String {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| !is_heading(el))
        .map(|el| el.html())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(html: &str) -> BTreeMap<String, String> {
        segment(&Document::parse(html))
    }

    #[test]
    fn duplicate_heading_keeps_last() {
        let s = sections(
            "<body><h1>A</h1><p>a</p><h2>B</h2><p>b</p><h1>A</h1><p>c</p></body>",
        );
        assert_eq!(s.len(), 2);
        assert_eq!(s["A"], "<p>c</p>");
        assert_eq!(s["B"], "<p>b</p>");
    }

    #[test]
    fn any_heading_ends_a_section() {
        let s = sections("<body><h2>Outer</h2><p>x</p><h4>Inner</h4><p>y</p></body>");
        assert_eq!(s["Outer"], "<p>x</p>");
        assert_eq!(s["Inner"], "<p>y</p>");
    }

    #[test]
    fn siblings_keep_markup_and_skip_text_nodes() {
        let s = sections(
            "<body><h3> Members </h3>loose text<div class=\"m\"><b>f</b>()</div><ul><li>1</li></ul></body>",
        );
        assert_eq!(
            s["Members"],
            "<div class=\"m\"><b>f</b>()</div> <ul><li>1</li></ul>"
        );
    }

    #[test]
    fn nested_headings_use_their_own_siblings() {
        let s = sections("<body><div><h2>Nested</h2><p>in</p></div><p>out</p></body>");
        assert_eq!(s["Nested"], "<p>in</p>");
    }

    #[test]
    fn no_headings_no_sections() {
        assert!(sections("<body><p>plain</p></body>").is_empty());
    }

    #[test]
    fn empty_heading_run() {
        let s = sections("<body><h1>Last</h1></body>");
        assert_eq!(s["Last"], "");
    }
}
