use crate::parser::dom::{text_of, Document, Matcher};
use crate::parser::record::LinkEntry;

const ANCHORS: Matcher = Matcher::tags(&["a"]).with_attr("href");

/// Every `<a href>` in document order; href verbatim, no dedup.
pub fn extract(doc: &Document) -> Vec<LinkEntry> {
    doc.find_all(&ANCHORS)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            Some(LinkEntry {
                href: href.to_string(),
                context: text_of(&a),
            })
        })
        .collect()
}
