use crate::parser::dom::{preceding_text, text_of, Document, Matcher};
use crate::parser::record::CodeEntry;

const CODE: Matcher = Matcher::tags(&["code"]);

/// Every `<code>` element, nested ones included, with the nearest text
/// node preceding it as context.
pub fn extract(doc: &Document) -> Vec<CodeEntry> {
    doc.find_all(&CODE)
        .map(|code| CodeEntry {
            code: text_of(&code),
            context: preceding_text(*code).map(str::to_string),
        })
        .collect()
}
