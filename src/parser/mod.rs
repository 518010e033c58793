pub mod dom;
pub mod extract;
pub mod lang;
pub mod record;
pub mod sections;

use std::path::Path;

use dom::Document;
use extract::ExtractedData;

/// html → parsed tree → extracted data (images resolved, not yet copied).
pub fn process_html(html: &str, images_dir: &Path, output_dir: &Path) -> ExtractedData {
    let doc = Document::parse(html);
    let errors = doc.parse_errors();
    if errors > 0 {
        tracing::debug!(errors, "html5ever recovered from malformed markup");
    }
    extract::extract_all(&doc, images_dir, output_dir)
}
