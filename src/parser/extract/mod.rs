pub mod code;
pub mod content;
pub mod images;
pub mod links;
pub mod metadata;

use std::collections::BTreeMap;
use std::path::Path;

use super::dom::Document;
use super::record::*;
use super::sections;
use content::Content;
use images::ImageCopy;

/// Everything pulled out of one page, before images are copied.
pub struct ExtractedData {
    pub metadata: Metadata,
    pub sections: BTreeMap<String, String>,
    pub links: Vec<LinkEntry>,
    pub code_blocks: Vec<CodeEntry>,
    pub images: Vec<ImageCopy>,
    pub content: Content,
}

pub fn extract_all(doc: &Document, images_dir: &Path, output_dir: &Path) -> ExtractedData {
    let text = doc.text();

    ExtractedData {
        metadata: metadata::extract(doc, &text),
        sections: sections::segment(doc),
        links: links::extract(doc),
        code_blocks: code::extract(doc),
        images: images::resolve(doc, images_dir, output_dir),
        content: content::extract(doc),
    }
}

impl ExtractedData {
    /// Assemble the final record once images have been placed.
    pub fn into_record(self, images: Vec<ImageEntry>) -> ExtractionRecord {
        ExtractionRecord {
            metadata: self.metadata,
            sections: self.sections,
            links: self.links,
            code_blocks: self.code_blocks,
            images,
            content: self.content.text,
            mathjax_scripts: self.content.mathjax_scripts,
        }
    }
}

// ── Tests ──
