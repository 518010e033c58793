use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Placeholder for fields that could not be determined.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub library: String,
    pub version: String,
    pub date: String,
    pub programming_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub href: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub path: String,
    pub context: String,
}

/// One converted page, as written to `<name>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub metadata: Metadata,
    pub sections: BTreeMap<String, String>,
    pub links: Vec<LinkEntry>,
    pub code_blocks: Vec<CodeEntry>,
    pub images: Vec<ImageEntry>,
    pub content: String,
    pub mathjax_scripts: Vec<String>,
}
