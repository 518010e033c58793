use chrono::Local;

use crate::parser::dom::{text_of, Document, Matcher};
use crate::parser::lang;
use crate::parser::record::{Metadata, NOT_AVAILABLE};

const TITLE: Matcher = Matcher::tags(&["title"]);
const DATE_META: Matcher = Matcher::tags(&["meta"]).with_attr("content");
const PROJECT_NAME: Matcher = Matcher::tags(&["div"]).with_id("projectname");
const PROJECT_NUMBER: Matcher = Matcher::tags(&["span"]).with_id("projectnumber");

/// `text` is the page's full plain text, fed to the language guesser.
pub fn extract(doc: &Document, text: &str) -> Metadata {
    let title = doc
        .find(&TITLE)
        .map(|t| text_of(&t))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let date = doc
        .find_all(&DATE_META)
        .find(|m| m.value().attr("name") == Some("date"))
        .and_then(|m| m.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_else(now);

    let project = doc.find(&PROJECT_NAME);

    let library = project
        .and_then(|p| {
            text_of(&p)
                .split_whitespace()
                .next()
                .map(str::to_string)
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let version = project
        .and_then(|p| {
            p.descendants()
                .filter_map(scraper::ElementRef::wrap)
                .find(|el| PROJECT_NUMBER.matches(el))
        })
        .map(|v| text_of(&v).trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let programming_language = lang::guess(text).unwrap_or(NOT_AVAILABLE).to_string();

    Metadata {
        title,
        library,
        version,
        date,
        programming_language,
    }
}

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
