use std::path::{Path, PathBuf};

use scraper::ElementRef;

use crate::parser::dom::{ancestors_inclusive, stripped_text_of, Document, Matcher};

const IMAGES: Matcher = Matcher::tags(&["img"]).with_attr("src");
const DYN_CONTENT: Matcher = Matcher::tags(&["div"]).with_class("dyncontent");
const DYN_HEADER: Matcher = Matcher::tags(&["div"]).with_class("dynheader");

/// A resolved image reference: copy `source` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub context: String,
}

/// Resolve every `<img src>` against `images_dir` by basename.
///
/// References whose file is missing are dropped. Nothing is copied here.
pub fn resolve(doc: &Document, images_dir: &Path, output_dir: &Path) -> Vec<ImageCopy> {
    doc.find_all(&IMAGES)
        .filter_map(|img| {
            let name = Path::new(img.value().attr("src")?).file_name()?;
            let source = images_dir.join(name);
            if !source.is_file() {
                return None;
            }
            Some(ImageCopy {
                destination: output_dir.join(name),
                source,
                context: caption(img),
            })
        })
        .collect()
}

/// Text of the `dynheader` belonging to the nearest enclosing `dyncontent`.
fn caption(img: ElementRef<'_>) -> String {
    ancestors_inclusive(img)
        .filter(|el| DYN_CONTENT.matches(el))
        .find_map(|block| {
            block
                .prev_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| DYN_HEADER.matches(el))
        })
        .map(|header| stripped_text_of(&header))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const COLLAB: &str = r#"<body><div class="contents">
        <div class="dynheader">
          Inheritance diagram for cv::Mat:</div>
        <div class="dyncontent">
          <div class="center"><img src="../classcv_1_1Mat__inherit__graph.png" alt="graph"></div>
        </div>
        <p><img src="formula_1.png"></p>
        <img src="missing.png">
        <img alt="no source">
    </div></body>"#;

    fn setup() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let images = tmp.path().join("html");
        let out = tmp.path().join("out");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("classcv_1_1Mat__inherit__graph.png"), b"png").unwrap();
        fs::write(images.join("formula_1.png"), b"png").unwrap();
        (tmp, images, out)
    }

    #[test]
    fn resolves_existing_files_only() {
        let (_tmp, images, out) = setup();
        let doc = Document::parse(COLLAB);
        let copies = resolve(&doc, &images, &out);

        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0].source, images.join("classcv_1_1Mat__inherit__graph.png"));
        assert_eq!(copies[0].destination, out.join("classcv_1_1Mat__inherit__graph.png"));
        assert_eq!(copies[0].context, "Inheritance diagram for cv::Mat:");
        assert_eq!(copies[1].context, "");
    }

    #[test]
    fn missing_file_is_silently_dropped() {
        let (_tmp, images, out) = setup();
        let doc = Document::parse(r#"<img src="nope/none.png">"#);
        assert!(resolve(&doc, &images, &out).is_empty());
    }

    #[test]
    fn dyncontent_without_header_keeps_walking() {
        let (_tmp, images, out) = setup();
        let doc = Document::parse(
            r#"<body><div class="dynheader">Outer</div>
            <div class="dyncontent"><div class="dyncontent"><img src="formula_1.png"></div></div></body>"#,
        );
        let copies = resolve(&doc, &images, &out);
        assert_eq!(copies[0].context, "Outer");
    }

    #[test]
    fn header_need_not_be_adjacent() {
        let (_tmp, images, out) = setup();
        let doc = Document::parse(
            r#"<body><div class="dynheader">Call graph</div><p>gap</p>
            <div class="dyncontent"><img src="formula_1.png"></div></body>"#,
        );
        assert_eq!(resolve(&doc, &images, &out)[0].context, "Call graph");
    }
}
