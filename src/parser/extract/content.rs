use crate::parser::dom::{Document, Matcher};

const SCRIPTS: Matcher = Matcher::tags(&["script"]);
const CONTENTS: Matcher = Matcher::tags(&["div"]).with_class("contents");
const NON_CONTENT: &[&str] = &["script", "style"];

/// Normalized page body plus the MathJax scripts found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    pub text: String,
    pub mathjax_scripts: Vec<String>,
}

pub fn extract(doc: &Document) -> Content {
    // Taken from the untouched page: stripping drops MathJax scripts too.
    let mathjax_scripts = doc
        .find_all(&SCRIPTS)
        .map(|s| s.html())
        .filter(|html| html.contains("MathJax"))
        .collect();

    let stripped = doc.without(NON_CONTENT);
    let text = stripped
        .find(&CONTENTS)
        .map(|div| {
            div.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    Content {
        text,
        mathjax_scripts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <script type="text/javascript" src="jquery.js"></script>
        <script type="text/x-mathjax-config">MathJax.Hub.Config({ TeX: { extensions: ["AMSmath.js"] } });</script>
        <style>.contents { color: red }</style>
    </head><body>
        <div class="header"><div class="title">Mat Class</div></div>
        <div class="contents">
            <p>The <b>Mat</b> class.</p>
            <script>var hidden = 1;</script>
            <style>p { margin: 0 }</style>
            <ul><li>rows</li><li> cols </li></ul>
        </div>
    </body></html>"#;

    #[test]
    fn flattens_contents_div() {
        let c = extract(&Document::parse(PAGE));
        assert_eq!(c.text, "The\nMat\nclass.\nrows\ncols");
    }

    #[test]
    fn scripts_and_styles_never_in_text() {
        let c = extract(&Document::parse(PAGE));
        assert!(!c.text.contains("hidden"));
        assert!(!c.text.contains("margin"));
        assert!(!c.text.contains("MathJax"));
    }

    #[test]
    fn mathjax_scripts_kept_verbatim() {
        let c = extract(&Document::parse(PAGE));
        assert_eq!(c.mathjax_scripts.len(), 1);
        assert!(c.mathjax_scripts[0].starts_with("<script type=\"text/x-mathjax-config\">"));
        assert!(c.mathjax_scripts[0].contains("MathJax.Hub.Config"));
        assert!(c.mathjax_scripts[0].ends_with("</script>"));
    }

    #[test]
    fn no_contents_div_means_empty_text() {
        let c = extract(&Document::parse("<body><p>outside</p></body>"));
        assert_eq!(c, Content::default());
    }
}
