use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{CaseSensitivity, ElementRef, Html};

/// Parsed HTML page. Owned by a single extraction pass.
#[derive(Debug, Clone)]
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source),
        }
    }

    /// Recoverable errors html5ever reported while building the tree.
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }

    /// Every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    pub fn find(&self, matcher: &Matcher) -> Option<ElementRef<'_>> {
        self.elements().find(|el| matcher.matches(el))
    }

    pub fn find_all<'a>(&'a self, matcher: &'a Matcher) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.elements().filter(move |el| matcher.matches(el))
    }

    /// All text nodes of the page concatenated, script and style bodies included.
    pub fn text(&self) -> String {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|n| n.value().as_text())
            .map(|t| &**t)
            .collect()
    }

    /// Working copy with every element carrying one of `tags` detached.
    pub fn without(&self, tags: &'static [&'static str]) -> Document {
        let matcher = Matcher::tags(tags);
        let doomed: Vec<_> = self.find_all(&matcher).map(|el| el.id()).collect();

        let mut copy = self.clone();
        for id in doomed {
            if let Some(mut node) = copy.html.tree.get_mut(id) {
                node.detach();
            }
        }
        copy
    }
}

/// Predicate over elements: tag set, class membership, id, attribute presence.
/// Unset fields match anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    tags: &'static [&'static str],
    class: Option<&'static str>,
    id: Option<&'static str>,
    attr: Option<&'static str>,
}

pub const HEADINGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

impl Matcher {
    pub const fn tags(tags: &'static [&'static str]) -> Self {
        Matcher {
            tags,
            class: None,
            id: None,
            attr: None,
        }
    }

    pub const fn with_class(self, class: &'static str) -> Self {
        Matcher {
            class: Some(class),
            ..self
        }
    }

    pub const fn with_id(self, id: &'static str) -> Self {
        Matcher {
            id: Some(id),
            ..self
        }
    }

    pub const fn with_attr(self, attr: &'static str) -> Self {
        Matcher {
            attr: Some(attr),
            ..self
        }
    }

    pub fn matches(&self, el: &ElementRef<'_>) -> bool {
        let e = el.value();
        if !self.tags.is_empty() && !self.tags.contains(&e.name()) {
            return false;
        }
        if let Some(class) = self.class {
            if !e.has_class(class, CaseSensitivity::CaseSensitive) {
                return false;
            }
        }
        if let Some(id) = self.id {
            if e.id() != Some(id) {
                return false;
            }
        }
        if let Some(attr) = self.attr {
            if e.attr(attr).is_none() {
                return false;
            }
        }
        true
    }
}

pub fn is_heading(el: &ElementRef<'_>) -> bool {
    HEADINGS.contains(&el.value().name())
}

/// The element itself, then each enclosing element up to `<html>`.
pub fn ancestors_inclusive<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::once(el).chain(el.ancestors().filter_map(ElementRef::wrap))
}

/// Nearest text node that starts before `node` in document order.
///
/// Reverse pre-order walk: step to the previous sibling and descend to its
/// last leaf, or climb to the parent when there is no previous sibling.
/// Descendants of `node` are never visited.
pub fn preceding_text<'a>(node: NodeRef<'a, Node>) -> Option<&'a str> {
    let mut cur = node;
    loop {
        cur = match cur.prev_sibling() {
            Some(mut prev) => {
                while let Some(last) = prev.last_child() {
                    prev = last;
                }
                prev
            }
            None => cur.parent()?,
        };
        if let Some(text) = cur.value().as_text() {
            return Some(&**text);
        }
    }
}

/// Concatenated descendant text, untouched.
pub fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Each descendant text node trimmed, empties dropped, concatenated.
pub fn stripped_text_of(el: &ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}
