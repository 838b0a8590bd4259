//! Markup tree produced by sections and consumed by layout and rendering.
//!
//! Elements may carry a key: an [`ElementId`] used to find the element's
//! rectangle after layout and to look up its inline style at render time.
//! Keyed elements are either revealable (`data-reveal`), draggable
//! (`data-draggable`) or merely addressable (`data-key`).

use mns_motion::ElementId;

/// How an element places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Children stack vertically.
    #[default]
    Block,
    /// Children sit side by side, wrapping after `columns`.
    Row { columns: usize },
    /// Text-level content; shares the box of the nearest block ancestor.
    Inline,
}

/// What a keyed element is keyed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Reveal,
    Draggable,
    Plain,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    fn is_inline(&self) -> bool {
        match self {
            Node::Text(_) => true,
            Node::Element(element) => element.flow == Flow::Inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub key: Option<(ElementId, KeyRole)>,
    pub flow: Flow,
    /// Fixed box size used by layout (images, icons, embeds).
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub children: Vec<Node>,
}

/// Elements that never have children or a closing tag.
pub const VOID_TAGS: &[&str] = &["br", "hr", "img", "meta", "link", "input"];

const INLINE_TAGS: &[&str] = &["span", "a", "strong", "em", "b", "i", "cite", "small", "br"];

impl Element {
    pub fn new(tag: &str) -> Self {
        let flow = if INLINE_TAGS.contains(&tag) {
            Flow::Inline
        } else {
            Flow::Block
        };
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            key: None,
            flow,
            width: None,
            height: None,
            children: Vec::new(),
        }
    }

    /// Decorative icon referenced by name only.
    pub fn icon(name: &str, size: f32) -> Self {
        Element::new("span")
            .class("icon")
            .attr("data-icon", name)
            .attr("aria-hidden", "true")
            .block()
            .size(size, size)
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn reveal(mut self, id: ElementId) -> Self {
        self.key = Some((id, KeyRole::Reveal));
        self
    }

    pub fn draggable(mut self, id: ElementId) -> Self {
        self.key = Some((id, KeyRole::Draggable));
        self
    }

    pub fn keyed(mut self, id: ElementId) -> Self {
        self.key = Some((id, KeyRole::Plain));
        self
    }

    pub fn block(mut self) -> Self {
        self.flow = Flow::Block;
        self
    }

    pub fn row(mut self, columns: usize) -> Self {
        self.flow = Flow::Row {
            columns: columns.max(1),
        };
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn key_id(&self) -> Option<&ElementId> {
        self.key.as_ref().map(|(id, _)| id)
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether every child is inline content, making this element a text leaf.
    pub fn is_text_leaf(&self) -> bool {
        !self.children.is_empty() && self.children.iter().all(Node::is_inline)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Visit this element and every descendant element, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(visit);
            }
        }
    }

    /// Keys of this element and its descendants with the given role.
    pub fn keys_with_role(&self, role: KeyRole) -> Vec<ElementId> {
        let mut keys = Vec::new();
        self.walk(&mut |element| {
            if let Some((id, element_role)) = &element.key {
                if *element_role == role {
                    keys.push(id.clone());
                }
            }
        });
        keys
    }

    pub fn find_key(&self, id: &ElementId) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |element| {
            if found.is_none() && element.key_id() == Some(id) {
                found = Some(element);
            }
        });
        found
    }
}

fn collect_text(element: &Element, out: &mut String) {
    if element.tag == "br" {
        out.push('\n');
        return;
    }
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(element, out),
        }
    }
}

/// Escape text content for HTML.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_tags_default_to_inline_flow() {
        assert_eq!(Element::new("span").flow, Flow::Inline);
        assert_eq!(Element::new("div").flow, Flow::Block);
        assert_eq!(Element::new("span").block().flow, Flow::Block);
        assert_eq!(Element::new("ul").row(0).flow, Flow::Row { columns: 1 });
    }

    #[test]
    fn test_text_leaf_and_content() {
        let title = Element::new("h1")
            .child(Element::new("span").text("Bui"))
            .child(Element::new("span").text("ld"))
            .text(" it");
        assert!(title.is_text_leaf());
        assert_eq!(title.text_content(), "Build it");

        let card = Element::new("div").child(Element::new("p").text("x"));
        assert!(!card.is_text_leaf());
    }

    #[test]
    fn test_keys_and_lookup() {
        let id = ElementId::new("products.card.joint-mortar");
        let tree = Element::new("section")
            .child(Element::new("article").reveal(id.clone()).text("Joint Mortar"))
            .child(Element::new("div").keyed(ElementId::new("products.header.main")));

        assert_eq!(tree.keys_with_role(KeyRole::Reveal), vec![id.clone()]);
        assert_eq!(tree.find_key(&id).map(|el| el.tag.as_str()), Some("article"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_text("Response < 12 hrs & more"), "Response &lt; 12 hrs &amp; more");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
