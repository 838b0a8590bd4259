//! HTML writer.
//!
//! Inline styles come from a [`StyleSource`]. [`StaticStyles`] supplies none,
//! so static output always shows every element in its default, visible
//! state; a running page supplies the current animation frame instead.

use std::fmt::Write as _;

use mns_motion::ElementId;
use thiserror::Error;

use crate::markup::{Element, Flow, KeyRole, Node, escape_attr, escape_text};
use crate::page::{DESCRIPTION, Page, TITLE};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid tag name {0:?}")]
    InvalidTag(String),
    #[error("invalid attribute name {name:?} on <{tag}>")]
    InvalidAttribute { tag: String, name: String },
    #[error("void element <{0}> cannot have children")]
    VoidWithChildren(String),
    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

pub trait StyleSource {
    /// Inline CSS for a keyed element, or `None` to leave it unstyled.
    fn inline_style(&self, id: &ElementId) -> Option<String>;
}

/// No inline styles at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticStyles;

impl StyleSource for StaticStyles {
    fn inline_style(&self, _id: &ElementId) -> Option<String> {
        None
    }
}

/// Render the whole page as an HTML5 document.
pub fn render_document(page: &Page, styles: &dyn StyleSource) -> Result<String, RenderError> {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(out, "<meta name=\"description\" content=\"{}\">", escape_attr(DESCRIPTION))?;
    writeln!(out, "<title>{}</title>", escape_text(TITLE))?;
    out.push_str("<link rel=\"icon\" href=\"/images/logo.png\">\n");
    out.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n");
    out.push_str("</head>\n");
    render_element(&page.body(), styles, &mut out)?;
    out.push_str("\n</html>\n");
    Ok(out)
}

/// Append one element and its subtree to `out`.
pub fn render_element(element: &Element, styles: &dyn StyleSource, out: &mut String) -> Result<(), RenderError> {
    if !is_valid_name(&element.tag) {
        return Err(RenderError::InvalidTag(element.tag.clone()));
    }

    write!(out, "<{}", element.tag)?;
    let mut static_style = None;
    for (name, value) in &element.attrs {
        if !is_valid_name(name) {
            return Err(RenderError::InvalidAttribute {
                tag: element.tag.clone(),
                name: name.clone(),
            });
        }
        if name == "style" {
            static_style = Some(value.as_str());
            continue;
        }
        if value.is_empty() {
            write!(out, " {name}")?;
        } else {
            write!(out, " {name}=\"{}\"", escape_attr(value))?;
        }
    }
    if !element.classes.is_empty() {
        write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")))?;
    }

    let mut dynamic_style = None;
    if let Some((id, role)) = &element.key {
        let attr = match role {
            KeyRole::Reveal => "data-reveal",
            KeyRole::Draggable => "data-draggable",
            KeyRole::Plain => "data-key",
        };
        write!(out, " {attr}=\"{}\"", escape_attr(id.as_str()))?;
        dynamic_style = styles.inline_style(id);
    }

    let style = match (static_style, dynamic_style.as_deref()) {
        (Some(fixed), Some(live)) => Some(format!("{fixed}; {live}")),
        (Some(fixed), None) => Some(fixed.to_string()),
        (None, Some(live)) => Some(live.to_string()),
        (None, None) => None,
    };
    if let Some(style) = style {
        write!(out, " style=\"{}\"", escape_attr(&style))?;
    }
    out.push('>');

    if element.is_void() {
        if !element.children.is_empty() {
            return Err(RenderError::VoidWithChildren(element.tag.clone()));
        }
        return Ok(());
    }

    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(inner) => render_element(inner, styles, out)?,
        }
    }
    write!(out, "</{}>", element.tag)?;
    if !element.is_text_leaf() && element.flow != Flow::Inline {
        out.push('\n');
    }
    Ok(())
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hidden;

    impl StyleSource for Hidden {
        fn inline_style(&self, _id: &ElementId) -> Option<String> {
            Some("opacity: 0".to_string())
        }
    }

    #[test]
    fn test_renders_keys_and_escapes() {
        let element = Element::new("div")
            .class("badge")
            .reveal(ElementId::new("contact.badge.response-12-hrs"))
            .text("Response < 12 hrs");
        let mut out = String::new();
        render_element(&element, &StaticStyles, &mut out).expect("render");
        assert_eq!(
            out,
            "<div class=\"badge\" data-reveal=\"contact.badge.response-12-hrs\">Response &lt; 12 hrs</div>"
        );
    }

    #[test]
    fn test_merges_static_and_dynamic_styles() {
        let element = Element::new("div")
            .attr("style", "background-image: url('/bg.png')")
            .keyed(ElementId::new("hero.background.main"));
        let mut out = String::new();
        render_element(&element, &Hidden, &mut out).expect("render");
        assert!(out.contains("style=\"background-image: url('/bg.png'); opacity: 0\""));
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let element = Element::new("iframe").attr("allowfullscreen", "").attr("src", "https://maps.example");
        let mut out = String::new();
        render_element(&element, &StaticStyles, &mut out).expect("render");
        assert!(out.starts_with("<iframe allowfullscreen src=\"https://maps.example\"></iframe>"));

        let mut out = String::new();
        render_element(&Element::new("img").attr("src", "/a.png"), &StaticStyles, &mut out).expect("render");
        assert_eq!(out, "<img src=\"/a.png\">");
    }

    #[test]
    fn test_rejects_bad_names() {
        let mut out = String::new();
        let err = render_element(&Element::new("div").attr("on click", "x"), &StaticStyles, &mut out);
        assert!(matches!(err, Err(RenderError::InvalidAttribute { .. })));
        let err = render_element(&Element::new(""), &StaticStyles, &mut out);
        assert!(matches!(err, Err(RenderError::InvalidTag(_))));
    }

    #[test]
    fn test_static_document_has_no_inline_transforms() {
        let html = render_document(&Page::new(2025), &StaticStyles).expect("render");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("opacity: 0"));
        assert!(html.contains("data-draggable=\"hero.accent.thermal\""));
        assert!(html.contains("© 2025"));
    }
}
