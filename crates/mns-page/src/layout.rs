//! Estimated page layout.
//!
//! The markup tree is mapped onto a taffy flex tree: block flow becomes a
//! column, row flow a wrapping row with equal-width columns, and runs of
//! inline content become measured text leaves. Text is measured with a
//! character-count heuristic, so rectangles are estimates good enough to
//! drive scroll triggers, not pixel-exact browser boxes.
//!
//! Keyed inline elements inside a text leaf share the leaf's rectangle.

use std::collections::HashMap;

use mns_motion::{ElementId, ElementRect, ElementRegistry};
use taffy::prelude::{AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage, NodeId, Size, Style, TaffyTree};
use thiserror::Error;
use tracing::debug;

use crate::markup::{Element, Flow, Node};

const AVG_CHAR_WIDTH: f32 = 0.55;
const LINE_HEIGHT_FACTOR: f32 = 1.2;
const BLOCK_GAP: f32 = 16.0;
const ROW_GAP: f32 = 24.0;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("viewport width must be positive, got {0}")]
    InvalidWidth(f32),
    #[error("layout engine failed: {0}")]
    Engine(#[from] taffy::TaffyError),
}

/// Text content attached to a taffy leaf for measurement.
#[derive(Debug, Clone)]
struct TextBlock {
    text: String,
    font_size: f32,
}

/// Rectangles of every keyed element and anchor, in document coordinates.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    rects: HashMap<ElementId, ElementRect>,
    anchors: HashMap<String, ElementRect>,
    width: f32,
    height: f32,
}

impl PageLayout {
    pub fn rect(&self, id: &ElementId) -> Option<ElementRect> {
        self.rects.get(id).copied()
    }

    /// Rectangle of the element carrying `id="<anchor>"`.
    pub fn anchor(&self, anchor: &str) -> Option<ElementRect> {
        self.anchors.get(anchor).copied()
    }

    pub fn anchors(&self) -> impl Iterator<Item = (&str, &ElementRect)> {
        self.anchors.iter().map(|(name, rect)| (name.as_str(), rect))
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Total document height.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn key_count(&self) -> usize {
        self.rects.len()
    }

    /// Registry with every keyed element mounted at its estimated rectangle.
    pub fn registry(&self) -> ElementRegistry {
        self.rects.iter().map(|(id, rect)| (id.clone(), *rect)).collect()
    }
}

/// Lay out `root` for a viewport `viewport_width` pixels wide.
pub fn layout_page(root: &Element, viewport_width: f32) -> Result<PageLayout, LayoutError> {
    if viewport_width.is_nan() || viewport_width <= 0.0 {
        return Err(LayoutError::InvalidWidth(viewport_width));
    }

    let mut builder = TreeBuilder::new();
    let root_node = builder.build(root, None)?;
    let mut root_style = builder.taffy.style(root_node)?.clone();
    root_style.size.width = Dimension::Length(viewport_width);
    builder.taffy.set_style(root_node, root_style)?;

    builder.taffy.compute_layout_with_measure(
        root_node,
        Size {
            width: AvailableSpace::Definite(viewport_width),
            height: AvailableSpace::MaxContent,
        },
        |known, available_space, _node, context, _style| match context {
            Some(block) => measure_text(block, known, available_space),
            None => Size::ZERO,
        },
    )?;

    let mut layout = PageLayout {
        width: viewport_width,
        ..PageLayout::default()
    };
    builder.collect(root_node, 0.0, 0.0, &mut layout)?;
    layout.height = builder.taffy.layout(root_node)?.size.height;

    debug!(
        nodes = builder.taffy.total_node_count(),
        keys = layout.rects.len(),
        height = layout.height,
        "page layout computed"
    );
    Ok(layout)
}

struct TreeBuilder {
    taffy: TaffyTree<TextBlock>,
    keys: HashMap<NodeId, Vec<ElementId>>,
    anchors: HashMap<NodeId, String>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            keys: HashMap::new(),
            anchors: HashMap::new(),
        }
    }

    /// Build the subtree for `element`. `column_share` is the fraction of the
    /// parent row this element occupies, when the parent is a row.
    fn build(&mut self, element: &Element, column_share: Option<f32>) -> Result<NodeId, LayoutError> {
        let mut style = block_style(element);
        if let Some(share) = column_share {
            style.size.width = Dimension::Percent(share);
            style.flex_shrink = 0.0;
        }

        let node = if element.is_text_leaf() {
            let block = TextBlock {
                text: element.text_content(),
                font_size: font_size(&element.tag),
            };
            let node = self.taffy.new_leaf_with_context(style, block)?;
            // Inline descendants have no box of their own.
            element.walk(&mut |inner| {
                if let Some(id) = inner.key_id() {
                    self.keys.entry(node).or_default().push(id.clone());
                }
            });
            node
        } else {
            let share = match element.flow {
                Flow::Row { columns } => Some(1.0 / columns as f32),
                _ => None,
            };
            let mut children = Vec::new();
            let mut run: Vec<&Node> = Vec::new();
            for child in &element.children {
                match child {
                    Node::Element(inner) if inner.flow != Flow::Inline => {
                        if !run.is_empty() {
                            children.push(self.text_run(&run, &element.tag)?);
                            run.clear();
                        }
                        children.push(self.build(inner, share)?);
                    }
                    _ => run.push(child),
                }
            }
            if !run.is_empty() {
                children.push(self.text_run(&run, &element.tag)?);
            }

            let node = if children.is_empty() {
                self.taffy.new_leaf(style)?
            } else {
                self.taffy.new_with_children(style, &children)?
            };
            if let Some(id) = element.key_id() {
                self.keys.entry(node).or_default().push(id.clone());
            }
            node
        };

        if let Some(anchor) = element.get_attr("id") {
            self.anchors.insert(node, anchor.to_string());
        }
        Ok(node)
    }

    /// Anonymous text leaf for a run of inline content inside a block.
    fn text_run(&mut self, run: &[&Node], parent_tag: &str) -> Result<NodeId, LayoutError> {
        let mut text = String::new();
        let mut keys = Vec::new();
        for node in run {
            match node {
                Node::Text(value) => text.push_str(value),
                Node::Element(inline) => {
                    text.push_str(&inline.text_content());
                    inline.walk(&mut |inner| {
                        if let Some(id) = inner.key_id() {
                            keys.push(id.clone());
                        }
                    });
                }
            }
        }
        let block = TextBlock {
            text,
            font_size: font_size(parent_tag),
        };
        let node = self.taffy.new_leaf_with_context(Style::default(), block)?;
        if !keys.is_empty() {
            self.keys.insert(node, keys);
        }
        Ok(node)
    }

    /// Accumulate parent-relative taffy positions into document rectangles.
    fn collect(&self, node: NodeId, origin_x: f32, origin_y: f32, out: &mut PageLayout) -> Result<(), LayoutError> {
        let layout = self.taffy.layout(node)?;
        let x = origin_x + layout.location.x;
        let y = origin_y + layout.location.y;
        let rect = ElementRect::new(x, y, layout.size.width, layout.size.height);

        if let Some(keys) = self.keys.get(&node) {
            for key in keys {
                out.rects.insert(key.clone(), rect);
            }
        }
        if let Some(anchor) = self.anchors.get(&node) {
            out.anchors.insert(anchor.clone(), rect);
        }

        for child in self.taffy.children(node)? {
            self.collect(child, x, y, out)?;
        }
        Ok(())
    }
}

fn block_style(element: &Element) -> Style {
    let (vertical, horizontal) = padding(element);
    let (direction, wrap, gap) = match element.flow {
        Flow::Row { .. } => (
            FlexDirection::Row,
            FlexWrap::Wrap,
            Size {
                width: LengthPercentage::Length(0.0),
                height: LengthPercentage::Length(ROW_GAP),
            },
        ),
        Flow::Block | Flow::Inline => (
            FlexDirection::Column,
            FlexWrap::NoWrap,
            Size {
                width: LengthPercentage::Length(0.0),
                height: LengthPercentage::Length(BLOCK_GAP),
            },
        ),
    };

    Style {
        display: Display::Flex,
        flex_direction: direction,
        flex_wrap: wrap,
        gap,
        padding: taffy::Rect {
            left: LengthPercentage::Length(horizontal),
            right: LengthPercentage::Length(horizontal),
            top: LengthPercentage::Length(vertical),
            bottom: LengthPercentage::Length(vertical),
        },
        size: Size {
            width: element.width.map_or(Dimension::Auto, Dimension::Length),
            height: element.height.map_or(Dimension::Auto, Dimension::Length),
        },
        ..Default::default()
    }
}

/// Vertical and horizontal padding for an element.
fn padding(element: &Element) -> (f32, f32) {
    let has_class = |needle: &str| element.classes.iter().any(|class| class.contains(needle));
    match element.tag.as_str() {
        "section" => (96.0, 32.0),
        "nav" => (16.0, 32.0),
        "footer" => (32.0, 32.0),
        "article" | "blockquote" => (24.0, 24.0),
        "td" | "th" => (16.0, 12.0),
        _ if has_class("card") || has_class("panel") || has_class("fact") => (24.0, 24.0),
        _ if has_class("button") || has_class("badge") || has_class("pill") => (10.0, 16.0),
        _ => (0.0, 0.0),
    }
}

fn font_size(tag: &str) -> f32 {
    match tag {
        "h1" => 56.0,
        "h2" => 40.0,
        "h3" => 24.0,
        "h4" => 18.0,
        "blockquote" => 20.0,
        "cite" => 18.0,
        "li" | "td" | "th" | "span" | "small" => 14.0,
        _ => 16.0,
    }
}

/// Greedy word wrap by character count.
fn wrap_lines(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let max_chars = (max_width / (font_size * AVG_CHAR_WIDTH)).floor() as usize;
    if max_chars == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > max_chars {
            let rest = chars.split_off(max_chars);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        current = chars.into_iter().collect();
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn measure_text(block: &TextBlock, known: Size<Option<f32>>, available: Size<AvailableSpace>) -> Size<f32> {
    let font_size = block.font_size;
    let available_width = known
        .width
        .or(match available.width {
            AvailableSpace::Definite(width) => Some(width),
            _ => None,
        })
        .map(|width| width.max(0.0));

    let mut line_count = 0usize;
    let mut longest = 0usize;
    for (index, paragraph) in block.text.split('\n').enumerate() {
        let lines = match available_width {
            Some(width) => wrap_lines(paragraph, width, font_size),
            None => vec![paragraph.trim().to_string()],
        };
        longest = longest.max(lines.iter().map(|line| line.chars().count()).max().unwrap_or(0));
        // An explicit break always starts a new line, even when empty.
        line_count += lines.len().max(usize::from(index > 0));
    }
    let line_count = line_count.max(1);

    let line_height = font_size * LINE_HEIGHT_FACTOR;
    let height = font_size * 0.8 + font_size * 0.2 + (line_count - 1) as f32 * line_height;
    let width = available_width.unwrap_or(longest as f32 * font_size * AVG_CHAR_WIDTH);

    Size {
        width: width.max(0.0),
        height: height.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lines_by_character_budget() {
        // 16px * 0.55 = 8.8px per char; 90px fits 10 chars.
        let lines = wrap_lines("Joint mortar for coastal sites", 90.0, 16.0);
        assert_eq!(lines, vec!["Joint", "mortar for", "coastal", "sites"]);
        assert!(wrap_lines("anything", 1.0, 16.0).is_empty());
        assert_eq!(wrap_lines("abcdefghijklmnop", 90.0, 16.0), vec!["abcdefghij", "klmnop"]);
    }

    #[test]
    fn test_measure_grows_with_text() {
        let available = Size {
            width: AvailableSpace::Definite(200.0),
            height: AvailableSpace::MaxContent,
        };
        let short = TextBlock {
            text: "Short".into(),
            font_size: 16.0,
        };
        let long = TextBlock {
            text: "A much longer paragraph that certainly needs several lines at this width".into(),
            font_size: 16.0,
        };
        let short_size = measure_text(&short, Size::NONE, available);
        let long_size = measure_text(&long, Size::NONE, available);
        assert_eq!(short_size.height, 16.0);
        assert!(long_size.height > short_size.height);
        assert_eq!(long_size.width, 200.0);
    }

    #[test]
    fn test_layout_stacks_blocks_and_records_keys() {
        let root = Element::new("body")
            .child(
                Element::new("section")
                    .id("first")
                    .child(Element::new("h2").reveal(ElementId::new("first.title.main")).text("First")),
            )
            .child(
                Element::new("section")
                    .id("second")
                    .child(Element::new("p").reveal(ElementId::new("second.copy.main")).text("Second")),
            );

        let layout = layout_page(&root, 800.0).expect("layout");
        let first = layout.anchor("first").expect("first anchor");
        let second = layout.anchor("second").expect("second anchor");
        assert!(second.top() >= first.bottom());

        let title = layout.rect(&ElementId::new("first.title.main")).expect("title rect");
        assert!(title.top() >= first.top() + 96.0);
        assert!(title.height > 0.0);
        assert_eq!(layout.key_count(), 2);
        assert!(layout.height() >= second.bottom());
        assert_eq!(layout.registry().len(), 2);
    }

    #[test]
    fn test_row_children_split_width() {
        let root = Element::new("div")
            .row(2)
            .child(Element::new("div").reveal(ElementId::new("grid.cell.a")).text("a"))
            .child(Element::new("div").reveal(ElementId::new("grid.cell.b")).text("b"));

        let layout = layout_page(&root, 1000.0).expect("layout");
        let a = layout.rect(&ElementId::new("grid.cell.a")).expect("a");
        let b = layout.rect(&ElementId::new("grid.cell.b")).expect("b");
        assert_eq!(a.width, 500.0);
        assert_eq!(b.x, 500.0);
        assert_eq!(a.y, b.y);
    }

    #[test]
    fn test_inline_keys_share_leaf_rect() {
        let root = Element::new("h1")
            .child(Element::new("span").reveal(ElementId::new("hero.char.0")).text("A"))
            .child(Element::new("span").reveal(ElementId::new("hero.char.1")).text("B"));
        let layout = layout_page(&root, 600.0).expect("layout");
        assert_eq!(
            layout.rect(&ElementId::new("hero.char.0")),
            layout.rect(&ElementId::new("hero.char.1"))
        );
    }

    #[test]
    fn test_rejects_empty_viewport() {
        assert!(matches!(
            layout_page(&Element::new("body"), 0.0),
            Err(LayoutError::InvalidWidth(_))
        ));
    }
}
