//! Registry of mounted elements and their laid-out rectangles.

use std::collections::HashMap;

use super::geometry::ElementRect;
use super::types::ElementId;

/// Owned collection of mounted elements, indexed by stable identifier.
#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    rects: HashMap<ElementId, ElementRect>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount or move an element.
    pub fn mount(&mut self, id: ElementId, rect: ElementRect) {
        self.rects.insert(id, rect);
    }

    pub fn unmount(&mut self, id: &ElementId) -> Option<ElementRect> {
        self.rects.remove(id)
    }

    /// Unmount every element of a section. Returns how many were removed.
    pub fn unmount_section(&mut self, section: &str) -> usize {
        let before = self.rects.len();
        self.rects.retain(|id, _| id.section() != section);
        before - self.rects.len()
    }

    pub fn rect(&self, id: &ElementId) -> Option<&ElementRect> {
        self.rects.get(id)
    }

    pub fn is_mounted(&self, id: &ElementId) -> bool {
        self.rects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &ElementRect)> {
        self.rects.iter()
    }

    /// Bottom edge of the lowest mounted element.
    pub fn content_height(&self) -> f32 {
        self.rects.values().map(ElementRect::bottom).fold(0.0, f32::max)
    }
}

impl FromIterator<(ElementId, ElementRect)> for ElementRegistry {
    fn from_iter<T: IntoIterator<Item = (ElementId, ElementRect)>>(iter: T) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_and_unmount_section() {
        let mut registry = ElementRegistry::new();
        registry.mount(ElementId::new("products.card.a"), ElementRect::new(0.0, 100.0, 10.0, 10.0));
        registry.mount(ElementId::new("products.card.b"), ElementRect::new(0.0, 200.0, 10.0, 10.0));
        registry.mount(ElementId::new("contact.card.phone"), ElementRect::new(0.0, 900.0, 10.0, 50.0));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.content_height(), 950.0);
        assert_eq!(registry.unmount_section("products"), 2);
        assert!(!registry.is_mounted(&ElementId::new("products.card.a")));
        assert!(registry.is_mounted(&ElementId::new("contact.card.phone")));
    }
}
