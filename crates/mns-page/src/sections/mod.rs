//! Page sections.
//!
//! A section is a pure function of its compiled-in content: it renders a
//! markup tree and declares the reveal batches, draggable cards and parallax
//! layers that reference keys inside that tree. Sections never look at each
//! other; the page runtime wires them to the shared orchestrator.

mod contact;
mod footer;
mod hero;
mod navbar;
mod products;
mod technical_data;
mod testimonials;
mod who_we_are;
mod why_choose_us;

pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::{Navbar, bar_id as navbar_id};
pub use products::Products;
pub use technical_data::TechnicalData;
pub use testimonials::Testimonials;
pub use who_we_are::WhoWeAre;
pub use why_choose_us::WhyChooseUs;

use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, StyleFrame, Trigger, TriggerStart};

use crate::markup::Element;

pub trait Section {
    /// Section name; the first segment of every key the section owns.
    fn name(&self) -> &'static str;

    /// In-page anchor (`id` attribute) of the section root, if it has one.
    fn anchor(&self) -> Option<&'static str> {
        None
    }

    fn render(&self) -> Element;

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        Vec::new()
    }

    fn draggables(&self) -> Vec<ElementId> {
        Vec::new()
    }

    /// Background layer that trails the scroll position.
    fn parallax(&self) -> Option<ElementId> {
        None
    }
}

/// Key of a section's root element.
pub(crate) fn root_id(section: &str) -> ElementId {
    ElementId::scoped(section, "section", "root")
}

/// `<section>` wrapper carrying the anchor and a root key.
pub(crate) fn section_shell(section: &str, anchor: Option<&str>, class: &str) -> Element {
    let shell = Element::new("section").class(class).keyed(root_id(section));
    match anchor {
        Some(anchor) => shell.id(anchor),
        None => shell,
    }
}

/// Pill badge with an icon, as used at the top of section headings.
pub(crate) fn pill(icon: &str, label: &str) -> Element {
    Element::new("div")
        .class("pill")
        .child(Element::icon(icon, 16.0))
        .child(Element::new("span").text(label))
}

/// Heading shared by the catalog-style sections: badge, title and lead.
pub(crate) fn section_header(section: &str, badge: &str, title: &str, lead: &str) -> Element {
    Element::new("div")
        .class("section-header")
        .reveal(header_id(section))
        .child(pill("Sparkles", badge))
        .child(Element::new("h2").text(title))
        .child(Element::new("p").class("lead").text(lead))
}

pub(crate) fn header_id(section: &str) -> ElementId {
    ElementId::scoped(section, "header", "main")
}

/// Header entrance used by the catalog-style sections.
pub(crate) fn header_batch(section: &str) -> RevealBatch {
    let preset = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 50.0))
        .duration(1000.0)
        .easing(EasingFunction::PowerOut { power: 2 });
    RevealBatch::new(section, "header", Trigger::scroll(TriggerStart::top(80.0)), preset)
        .member(header_id(section))
        .replay(ReplayPolicy::PlayAndReverse)
}

/// Hidden frame of icons that spin in from nothing.
pub(crate) fn spun_out() -> StyleFrame {
    StyleFrame::IDENTITY.scale(0.0).rotate(-360.0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::markup::KeyRole;

    fn all_sections() -> Vec<Box<dyn Section>> {
        vec![
            Box::new(Navbar),
            Box::new(Hero),
            Box::new(WhoWeAre),
            Box::new(WhyChooseUs),
            Box::new(Products),
            Box::new(TechnicalData),
            Box::new(Testimonials),
            Box::new(Contact),
            Box::new(Footer::new(2025)),
        ]
    }

    #[test]
    fn test_batch_members_exist_in_rendered_markup() {
        for section in all_sections() {
            let markup = section.render();
            let reveal_keys: HashSet<ElementId> = markup.keys_with_role(KeyRole::Reveal).into_iter().collect();
            for batch in section.reveal_batches() {
                assert_eq!(batch.section, section.name());
                assert!(!batch.members.is_empty(), "{} has no members", batch.id);
                for member in &batch.members {
                    assert!(reveal_keys.contains(member), "{} not rendered by {}", member, section.name());
                    assert_eq!(member.section(), section.name());
                }
                if let Trigger::Scroll { anchor: Some(anchor), .. } = &batch.trigger {
                    assert!(markup.find_key(anchor).is_some(), "missing anchor {anchor}");
                }
            }
        }
    }

    #[test]
    fn test_every_reveal_key_is_claimed_by_exactly_one_batch() {
        for section in all_sections() {
            let markup = section.render();
            let mut claimed = HashSet::new();
            for batch in section.reveal_batches() {
                for member in batch.members {
                    assert!(claimed.insert(member.clone()), "{member} bound twice");
                }
            }
            let rendered: HashSet<ElementId> = markup.keys_with_role(KeyRole::Reveal).into_iter().collect();
            assert_eq!(rendered, claimed, "section {}", section.name());
        }
    }

    #[test]
    fn test_keys_are_unique_across_page() {
        let mut seen = HashSet::new();
        for section in all_sections() {
            section.render().walk(&mut |element| {
                if let Some(id) = element.key_id() {
                    assert!(seen.insert(id.clone()), "duplicate key {id}");
                }
            });
        }
    }

    #[test]
    fn test_anchors_render_as_section_ids() {
        let anchored: Vec<_> = all_sections()
            .iter()
            .filter_map(|section| section.anchor().map(|anchor| (anchor, section.render())))
            .collect();
        let names: Vec<_> = anchored.iter().map(|(anchor, _)| *anchor).collect();
        assert_eq!(
            names,
            ["who-we-are", "why-choose-us", "products", "technical-data", "testimonials", "contact"]
        );
        for (anchor, markup) in anchored {
            assert_eq!(markup.get_attr("id"), Some(anchor));
        }
    }
}
