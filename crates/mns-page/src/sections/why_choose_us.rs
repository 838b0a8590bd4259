use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, header_batch, section_header, section_shell, spun_out};
use crate::content::why_choose_us::{BADGE, BADGES, FEATURES, LEAD, TITLE};
use crate::markup::Element;

pub const NAME: &str = "why-choose-us";

fn badge_id(label: &str) -> ElementId {
    ElementId::scoped(NAME, "badge", label)
}

fn card_id(title: &str) -> ElementId {
    ElementId::scoped(NAME, "card", title)
}

fn icon_id(title: &str) -> ElementId {
    ElementId::scoped(NAME, "icon", title)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhyChooseUs;

impl Section for WhyChooseUs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn anchor(&self) -> Option<&'static str> {
        Some(NAME)
    }

    fn render(&self) -> Element {
        let badges = BADGES
            .iter()
            .map(|label| Element::new("div").class("badge").reveal(badge_id(label)).text(label));

        let cards = FEATURES.iter().map(|feature| {
            Element::new("article")
                .class("feature-card")
                .reveal(card_id(feature.title))
                .child(
                    Element::new("div")
                        .class("feature-icon")
                        .reveal(icon_id(feature.title))
                        .child(Element::icon(feature.icon, 32.0)),
                )
                .child(Element::new("h3").text(feature.title))
                .child(Element::new("p").text(feature.description))
        });

        section_shell(NAME, Some(NAME), "why-choose-us")
            .child(
                section_header(NAME, BADGE, TITLE, LEAD)
                    .child(Element::new("div").class("badges").row(3).children(badges)),
            )
            .child(Element::new("div").class("feature-grid").row(3).children(cards))
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let badges = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 20.0).scale(0.9))
            .duration(1000.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(80.0));

        let cards = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 60.0).scale(0.8))
            .duration(700.0)
            .easing(EasingFunction::PowerOut { power: 2 })
            .stagger(Stagger::every(150.0));

        let icons = RevealPreset::new(spun_out().opacity(0.0))
            .duration(800.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(100.0));

        vec![
            header_batch(NAME),
            RevealBatch::new(NAME, "badges", Trigger::scroll(TriggerStart::top(85.0)), badges)
                .members(BADGES.iter().map(|label| badge_id(label))),
            RevealBatch::new(NAME, "cards", Trigger::scroll(TriggerStart::top(85.0)), cards)
                .members(FEATURES.iter().map(|feature| card_id(feature.title)))
                .individually()
                .replay(ReplayPolicy::PlayAndReverse),
            RevealBatch::new(NAME, "icons", Trigger::scroll(TriggerStart::top(80.0)), icons)
                .members(FEATURES.iter().map(|feature| icon_id(feature.title)))
                .individually(),
        ]
    }
}
