use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, section_shell, spun_out};
use crate::content::ContactCard;
use crate::content::contact::{BADGES, CARDS, LEAD, MAP_TITLE, MAP_URL, TITLE, WHATSAPP_LABEL, WHATSAPP_URL};
use crate::markup::Element;

pub const NAME: &str = "contact";

/// Height of the embedded map.
pub const MAP_HEIGHT: f32 = 400.0;

fn badge_id(label: &str) -> ElementId {
    ElementId::scoped(NAME, "badge", label)
}

fn card_id(card: &ContactCard) -> ElementId {
    ElementId::scoped(NAME, "card", card.key)
}

fn icon_id(card: &ContactCard) -> ElementId {
    ElementId::scoped(NAME, "icon", card.key)
}

fn whatsapp_id() -> ElementId {
    ElementId::scoped(NAME, "whatsapp", "main")
}

fn contact_card(card: &ContactCard) -> Element {
    let mut body = Element::new("div").child(Element::new("h3").text(card.heading));
    for link in card.links {
        body = body.child(Element::new("p").child(Element::new("a").attr("href", link.href).text(link.label)));
    }
    if !card.lines.is_empty() {
        let mut address = Element::new("p");
        for (index, line) in card.lines.iter().enumerate() {
            if index > 0 {
                address = address.child(Element::new("br"));
            }
            address = address.text(line);
        }
        body = body.child(address);
    }

    Element::new("div")
        .class("contact-card")
        .reveal(card_id(card))
        .row(2)
        .child(
            Element::new("div")
                .class("contact-icon")
                .reveal(icon_id(card))
                .child(Element::icon(card.icon, 24.0)),
        )
        .child(body)
}

/// Contact details, WhatsApp CTA and the map embed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Contact;

impl Section for Contact {
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

        section_shell(NAME, Some(NAME), "contact")
            .child(
                Element::new("div")
                    .class("section-heading")
                    .child(Element::new("h2").text(TITLE))
                    .child(Element::new("p").class("lead").text(LEAD))
                    .child(Element::new("div").class("badges").row(3).children(badges)),
            )
            .child(
                Element::new("div")
                    .class("contact-layout")
                    .row(2)
                    .child(
                        Element::new("div")
                            .class("contact-cards")
                            .children(CARDS.iter().map(contact_card))
                            .child(
                                Element::new("a")
                                    .class("button button-whatsapp")
                                    .attr("href", WHATSAPP_URL)
                                    .attr("target", "_blank")
                                    .attr("rel", "noopener noreferrer")
                                    .reveal(whatsapp_id())
                                    .block()
                                    .child(Element::icon("MessageCircle", 20.0))
                                    .text(WHATSAPP_LABEL),
                            ),
                    )
                    .child(
                        Element::new("div").class("map").child(
                            Element::new("iframe")
                                .attr("title", MAP_TITLE)
                                .attr("src", MAP_URL)
                                .attr("loading", "lazy")
                                .attr("referrerpolicy", "no-referrer-when-downgrade")
                                .attr("allowfullscreen", "")
                                .height(MAP_HEIGHT),
                        ),
                    ),
            )
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let badges = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 20.0))
            .duration(1000.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(100.0));

        let cards = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(-50.0, 0.0).scale(0.9))
            .duration(600.0)
            .easing(EasingFunction::PowerOut { power: 2 })
            .stagger(Stagger::every(150.0));

        // Icons keep their opacity and only spin in.
        let icons = RevealPreset::new(spun_out())
            .duration(800.0)
            .easing(EasingFunction::out_elastic(1.0, 0.6))
            .stagger(Stagger::every(150.0));

        let whatsapp = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 30.0).scale(0.8))
            .duration(800.0)
            .easing(EasingFunction::OutBack { overshoot: 1.4 });

        vec![
            RevealBatch::new(NAME, "badges", Trigger::scroll(TriggerStart::top(85.0)), badges)
                .members(BADGES.iter().map(|label| badge_id(label))),
            RevealBatch::new(NAME, "cards", Trigger::scroll(TriggerStart::top(85.0)), cards)
                .members(CARDS.iter().map(card_id))
                .individually()
                .replay(ReplayPolicy::PlayAndReverse),
            RevealBatch::new(NAME, "icons", Trigger::scroll(TriggerStart::top(85.0)), icons)
                .members(CARDS.iter().map(icon_id))
                .individually(),
            RevealBatch::new(NAME, "whatsapp", Trigger::scroll(TriggerStart::top(90.0)), whatsapp)
                .member(whatsapp_id())
                .replay(ReplayPolicy::PlayAndReverse),
        ]
    }
}
