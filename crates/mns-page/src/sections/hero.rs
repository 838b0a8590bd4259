use mns_motion::{EasingFunction, ElementId, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger};

use super::{Section, section_shell};
use crate::content::hero::{
    ACCENTS, BACKGROUND, HIGHLIGHT, PRIMARY_CTA, SECONDARY_CTA, STATS, SUBTITLE, TITLE,
};
use crate::content::{AccentCard, Stat};
use crate::markup::Element;

pub const NAME: &str = "hero";

fn char_id(index: usize) -> ElementId {
    ElementId::scoped(NAME, "char", &index.to_string())
}

fn cta_id(label: &str) -> ElementId {
    ElementId::scoped(NAME, "cta", label)
}

fn stat_id(stat: &Stat) -> ElementId {
    ElementId::scoped(NAME, "stat", stat.label)
}

fn accent_id(card: &AccentCard) -> ElementId {
    ElementId::scoped(NAME, "accent", card.key)
}

fn background_id() -> ElementId {
    ElementId::scoped(NAME, "background", "main")
}

/// Title split into word spans of per-character spans. Returns the markup and
/// the number of character spans, which are keyed `hero.char.<n>` in reading
/// order.
fn split_title(title: &str) -> (Element, usize) {
    let mut heading = Element::new("h1").class("hero-title");
    let mut index = 0;
    for (word_index, word) in title.split_whitespace().enumerate() {
        if word_index > 0 {
            heading = heading.text(" ");
        }
        let mut word_span = Element::new("span").class("word");
        for ch in word.chars() {
            word_span = word_span.child(
                Element::new("span")
                    .class("char")
                    .reveal(char_id(index))
                    .text(&ch.to_string()),
            );
            index += 1;
        }
        heading = heading.child(word_span);
    }
    (heading, index)
}

fn title_char_count() -> usize {
    TITLE.split_whitespace().map(|word| word.chars().count()).sum()
}

fn cta(label: &str, anchor: &str, class: &str) -> Element {
    Element::new("a")
        .class(class)
        .attr("href", &format!("#{anchor}"))
        .block()
        .text(label)
        .child(Element::icon("ArrowRight", 20.0))
}

fn accent_card(card: &AccentCard) -> Element {
    Element::new("div")
        .class("accent-card")
        .child(Element::new("p").class("accent-label").text(card.label))
        .child(Element::new("p").class("accent-headline").text(card.headline))
        .child(Element::new("p").class("accent-detail").text(card.detail))
}

/// Landing block: animated title, CTAs, stats and draggable accent cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hero;

impl Section for Hero {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render(&self) -> Element {
        let (title, _) = split_title(TITLE);

        let floating = ACCENTS
            .iter()
            .map(|card| accent_card(card).class("floating").draggable(accent_id(card)));
        // Stacked copies for narrow screens; not draggable, not animated.
        let mobile = ACCENTS.iter().map(accent_card);

        let stats = STATS.iter().map(|stat| {
            Element::new("div")
                .class("stat")
                .reveal(stat_id(stat))
                .child(Element::new("p").class("stat-label").text(stat.label))
                .child(Element::new("p").class("stat-value").text(stat.value))
        });

        section_shell(NAME, None, "hero")
            .child(
                Element::new("div")
                    .class("hero-background")
                    .attr("style", &format!("background-image: url('{BACKGROUND}')"))
                    .keyed(background_id()),
            )
            .children(floating)
            .child(
                Element::new("div")
                    .class("hero-content")
                    .child(
                        Element::new("div")
                            .class("hero-highlight")
                            .reveal(ElementId::scoped(NAME, "highlight", "main"))
                            .child(Element::new("span").class("pulse-dot"))
                            .text(HIGHLIGHT),
                    )
                    .child(title)
                    .child(
                        Element::new("p")
                            .class("hero-subtitle")
                            .reveal(ElementId::scoped(NAME, "subtitle", "main"))
                            .text(SUBTITLE),
                    )
                    .child(
                        Element::new("div")
                            .class("hero-actions")
                            .row(2)
                            .child(
                                cta(PRIMARY_CTA.0, PRIMARY_CTA.1, "button button-primary")
                                    .reveal(cta_id(PRIMARY_CTA.0)),
                            )
                            .child(
                                cta(SECONDARY_CTA.0, SECONDARY_CTA.1, "button button-outline")
                                    .reveal(cta_id(SECONDARY_CTA.0)),
                            ),
                    )
                    .child(Element::new("div").class("hero-mobile-cards").row(2).children(mobile))
                    .child(Element::new("div").class("hero-stats").row(3).children(stats)),
            )
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let title = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 40.0).rotate_x(-90.0))
            .duration(1200.0)
            .easing(EasingFunction::OutExpo)
            .stagger(Stagger::every(30.0));

        let highlight = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, -10.0).scale(0.9))
            .duration(800.0)
            .easing(EasingFunction::OutExpo)
            .stagger(Stagger::starting_at(400.0, 0.0));

        // Overlaps the end of the highlight by 200 ms.
        let subtitle = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 30.0))
            .duration(900.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::starting_at(1000.0, 0.0));

        let buttons = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 40.0).scale(0.8))
            .duration(1200.0)
            .easing(EasingFunction::out_elastic(1.0, 0.8))
            .stagger(Stagger::starting_at(1200.0, 150.0));

        let stats = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 30.0).scale(0.95))
            .duration(1000.0)
            .easing(EasingFunction::OutExpo)
            .stagger(Stagger::starting_at(1500.0, 200.0));

        vec![
            RevealBatch::new(NAME, "title", Trigger::OnMount, title).members((0..title_char_count()).map(char_id)),
            RevealBatch::new(NAME, "highlight", Trigger::OnMount, highlight)
                .member(ElementId::scoped(NAME, "highlight", "main")),
            RevealBatch::new(NAME, "subtitle", Trigger::OnMount, subtitle)
                .member(ElementId::scoped(NAME, "subtitle", "main")),
            RevealBatch::new(NAME, "buttons", Trigger::OnMount, buttons)
                .member(cta_id(PRIMARY_CTA.0))
                .member(cta_id(SECONDARY_CTA.0)),
            RevealBatch::new(NAME, "stats", Trigger::OnMount, stats).members(STATS.iter().map(stat_id)),
        ]
    }

    fn draggables(&self) -> Vec<ElementId> {
        ACCENTS.iter().map(accent_id).collect()
    }

    fn parallax(&self) -> Option<ElementId> {
        Some(background_id())
    }
}
