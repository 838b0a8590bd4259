use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, header_batch, section_header, section_shell};
use crate::content::Product;
use crate::content::products::{BADGE, CATALOG, CTA, HIGHLIGHTS, LEAD, TITLE};
use crate::markup::Element;

pub const NAME: &str = "products";

fn highlight_id(label: &str) -> ElementId {
    ElementId::scoped(NAME, "highlight", label)
}

fn card_id(product: &Product) -> ElementId {
    ElementId::scoped(NAME, "card", product.name)
}

fn product_card(product: &Product) -> Element {
    let features = product.features.iter().map(|feature| {
        Element::new("li")
            .child(Element::icon("CheckCircle2", 16.0))
            .child(Element::new("span").block().text(feature))
    });

    Element::new("article")
        .class("product-card")
        .reveal(card_id(product))
        .child(
            Element::new("div")
                .class("card-head")
                .row(2)
                .child(Element::new("h3").text(product.name))
                .child(Element::new("span").class("weight").block().text(product.weight)),
        )
        .child(Element::new("p").text(product.description))
        .child(Element::new("ul").class("product-features").children(features))
        .child(
            Element::new("a")
                .class("button button-primary")
                .attr("href", "#contact")
                .block()
                .text(CTA),
        )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Products;

impl Section for Products {
    fn name(&self) -> &'static str {
        NAME
    }

    fn anchor(&self) -> Option<&'static str> {
        Some(NAME)
    }

    fn render(&self) -> Element {
        let highlights = HIGHLIGHTS.iter().map(|highlight| {
            Element::new("div")
                .class("highlight")
                .reveal(highlight_id(highlight.label))
                .child(Element::new("p").class("highlight-label").text(highlight.label))
                .child(Element::new("p").text(highlight.copy))
        });

        section_shell(NAME, Some(NAME), "products")
            .child(section_header(NAME, BADGE, TITLE, LEAD))
            .child(Element::new("div").class("highlights").row(3).children(highlights))
            .child(Element::new("div").class("product-grid").row(3).children(CATALOG.iter().map(product_card)))
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let highlights = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 20.0))
            .duration(1000.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(80.0));

        let cards = RevealPreset::new(
            StyleFrame::IDENTITY
                .opacity(0.0)
                .translate(0.0, 80.0)
                .rotate_x(-15.0)
                .scale(0.9),
        )
        .duration(800.0)
        .easing(EasingFunction::PowerOut { power: 3 })
        .stagger(Stagger::every(100.0));

        vec![
            header_batch(NAME),
            RevealBatch::new(NAME, "highlights", Trigger::scroll(TriggerStart::top(85.0)), highlights)
                .members(HIGHLIGHTS.iter().map(|highlight| highlight_id(highlight.label))),
            RevealBatch::new(NAME, "cards", Trigger::scroll(TriggerStart::top(85.0)), cards)
                .members(CATALOG.iter().map(card_id))
                .individually()
                .replay(ReplayPolicy::PlayAndReverse),
        ]
    }
}
