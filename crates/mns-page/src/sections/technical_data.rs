use mns_motion::{EasingFunction, ElementId, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, pill, section_shell};
use crate::content::technical_data::{BADGE, COLUMNS, LEAD, QUICK_FACTS, ROWS, TITLE};
use crate::markup::Element;

pub const NAME: &str = "technical-data";

fn fact_id(title: &str) -> ElementId {
    ElementId::scoped(NAME, "fact", title)
}

fn row_id(property: &str) -> ElementId {
    ElementId::scoped(NAME, "row", property)
}

/// Lab results: quick facts and the test table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechnicalData;

impl Section for TechnicalData {
    fn name(&self) -> &'static str {
        NAME
    }

    fn anchor(&self) -> Option<&'static str> {
        Some(NAME)
    }

    fn render(&self) -> Element {
        let facts = QUICK_FACTS.iter().map(|fact| {
            Element::new("div")
                .class("quick-fact")
                .reveal(fact_id(fact.title))
                .child(Element::icon(fact.icon, 24.0))
                .child(Element::new("p").class("fact-title").text(fact.title))
                .child(Element::new("p").class("fact-value").text(fact.value))
                .child(Element::new("p").class("fact-sub").text(fact.sub))
        });

        let header = Element::new("tr")
            .row(COLUMNS.len())
            .children(COLUMNS.iter().map(|column| Element::new("th").text(column)));
        let rows = ROWS.iter().map(|row| {
            Element::new("tr")
                .reveal(row_id(row.property))
                .row(COLUMNS.len())
                .child(Element::new("td").class("property").text(row.property))
                .child(Element::new("td").text(row.method))
                .child(Element::new("td").class("result").text(row.result))
        });

        section_shell(NAME, Some(NAME), "technical-data")
            .child(
                Element::new("div")
                    .class("section-heading")
                    .child(pill("FlaskConical", BADGE))
                    .child(Element::new("h2").text(TITLE))
                    .child(Element::new("p").class("lead").text(LEAD)),
            )
            .child(Element::new("div").class("quick-facts").row(3).children(facts))
            .child(
                Element::new("div").class("table-wrap").child(
                    Element::new("table")
                        .child(Element::new("thead").child(header))
                        .child(Element::new("tbody").children(rows)),
                ),
            )
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let facts = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 20.0).scale(0.95))
            .duration(1000.0)
            .easing(EasingFunction::out_back())
            .stagger(Stagger::every(100.0));

        let rows = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(-30.0, 0.0))
            .duration(1000.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(80.0));

        vec![
            RevealBatch::new(NAME, "facts", Trigger::scroll(TriggerStart::top(90.0)), facts)
                .members(QUICK_FACTS.iter().map(|fact| fact_id(fact.title))),
            RevealBatch::new(NAME, "rows", Trigger::scroll(TriggerStart::top(90.0)), rows)
                .members(ROWS.iter().map(|row| row_id(row.property))),
        ]
    }
}
