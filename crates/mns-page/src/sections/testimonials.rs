use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, section_shell, spun_out};
use crate::content::testimonials::{AUTHOR, AUTHOR_ROLE, AVATAR, LEAD, QUOTE, STARS, TITLE};
use crate::markup::Element;

pub const NAME: &str = "testimonials";

fn card_id() -> ElementId {
    ElementId::scoped(NAME, "card", "main")
}

fn quote_id() -> ElementId {
    ElementId::scoped(NAME, "quote", "main")
}

fn star_id(index: usize) -> ElementId {
    ElementId::scoped(NAME, "star", &index.to_string())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Testimonials;

impl Section for Testimonials {
    fn name(&self) -> &'static str {
        NAME
    }

    fn anchor(&self) -> Option<&'static str> {
        Some(NAME)
    }

    fn render(&self) -> Element {
        let stars = (0..STARS).map(|index| Element::icon("Star", 20.0).reveal(star_id(index)));

        section_shell(NAME, Some(NAME), "testimonials")
            .child(
                Element::new("div")
                    .class("section-heading")
                    .child(Element::new("h2").text(TITLE))
                    .child(Element::new("p").class("lead").text(LEAD)),
            )
            .child(
                Element::new("div")
                    .class("review-card")
                    .reveal(card_id())
                    .child(
                        Element::new("div")
                            .class("quote-icon")
                            .reveal(quote_id())
                            .child(Element::icon("Quote", 48.0)),
                    )
                    .child(Element::new("div").class("stars").row(STARS).children(stars))
                    .child(Element::new("blockquote").text(&format!("\"{QUOTE}\"")))
                    .child(
                        Element::new("div")
                            .class("author")
                            .row(2)
                            .child(Element::new("img").attr("src", AVATAR).attr("alt", AUTHOR).size(56.0, 56.0))
                            .child(
                                Element::new("div")
                                    .child(Element::new("cite").block().text(AUTHOR))
                                    .child(Element::new("p").class("role").text(AUTHOR_ROLE)),
                            ),
                    ),
            )
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let card = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 100.0).scale(0.9))
            .duration(1000.0)
            .easing(EasingFunction::OutBack { overshoot: 1.2 });

        let quote = RevealPreset::new(spun_out().opacity(0.0))
            .duration(1000.0)
            .easing(EasingFunction::out_elastic(1.0, 0.6));

        let stars = RevealPreset::new(spun_out().opacity(0.0))
            .duration(600.0)
            .easing(EasingFunction::out_elastic(1.0, 0.8))
            .stagger(Stagger::starting_at(400.0, 100.0));

        vec![
            RevealBatch::new(NAME, "card", Trigger::scroll(TriggerStart::top(80.0)), card)
                .member(card_id())
                .replay(ReplayPolicy::PlayAndReverse),
            RevealBatch::new(NAME, "quote", Trigger::scroll(TriggerStart::top(80.0)), quote).member(quote_id()),
            RevealBatch::new(NAME, "stars", Trigger::anchored(TriggerStart::top(75.0), card_id()), stars)
                .members((0..STARS).map(star_id)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_follow_the_card() {
        let batches = Testimonials.reveal_batches();
        let stars = batches.iter().find(|batch| batch.id == "testimonials.stars").expect("stars batch");
        assert_eq!(stars.members.len(), STARS);
        assert_eq!(
            stars.trigger,
            Trigger::anchored(TriggerStart::top(75.0), card_id())
        );
        assert_eq!(stars.preset.stagger.delay_for(0), 400.0);
        assert_eq!(stars.preset.stagger.delay_for(4), 800.0);
    }
}
