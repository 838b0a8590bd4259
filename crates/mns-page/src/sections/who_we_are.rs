use mns_motion::{EasingFunction, ElementId, ReplayPolicy, RevealBatch, RevealPreset, Stagger, StyleFrame, Trigger, TriggerStart};

use super::{Section, pill, root_id, section_shell};
use crate::content::who_we_are::{
    BACKGROUND, BACKGROUND_TITLE, BADGE, LEAD, MILESTONES, MISSION_GOALS, MISSION_IMAGE, MISSION_KICKER,
    MISSION_TITLE, STATS, TITLE,
};
use crate::markup::Element;

pub const NAME: &str = "who-we-are";

fn badge_id() -> ElementId {
    ElementId::scoped(NAME, "badge", "main")
}

fn milestone_id(year: &str) -> ElementId {
    ElementId::scoped(NAME, "milestone", year)
}

fn stat_id(label: &str) -> ElementId {
    ElementId::scoped(NAME, "stat", label)
}

fn mission_id(title: &str) -> ElementId {
    ElementId::scoped(NAME, "mission", title)
}

/// Company story: mission goals, milestones and headline figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhoWeAre;

impl Section for WhoWeAre {
    fn name(&self) -> &'static str {
        NAME
    }

    fn anchor(&self) -> Option<&'static str> {
        Some(NAME)
    }

    fn render(&self) -> Element {
        let goals = MISSION_GOALS.iter().map(|goal| {
            Element::new("li")
                .class("mission-goal")
                .child(
                    Element::new("div")
                        .class("mission-icon")
                        .reveal(mission_id(goal.title))
                        .child(Element::icon(goal.icon, 24.0)),
                )
                .child(
                    Element::new("div")
                        .child(Element::new("h4").text(goal.title))
                        .child(Element::new("p").text(goal.description)),
                )
        });

        let milestones = MILESTONES.iter().map(|milestone| {
            Element::new("div")
                .class("milestone")
                .reveal(milestone_id(milestone.year))
                .child(Element::new("span").class("milestone-year").block().text(milestone.year))
                .child(
                    Element::new("div")
                        .child(Element::new("p").class("milestone-title").text(milestone.title))
                        .child(Element::new("p").text(milestone.description)),
                )
        });

        let stats = STATS.iter().map(|stat| {
            Element::new("div")
                .class("stat")
                .reveal(stat_id(stat.label))
                .child(Element::new("span").class("stat-label").block().text(stat.label))
                .child(Element::new("p").class("stat-value").text(stat.value))
        });

        section_shell(NAME, Some(NAME), "who-we-are")
            .child(
                Element::new("div")
                    .class("section-heading")
                    .child(pill("Sparkles", BADGE).reveal(badge_id()))
                    .child(Element::new("h2").text(TITLE))
                    .child(Element::new("p").class("lead").text(LEAD)),
            )
            .child(
                Element::new("div")
                    .class("mission-panel")
                    .child(
                        Element::new("div")
                            .class("mission-header")
                            .child(Element::icon("Target", 32.0))
                            .child(
                                Element::new("div")
                                    .child(Element::new("p").class("kicker").text(MISSION_KICKER))
                                    .child(Element::new("h3").text(MISSION_TITLE)),
                            ),
                    )
                    .child(Element::new("ul").class("mission-goals").row(3).children(goals)),
            )
            .child(
                Element::new("div")
                    .class("story")
                    .row(2)
                    .child(
                        Element::new("div")
                            .class("story-card")
                            .child(
                                Element::new("div")
                                    .class("story-heading")
                                    .child(Element::icon("History", 24.0))
                                    .child(Element::new("h3").text(BACKGROUND_TITLE)),
                            )
                            .child(Element::new("p").text(BACKGROUND))
                            .child(Element::new("div").class("milestones").children(milestones))
                            .child(Element::new("div").class("story-stats").row(3).children(stats)),
                    )
                    .child(
                        Element::new("div").class("mission-image").child(
                            Element::new("img")
                                .attr("src", MISSION_IMAGE.0)
                                .attr("alt", MISSION_IMAGE.1)
                                .attr("loading", "lazy")
                                .height(480.0),
                        ),
                    ),
            )
    }

    fn reveal_batches(&self) -> Vec<RevealBatch> {
        let badge = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 20.0).scale(0.9))
            .duration(800.0)
            .easing(EasingFunction::PowerOut { power: 3 });

        let milestones = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 40.0).scale(0.95))
            .duration(900.0)
            .easing(EasingFunction::OutExpo)
            .stagger(Stagger::every(100.0));

        let stats = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(0.0, 30.0).scale(0.9))
            .duration(1000.0)
            .easing(EasingFunction::out_back())
            .stagger(Stagger::every(120.0));

        let mission = RevealPreset::new(StyleFrame::IDENTITY.opacity(0.0).translate(20.0, 0.0))
            .duration(1000.0)
            .easing(EasingFunction::out_quad())
            .stagger(Stagger::every(80.0));

        let near_bottom = Trigger::scroll(TriggerStart::top(85.0));
        vec![
            RevealBatch::new(NAME, "badge", Trigger::anchored(TriggerStart::top(80.0), root_id(NAME)), badge)
                .member(badge_id())
                .replay(ReplayPolicy::PlayAndReverse),
            RevealBatch::new(NAME, "mission", near_bottom.clone(), mission)
                .members(MISSION_GOALS.iter().map(|goal| mission_id(goal.title))),
            RevealBatch::new(NAME, "milestones", near_bottom.clone(), milestones)
                .members(MILESTONES.iter().map(|milestone| milestone_id(milestone.year))),
            RevealBatch::new(NAME, "stats", near_bottom, stats).members(STATS.iter().map(|stat| stat_id(stat.label))),
        ]
    }
}
