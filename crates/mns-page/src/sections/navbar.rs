use mns_motion::ElementId;

use super::Section;
use crate::content::{COMPANY, NAV_LINKS};
use crate::markup::Element;

pub const NAME: &str = "navbar";

/// Key of the bar whose backdrop follows the navbar elevation state.
pub fn bar_id() -> ElementId {
    ElementId::scoped(NAME, "bar", "main")
}

/// Fixed top navigation with in-page links and the quote CTA.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navbar;

impl Section for Navbar {
    fn name(&self) -> &'static str {
        NAME
    }

    fn render(&self) -> Element {
        let links = NAV_LINKS
            .iter()
            .map(|link| Element::new("a").attr("href", &format!("#{}", link.anchor)).text(link.label));

        Element::new("nav")
            .class("navbar")
            .keyed(bar_id())
            .row(3)
            .child(
                Element::new("a")
                    .class("brand")
                    .attr("href", "#")
                    .block()
                    .child(Element::new("img").attr("src", "/images/logo.png").attr("alt", COMPANY).size(40.0, 40.0))
                    .child(Element::new("span").text(COMPANY)),
            )
            .child(Element::new("div").class("nav-links").children(links))
            .child(
                Element::new("a")
                    .class("button button-primary")
                    .attr("href", "#contact")
                    .block()
                    .text("Get Quote"),
            )
    }
}
