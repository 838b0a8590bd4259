use super::Section;
use crate::content::footer::{TAGLINE, copyright};
use crate::markup::Element;

#[derive(Debug, Clone, Copy)]
pub struct Footer {
    year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn render(&self) -> Element {
        Element::new("footer")
            .class("footer")
            .child(Element::new("p").text(&copyright(self.year)))
            .child(Element::new("p").class("tagline").text(TAGLINE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_carries_year() {
        let text = Footer::new(2031).render().text_content();
        assert!(text.contains("© 2031 MNS Corrosions Solutions"));
    }
}
