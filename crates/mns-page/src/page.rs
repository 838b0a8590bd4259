//! Page composition: navbar, the main sections in order, footer.

use mns_motion::{ElementId, RevealBatch};

use crate::markup::Element;
use crate::sections::{
    Contact, Footer, Hero, Navbar, Products, Section, TechnicalData, Testimonials, WhoWeAre, WhyChooseUs,
};

pub const TITLE: &str = "MNS Corrosions Solutions | Sri Ram AAC Blocks";
pub const DESCRIPTION: &str = "Premium AAC blocks, joint mortars and adhesives engineered with steel slag \
    for corrosion-resistant, sustainable construction.";

pub struct Page {
    navbar: Navbar,
    main: Vec<Box<dyn Section>>,
    footer: Footer,
}

impl Page {
    /// The full site, with `year` shown in the footer.
    pub fn new(year: i32) -> Self {
        Self {
            navbar: Navbar,
            main: vec![
                Box::new(Hero),
                Box::new(WhoWeAre),
                Box::new(WhyChooseUs),
                Box::new(Products),
                Box::new(TechnicalData),
                Box::new(Testimonials),
                Box::new(Contact),
            ],
            footer: Footer::new(year),
        }
    }

    /// Every section in document order.
    pub fn sections(&self) -> impl Iterator<Item = &dyn Section> {
        std::iter::once(&self.navbar as &dyn Section)
            .chain(self.main.iter().map(|section| section.as_ref()))
            .chain(std::iter::once(&self.footer as &dyn Section))
    }

    pub fn section(&self, name: &str) -> Option<&dyn Section> {
        self.sections().find(|section| section.name() == name)
    }

    /// `<body>` content.
    pub fn body(&self) -> Element {
        Element::new("body")
            .child(self.navbar.render())
            .child(Element::new("main").children(self.main.iter().map(|section| section.render())))
            .child(self.footer.render())
    }

    pub fn reveal_batches(&self) -> Vec<RevealBatch> {
        self.sections().flat_map(|section| section.reveal_batches()).collect()
    }

    pub fn draggables(&self) -> Vec<ElementId> {
        self.sections().flat_map(|section| section.draggables()).collect()
    }

    pub fn parallax_layers(&self) -> Vec<ElementId> {
        self.sections().filter_map(|section| section.parallax()).collect()
    }

    pub fn anchors(&self) -> Vec<&'static str> {
        self.sections().filter_map(|section| section.anchor()).collect()
    }
}
