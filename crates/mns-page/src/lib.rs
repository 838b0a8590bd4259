//! The MNS Corrosions Solutions landing page.
//!
//! Sections render markup from compiled-in content and declare their reveal
//! batches; [`Page`] composes them in document order. From there:
//!
//! - [`layout::layout_page`] estimates element rectangles with taffy,
//! - [`render::render_document`] writes HTML with inline styles from a
//!   [`StyleSource`],
//! - [`RevealManifest`] describes every batch as JSON,
//! - [`PageRuntime`] mounts the page against the motion core and replays
//!   scrolling, time and pointer input.

pub mod content;
pub mod layout;
pub mod manifest;
pub mod markup;
pub mod page;
pub mod render;
pub mod runtime;
pub mod sections;

pub use layout::{LayoutError, PageLayout, layout_page};
pub use manifest::RevealManifest;
pub use markup::{Element, Flow, KeyRole, Node};
pub use page::Page;
pub use render::{RenderError, StaticStyles, StyleSource, render_document};
pub use runtime::{NAVBAR_OFFSET, PageRuntime, ScrollReport};
pub use sections::Section;
