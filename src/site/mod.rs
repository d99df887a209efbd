//! Static documentation site generation.

pub mod generator;
pub mod pages;

pub use generator::{GenerationReport, SiteConfig, SiteGenerator};
pub use pages::{render_configuration, render_index, IndexSections, SectionPresence};
