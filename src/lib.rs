pub mod docs;
pub mod error;
pub mod site;

pub use docs::{ConfigParser, DocParser};
pub use error::{Result, SiteError};
pub use site::{GenerationReport, IndexSections, SiteConfig, SiteGenerator};
