//! Rendering of the generated markdown pages.

use serde::Serialize;

/// Name written into every provenance notice
pub const GENERATOR_NAME: &str = "site-docs-sync";

/// Blocks extracted from the README for the index page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSections {
    pub intro: String,
    pub quick_start: String,
    pub architecture: String,
}

/// Which README blocks made it into the index page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionPresence {
    pub intro: bool,
    pub quick_start: bool,
    pub architecture: bool,
}

impl IndexSections {
    pub fn presence(&self) -> SectionPresence {
        SectionPresence {
            intro: !self.intro.is_empty(),
            quick_start: !self.quick_start.is_empty(),
            architecture: !self.architecture.is_empty(),
        }
    }
}

pub fn provenance_notice(source_name: &str) -> String {
    format!("> Generated from `{}` by `{}`.", source_name, GENERATOR_NAME)
}

/// Render `index.md`. Empty sections are left out entirely.
pub fn render_index(title: &str, source_name: &str, sections: &IndexSections) -> String {
    let heading = format!("# {}", title);
    let notice = provenance_notice(source_name);

    let blocks: Vec<&str> = [
        heading.as_str(),
        notice.as_str(),
        sections.intro.as_str(),
        sections.quick_start.as_str(),
        sections.architecture.as_str(),
    ]
    .into_iter()
    .filter(|block| !block.is_empty())
    .collect();

    let mut page = blocks.join("\n\n").trim().to_string();
    page.push('\n');
    page
}

/// Render `configuration.md` with one inline-code bullet per key.
pub fn render_configuration(source_name: &str, keys: &[String]) -> String {
    let rows = keys
        .iter()
        .map(|key| format!("- `{}`", key))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# Configuration Reference\n\n{}\n\n## Detected Configuration Keys\n\n{}\n",
        provenance_notice(source_name),
        rows
    )
}
