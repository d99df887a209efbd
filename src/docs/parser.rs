//! Markdown documentation parser
//!
//! Extracts the intro block and named sections from README-style markdown.

use once_cell::sync::Lazy;
use regex::Regex;

/// Start of any heading of level 2 or deeper. Terminates a section.
static NEXT_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##+\s+").expect("valid heading regex"));

/// Parser for markdown documentation
pub struct DocParser;

impl DocParser {
    /// Extract a section by its exact heading text.
    ///
    /// The heading must be level 2 or deeper and match case-sensitively, with
    /// only trailing whitespace allowed after it. The returned block starts at
    /// the heading line and runs up to the next level 2+ heading or the end of
    /// the document. Returns an empty string when the heading is absent.
    pub fn extract_section(content: &str, heading: &str) -> String {
        let pattern = format!(r"(?m)^##+\s+{}\s*$", regex::escape(heading));
        let heading_re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                tracing::warn!("Invalid section pattern for {:?}: {}", heading, e);
                return String::new();
            }
        };

        let Some(found) = heading_re.find(content) else {
            return String::new();
        };

        // find_at keeps the surrounding text visible to `^`
        let end = NEXT_HEADING
            .find_at(content, found.end())
            .map(|m| m.start())
            .unwrap_or(content.len());

        content[found.start()..end].trim().to_string()
    }

    /// Extract the introduction: everything up to and including the first
    /// `---` line, minus badge links and raw HTML lines.
    pub fn extract_intro(content: &str) -> String {
        let mut kept: Vec<&str> = Vec::new();

        for line in content.lines() {
            if line.starts_with("# ") {
                kept.push(line);
                continue;
            }
            if line.starts_with('<') && line.ends_with('>') {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.starts_with("[![") {
                continue;
            }

            kept.push(line);
            if trimmed == "---" {
                break;
            }
        }

        kept.join("\n").trim().to_string()
    }
}
