//! Site generation driver: read inputs, extract, render, write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::docs::{ConfigParser, DocParser};
use crate::error::{Result, SiteError};

use super::pages::{render_configuration, render_index, IndexSections, SectionPresence};

pub const DEFAULT_README: &str = "README.md";
pub const DEFAULT_EXAMPLE: &str = "kube.tf.example";
pub const DEFAULT_OUTPUT_DIR: &str = "site-docs";
pub const DEFAULT_TITLE: &str = "kube-hetzner";

pub const INDEX_FILE: &str = "index.md";
pub const CONFIGURATION_FILE: &str = "configuration.md";

pub const QUICK_START_HEADING: &str = "Quick Start";
pub const ARCHITECTURE_HEADING: &str = "Architecture";

/// Input and output locations for one generation run
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub readme: PathBuf,
    pub example: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
}

impl SiteConfig {
    /// Standard layout relative to a project root
    pub fn from_root(root: &Path) -> Self {
        Self {
            readme: root.join(DEFAULT_README),
            example: root.join(DEFAULT_EXAMPLE),
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_root(Path::new("."))
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub index_path: PathBuf,
    pub configuration_path: PathBuf,
    pub sections: SectionPresence,
    pub configuration_keys: Vec<String>,
}

pub struct SiteGenerator {
    config: SiteConfig,
}

impl SiteGenerator {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Regenerate both pages, overwriting any previous output.
    pub fn generate(&self) -> Result<GenerationReport> {
        fs::create_dir_all(&self.config.output_dir)?;

        let readme = read_input(&self.config.readme)?;
        let example = read_input(&self.config.example)?;

        let sections = IndexSections {
            intro: DocParser::extract_intro(&readme),
            quick_start: DocParser::extract_section(&readme, QUICK_START_HEADING),
            architecture: DocParser::extract_section(&readme, ARCHITECTURE_HEADING),
        };
        let keys = ConfigParser::extract_configuration_keys(&example);

        let index_content = render_index(
            &self.config.title,
            &source_name(&self.config.readme),
            &sections,
        );
        let config_content = render_configuration(&source_name(&self.config.example), &keys);

        let index_path = self.config.output_dir.join(INDEX_FILE);
        let configuration_path = self.config.output_dir.join(CONFIGURATION_FILE);

        fs::write(&index_path, index_content)?;
        tracing::info!("Wrote {}", index_path.display());
        fs::write(&configuration_path, config_content)?;
        tracing::info!(
            "Wrote {} ({} keys)",
            configuration_path.display(),
            keys.len()
        );

        Ok(GenerationReport {
            index_path,
            configuration_path,
            sections: sections.presence(),
            configuration_keys: keys,
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("Read {} ({} bytes)", path.display(), content.len());
            Ok(content)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(SiteError::FileNotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// File name shown in the provenance notice
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
