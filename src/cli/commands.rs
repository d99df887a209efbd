use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use site_docs_sync::error::{Result, SiteError};
use site_docs_sync::site::generator::DEFAULT_TITLE;
use site_docs_sync::site::{GenerationReport, SiteConfig, SiteGenerator};

#[derive(Parser)]
#[command(name = "site-docs-sync")]
#[command(about = "Generate the MkDocs site pages from README.md and kube.tf.example")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Regenerate site-docs/ from the current directory
    site-docs-sync

    # Run against another checkout
    site-docs-sync --root ../kube-hetzner

    # Write the pages somewhere else and print a JSON summary
    site-docs-sync --out build/docs --format json
"#)]
pub struct Cli {
    /// Project root containing README.md and kube.tf.example
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// README to extract the intro and sections from [default: <root>/README.md]
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// Configuration example to detect keys in [default: <root>/kube.tf.example]
    #[arg(long)]
    pub example: Option<PathBuf>,

    /// Output directory for the generated pages [default: <root>/site-docs]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Title of the index page
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Summary format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    pub fn site_config(&self) -> SiteConfig {
        let mut config = SiteConfig::from_root(&self.root);
        if let Some(readme) = &self.readme {
            config.readme = readme.clone();
        }
        if let Some(example) = &self.example {
            config.example = example.clone();
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        config.title = self.title.clone();
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl FromStr for SummaryFormat {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            other => Err(SiteError::InvalidFormat(other.to_string())),
        }
    }
}

pub fn generate_site(config: SiteConfig, format: &str) -> Result<()> {
    // Reject a bad format before touching the filesystem
    let format: SummaryFormat = format.parse()?;

    let report = SiteGenerator::new(config).generate()?;

    match format {
        SummaryFormat::Text => print_text_summary(&report),
        SummaryFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn print_text_summary(report: &GenerationReport) {
    let mut included = Vec::new();
    if report.sections.intro {
        included.push("intro");
    }
    if report.sections.quick_start {
        included.push("quick start");
    }
    if report.sections.architecture {
        included.push("architecture");
    }

    println!(
        "Wrote {} ({})",
        report.index_path.display(),
        if included.is_empty() {
            "no README sections".to_string()
        } else {
            included.join(", ")
        }
    );
    println!(
        "Wrote {} ({} configuration keys)",
        report.configuration_path.display(),
        report.configuration_keys.len()
    );
}
