//! Preview generation commands

use crate::cli::display::TableRenderer;
use crate::domain::config::{slug_from_source_path, PreviewConfig};
use crate::domain::manifest::{generate, generate_json, plan};
use crate::infrastructure::constants::{DEFAULT_CONFIG_FILE, SOURCE_PATH_ENV, SOURCE_REPO_URL_ENV};
use crate::shared::error::{PreviewError, Result};
use anyhow::Context;
use clap::{Args, Parser, ValueEnum};
use std::io::Write;
use tracing::debug;

/// Where the configuration and the slug come from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the preview configuration (YAML, or TOML with a .toml extension)
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Application source path; its last component is the preview slug
    #[arg(long, env = SOURCE_PATH_ENV)]
    pub source_path: Option<String>,

    /// Preview slug (overrides the one derived from --source-path)
    #[arg(long)]
    pub slug: Option<String>,

    /// Git repository holding the service charts, used when the config sets no repo_url
    #[arg(long, env = SOURCE_REPO_URL_ENV)]
    pub repo_url: Option<String>,
}

impl SourceArgs {
    pub fn resolve_slug(&self) -> Result<String> {
        if let Some(slug) = self.slug.as_deref().filter(|s| !s.is_empty()) {
            return Ok(slug.to_string());
        }

        match self.source_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => slug_from_source_path(path),
            None => Err(PreviewError::config_error(format!(
                "{} not set",
                SOURCE_PATH_ENV
            ))),
        }
    }

    pub fn load_config(&self) -> Result<PreviewConfig> {
        let mut conf = PreviewConfig::from_file(&self.config)?;
        if let Some(repo_url) = self.repo_url.as_deref().filter(|u| !u.is_empty()) {
            if conf.repo_url.is_empty() {
                conf.repo_url = repo_url.to_string();
            }
        }

        if conf.repo_url.is_empty() {
            return Err(PreviewError::config_error(format!(
                "No chart repository: set repo_url in {} or {}",
                self.config, SOURCE_REPO_URL_ENV
            )));
        }
        Ok(conf)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Stream of YAML documents
    Yaml,
    /// A single Kubernetes List object
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Yaml)]
    pub output: OutputFormat,
}

impl GenerateCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let slug = self.source.resolve_slug()?;
        let conf = self.source.load_config()?;
        debug!("Generating preview '{}' from {}", slug, self.source.config);

        let out = match self.output {
            OutputFormat::Yaml => generate(&conf, &slug),
            OutputFormat::Json => generate_json(&conf, &slug),
        }
        .context("generate failed")?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(out.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct PlanCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl PlanCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let slug = self.source.resolve_slug()?;
        let conf = self.source.load_config()?;

        let renderer = TableRenderer::new();
        println!("{}", renderer.render_plan(&slug, &plan(&conf, &slug)));
        Ok(())
    }
}
