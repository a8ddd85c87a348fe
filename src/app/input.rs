//! Domain list acquisition.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::config::Config;

/// Where the domains of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainSource {
    /// `-d/--domain`
    Single(String),
    /// `-f/--file`, one domain per line
    File(PathBuf),
    /// Piped stdin, one domain per line
    Stdin,
}

impl DomainSource {
    /// Picks the source from the config: `--domain`, then `--file`, then
    /// stdin when it is not a terminal. `None` means there is no input.
    pub fn from_config(config: &Config) -> Option<Self> {
        if let Some(domain) = &config.domain {
            Some(Self::Single(domain.clone()))
        } else if let Some(file) = &config.file {
            Some(Self::File(file.clone()))
        } else if !std::io::stdin().is_terminal() {
            Some(Self::Stdin)
        } else {
            None
        }
    }
}

/// Reads the raw domain inputs of `source`, in order.
pub async fn read_domains(source: &DomainSource) -> Result<Vec<String>> {
    match source {
        DomainSource::Single(domain) => Ok(vec![domain.trim().to_string()]),
        DomainSource::File(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read domain file: {}", path.display()))?;
            Ok(parse_domain_lines(&content))
        }
        DomainSource::Stdin => {
            log::info!("Reading domains from stdin");
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read domains from stdin")?;
            Ok(parse_domain_lines(&content))
        }
    }
}

/// Splits a domain list: one entry per line, blank lines and `#` comments
/// skipped.
pub fn parse_domain_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
