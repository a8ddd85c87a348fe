//! Signature catalog loading.
//!
//! The catalog is built once per process, either from the bundle embedded in
//! the binary or from a YAML file / directory of templates, and is read-only
//! afterwards.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tokio::fs;

use super::matcher::{MatchResult, Rule, Signature};
use super::models::{SignatureTemplate, TemplateDocument};
use crate::error_handling::CatalogError;

/// Templates shipped with the binary.
const BUILTIN_SIGNATURES: &str = include_str!("../../signatures/providers.yml");

/// Options applied while building a catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// Keep signatures with an unknown rule kind as inert entries instead of
    /// failing the load.
    pub allow_unsupported_rules: bool,
}

/// Ordered, immutable collection of provider signatures.
///
/// Order is declaration order (file name order for directories) and is the
/// order in which signatures are evaluated and reported.
#[derive(Debug, Clone)]
pub struct SignatureCatalog {
    signatures: Vec<Arc<Signature>>,
    source: String,
}

impl SignatureCatalog {
    /// Loads the built-in signature bundle.
    pub fn builtin(options: CatalogOptions) -> Result<Self, CatalogError> {
        let templates = parse_templates(BUILTIN_SIGNATURES, "built-in")?;
        Self::from_templates(templates, "built-in", options)
    }

    /// Parses a YAML string holding one or more templates.
    ///
    /// The string may contain a single template, a list of templates, or
    /// several `---`-separated documents of either form.
    pub fn from_yaml_str(
        content: &str,
        origin: &str,
        options: CatalogOptions,
    ) -> Result<Self, CatalogError> {
        let templates = parse_templates(content, origin)?;
        Self::from_templates(templates, origin, options)
    }

    /// Builds a catalog from already-parsed templates.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidPattern`] if any pattern fails to compile
    /// - [`CatalogError::UnsupportedRule`] for an unknown rule kind, unless
    ///   `options.allow_unsupported_rules` is set
    /// - [`CatalogError::Empty`] if there are no templates
    pub fn from_templates(
        templates: Vec<SignatureTemplate>,
        origin: &str,
        options: CatalogOptions,
    ) -> Result<Self, CatalogError> {
        if templates.is_empty() {
            return Err(CatalogError::Empty(origin.to_string()));
        }

        let mut signatures = Vec::with_capacity(templates.len());
        for template in templates {
            let signature = Signature::from_template(template)?;
            if let Rule::Unsupported(kind) = signature.rule() {
                if !options.allow_unsupported_rules {
                    return Err(CatalogError::UnsupportedRule {
                        name: signature.name().to_string(),
                        kind: kind.clone(),
                    });
                }
                log::warn!(
                    "Signature '{}' uses unsupported rule type '{}' and will never match",
                    signature.name(),
                    kind
                );
            }
            signatures.push(Arc::new(signature));
        }

        log::debug!("Loaded {} signatures from {}", signatures.len(), origin);
        Ok(Self {
            signatures,
            source: origin.to_string(),
        })
    }

    /// Loads templates from a local path (single file or directory).
    ///
    /// Directories are read non-recursively; every `*.yml` / `*.yaml` file is
    /// loaded in file name order. Any unreadable or invalid file fails the
    /// whole load.
    pub async fn load_from_path(
        path: &Path,
        options: CatalogOptions,
    ) -> Result<Self, CatalogError> {
        let io_error = |source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        };

        let files = if fs::metadata(path).await.map_err(io_error)?.is_dir() {
            let mut files: Vec<PathBuf> = Vec::new();
            let mut entries = fs::read_dir(path).await.map_err(io_error)?;
            while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
                let file_path = entry.path();
                let is_template = matches!(
                    file_path.extension().and_then(|s| s.to_str()),
                    Some("yml") | Some("yaml")
                );
                if is_template && file_path.is_file() {
                    files.push(file_path);
                }
            }
            files.sort();
            files
        } else {
            vec![path.to_path_buf()]
        };

        let mut templates = Vec::new();
        for file_path in &files {
            let content = fs::read_to_string(file_path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: file_path.display().to_string(),
                    source,
                })?;
            templates.extend(parse_templates(&content, &file_path.display().to_string())?);
        }

        Self::from_templates(templates, &path.display().to_string(), options)
    }

    /// Number of signatures.
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// True if the catalog holds no signature.
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Where the catalog was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Signatures in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Signature>> {
        self.signatures.iter()
    }

    /// Looks a signature up by provider name.
    pub fn get(&self, name: &str) -> Option<&Arc<Signature>> {
        self.signatures.iter().find(|s| s.name() == name)
    }

    /// Matches `value` against every signature, in catalog order.
    ///
    /// All matching signatures are returned, not only the first one.
    pub fn scan_value(&self, value: &str) -> Vec<MatchResult> {
        self.signatures
            .iter()
            .filter_map(|signature| signature.match_value(value))
            .collect()
    }
}

/// Parses every YAML document in `content` into templates.
fn parse_templates(content: &str, origin: &str) -> Result<Vec<SignatureTemplate>, CatalogError> {
    let mut templates = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let document =
            TemplateDocument::deserialize(document).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        templates.extend(document.into_templates());
    }
    Ok(templates)
}
