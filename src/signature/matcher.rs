//! Compiled signatures and pattern matching.

use std::sync::Arc;

use regex::Regex;

use super::models::SignatureTemplate;
use crate::config::TOKEN_GROUP;
use crate::error_handling::CatalogError;

/// Matching rule of a compiled signature.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Ordered patterns; the first one that matches wins.
    Regex(Vec<Regex>),
    /// A rule kind this version does not understand. Never matches.
    Unsupported(String),
}

/// A provider signature, immutable after catalog load.
#[derive(Debug, Clone)]
pub struct Signature {
    name: String,
    category: String,
    author: String,
    rule: Rule,
}

/// One signature that matched a TXT value.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The matching signature
    pub signature: Arc<Signature>,
    /// Contents of the `token` group, empty when the pattern has none
    pub token: String,
}

impl MatchResult {
    /// Name of the provider that matched.
    pub fn provider(&self) -> &str {
        self.signature.name()
    }

    /// Category of the provider that matched.
    pub fn category(&self) -> &str {
        self.signature.category()
    }
}

impl Signature {
    /// Compiles a template.
    ///
    /// Unknown rule kinds compile to [`Rule::Unsupported`]; whether those are
    /// acceptable is decided by the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPattern`] if a pattern does not compile.
    pub fn from_template(template: SignatureTemplate) -> Result<Self, CatalogError> {
        let SignatureTemplate { info, rule } = template;

        let rule = if rule.kind == "regex" {
            let patterns = rule
                .regex
                .into_iter()
                .map(|pattern| {
                    Regex::new(&pattern).map_err(|source| CatalogError::InvalidPattern {
                        name: info.name.clone(),
                        pattern,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Rule::Regex(patterns)
        } else {
            Rule::Unsupported(rule.kind)
        };

        Ok(Self {
            name: info.name,
            category: info.category,
            author: info.author,
            rule,
        })
    }

    /// Provider name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Template author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The compiled rule.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Matches `value` against this signature.
    ///
    /// Patterns are tried in order and the first hit wins. The token is the
    /// text captured by the group named `token`; patterns without that group
    /// (or where it did not participate) yield an empty token. Unsupported
    /// rules never match.
    pub fn match_value(self: &Arc<Self>, value: &str) -> Option<MatchResult> {
        let Rule::Regex(patterns) = &self.rule else {
            return None;
        };

        patterns.iter().find_map(|pattern| {
            let captures = pattern.captures(value)?;
            let token = captures
                .name(TOKEN_GROUP)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            Some(MatchResult {
                signature: Arc::clone(self),
                token,
            })
        })
    }
}
