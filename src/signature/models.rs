//! Data structures for signature templates.
//!
//! A template is the on-disk (YAML) form of a provider signature:
//!
//! ```yaml
//! info:
//!   name: Adobe
//!   category: Identity
//!   author: txtra
//! rule:
//!   type: regex
//!   regex:
//!     - 'adobe-idp-site-verification=(?P<token>\S+)'
//!   params:
//!     - token
//! ```

use serde::{Deserialize, Serialize};

/// One provider signature as written in a template file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureTemplate {
    /// Provider metadata
    pub info: SignatureInfo,
    /// Matching rule
    pub rule: RuleDefinition,
}

/// Provider metadata of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Provider name reported on a match
    pub name: String,
    /// Provider category (Mail, Identity, CDN, ...)
    #[serde(default)]
    pub category: String,
    /// Template author
    #[serde(default)]
    pub author: String,
}

/// Matching rule of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Rule kind; only `regex` is supported
    #[serde(rename = "type")]
    pub kind: String,
    /// Patterns tried in order (can be string or array)
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_string_or_array")]
    pub regex: Vec<String>,
    /// Names of the capture groups the patterns define (informational)
    #[serde(default)]
    pub params: Vec<String>,
}

/// A template file holds either a single template or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TemplateDocument {
    Many(Vec<SignatureTemplate>),
    One(Box<SignatureTemplate>),
}

impl TemplateDocument {
    pub(crate) fn into_templates(self) -> Vec<SignatureTemplate> {
        match self {
            TemplateDocument::Many(templates) => templates,
            TemplateDocument::One(template) => vec![*template],
        }
    }
}

/// Deserializes a field that can be either a string or an array of strings
fn deserialize_string_or_array<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct StringOrArrayVisitor;

    impl<'de> Visitor<'de> for StringOrArrayVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or an array of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(elem) = seq.next_element::<String>()? {
                vec.push(elem);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrArrayVisitor)
}
