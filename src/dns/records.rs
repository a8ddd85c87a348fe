//! TXT record resolution.
//!
//! [`TxtResolver`] is the seam between the scanner and DNS. The production
//! implementation wraps hickory's tokio resolver; tests use
//! [`MockResolver`](super::MockResolver).

use std::future::Future;

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioResolver;

use crate::error_handling::DnsError;

/// Resolves the TXT records of a hostname.
pub trait TxtResolver: Send + Sync {
    /// Returns every character-string of every TXT record of `host`, decoded
    /// as UTF-8 (lossily), in answer order.
    ///
    /// # Errors
    ///
    /// - [`DnsError::NoAnswer`] if the name has no TXT records or does not exist
    /// - [`DnsError::Timeout`] if the query timed out
    /// - [`DnsError::Other`] for any other resolver failure
    fn resolve_txt(&self, host: &str)
        -> impl Future<Output = Result<Vec<String>, DnsError>> + Send;
}

/// [`TxtResolver`] backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
}

impl HickoryTxtResolver {
    /// Wraps an initialized resolver (see `initialization::init_resolver`).
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for HickoryTxtResolver {
    async fn resolve_txt(&self, host: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.lookup(host, RecordType::TXT).await {
            Ok(lookup) => {
                // Each character-string of a TXT record is its own value
                let values: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::TXT(txt) = rdata {
                            Some(
                                txt.iter()
                                    .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                    .collect::<Vec<String>>(),
                            )
                        } else {
                            None
                        }
                    })
                    .flatten()
                    .collect();
                if values.is_empty() {
                    Err(DnsError::NoAnswer)
                } else {
                    Ok(values)
                }
            }
            Err(e) => Err(classify_error(&e.to_string())),
        }
    }
}

/// Maps a resolver error message onto the [`DnsError`] taxonomy.
///
/// hickory reports "no records" and NXDOMAIN through the same error path as
/// real failures, so the message is the only stable discriminator.
pub(crate) fn classify_error(message: &str) -> DnsError {
    let msg = message.to_lowercase();
    if msg.contains("no records found")
        || msg.contains("no record found")
        || msg.contains("nxdomain")
    {
        DnsError::NoAnswer
    } else if msg.contains("timeout") || msg.contains("timed out") {
        DnsError::Timeout
    } else {
        DnsError::Other(message.to_string())
    }
}
