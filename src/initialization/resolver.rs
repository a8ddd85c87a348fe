//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Initializes the resolver used for TXT lookups.
///
/// Reads the system configuration (`/etc/resolv.conf` on Unix) and falls
/// back to hickory's default upstreams when it cannot be read. `timeout`
/// bounds each attempt; the scanner applies its own per-query timeout on top.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` for a zero timeout.
pub fn init_resolver(timeout: Duration) -> Result<TokioResolver, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be greater than zero".to_string(),
        ));
    }

    let mut builder = match TokioResolver::builder_tokio() {
        Ok(builder) => {
            log::debug!("Using system DNS configuration");
            builder
        }
        Err(e) => {
            log::warn!("Failed to read system DNS config, using defaults: {e}");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }
    };

    let opts = builder.options_mut();
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    // Names are always fully qualified; never append search domains
    opts.ndots = 0;

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver() {
        assert!(init_resolver(Duration::from_secs(3)).is_ok());
    }

    #[test]
    fn test_init_resolver_rejects_zero_timeout() {
        let err = init_resolver(Duration::ZERO).unwrap_err();
        assert!(matches!(err, InitializationError::DnsResolverError(_)));
    }
}
