//! SPF helpers for TXT record values.
//!
//! Only the parts of SPF needed to follow an include chain are understood:
//! the `v=spf1` marker and the targets of `include:` mechanisms. Nothing else
//! about the policy is validated.

use crate::config::SPF_PREFIX;
use crate::domain::canonical_host;

/// Returns true if a TXT value is an SPF policy (starts with `v=spf1`).
pub fn is_spf_record(value: &str) -> bool {
    value.starts_with(SPF_PREFIX)
}

/// Extracts the `include:` targets of an SPF policy, in the order they appear.
///
/// The mechanism name is matched case-insensitively and may carry a
/// qualifier (`+`, `-`, `~`, `?`). Targets are lowercased and stripped of a
/// trailing dot. Empty targets and targets using SPF macros (`%{d}` and
/// friends) are dropped since they cannot be resolved literally.
///
/// # Example
///
/// ```
/// use txtra::dns::extract_spf_includes;
///
/// let includes = extract_spf_includes("v=spf1 include:_spf.example.com ~include:Mail.Example.NET. -all");
/// assert_eq!(includes, vec!["_spf.example.com", "mail.example.net"]);
/// ```
pub fn extract_spf_includes(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .filter_map(|term| {
            let term = term.trim_start_matches(['+', '-', '~', '?']);
            let (mechanism, target) = term.split_once(':')?;
            if !mechanism.eq_ignore_ascii_case("include") {
                return None;
            }
            if target.contains('%') {
                log::debug!("Skipping SPF include with macro: {target}");
                return None;
            }
            let target = canonical_host(target);
            (!target.is_empty()).then_some(target)
        })
        .collect()
}
