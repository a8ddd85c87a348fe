//! JSON report: one object keyed by domain.

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::io::Write;

use super::types::DomainResult;

/// Builds the report value.
///
/// ```json
/// {
///   "example.com": {
///     "raw_records": ["v=spf1 include:_spf.example.com ~all", "ms=12345"],
///     "records": [
///       {"provider": "Microsoft Office 365", "category": "...", "token": "12345",
///        "value": "ms=12345", "source_domain": "example.com"}
///     ]
///   }
/// }
/// ```
///
/// `records` holds one entry per match and is left out in no-scan mode.
pub fn build_json(results: &[DomainResult], no_scan: bool) -> Value {
    let mut report = Map::new();
    for result in results.iter().filter(|r| r.is_reportable()) {
        let raw_records: Vec<&str> = result.records.iter().map(|r| r.value()).collect();
        let mut entry = json!({ "raw_records": raw_records });

        if !no_scan {
            let records: Vec<Value> = result
                .records
                .iter()
                .flat_map(|record| {
                    record.matches().iter().map(move |m| {
                        json!({
                            "provider": m.provider(),
                            "category": m.category(),
                            "token": m.token,
                            "value": record.value(),
                            "source_domain": record.source_domain(),
                        })
                    })
                })
                .collect();
            entry["records"] = Value::Array(records);
        }

        report.insert(result.domain.clone(), entry);
    }
    Value::Object(report)
}

/// Writes the JSON report and returns the number of domains in it.
pub fn write_json<W: Write>(mut writer: W, results: &[DomainResult], no_scan: bool) -> Result<usize> {
    let report = build_json(results, no_scan);
    let domains = report.as_object().map_or(0, Map::len);
    serde_json::to_writer(&mut writer, &report).context("Failed to serialize JSON report")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(domains)
}
