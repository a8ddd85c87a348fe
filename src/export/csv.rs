//! CSV report.
//!
//! One row per (record, match); unmatched records get a single row with
//! empty provider columns.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use super::types::DomainResult;

/// Writes the CSV report and returns the number of data rows.
pub fn write_csv<W: Write>(writer: W, results: &[DomainResult], no_scan: bool) -> Result<usize> {
    let mut writer = Writer::from_writer(writer);

    if no_scan {
        writer.write_record(["domain", "source_domain", "value"])?;
    } else {
        writer.write_record([
            "domain",
            "source_domain",
            "provider",
            "category",
            "token",
            "value",
        ])?;
    }

    let mut rows = 0;
    for result in results.iter().filter(|r| r.is_reportable()) {
        let domain = result.domain.as_str();
        for record in &result.records {
            let source = record.source_domain();
            if no_scan {
                writer.write_record([domain, source, record.value()])?;
                rows += 1;
            } else if record.is_matched() {
                for m in record.matches() {
                    writer.write_record([
                        domain,
                        source,
                        m.provider(),
                        m.category(),
                        m.token.as_str(),
                        record.value(),
                    ])?;
                    rows += 1;
                }
            } else {
                writer.write_record([domain, source, "", "", "", record.value()])?;
                rows += 1;
            }
        }
    }

    writer.flush().context("Failed to flush CSV report")?;
    Ok(rows)
}
