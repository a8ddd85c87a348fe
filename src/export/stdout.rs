//! Terminal report.

use anyhow::Result;
use colored::{Color, Colorize};
use std::io::Write;

use super::types::DomainResult;
use crate::scan::TxtRecord;

/// Writes one line per record, preceded by the `[INF]` header.
///
/// `input_domains` is the number of domains the run was given, including
/// inputs that were invalid or failed to resolve.
///
/// Returns the number of record lines written.
pub fn write_text<W: Write>(
    writer: &mut W,
    results: &[DomainResult],
    input_domains: usize,
    no_scan: bool,
    color: bool,
) -> Result<usize> {
    writeln!(writer, "[INF] Check {input_domains} domains")?;
    if no_scan {
        writeln!(writer, "[INF] No Scan Mode")?;
    }

    let mut lines = 0;
    for result in results.iter().filter(|r| r.is_reportable()) {
        for record in &result.records {
            writeln!(
                writer,
                "{}",
                format_record(&result.domain, record, no_scan, color)
            )?;
            lines += 1;
        }
    }
    writer.flush()?;
    Ok(lines)
}

/// Renders one record line.
///
/// `[domain] [provider] [token=...] value`, with one provider bracket per
/// match. Records found through an include are labelled
/// `[domain -> source]`.
pub fn format_record(domain: &str, record: &TxtRecord, no_scan: bool, color: bool) -> String {
    let paint = |text: String, c: Color| {
        if color {
            text.as_str().color(c).to_string()
        } else {
            text
        }
    };

    let label = if record.source_domain() == domain {
        format!("[{domain}]")
    } else {
        format!("[{domain} -> {}]", record.source_domain())
    };

    let mut parts = vec![paint(label, Color::Yellow)];
    if !no_scan {
        for m in record.matches() {
            parts.push(paint(format!("[{}]", m.provider()), Color::Blue));
            if !m.token.is_empty() {
                parts.push(paint(format!("[token={}]", m.token), Color::Cyan));
            }
        }
    }
    parts.push(paint(record.value().to_string(), Color::Yellow));
    parts.join(" ")
}
