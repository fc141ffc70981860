//! Human-readable report output shared by `check` and the interactive loop.

use phishcheck_core::ValidationReport;
use std::io::{self, Write};

/// Writes the verdict and every check of `report`.
pub fn write_report<W: Write>(out: &mut W, valid: bool, report: &ValidationReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Results:")?;
    writeln!(
        out,
        "Overall validity: {}",
        if valid { "Valid" } else { "Invalid" }
    )?;
    writeln!(out)?;
    writeln!(out, "Detailed checks:")?;
    writeln!(out, "✓ Format: {}", report.valid_format)?;
    writeln!(out, "✓ Accessibility: {}", report.accessible)?;
    writeln!(out, "✓ SSL Certificate: {}", report.ssl_cert)?;
    writeln!(out, "✓ Redirect count: {}", report.redirect_count)?;
    if let Some(code) = report.status_code {
        writeln!(out, "✓ Status code: {}", code)?;
    }

    if !report.suspicious_patterns.is_empty() {
        writeln!(out)?;
        writeln!(out, " Warning: Suspicious patterns detected!")?;
        for pattern in &report.suspicious_patterns {
            writeln!(
                out,
                "- Matching pattern: {} ({})",
                pattern.expression(),
                pattern.id()
            )?;
        }
    }
    Ok(())
}
