//! `phishcheck check <url>...` – one-shot validation.

use anyhow::{Context, Result};
use phishcheck_core::fetch::FetchOptions;
use phishcheck_core::url_model::with_default_scheme;
use phishcheck_core::{validate, ValidationReport};
use serde::Serialize;
use std::io::{self, Write};

use super::render;

/// One checked URL, as printed by `--json`.
#[derive(Debug, Serialize)]
struct CheckResult {
    url: String,
    valid: bool,
    report: ValidationReport,
}

pub async fn run_check(
    urls: &[String],
    json: bool,
    default_scheme: &str,
    opts: FetchOptions,
) -> Result<()> {
    let mut results = Vec::with_capacity(urls.len());
    for raw in urls {
        let url = with_default_scheme(raw, default_scheme);
        tracing::info!("check url={}", url);
        let (valid, report) = tokio::task::spawn_blocking({
            let url = url.clone();
            move || validate(&url, &opts)
        })
        .await
        .context("validation task join")?;
        results.push(CheckResult { url, valid, report });
    }

    let stdout = io::stdout();
    write_results(&mut stdout.lock(), &results, json)
}

fn write_results<W: Write>(out: &mut W, results: &[CheckResult], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, results).context("serialize results")?;
        writeln!(out)?;
        return Ok(());
    }
    for (i, r) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out, "----------------------------------------------")?;
        }
        writeln!(out, "Checking URL: {}", r.url)?;
        render::write_report(out, r.valid, &r.report)?;
    }
    Ok(())
}
