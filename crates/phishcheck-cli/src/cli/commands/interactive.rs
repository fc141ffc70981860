//! `phishcheck interactive` – prompt for URLs until `quit`.

use anyhow::{Context, Result};
use phishcheck_core::fetch::FetchOptions;
use phishcheck_core::url_model::with_default_scheme;
use phishcheck_core::{validate, ValidationReport};
use std::io::{self, BufRead, Write};

use super::render;

const PROMPT: &str = "Enter a URL (if you want to quit enter the 'quit'): ";

pub async fn run_interactive(default_scheme: &str, opts: FetchOptions) -> Result<()> {
    let default_scheme = default_scheme.to_string();
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(stdin.lock(), stdout.lock(), &default_scheme, |url| {
            validate(url, &opts)
        })
    })
    .await
    .context("interactive session task join")?
}

/// Reads one URL per line from `input` and writes a report for each to `out`.
/// Stops on `quit` (any case) or end of input. Nothing is carried between lines.
pub(crate) fn run_session<R, W, V>(
    mut input: R,
    mut out: W,
    default_scheme: &str,
    mut validate: V,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    V: FnMut(&str) -> (bool, ValidationReport),
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let entry = line.trim_end_matches(&['\r', '\n'][..]);
        if entry.eq_ignore_ascii_case("quit") {
            writeln!(out, "Closing program...")?;
            break;
        }

        let url = with_default_scheme(entry, default_scheme);
        writeln!(out)?;
        writeln!(out, "Checking URL: {}", url)?;
        tracing::info!("interactive check url={}", url);
        let (valid, report) = validate(&url);
        render::write_report(&mut out, valid, &report)?;
    }
    Ok(())
}
