use anyhow::Result;
use reqwest::Client;
use std::io::Write;
use tracing::{debug, error};

use crate::constants::USAGE;
use crate::http::{UrlReport, build_http_client, check_headers, fetch_headers};
use crate::input::collect_urls;
use crate::output::{export_csv, format_full_report, format_missing_report};
use crate::types::{Cli, DisplayMode};

/// How a run ended, for the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// No URLs were given; usage was printed and nothing was fetched.
    NoUrls,
}

/// Display settings for processed URLs
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub mode: DisplayMode,
    pub colored: bool,
}

/// Check every URL from the command line and input file, then export
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunOutcome> {
    let urls = collect_urls(&cli.urls, cli.input_path().map(|p| p.as_path()))?;

    if urls.is_empty() {
        writeln!(out, "{}", USAGE)?;
        return Ok(RunOutcome::NoUrls);
    }

    let client = build_http_client(cli)?;
    let display = DisplayOptions {
        mode: cli.display_mode(),
        colored: !cli.no_color,
    };

    let reports = process_urls(&client, &urls, display, out).await?;

    if let Some(path) = cli.output_path() {
        export_csv(path, &reports)?;
        writeln!(out, "\nResults exported to {}", path.display())?;
    }

    Ok(RunOutcome::Completed)
}

/// Fetch and check URLs one at a time, printing each result.
///
/// URLs that fail to fetch are logged and left out of the returned reports.
pub async fn process_urls<W: Write>(
    client: &Client,
    urls: &[String],
    display: DisplayOptions,
    out: &mut W,
) -> Result<Vec<UrlReport>> {
    let mut reports = Vec::with_capacity(urls.len());

    for url in urls {
        let headers = match fetch_headers(client, url).await {
            Ok(headers) => headers,
            Err(e) => {
                error!("{}", e);
                continue;
            }
        };

        let presence = check_headers(&headers);
        debug!(url = %url, missing = presence.missing().count(), "checked headers");

        let output_str = match display.mode {
            DisplayMode::Full => Some(format_full_report(url, &presence, display.colored)),
            DisplayMode::MissingOnly => format_missing_report(url, &presence),
        };
        if let Some(output_str) = output_str {
            out.write_all(output_str.as_bytes())?;
        }

        reports.push(UrlReport {
            url: url.clone(),
            presence,
        });
    }

    out.flush()?;
    Ok(reports)
}
