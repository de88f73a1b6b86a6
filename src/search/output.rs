//! Human-readable and JSON rendering of search results.

use super::SearchResult;
use log::info;
use std::io::{self, Write};

/// What happened to a requested content preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewStatus {
    /// The caller did not ask for previews.
    NotRequested,
    /// Previews were asked for, but content preview is not supported yet.
    Unsupported,
}

/// Writes `results` to `out`, one `[rank] path (score: x.xxxx)` line per hit.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[SearchResult],
    show_preview: bool,
) -> io::Result<PreviewStatus> {
    let status = if show_preview {
        info!("Content preview was requested but is not supported yet");
        PreviewStatus::Unsupported
    } else {
        PreviewStatus::NotRequested
    };

    if results.is_empty() {
        writeln!(out, "No results found")?;
        return Ok(status);
    }

    writeln!(out)?;
    writeln!(out, "Found {} results:", results.len())?;
    writeln!(out)?;
    for result in results {
        writeln!(out, "{result}")?;
    }
    writeln!(out)?;

    Ok(status)
}

/// Prints `results` to stdout. See [`write_results`].
pub fn print_results(results: &[SearchResult], show_preview: bool) -> io::Result<PreviewStatus> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_results(&mut handle, results, show_preview)
}

/// Serializes results as pretty JSON wrapped in a `results` field.
pub fn results_to_json(results: &[SearchResult]) -> serde_json::Result<String> {
    let output_json = serde_json::json!({ "results": results });
    serde_json::to_string_pretty(&output_json)
}
