use std::io::Write;

use crate::error::{ProbeError, ProbeResult};
use crate::probe::ProbeResponse;

pub const SUCCESS_PREFIX: &str = "✅";
pub const FAILURE_PREFIX: &str = "❌";

/// Writes the status, length and preview lines, followed by the headers when asked for.
pub fn write_success(
    out: &mut impl Write,
    response: &ProbeResponse,
    preview_chars: usize,
    show_headers: bool,
) -> ProbeResult<()> {
    writeln!(out, "{SUCCESS_PREFIX} Status: {}", response.status)?;
    writeln!(out, "Content length: {} bytes", response.body_len())?;
    writeln!(
        out,
        "First {preview_chars} chars: {}",
        response.preview(preview_chars)
    )?;

    if show_headers {
        writeln!(out, "Headers:")?;
        for (name, value) in &response.headers {
            writeln!(out, "  {name}: {value}")?;
        }
    }
    Ok(())
}

pub fn write_failure(err_out: &mut impl Write, err: &ProbeError) -> ProbeResult<()> {
    writeln!(err_out, "{FAILURE_PREFIX} Error: {err}")?;
    Ok(())
}
