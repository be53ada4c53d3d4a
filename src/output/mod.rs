use anyhow::Result;
use std::io::Write;

use crate::provider::Transcript;

/// Write each entry's text on its own line, in transcript order
pub fn write_text<W: Write>(transcript: &Transcript, out: &mut W) -> Result<usize> {
    for entry in transcript {
        writeln!(out, "{}", entry.text)?;
    }
    out.flush()?;

    Ok(transcript.len())
}
