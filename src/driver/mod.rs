use anyhow::Result;
use std::io::Write;

use crate::output;
use crate::provider::{ProviderError, TranscriptProvider};
use crate::video_id::extract_video_id;

pub const USAGE: &str = "Usage: yt-transcript <YouTube URL>";
pub const INVALID_URL: &str = "Invalid YouTube URL";

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    /// Transcript printed, with the number of lines written
    Printed(usize),

    /// No URL argument was given
    Usage,

    /// The URL carried no video id
    InvalidUrl,

    /// The provider failed; the message has already been printed
    ProviderFailed(ProviderError),
}

impl Outcome {
    /// Process exit status for this outcome.
    ///
    /// Provider failures exit with 0 unless `fail_on_error` is set.
    pub fn exit_code(&self, fail_on_error: bool) -> i32 {
        match self {
            Outcome::Printed(_) => 0,
            Outcome::Usage | Outcome::InvalidUrl => 1,
            Outcome::ProviderFailed(_) => i32::from(fail_on_error),
        }
    }
}

/// Validate the URL, fetch its transcript and print it to `out`.
///
/// Every user-facing message goes to `out`. Only a failure to write to `out`
/// is returned as an error.
pub async fn run<P, W>(url: Option<&str>, provider: &P, out: &mut W) -> Result<Outcome>
where
    P: TranscriptProvider + ?Sized,
    W: Write,
{
    let Some(url) = url else {
        writeln!(out, "{}", USAGE)?;
        return Ok(Outcome::Usage);
    };

    let Some(video_id) = extract_video_id(url) else {
        tracing::debug!("No video id in URL: {}", url);
        writeln!(out, "{}", INVALID_URL)?;
        return Ok(Outcome::InvalidUrl);
    };

    tracing::info!("Fetching transcript for video {} from {}", video_id, provider.provider_name());

    match provider.fetch(&video_id).await {
        Ok(transcript) => {
            tracing::info!(
                "Got {} entries ({}, generated: {})",
                transcript.len(),
                transcript.language_code,
                transcript.is_generated
            );
            let written = output::write_text(&transcript, out)?;
            Ok(Outcome::Printed(written))
        }
        Err(err) => {
            tracing::warn!(transient = err.is_transient(), "Transcript fetch failed: {:?}", err);
            writeln!(out, "Error: {}", err)?;
            Ok(Outcome::ProviderFailed(err))
        }
    }
}
