use async_trait::async_trait;

pub mod youtube;

pub use youtube::YoutubeProvider;

/// A single caption line with its timing
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    /// Caption text, markup stripped and entities decoded
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptEntry {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// A fetched transcript. Entries keep the order the provider returned them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Video the transcript belongs to
    pub video_id: String,

    /// Human-readable name of the caption track language
    pub language: String,

    /// Language code of the caption track (en, de, pt-BR, ...)
    pub language_code: String,

    /// Whether the track was generated by speech recognition
    pub is_generated: bool,

    /// Caption lines
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Build a transcript with no track metadata
    pub fn from_entries(video_id: impl Into<String>, entries: Vec<TranscriptEntry>) -> Self {
        Self {
            video_id: video_id.into(),
            language: String::new(),
            language_code: String::new(),
            is_generated: false,
            entries,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Transcript {
    type Item = TranscriptEntry;
    type IntoIter = std::vec::IntoIter<TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Failures a transcript provider can report.
///
/// The CLI prints all of them the same way, but the kind is kept so callers
/// can tell a missing transcript from a network problem.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("Invalid video id: {0} (pass the id, not the URL)")]
    InvalidVideoId(String),

    #[error("The video {0} is no longer available")]
    VideoUnavailable(String),

    #[error("The video {video_id} is unplayable: {reason}")]
    VideoUnplayable { video_id: String, reason: String },

    #[error("The video {0} is age restricted and requires authentication")]
    AgeRestricted(String),

    #[error("YouTube is blocking requests from this IP address")]
    RequestBlocked,

    #[error("Subtitles are disabled for the video {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript found for the video {video_id} in languages [{}] (available: [{}])", requested.join(", "), available.join(", "))]
    NoTranscriptFound {
        video_id: String,
        requested: Vec<String>,
        available: Vec<String>,
    },

    #[error("The caption track for the video {0} requires a PO token")]
    PoTokenRequired(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Unexpected response from YouTube: {0}")]
    Malformed(String),

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Whether trying again later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(_) | ProviderError::RequestBlocked => true,
            ProviderError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Source of transcripts for a video id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript for a video id
    async fn fetch(&self, video_id: &str) -> Result<Transcript, ProviderError>;

    /// Get the name of this provider
    fn provider_name(&self) -> &'static str;
}
