//! yt-transcript - print the transcript of a YouTube video
//!
//! The video id is read from the `v` query parameter of a watch URL and handed
//! to a [`TranscriptProvider`]. Each transcript entry's text is printed on its
//! own line.

pub mod cli;
pub mod config;
pub mod driver;
pub mod output;
pub mod provider;
pub mod video_id;

pub use cli::Cli;
pub use config::Config;
pub use driver::{run, Outcome};
pub use provider::{ProviderError, Transcript, TranscriptEntry, TranscriptProvider, YoutubeProvider};
pub use video_id::extract_video_id;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;
