use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "yt-transcript",
    about = "Print the transcript of a YouTube video, one caption line per row",
    version,
    long_about = "Extracts the video id from the `v` parameter of a YouTube watch URL, fetches the video's caption track and prints each caption line to standard output."
)]
pub struct Cli {
    /// YouTube watch URL (https://www.youtube.com/watch?v=<id>)
    #[arg(value_name = "YOUTUBE_URL")]
    pub url: Option<String>,

    /// Anything after the URL is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Preferred caption language, repeat for fallbacks (default: en)
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE", env = "YT_TRANSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the transcript cannot be fetched
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
