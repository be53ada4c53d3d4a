use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript::{driver, Cli, Config, YoutubeProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the transcript and messages
    let default_filter = if cli.verbose { "yt_transcript=debug" } else { "yt_transcript=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref())?.apply_cli(&cli);
    config.validate()?;

    let provider = YoutubeProvider::new(&config.provider)?.with_progress(!cli.quiet);

    let stdout = std::io::stdout();
    let outcome = driver::run(cli.url.as_deref(), &provider, &mut stdout.lock()).await?;

    let code = outcome.exit_code(config.app.fail_on_error);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
