use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use promdash::AppError;
use promdash::config::FetchConfig;
use promdash::dashboard::render_dashboard;
use promdash::exposition::{dedup_by_name, parse_bytes};
use promdash::fetch::MetricsFetcher;
use promdash::output::{DEFAULT_OUTPUT_FILE, write_dashboard};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "promdash", version, about = "Generate a Grafana dashboard from a Prometheus metrics endpoint")]
struct Cli {
    #[arg(
        required_unless_present = "input",
        conflicts_with = "input",
        help = "Metrics endpoint, e.g. http://localhost:2112/metrics"
    )]
    url: Option<String>,

    #[arg(long, help = "Read exposition text from a file, or - for stdin, instead of fetching")]
    input: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Keep only the first panel for each metric name")]
    dedup: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    match run(cli, Path::new(DEFAULT_OUTPUT_FILE)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "dashboard generation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch or read the payload, lay it out, and write it to `output`.
///
/// Any failure before the write returns early; `output` is untouched.
async fn run(cli: Cli, output: &Path) -> Result<(), AppError> {
    let payload = match (&cli.input, &cli.url) {
        (Some(path), _) => read_input(path).await?,
        (None, Some(url)) => {
            let config = FetchConfig::from_env()?;
            MetricsFetcher::new(&config)?.fetch(url).await?
        }
        (None, None) => return Err(AppError::MissingSource),
    };

    let mut metrics = parse_bytes(&payload);
    tracing::info!(metrics = metrics.len(), "parsed exposition payload");

    if cli.dedup {
        let before = metrics.len();
        metrics = dedup_by_name(metrics);
        tracing::info!(removed = before - metrics.len(), "deduplicated metric names");
    }

    let dashboard = render_dashboard(&metrics);
    write_dashboard(output, &dashboard)?;
    Ok(())
}

async fn read_input(path: &Path) -> Result<Vec<u8>, AppError> {
    let read_error = |source| AppError::ReadInput { path: path.to_path_buf(), source };

    if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await.map_err(read_error)?;
        return Ok(buf);
    }
    tokio::fs::read(path).await.map_err(read_error)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
