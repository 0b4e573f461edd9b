//! `lyrics` - download the lyrics of a song page.
//!
//! Usage:
//!   `lyrics --url <URL>`
//!   `lyrics --url <URL> --output lyrics.txt`

use std::path::{Component, Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use lyrics::{parse_url, Fetcher, LyricsService};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod config;

use args::{Args, USAGE};
use config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before logging so RUST_LOG from the file applies
    dotenv::dotenv().ok();
    init_logging(std::env::var("RUST_LOG").ok().as_deref());

    match run(std::env::args().skip(1)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(directives: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives))
        .with_writer(std::io::stderr)
        .init();
}

/// Filter from `RUST_LOG` directives, `warn` when unset or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Render an error chain on a single line
fn diagnostic(err: &anyhow::Error) -> String {
    format!("{err:#}").replace(['\r', '\n'], " ")
}

async fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let args = Args::parse(args)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let Some(url) = args.url else {
        bail!("The URL of the song was not provided");
    };
    let url = parse_url(&url).context("The parameter provided is not a URL")?;

    let config = Config::load();
    debug!(?config, "configuration loaded");

    let fetcher = Fetcher::new(&config.fetch_options()).context("Could not create the HTTP client")?;
    let body = fetcher.fetch(&url).await.context("Error in the request")?;

    let lyrics = LyricsService::new()
        .extract_html(&body)
        .context("Could not retrieve the lyrics from the page")?;

    match args.output {
        Some(path) => write_output(&path, &lyrics),
        None => {
            println!("{lyrics}");
            Ok(())
        }
    }
}

/// Write the lyrics to `path`, creating or truncating the file
fn write_output(path: &Path, lyrics: &str) -> Result<()> {
    let path = clean_path(path);
    fs_err::write(&path, lyrics).context("Could not write in file")?;
    debug!(path = %path.display(), "lyrics written");
    Ok(())
}

/// Lexically normalize a path: drop `.` and repeated separators, and
/// resolve `..` against the preceding component where there is one
fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.into_iter().collect()
    }
}
