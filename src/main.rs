use anyhow::{Context, Result};
use clap::Parser;
use sectionmark::config::{Config, DEFAULT_DESTINATION, DEFAULT_SOURCE};
use sectionmark::io::{self, PathQuery};
use sectionmark::{convert, split_sections};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sectionmark")]
#[command(about = "Convert a Markdown file to HTML, one section per header", long_about = None)]
struct Args {
    /// Markdown file to convert (`-` for stdin)
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Where to write the HTML (`-` for stdout)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Config file to read instead of ./sectionmark.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ask for any path not given on the command line or in the config
    #[arg(long)]
    prompt: bool,

    /// Print the section split as JSON instead of converting
    #[arg(long)]
    sections: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout can carry the HTML.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    let source = resolve(
        args.source,
        cfg.source.clone(),
        args.prompt,
        &PathQuery {
            question: "Enter the filesystem path to the markdown file",
            default: DEFAULT_SOURCE,
            suffix: "md",
            attempts: cfg.prompt_attempts,
        },
    )?;
    let markdown = io::read_source(&source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    if args.sections {
        println!("{}", serde_json::to_string_pretty(&split_sections(&markdown))?);
        return Ok(());
    }

    let destination = resolve(
        args.output,
        cfg.destination.clone(),
        args.prompt,
        &PathQuery {
            question: "Enter the filesystem path for outputting the html",
            default: DEFAULT_DESTINATION,
            suffix: "html",
            attempts: cfg.prompt_attempts,
        },
    )?;
    let title = args.title.as_deref().unwrap_or(cfg.title());

    info!("Converting {} to {}", source.display(), destination.display());
    let html = convert(&markdown, title);
    io::write_output(&destination, &html)
        .with_context(|| format!("Failed to write {}", destination.display()))?;

    Ok(())
}

/// Prompts read stdin and are written to stderr, leaving stdout for the HTML.
fn resolve(
    from_args: Option<PathBuf>,
    from_config: Option<PathBuf>,
    prompt: bool,
    query: &PathQuery,
) -> Result<PathBuf> {
    let path = io::resolve_path(
        &mut std::io::stdin().lock(),
        &mut std::io::stderr(),
        from_args,
        from_config,
        prompt,
        query,
    )?;
    Ok(path)
}
