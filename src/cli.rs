//! Command-line surface: argument definitions and the rendering they drive.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use qfrag_core::config::Config;
use qfrag_core::{CollapseBuilder, InnerHitSpec, Source};

#[derive(Debug, Parser)]
#[command(name = "qfrag", version, about = "Render search-request fragments as JSON")]
pub struct Cli {
    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Read configuration from PATH instead of ~/.config/qfrag/config.toml.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a `collapse` clause.
    Collapse(CollapseArgs),
}

#[derive(Debug, Args)]
pub struct CollapseArgs {
    /// Field to collapse on.
    pub field: String,

    /// Inner hit definition: a JSON object, or key=value pairs such as
    /// `name=last_tweets,size=5,sort=date:asc`. Repeat for several.
    #[arg(long = "inner-hit", value_name = "SPEC")]
    pub inner_hits: Vec<String>,

    /// Maximum number of concurrent group searches in the inner hits phase.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_concurrent_group_searches: Option<i64>,

    /// Print on a single line regardless of configuration.
    #[arg(long)]
    pub compact: bool,
}

/// Build the collapse clause described by `args`, falling back to `config`
/// for anything the command line leaves unset.
pub fn build_collapse(args: &CollapseArgs, config: &Config) -> anyhow::Result<CollapseBuilder> {
    let specs = args
        .inner_hits
        .iter()
        .map(|text| InnerHitSpec::parse(text, config.inner_hits.size))
        .collect::<Result<Vec<_>, _>>()
        .context("bad --inner-hit")?;

    let mut collapse = CollapseBuilder::new(args.field.as_str()).inner_hits(specs);
    if let Some(max) = args
        .max_concurrent_group_searches
        .or(config.collapse.max_concurrent_group_searches)
    {
        collapse = collapse.max_concurrent_group_searches(max);
    }
    Ok(collapse)
}

/// Serialize a fragment, pretty-printed or on one line.
pub fn render(fragment: &dyn Source, pretty: bool) -> qfrag_core::Result<String> {
    let value = fragment.source()?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Execute `cli` and return what should be printed.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    match &cli.command {
        Command::Collapse(args) => {
            let collapse = build_collapse(args, config)?;
            tracing::debug!(?collapse, "built collapse clause");
            let pretty = config.output.pretty && !args.compact;
            render(&collapse, pretty).context("failed to render collapse clause")
        }
    }
}
