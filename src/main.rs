use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use hitlog_attribution::{attribution, cli::Cli, data};
use tracing_subscriber::EnvFilter;

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let start = Utc::now();

    let args = Cli::parse();
    init_tracing(args.debug);
    let config = args.attribution_config();

    let events = data::load_hitlog(&args.input)
        .with_context(|| format!("Failed to load hitlog {}", args.input.display()))?;

    let top_articles = attribution::compute_top_articles_with(&events, &config);

    // Nothing is written unless the whole report was computed
    data::save_top_articles(&args.output, &top_articles)
        .with_context(|| format!("Failed to write report {}", args.output.display()))?;

    println!("Pipeline executed successfully.");
    println!("Done in {}ms", (Utc::now() - start).num_milliseconds());

    Ok(())
}
