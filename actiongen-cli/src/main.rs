use actiongen::utils::config::Config;
use actiongen::utils::loader;
use actiongen::utils::logger;
use actiongen::ActionConverter;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "actiongen", version, about = "Generate action metadata from OpenAPI documents")]
struct Cli {
    /// Path to a dereferenced OpenAPI document (JSON or YAML)
    spec: PathBuf,

    /// Configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the generated JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let document = loader::load_document(&cli.spec)
        .with_context(|| format!("failed to load {}", cli.spec.display()))?;

    let info = document.info();
    tracing::info!(title = %info.title, version = %info.version, "loaded OpenAPI document");

    let converter = ActionConverter::new(config.convert_options());
    let result = converter
        .convert(&document)
        .context("conversion failed")?;

    tracing::info!(
        actions = result.actions.len(),
        objects = result.custom_types.objects.len(),
        input_objects = result.custom_types.input_objects.len(),
        "generated action metadata"
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
