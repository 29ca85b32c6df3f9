use anyhow::{anyhow, Result};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use shelfcard::preview;
use shelfcard_catalog::CatalogFile;
use shelfcard_core::{Catalog, Registry, StaticHost};
use shelfcard_widgets::register_all;

/// shelfcard - render page-builder widgets from the command line
#[derive(Parser, Debug)]
#[command(name = "shelfcard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog snapshot to read categories from (JSON)
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Widget to render
    #[arg(short = 'w', long = "widget", value_name = "NAME", default_value = "category_card")]
    widget: String,

    /// Placeholder image URL the host editor would provide
    #[arg(long = "placeholder-url", value_name = "URL", default_value = "placeholder.png")]
    placeholder_url: String,

    /// Print the widget's control schema as JSON instead of rendering
    #[arg(short = 's', long = "schema")]
    schema: bool,

    /// List registered widgets
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Settings record to render (JSON); control defaults are used when omitted
    #[arg(value_name = "SETTINGS_FILE")]
    settings_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    // Level 0 (default): warn only
    // Level 1: info (normal verbosity)
    // Level 2: debug (detailed)
    // Level 3+: trace (very detailed)
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut registry = Registry::new();
    register_all(&mut registry);

    if cli.list {
        for descriptor in registry.descriptors() {
            println!("{}\t{}", descriptor.name, descriptor.title);
        }
        return Ok(());
    }

    let catalog_path = cli
        .catalog
        .ok_or_else(|| anyhow!("--catalog is required unless --list is given"))?;
    let catalog = CatalogFile::load(&catalog_path)?.into_catalog();
    info!("Catalog ready with {} categories", catalog.categories().len());

    let host = StaticHost::new(cli.placeholder_url);

    if cli.schema {
        println!("{}", preview::schema_json(&registry, &cli.widget, &catalog, &host)?);
        return Ok(());
    }

    let settings = match &cli.settings_file {
        Some(path) => preview::load_settings(path)?,
        None => {
            warn!("No settings file given, rendering with control defaults");
            preview::default_settings(&registry, &cli.widget, &catalog, &host)?
        }
    };

    let fragment = preview::render_widget(&registry, &cli.widget, &settings, &catalog, &host)?;
    println!("{}", fragment);
    Ok(())
}
