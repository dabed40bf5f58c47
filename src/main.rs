//! main.rs
//! Entry point for fieldlist

use fieldlist::config::{Config, ConfigError, find_config, generate_sample, load_listing_config};
use fieldlist::core::{Formatter, build_listing};
use fieldlist::ui::{render_json, render_table};
use fieldlist::utils::cli::{CliAction, handle_args};
use fieldlist::utils::resolve_dir;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

type AppResult = Result<(), Box<dyn Error>>;

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if let Err(e) = subscriber.try_init() {
        eprintln!("Failed to init tracing subscriber: {e}");
    }
    tracing::debug!("logging initialized");
}

fn main() -> ExitCode {
    let args = handle_args();
    init_logging(args.debug);

    let result = match args.action {
        CliAction::Exit => return ExitCode::SUCCESS,
        CliAction::Invalid => return ExitCode::from(2),
        CliAction::List { path, json } => list(path.as_deref(), json),
        CliAction::Check(file) => check(Path::new(&file)),
        CliAction::InitConfig => {
            Config::generate_default(&Config::default_path()).map_err(Into::into)
        }
        CliAction::InitListing(path) => init_listing(path.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[fl] Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn list(path: Option<&str>, json: bool) -> AppResult {
    let config = Config::load();
    let dir = resolve_dir(path)?;

    // The listed directory is canonical, so the root has to be as well.
    let root = config
        .general()
        .root()
        .map(|r| fs::canonicalize(r).unwrap_or_else(|_| r.clone()));
    let name = config.general().config_name();

    let Some(config_path) = find_config(root.as_deref(), &dir, name) else {
        return Err(ConfigError::NotFound {
            name: name.to_string(),
            dir,
        }
        .into());
    };

    tracing::debug!(path = %config_path.display(), "loading listing config");
    let listing_config = load_listing_config(&config_path)?;

    let formatter = Formatter::new(config.general().case_insensitive());
    let listing = build_listing(&dir, &listing_config, &formatter)?;
    tracing::debug!(
        directories = listing.directories.len(),
        files = listing.files.len(),
        "listing built"
    );

    let out = if json {
        render_json(&listing)?
    } else {
        render_table(&listing, config.display())
    };
    print!("{out}");
    Ok(())
}

fn check(file: &Path) -> AppResult {
    let listing_config = load_listing_config(file)?;
    println!(
        "{}: ok ({} directory fields, {} file fields)",
        file.display(),
        listing_config.directories().fields().len(),
        listing_config.files().fields().len()
    );
    Ok(())
}

fn init_listing(path: Option<&str>) -> AppResult {
    let config = Config::load();
    let dir = resolve_dir(path)?;
    let written = generate_sample(&dir, config.general().config_name())?;
    println!("Sample listing config generated at {:?}", written);
    Ok(())
}
