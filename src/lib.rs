//! rmileage library root.
//! Exposes the day-record synchronizer (translator, range cache, form
//! controller, classification), the store clients and the CLI dispatcher.

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Get { .. } => cli::commands::get::handle(&cli.command, cfg),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics to stderr
    logging::init_tracing(cli.verbose);

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line overrides
    if let Some(api) = &cli.api {
        cfg.api_url = api.clone();
    }
    if let Some(offset) = &cli.utc_offset {
        cfg.utc_offset = Some(offset.clone());
    }

    dispatch(&cli, &cfg)
}
