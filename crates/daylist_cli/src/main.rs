//! daylist command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging, open the SQLite-backed store.
//! - Run one command and map failures to a non-zero exit code.

mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::Cli;
use config::AppConfig;
use daylist_core::db::open_db;
use anyhow::{Context, Result};
use daylist_core::{init_logging, KeyValueAdapter, SqliteKeyValueStore, TaskStore};
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(cli, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error error={:#}", err);
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<String> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create data directory `{}`", parent.display()))?;
    }
    let conn = open_db(&config.db_path)
        .with_context(|| format!("cannot open database `{}`", config.db_path.display()))?;
    let kv = SqliteKeyValueStore::try_new(&conn).context("task storage is not usable")?;
    let mut store = TaskStore::open(KeyValueAdapter::with_key(kv, config.storage_key.as_str()));
    commands::run(&mut store, cli.command)
}
