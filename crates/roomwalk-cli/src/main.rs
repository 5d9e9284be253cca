//! Roomwalk console front-end.
//!
//! Usage:
//!   roomwalk                          # play ./map.json
//!   roomwalk --map cave.json          # same as `play --map cave.json`
//!   roomwalk play --map cave.json
//!   roomwalk validate --map cave.json [--json]
//!   roomwalk fixture cave --out cave.json

mod app;
mod commands;
mod play;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the game text; RUST_LOG overrides.
    let level = if cli.global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("roomwalk", level)
        .filter_module("roomwalk_logic", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        None => commands::play(&cli.map.path),
        Some(Command::Play { map }) => commands::play(&map.path),
        Some(Command::Validate { map, json }) => commands::validate(&map.path, json),
        Some(Command::Fixture { name, out }) => commands::fixture(name, &out),
    }
}
