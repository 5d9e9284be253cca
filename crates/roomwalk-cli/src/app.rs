use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roomwalk_logic::fixtures::Fixture;

/// roomwalk - find your way out through the colored doors
#[derive(Debug, Parser)]
#[command(name = "roomwalk", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Map played when no subcommand is given.
    #[command(flatten)]
    pub map: MapArg,

    /// Defaults to `play` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where to read a map from.
#[derive(Debug, Clone, Args)]
pub struct MapArg {
    /// Path to the JSON map file.
    #[arg(short = 'm', long = "map", value_name = "FILE", env = "ROOMWALK_MAP", default_value = "map.json")]
    pub path: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load and validate a map, then walk it from the starting room.
    Play {
        #[command(flatten)]
        map: MapArg,
    },

    /// Check a map is playable and list warnings about it.
    Validate {
        #[command(flatten)]
        map: MapArg,

        /// Emit the report as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Write one of the built-in sample maps.
    Fixture {
        /// Which sample: basic or cave.
        #[arg(value_name = "NAME")]
        name: Fixture,

        /// Output file (overwritten if present).
        #[arg(short, long, value_name = "FILE", default_value = "map.json")]
        out: PathBuf,
    },
}
