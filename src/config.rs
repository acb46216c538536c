//! Runtime configuration, read from the command line.

use std::path::PathBuf;

use clap::Parser;
use glam::IVec2;

use crate::constants::{DAMAGE_ICON_LIFETIME, PLAYER_START, STARTING_HEALTH, THROTTLE_INTERVAL};

/// Settings the simulation itself depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Throttled effects run on every tick that is a multiple of this.
    pub throttle_interval: u32,
    pub start: IVec2,
    pub starting_health: i32,
    pub damage_icon_lifetime: u32,
    /// Keep armor from going negative when a hit costs more than is left.
    pub clamp_armor: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            throttle_interval: THROTTLE_INTERVAL,
            start: PLAYER_START,
            starting_health: STARTING_HEALTH,
            damage_icon_lifetime: DAMAGE_ICON_LIFETIME,
            clamp_armor: true,
        }
    }
}

/// Full program configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub game: GameConfig,
    /// Seed for monster movement; `None` uses the thread RNG.
    pub seed: Option<u64>,
    pub muted: bool,
    pub log_file: Option<PathBuf>,
    pub assets: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            muted: false,
            log_file: None,
            assets: PathBuf::from("assets"),
        }
    }
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "dungeon")]
#[command(version, about = "Crawl four dungeon levels, from the first key to the boss", long_about = None)]
pub struct Cli {
    /// Seed for monster movement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start with sound muted
    #[arg(long)]
    pub mute: bool,

    /// Log destination (the terminal build defaults to dungeon.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Run monsters, fireballs and the death check every N ticks
    #[arg(long, value_name = "N", default_value_t = THROTTLE_INTERVAL, value_parser = clap::value_parser!(u32).range(1..))]
    pub throttle: u32,

    /// Keep armor at zero or above when a hit costs more than is left (default)
    #[arg(long, overrides_with = "no_clamp_armor")]
    pub clamp_armor: bool,

    /// Let a hit drive armor below zero
    #[arg(long, overrides_with = "clamp_armor")]
    pub no_clamp_armor: bool,

    /// Directory holding the sound files
    #[arg(long, value_name = "DIR", default_value = "assets")]
    pub assets: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            game: GameConfig {
                throttle_interval: cli.throttle,
                clamp_armor: !cli.no_clamp_armor,
                ..GameConfig::default()
            },
            seed: cli.seed,
            muted: cli.mute,
            log_file: cli.log_file,
            assets: cli.assets,
        }
    }
}
