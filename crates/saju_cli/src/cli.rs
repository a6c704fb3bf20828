use std::path::PathBuf;

use chrono::FixedOffset;
use clap::{Args, Parser, Subcommand};

/// Four-pillars (사주) charts, lunar dates and solar terms.
#[derive(Parser)]
#[command(name = "saju", version, about = "Four-pillars chart calculator")]
pub struct Cli {
    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML configuration file (default: ./saju.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Four pillars of a birth instant
    Pillars(InstantArgs),
    /// Pillars plus useful element and recommendations
    Analyze(AnalyzeArgs),
    /// Convert a Gregorian date to the lunar calendar
    Lunar {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a lunar date to the Gregorian calendar
    Solar {
        /// Lunar year
        year: i32,
        /// Lunar month (1-12)
        month: u8,
        /// Day of month (1-30)
        day: u8,
        /// The date is in the intercalary month
        #[arg(long)]
        leap: bool,
    },
    /// The 24 solar terms of a year
    Terms {
        /// Gregorian year
        year: i32,
        /// UTC offset for displayed times
        #[arg(long, default_value = "+09:00", allow_hyphen_values = true)]
        offset: FixedOffset,
    },
    /// List available presets
    Presets,
}

/// A birth instant and the convention to read it under.
#[derive(Args)]
pub struct InstantArgs {
    /// Local date and time (YYYY-MM-DDThh:mm[:ss], optional ±hh:mm offset)
    #[arg(long)]
    pub date: String,

    /// UTC offset when `--date` carries none
    #[arg(long, default_value = "+09:00", allow_hyphen_values = true)]
    pub offset: FixedOffset,

    /// Preset key (default from config, else `standard`)
    #[arg(long)]
    pub preset: Option<String>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Local date and time (YYYY-MM-DDThh:mm[:ss], optional ±hh:mm offset)
    #[arg(long, conflicts_with = "pillars", required_unless_present = "pillars")]
    pub date: Option<String>,

    /// Four pillar labels, year to hour (e.g. "甲子 丙寅 甲辰 乙亥")
    #[arg(long)]
    pub pillars: Option<String>,

    /// UTC offset when `--date` carries none
    #[arg(long, default_value = "+09:00", allow_hyphen_values = true)]
    pub offset: FixedOffset,

    /// Preset key (default from config, else `standard`)
    #[arg(long)]
    pub preset: Option<String>,
}
