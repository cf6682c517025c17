use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Luach Hebrew calendar generator.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar, holiday and Torah-reading generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List holidays, readings and other events for a year or month.
    Calendar(CalendarArgs),
    /// Convert a date between the Gregorian and Hebrew calendars.
    Convert(ConvertArgs),
    /// List the anniversaries of a date in the following Hebrew years.
    Yahrzeit(YahrzeitArgs),
}

/// Output format for `calendar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One "YYYY-MM-DD Title" line per event.
    Text,
    /// A JSON array of event records.
    Json,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the year from config (Gregorian unless --hebrew).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Restrict a Gregorian year to one month (1-12).
    #[arg(short, long)]
    pub month: Option<u8>,

    /// Interpret the year as a Hebrew year.
    #[arg(long)]
    pub hebrew: bool,

    /// Use the Israeli holiday and reading schedule.
    #[arg(long)]
    pub il: bool,

    /// Add the weekly Torah portion on Saturdays.
    #[arg(short, long)]
    pub sedrot: bool,

    /// Add the daily count of the Omer.
    #[arg(short, long)]
    pub omer: bool,

    /// Announce the molad on the Shabbat before Rosh Chodesh.
    #[arg(long)]
    pub molad: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian `YYYY-MM-DD` or Hebrew date such as "15 Cheshvan 5769".
    pub date: String,
}

/// Arguments for the `yahrzeit` subcommand.
#[derive(clap::Args)]
pub struct YahrzeitArgs {
    /// Original date, Gregorian `YYYY-MM-DD` or Hebrew "30 Adar I 5774".
    pub date: String,

    /// Number of following Hebrew years to list.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub years: u32,

    /// Use the birthday rules instead of the yahrzeit rules.
    #[arg(short, long)]
    pub birthday: bool,
}
