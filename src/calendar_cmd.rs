//! Calendar command: generate events and print them as text or JSON.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use luach_hebcal::HebrewCalendar;

use crate::cli::{CalendarArgs, Format};
use crate::config::LuachConfig;
use crate::convert;

/// Config file read from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "luach.toml";

/// Run the calendar command.
pub fn run(args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let config = load_config(args.config.as_deref())?;
    let opts = convert::build_cal_options(&config, &args)?;

    let calendar = HebrewCalendar::new();
    let events = calendar
        .generate(&opts)
        .context("failed to generate calendar")?;
    info!(n_events = events.len(), "calendar generated");
    let records = calendar.records(&events, &opts);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => {
            for r in &records {
                writeln!(out, "{} {}", r.date, r.title)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &records)
                .context("failed to write JSON output")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Reads `path`, or `luach.toml` if it exists, or falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<LuachConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            if !default.exists() {
                debug!("no config file, using defaults");
                return Ok(LuachConfig::default());
            }
            default
        }
    };
    info!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
