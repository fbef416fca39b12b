use crate::utils::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(name = "quality-selector")]
#[command(about = "Replays player sessions through the quality level selection engine")]
#[command(long_about = "
Drives the quality selection engine with a recorded session: a YAML list of player
events and viewer clicks. Every published button label and menu is printed as the
session runs.

EXAMPLES:
  # Replay a session with the default options
  quality-selector --session session.yaml

  # Override options from the command line
  quality-selector --session session.yaml --set displayMode=resolution --set showBitrates=true

  # Enum options take a name or an index; text options take numbers as text
  quality-selector --session session.yaml --set defaultQuality=2 --set autoLabel=1080

  # Print the options that differ from the defaults
  quality-selector --config config.yaml --print-options
")]
pub struct CliArgs {
    /// Session file to replay
    #[arg(short, long, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, default_value = "config.yaml", value_name = "FILE")]
    pub config: PathBuf,

    /// Override a selector option (can be specified multiple times)
    #[arg(long = "set", value_name = "NAME=VALUE", action = clap::ArgAction::Append)]
    pub overrides: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Validate configuration file
    #[arg(long)]
    pub validate_config: bool,

    /// Print the selector options that differ from the defaults as JSON
    #[arg(long)]
    pub print_options: bool,
}

impl CliArgs {
    pub fn get_log_level<'a>(&self, config_level: &'a str) -> &'a str {
        if self.debug {
            "debug"
        } else {
            config_level
        }
    }

    pub fn should_use_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_info_command(&self) -> bool {
        self.validate_config || self.print_options
    }

    pub fn should_replay(&self) -> bool {
        !self.is_info_command() && self.session.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(session) = &self.session {
            if !session.exists() {
                return Err(Error::validation(format!(
                    "Session file does not exist: {}",
                    session.display()
                )));
            }
        }

        self.parsed_overrides().map(|_| ())
    }

    /// Splits every `--set` argument into an option name and a JSON value.
    ///
    /// Values that are not valid JSON are taken as plain strings.
    pub fn parsed_overrides(&self) -> Result<Vec<(String, serde_json::Value)>> {
        self.overrides
            .iter()
            .map(|raw| parse_override(raw))
            .collect()
    }
}

fn parse_override(raw: &str) -> Result<(String, serde_json::Value)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| {
        Error::validation(format!("Invalid option override: {} (expected NAME=VALUE)", raw))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation(format!(
            "Invalid option override: {} (missing option name)",
            raw
        )));
    }

    let value = serde_json::from_str(value.trim())
        .unwrap_or_else(|_| serde_json::Value::String(value.trim().to_string()));

    Ok((name.to_string(), value))
}
