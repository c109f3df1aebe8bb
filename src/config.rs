use crate::constants::*;
use crate::error::AppError;
use crate::models::HomeChoice;
use std::env;
use time::macros::format_description;
use time::UtcOffset;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the JSON dataset with `homeA`, `homeB`, `stallsA`, `stallsB`
    pub dataset_path: String,

    /// Home list used until the user switches
    pub home_choice: HomeChoice,

    /// Fixed offset for "now". When unset the local offset is used, falling
    /// back to UTC if it cannot be determined.
    pub utc_offset: Option<UtcOffset>,

    /// Program used to open directions links instead of the platform default
    pub open_command: Option<String>,

    /// Seed for reproducible picks
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
            home_choice: HomeChoice::default(),
            utc_offset: None,
            open_command: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let utc_offset = match env::var("STALLPICK_UTC_OFFSET") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_utc_offset(&raw)?),
            _ => None,
        };

        let seed = match env::var("STALLPICK_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| format!("Invalid STALLPICK_SEED: '{}'", raw))?,
            ),
            _ => None,
        };

        Ok(Config {
            dataset_path: env::var("STALLPICK_DATASET")
                .unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string()),
            home_choice: env::var("STALLPICK_HOME")
                .unwrap_or_else(|_| DEFAULT_HOME_CHOICE.to_string())
                .parse()?,
            utc_offset,
            open_command: env::var("STALLPICK_OPEN_COMMAND")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            seed,
        })
    }

    /// Apply `--dataset=PATH` and `--home=a|b` command line overrides.
    pub fn with_args(mut self, args: &[String]) -> crate::Result<Self> {
        if let Some(path) = args.iter().find_map(|a| a.strip_prefix("--dataset=")) {
            self.dataset_path = path.to_string();
        }
        if let Some(home) = args.iter().find_map(|a| a.strip_prefix("--home=")) {
            self.home_choice = home.parse().map_err(AppError::Config)?;
        }
        Ok(self)
    }
}

/// Parse `+08:00`, `-05:30` or `+8`.
pub fn parse_utc_offset(raw: &str) -> Result<UtcOffset, String> {
    let raw = raw.trim();
    let full = format_description!("[offset_hour sign:mandatory padding:none]:[offset_minute]");
    let hours_only = format_description!("[offset_hour sign:mandatory padding:none]");

    UtcOffset::parse(raw, &full)
        .or_else(|_| UtcOffset::parse(raw, &hours_only))
        .map_err(|_| format!("Invalid STALLPICK_UTC_OFFSET: '{}' (expected e.g. +08:00)", raw))
}
