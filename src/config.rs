use chrono::format::{Item, StrftimeItems};
use clap::ArgMatches;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OtpError, Result};
use crate::refresh::Mode;

const CONFIG_DIR: &str = ".otp";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_DIGITS: u32 = 6;
pub const DEFAULT_INTERVAL: u64 = 30;
pub const DEFAULT_DATE_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_NAME_WIDTH: usize = 25;
pub const MAX_DIGITS: u32 = 10;

/// Settings fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub digits: u32,
    pub interval: u64,
    pub date_format: String,
    pub name_width: usize,
    pub source: Option<PathBuf>,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            digits: DEFAULT_DIGITS,
            interval: DEFAULT_INTERVAL,
            date_format: String::from(DEFAULT_DATE_FORMAT),
            name_width: DEFAULT_NAME_WIDTH,
            source: None,
            mode: Mode::Continuous,
        }
    }
}

// Optional overrides read from config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub digits: Option<u32>,
    pub interval: Option<u64>,
    pub date_format: Option<String>,
    pub name_width: Option<usize>,
}

impl ConfigFile {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            OtpError::Config(format!("unable to read {}: {}", path.display(), err))
        })?;
        Self::parse(&contents)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some([home, PathBuf::from(CONFIG_DIR), PathBuf::from(CONFIG_FILE_NAME)].iter().collect())
}

impl Config {
    /// Resolve settings: defaults, then the config file, then command line flags.
    pub fn load(matches: &ArgMatches) -> Result<Config> {
        let file = match matches.value_of("config") {
            Some(path) => Some(ConfigFile::load(Path::new(path))?),
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    tracing::debug!(path = %path.display(), "using config file");
                    Some(ConfigFile::load(&path)?)
                }
                _ => None,
            },
        };

        let mut config = Config::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_args(matches)?;
        config.validate()?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(digits) = file.digits {
            self.digits = digits;
        }
        if let Some(interval) = file.interval {
            self.interval = interval;
        }
        if let Some(date_format) = file.date_format {
            self.date_format = date_format;
        }
        if let Some(name_width) = file.name_width {
            self.name_width = name_width;
        }
    }

    pub fn apply_args(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(digits) = matches.value_of("digits") {
            self.digits = parse_flag("digits", digits)?;
        }
        if let Some(interval) = matches.value_of("interval") {
            self.interval = parse_flag("interval", interval)?;
        }
        if let Some(date_format) = matches.value_of("date-format") {
            self.date_format = String::from(date_format);
        }
        if let Some(width) = matches.value_of("width") {
            self.name_width = parse_flag("width", width)?;
        }
        if let Some(file) = matches.value_of("file") {
            self.source = Some(PathBuf::from(file));
        }
        if matches.is_present("once") {
            self.mode = Mode::Once;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(OtpError::Config(format!(
                "digits must be between 1 and {}, got {}",
                MAX_DIGITS, self.digits
            )));
        }
        if self.interval == 0 {
            return Err(OtpError::Config(String::from(
                "interval must be greater than zero",
            )));
        }
        if self.name_width == 0 {
            return Err(OtpError::Config(String::from(
                "name width must be greater than zero",
            )));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(OtpError::Config(format!(
                "invalid date format {:?}",
                self.date_format
            )));
        }
        Ok(())
    }
}

fn parse_flag<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| OtpError::Config(format!("invalid value for {}: {:?}", name, value)))
}
