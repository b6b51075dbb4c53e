pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "course-advisor")]
#[command(about = "Course catalog and prerequisite lookup tool")]
pub struct CliConfig {
    /// Catalog file to load before anything else
    #[arg(short, long)]
    pub file: Option<String>,

    /// Print the course list and exit
    #[arg(long, conflicts_with = "show")]
    pub list: bool,

    /// Print one course with its prerequisites and exit
    #[arg(long, value_name = "COURSE_ID")]
    pub show: Option<String>,

    /// Output format for --list/--show
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field delimiter (single character)
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn is_one_shot(&self) -> bool {
        self.list || self.show.is_some()
    }

    /// Merges command line flags over the optional TOML file.
    pub fn settings(&self) -> Result<Settings> {
        let toml = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let mut settings = Settings::from_toml(&toml)?;

        // 命令列覆蓋設定
        if let Some(file) = &self.file {
            settings.catalog_file = Some(file.clone());
        }
        if let Some(delimiter) = &self.delimiter {
            settings.delimiter = validation::parse_single_char("delimiter", delimiter)?;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// Effective settings after defaults, TOML and command line are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub catalog_file: Option<String>,
    pub delimiter: char,
    pub quote: char,
    pub output_format: OutputFormat,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            delimiter: ',',
            quote: '"',
            output_format: OutputFormat::Text,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(toml: &TomlConfig) -> Result<Self> {
        toml.validate()?;
        let defaults = Self::default();
        Ok(Self {
            catalog_file: toml.catalog.file.clone(),
            delimiter: toml.delimiter()?.unwrap_or(defaults.delimiter),
            quote: toml.quote()?.unwrap_or(defaults.quote),
            output_format: toml.output_format()?.unwrap_or(defaults.output_format),
            json_logs: toml.json_logs(),
        })
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.catalog_file {
            validation::validate_path("catalog.file", file)?;
        }
        validation::validate_separators(self.delimiter, self.quote)
    }
}

impl ConfigProvider for Settings {
    fn catalog_file(&self) -> Option<&str> {
        self.catalog_file.as_deref()
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn quote(&self) -> char {
        self.quote
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}
