use crate::utils::error::Result;

/// Where catalog lines come from. The whole source is read up front so that a
/// failed read never touches an already loaded catalog.
pub trait LineSource {
    fn read_lines(&self, path: &str) -> Result<Vec<String>>;
}

pub trait ConfigProvider {
    fn catalog_file(&self) -> Option<&str>;
    fn delimiter(&self) -> char;
    fn quote(&self) -> char;
    fn output_format(&self) -> OutputFormat;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];
}
