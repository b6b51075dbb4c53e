use crate::domain::ports::OutputFormat;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub file: Option<String>,
    pub delimiter: Option<String>,
    pub quote: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AdvisorError::ConfigError {
            message: format!("Failed to read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn delimiter(&self) -> Result<Option<char>> {
        self.catalog
            .delimiter
            .as_deref()
            .map(|value| validation::parse_single_char("catalog.delimiter", value))
            .transpose()
    }

    pub fn quote(&self) -> Result<Option<char>> {
        self.catalog
            .quote
            .as_deref()
            .map(|value| validation::parse_single_char("catalog.quote", value))
            .transpose()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(format) = self.output.format.as_deref() else {
            return Ok(None);
        };
        validation::validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        Ok(Some(match format {
            "csv" => OutputFormat::Csv,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }))
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.catalog.file {
            validation::validate_path("catalog.file", file)?;
        }

        let delimiter = self.delimiter()?.unwrap_or(',');
        let quote = self.quote()?.unwrap_or('"');
        validation::validate_separators(delimiter, quote)?;

        self.output_format()?;
        Ok(())
    }
}
