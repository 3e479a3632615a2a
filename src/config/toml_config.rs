use crate::core::ConfigProvider;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{
    validate_one_of, validate_path, validate_socket_addr, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_SOURCE: &str = "data/advocates.json";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Local file path or http(s) URL.
    pub source: String,
    /// `json` or `csv`; inferred from the file extension when absent.
    pub format: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATA_SOURCE.to_string(),
            format: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
    pub level: Option<String>,
}

impl DirectoryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DirectoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DirectoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ADVOCATE_DATA_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DirectoryError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.server.bind)?;

        if crate::adapters::source::is_remote(&self.data.source) {
            validate_url("data.source", &self.data.source)?;
        } else {
            validate_path("data.source", &self.data.source)?;
        }

        if let Some(format) = &self.data.format {
            validate_one_of(
                "data.format",
                &format.to_lowercase(),
                &crate::adapters::source::SUPPORTED_FORMATS,
            )?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", &level.to_lowercase(), &LOG_LEVELS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for DirectoryConfig {
    fn bind_address(&self) -> &str {
        &self.server.bind
    }

    fn data_source(&self) -> &str {
        &self.data.source
    }

    fn data_format(&self) -> Option<&str> {
        self.data.format.as_deref()
    }

    fn json_logs(&self) -> bool {
        self.logging.json
    }
}

impl Validate for DirectoryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
