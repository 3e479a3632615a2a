use crate::config::toml_config::DirectoryConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "advocate-directory")]
#[command(about = "Serve the advocate directory search API")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Dataset location: local JSON/CSV file or http(s) URL
    #[arg(long)]
    pub data: Option<String>,

    /// Dataset format (json or csv), overrides detection
    #[arg(long)]
    pub format: Option<String>,

    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(long)]
    pub bind: Option<String>,

    #[arg(long, help = "Emit JSON formatted logs")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定：命令列 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<DirectoryConfig> {
        let mut config = match &self.config {
            Some(path) => DirectoryConfig::from_file(path)?,
            None => DirectoryConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data.source = data.clone();
        }
        if let Some(format) = &self.format {
            config.data.format = Some(format.clone());
        }
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }

        Ok(config)
    }
}
