use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use domain::canvas_config::CanvasConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub analysis: AnalysisConfig,
    pub storage: StorageConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub max_body_bytes: usize,
}

/// Where the chat-completion endpoint lives. The API key is never part of configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl OpenAiConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub model: String,
    pub instruction: String,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub capture_path: PathBuf,
    pub save_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub include_location: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "pretty")]
    Pretty,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            instruction: "Describe de forma breve y en español esta imagen.".to_string(),
            max_output_tokens: 500,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                cors_origin: None,
                max_body_bytes: 32 * 1024 * 1024,
            },
            openai: OpenAiConfig {
                base_url: "https://api.openai.com/v1".to_string(),
                request_timeout_secs: None,
            },
            analysis: AnalysisConfig::default(),
            storage: StorageConfig {
                capture_path: PathBuf::from("img.png"),
                save_path: PathBuf::from("drawing.png"),
            },
            canvas: CanvasConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
                include_location: false,
            },
            environment: EnvironmentConfig {
                env: "development".to_string(),
            },
        }
    }
}

impl Config {
    pub fn validate(&self) -> AppResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "server host cannot be empty".to_string(),
            });
        }

        if self.server.max_body_bytes == 0 {
            return Err(AppError::ConfigError {
                message: "max_body_bytes must be greater than 0".to_string(),
            });
        }

        match url::Url::parse(&self.openai.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(AppError::ConfigError {
                    message: format!("openai base_url has unsupported scheme '{}'", url.scheme()),
                });
            }
            Err(e) => {
                return Err(AppError::ConfigError {
                    message: format!("openai base_url is not a valid URL: {e}"),
                });
            }
        }

        if self.openai.request_timeout_secs == Some(0) {
            return Err(AppError::ConfigError {
                message: "request_timeout_secs must be greater than 0 when set".to_string(),
            });
        }

        if self.analysis.model.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "analysis model cannot be empty".to_string(),
            });
        }

        if self.analysis.instruction.trim().is_empty() {
            return Err(AppError::ConfigError {
                message: "analysis instruction cannot be empty".to_string(),
            });
        }

        if self.analysis.max_output_tokens == 0 {
            return Err(AppError::ConfigError {
                message: "max_output_tokens must be greater than 0".to_string(),
            });
        }

        if self.storage.capture_path.as_os_str().is_empty()
            || self.storage.save_path.as_os_str().is_empty()
        {
            return Err(AppError::ConfigError {
                message: "capture_path and save_path cannot be empty".to_string(),
            });
        }

        if self.storage.capture_path == self.storage.save_path {
            return Err(AppError::ConfigError {
                message: "capture_path and save_path must point to different files".to_string(),
            });
        }

        self.canvas.validate()?;

        Ok(())
    }

    #[must_use]
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
