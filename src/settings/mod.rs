use std::{env, fs, path::Path};
use serde::Deserialize;
use tracing::debug;

mod error;
mod gateway;
pub mod logging;

pub use error::SettingsError;
pub use gateway::{parse_env_var, GatewaySettings};
pub use logging::{LogFormat, LogOutput, LogSettings};

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_FILE_ENV: &str = "GATEWAY_CONFIG_FILE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    // 게이트웨이 설정
    #[serde(default)]
    pub gateway: GatewaySettings,

    // 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = if let Ok(config_path) = env::var(CONFIG_FILE_ENV) {
            Self::from_toml_file(&config_path)?
        } else {
            Self::from_env()?
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::ParseError { source: e })?;

        debug!(path = %path.as_ref().display(), "TOML 설정 파일 로드");
        Ok(settings)
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            gateway: GatewaySettings::from_env()?,
            logging: LogSettings::from_env()?,
        })
    }

    /// 설정 유효성 검증
    pub fn validate(&self) -> Result<()> {
        self.gateway.validate()?;
        Ok(())
    }
}
