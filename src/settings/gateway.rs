use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use super::SettingsError;
use crate::routing::PathProcessingStrategy;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GatewaySettings {
    /// 기본 경로 처리 전략 (미설정 시 cleaned로 대체되고 경고가 기록됨)
    #[serde(default)]
    pub path_processing_strategy: Option<PathProcessingStrategy>,

    /// 훅 JSON 파일 디렉토리
    #[serde(default)]
    pub hooks_dir: Option<PathBuf>,
}

pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}

impl GatewaySettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let path_processing_strategy = if env::var_os("GATEWAY_PATH_PROCESSING_STRATEGY").is_some() {
            Some(parse_env_var("GATEWAY_PATH_PROCESSING_STRATEGY", PathProcessingStrategy::default)?)
        } else {
            None
        };

        let hooks_dir = env::var("GATEWAY_HOOKS_DIR").ok().map(PathBuf::from);

        Ok(Self {
            path_processing_strategy,
            hooks_dir,
        })
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(dir) = &self.hooks_dir {
            if dir.as_os_str().is_empty() {
                return Err(SettingsError::InvalidConfig(
                    "hooks_dir는 비어 있을 수 없습니다".to_string(),
                ));
            }
            if dir.exists() && !dir.is_dir() {
                return Err(SettingsError::InvalidConfig(format!(
                    "hooks_dir {}는 디렉토리가 아닙니다",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}
