//! 설정 로드 시점에 훅 파일들을 읽어 검증된 디스크립터 집합을 만듭니다.
//!
//! 잘못된 훅은 건너뛰고 기록만 하며, 전체 로드를 중단하지 않습니다.

use std::path::Path;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::hook::{HookDescriptor, HookError, HookValidator};
use crate::json::JsonDocument;

/// 로드 결과
#[derive(Debug, Default)]
pub struct HookSet {
    /// (리소스 이름, 디스크립터)
    pub hooks: Vec<(String, HookDescriptor)>,
    /// (리소스 이름, 거부 사유)
    pub rejected: Vec<(String, HookError)>,
}

impl HookSet {
    pub fn get(&self, name: &str) -> Option<&HookDescriptor> {
        self.hooks.iter().find(|(n, _)| n == name).map(|(_, hook)| hook)
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// 로드 결과를 기록합니다. 거부된 훅은 경고로 남깁니다.
    pub fn record(&mut self, name: String, result: Result<HookDescriptor, HookError>) {
        match result {
            Ok(hook) => self.hooks.push((name, hook)),
            Err(e) => {
                warn!(hook = %name, error = %e, "잘못된 훅을 건너뜀");
                self.rejected.push((name, e));
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HookLoader {
    validator: HookValidator,
}

impl HookLoader {
    pub fn new(validator: HookValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &HookValidator {
        &self.validator
    }

    /// 메모리상의 훅 문서 하나를 검증하고 변환합니다.
    pub fn load_str(&self, name: &str, text: &str) -> Result<HookDescriptor, HookError> {
        let doc = JsonDocument::parse(text)?;
        self.load_value(name, doc.root())
    }

    fn load_value(&self, name: &str, doc: &Value) -> Result<HookDescriptor, HookError> {
        let hook = self.validator.lift(doc)?;
        debug!(hook = %name, destination = %hook.destination, "훅 로드");
        Ok(hook)
    }

    /// 파일 하나를 읽어 `name`이라는 리소스 이름으로 로드합니다.
    pub async fn load_file<P: AsRef<Path>>(&self, path: P, name: &str) -> Result<HookDescriptor, HookError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| HookError::FileError {
            path: path.to_string_lossy().to_string(),
            error: e,
        })?;
        self.load_str(name, &content)
    }

    /// 디렉토리의 모든 `*.json` 파일을 훅으로 로드합니다. 리소스 이름은 파일 이름(확장자 제외)입니다.
    pub async fn load_dir<P: AsRef<Path>>(&self, dir_path: P) -> Result<HookSet, HookError> {
        let dir_path = dir_path.as_ref();
        debug!("훅 디렉토리 로드: {}", dir_path.display());

        let mut read_dir = tokio::fs::read_dir(dir_path).await.map_err(|e|
            HookError::FileError {
                path: dir_path.to_string_lossy().to_string(),
                error: e,
            }
        )?;

        let mut paths = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(|e|
            HookError::FileError {
                path: dir_path.to_string_lossy().to_string(),
                error: e,
            }
        )? {
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = HookSet::default();
        for path in paths {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default();

            let result = self.load_file(&path, &name).await;
            set.record(name, result);
        }

        info!(
            loaded = set.hooks.len(),
            rejected = set.rejected.len(),
            "훅 디렉토리 로드 완료: {}",
            dir_path.display()
        );
        Ok(set)
    }
}
