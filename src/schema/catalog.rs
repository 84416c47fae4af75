use std::collections::HashMap;
use std::sync::Arc;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::{debug, info};

use super::error::SchemaError;
use super::hook::{HOOK_SCHEMA, HOOK_SCHEMA_NAME};
use super::Result;

/// 컴파일된 스키마와 원본 스키마 문서
pub struct CompiledSchema {
    name: String,
    raw: Value,
    compiled: JSONSchema,
}

impl CompiledSchema {
    /// Draft 7 기준으로 스키마를 컴파일합니다.
    pub fn compile(name: &str, raw: Value) -> Result<Self> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&raw)
            .map_err(|e| SchemaError::Compile {
                name: name.to_string(),
                reason: e.to_string(),
            })?;

        debug!(schema = %name, "JSON 스키마 컴파일 성공");
        Ok(Self {
            name: name.to_string(),
            raw,
            compiled,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 주석 조회 등에 쓰이는 원본 스키마 문서
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn compiled(&self) -> &JSONSchema {
        &self.compiled
    }
}

impl std::fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledSchema")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// 논리 이름으로 주소 지정되는 스키마 카탈로그
///
/// 생성 이후에는 읽기 전용이므로 여러 스레드에서 공유해도 안전합니다.
#[derive(Debug, Default)]
pub struct SchemaCatalog {
    schemas: HashMap<String, Arc<CompiledSchema>>,
}

impl SchemaCatalog {
    /// 바이너리에 포함된 스키마로 카탈로그를 만듭니다.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::builder()
            .with_str(HOOK_SCHEMA_NAME, HOOK_SCHEMA)?
            .build();
        info!(schemas = ?catalog.names(), "스키마 카탈로그 초기화 완료");
        Ok(catalog)
    }

    pub fn builder() -> SchemaCatalogBuilder {
        SchemaCatalogBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<CompiledSchema>> {
        self.schemas.get(name).cloned()
    }

    pub fn require(&self, name: &str) -> Result<Arc<CompiledSchema>> {
        self.get(name).ok_or_else(|| SchemaError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// 카탈로그 생성 중에만 등록을 허용하는 빌더
#[derive(Debug, Default)]
pub struct SchemaCatalogBuilder {
    schemas: HashMap<String, Arc<CompiledSchema>>,
}

impl SchemaCatalogBuilder {
    pub fn register(mut self, name: &str, raw: Value) -> Result<Self> {
        if self.schemas.contains_key(name) {
            return Err(SchemaError::Duplicate { name: name.to_string() });
        }
        let schema = CompiledSchema::compile(name, raw)?;
        self.schemas.insert(name.to_string(), Arc::new(schema));
        Ok(self)
    }

    pub fn with_str(self, name: &str, text: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(text).map_err(|e| SchemaError::Compile {
            name: name.to_string(),
            reason: format!("스키마 파싱 오류: {}", e),
        })?;
        self.register(name, raw)
    }

    pub fn build(self) -> SchemaCatalog {
        SchemaCatalog { schemas: self.schemas }
    }
}
