//! 컴파일된 JSON 스키마를 논리 이름으로 보관하는 카탈로그 모듈입니다.

mod catalog;
mod error;
mod hook;

pub use catalog::{CompiledSchema, SchemaCatalog, SchemaCatalogBuilder};
pub use error::SchemaError;
pub use hook::{HOOK_SCHEMA, HOOK_SCHEMA_NAME, VARIANT_TAG_ANNOTATION};

pub type Result<T> = std::result::Result<T, SchemaError>;
