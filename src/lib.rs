//! Hook Gateway는 HTTP 게이트웨이의 요청 형성(front end) 계층입니다.
//!
//! # 주요 기능
//!
//! - 스키마 기반 훅 디스크립터 검증
//! - 검증된 훅 문서의 타입 있는 표현
//! - 요청별 경로 처리 전략 결정
//!
//! # 훅 검증
//!
//! ```
//! use hook_gateway::hook::{DiagnosticKind, HookValidator};
//! use hook_gateway::schema::SchemaCatalog;
//! use serde_json::json;
//!
//! let catalog = SchemaCatalog::builtin().unwrap();
//! let validator = HookValidator::new(&catalog).unwrap();
//!
//! // 최소 훅
//! assert!(validator.validate(&json!({"destination": "/"})).is_empty());
//!
//! // destination 누락
//! let diagnostics = validator.validate(&json!({}));
//! assert!(diagnostics.contains("/destination", DiagnosticKind::RequiredMissing));
//! ```
//!
//! # 경로 처리 전략
//!
//! ```
//! use hook_gateway::routing::{PathProcessingStrategy, PathStrategyFinder, PATH_PROCESSING_STRATEGY_HEADER};
//! use hyper::header::{HeaderMap, HeaderValue};
//!
//! let finder = PathStrategyFinder::new(Some(PathProcessingStrategy::Unmodified));
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(PATH_PROCESSING_STRATEGY_HEADER, HeaderValue::from_static("Cleaned"));
//! assert_eq!(finder.resolve(Some(&headers)), PathProcessingStrategy::Cleaned);
//! assert_eq!(finder.resolve(None), PathProcessingStrategy::Unmodified);
//! ```

pub mod hook;
pub mod json;
pub mod loader;
pub mod logging;
pub mod routing;
pub mod schema;
pub mod settings;
