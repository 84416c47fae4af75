//! 훅 디스크립터 모델과 스키마 기반 검증기를 제공하는 모듈입니다.
//!
//! 설정 JSON → 검증(진단 목록) → 진단이 없을 때만 `HookDescriptor`로 변환되는
//! 흐름을 따릅니다.

mod descriptor;
mod diagnostics;
mod error;
mod validator;

pub use descriptor::{
    Destination, HeaderDirective, HeaderMode, HeaderSpec, HookDescriptor, HookType, HttpMethod,
    QueueingStrategy, StaticValue,
};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::HookError;
pub use validator::HookValidator;

pub type Result<T> = std::result::Result<T, HookError>;
