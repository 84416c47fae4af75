use std::fmt;

use super::diagnostics::Diagnostics;
use crate::schema::SchemaError;

/// 훅 처리 관련 에러
#[derive(Debug)]
pub enum HookError {
    /// JSON 텍스트 파싱 실패
    Parse {
        line: usize,
        column: usize,
        reason: String,
    },
    /// 스키마 검증 실패
    Invalid(Diagnostics),
    /// 검증되지 않은 문서를 디스크립터로 변환하려 한 경우 (프로그래밍 오류)
    Internal {
        reason: String,
    },
    /// filter 정규식 컴파일 실패
    InvalidFilter {
        pattern: String,
        reason: String,
    },
    /// 헤더 지시자의 이름이나 값을 HTTP 헤더로 쓸 수 없음
    InvalidHeader {
        header: String,
        reason: String,
    },
    Schema(SchemaError),
    FileError {
        path: String,
        error: std::io::Error,
    },
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, column, reason } =>
                write!(f, "훅 JSON 파싱 오류 ({}:{}): {}", line, column, reason),
            Self::Invalid(diagnostics) =>
                write!(f, "훅 검증 실패 ({}건): {}", diagnostics.len(), diagnostics),
            Self::Internal { reason } =>
                write!(f, "내부 오류: {}", reason),
            Self::InvalidFilter { pattern, reason } =>
                write!(f, "잘못된 filter 패턴 {}: {}", pattern, reason),
            Self::InvalidHeader { header, reason } =>
                write!(f, "잘못된 헤더 지시자 {}: {}", header, reason),
            Self::Schema(e) =>
                write!(f, "스키마 오류: {}", e),
            Self::FileError { path, error } =>
                write!(f, "훅 파일 {} 오류: {}", path, error),
        }
    }
}

impl std::error::Error for HookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(e) => Some(e),
            Self::FileError { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<SchemaError> for HookError {
    fn from(error: SchemaError) -> Self {
        Self::Schema(error)
    }
}
