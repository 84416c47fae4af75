use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// 스키마 문서 파싱 또는 컴파일 실패
    Compile {
        name: String,
        reason: String,
    },
    /// 카탈로그에 등록되지 않은 스키마
    NotFound {
        name: String,
    },
    /// 같은 이름으로 두 번 등록
    Duplicate {
        name: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile { name, reason } =>
                write!(f, "스키마 {} 컴파일 오류: {}", name, reason),
            Self::NotFound { name } =>
                write!(f, "스키마 {} 를 찾을 수 없음", name),
            Self::Duplicate { name } =>
                write!(f, "스키마 {} 가 이미 등록됨", name),
        }
    }
}

impl std::error::Error for SchemaError {}
