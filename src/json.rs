//! 훅 문서를 위한 JSON 값 모델입니다.
//!
//! `serde_json::Value`를 그대로 값 트리로 사용하며, `preserve_order` 기능으로
//! 객체 필드의 입력 순서를 유지합니다.

use std::fmt;
use serde_json::Value;

use crate::hook::HookError;

/// 파싱된 JSON 문서
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// RFC 8259 JSON 텍스트를 파싱합니다.
    pub fn parse(text: &str) -> Result<Self, HookError> {
        let root = serde_json::from_str::<Value>(text).map_err(|e| HookError::Parse {
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// 포인터가 가리키는 하위 노드
    pub fn get(&self, pointer: &JsonPointer) -> Option<&Value> {
        pointer.resolve(&self.root)
    }
}

impl From<Value> for JsonDocument {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Field(String),
    Index(usize),
}

/// RFC 6901 JSON Pointer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<Segment>,
}

impl JsonPointer {
    pub fn root() -> Self {
        Self::default()
    }

    /// `/a/0` 형태의 문자열을 파싱합니다. 숫자 세그먼트는 배열 인덱스로도 해석됩니다.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return Some(Self::root());
        }
        let rest = text.strip_prefix('/')?;
        let segments = rest
            .split('/')
            .map(|raw| {
                let field = raw.replace("~1", "/").replace("~0", "~");
                Segment::Field(field)
            })
            .collect();
        Some(Self { segments })
    }

    pub fn push_field(&mut self, name: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Field(name.into()));
        self
    }

    pub fn push_index(&mut self, index: usize) -> &mut Self {
        self.segments.push(Segment::Index(index));
        self
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut pointer = self.clone();
        pointer.push_field(name);
        pointer
    }

    /// 마지막 세그먼트를 제외한 포인터. 루트는 None입니다.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self { segments: rest.to_vec() })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments.iter().try_fold(root, |node, segment| match (segment, node) {
            (Segment::Field(name), Value::Object(map)) => map.get(name),
            (Segment::Field(name), Value::Array(items)) => {
                name.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            (Segment::Index(i), Value::Array(items)) => items.get(*i),
            _ => None,
        })
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Field(name) => write!(f, "/{}", name.replace('~', "~0").replace('/', "~1"))?,
                Segment::Index(i) => write!(f, "/{}", i)?,
            }
        }
        Ok(())
    }
}

/// 정수형 숫자인지 확인합니다. `30.5`와 같은 소수는 false입니다.
pub fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        _ => false,
    }
}

/// 테스트 픽스처용 작은따옴표 표기를 JSON 텍스트로 변환합니다.
pub fn quoted(readable: &str) -> String {
    readable.replace('\'', "\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pointer_display_and_resolve() {
        let doc = JsonDocument::from(json!({"headers": [{"mode": "complete"}], "a/b": {"~x": 1}}));

        let mut pointer = JsonPointer::root();
        pointer.push_field("headers").push_index(0).push_field("mode");
        assert_eq!(pointer.to_string(), "/headers/0/mode");
        assert_eq!(doc.get(&pointer), Some(&json!("complete")));

        let escaped = JsonPointer::root().child("a/b").child("~x");
        assert_eq!(escaped.to_string(), "/a~1b/~0x");
        assert_eq!(JsonPointer::parse("/a~1b/~0x"), Some(escaped.clone()));
        assert_eq!(doc.get(&escaped), Some(&json!(1)));

        assert_eq!(JsonPointer::root().to_string(), "");
        assert_eq!(JsonPointer::parse("/headers/0/mode").and_then(|p| doc.get(&p).cloned()), Some(json!("complete")));
        assert!(JsonPointer::parse("headers").is_none());
        assert_eq!(pointer.parent().map(|p| p.to_string()), Some("/headers/0".to_string()));
        assert!(JsonPointer::root().parent().is_none());
    }

    #[test]
    fn test_object_keeps_insertion_order() {
        let doc = JsonDocument::parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = doc.root().as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_integral_numbers() {
        assert!(is_integral(&json!(30)));
        assert!(is_integral(&json!(-9999)));
        assert!(!is_integral(&json!(30.5)));
        assert!(!is_integral(&json!("30")));
    }

    #[test]
    fn test_parse_error_position() {
        let err = JsonDocument::parse("{'destination':'/'}").unwrap_err();
        assert!(matches!(err, HookError::Parse { line: 1, .. }));
        assert!(JsonDocument::parse(&quoted("{'destination':'/'}")).is_ok());
    }
}
