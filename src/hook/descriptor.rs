use std::collections::BTreeSet;
use std::fmt;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method};
use regex_lite::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::error::HookError;
use crate::json::is_integral;

/// 훅이 적용될 HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Options,
    Get,
    Head,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_method(&self) -> Method {
        match self {
            Self::Options => Method::OPTIONS,
            Self::Get => Method::GET,
            Self::Head => Method::HEAD,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Delete => Method::DELETE,
            Self::Patch => Method::PATCH,
        }
    }
}

/// 훅 실행 시점
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookType {
    Before,
    After,
}

/// 헤더 지시자 적용 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// 헤더가 없을 때만 설정
    Complete,
    /// 항상 덮어씀
    #[default]
    Override,
}

/// `headers` 배열의 원소
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderDirective {
    pub header: String,
    pub value: String,
    #[serde(default)]
    pub mode: HeaderMode,
}

impl HeaderDirective {
    /// 전달될 요청 헤더에 지시자를 적용합니다.
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), HookError> {
        let name = HeaderName::from_bytes(self.header.as_bytes()).map_err(|e| HookError::InvalidHeader {
            header: self.header.clone(),
            reason: format!("invalid header name: {}", e),
        })?;
        let value = HeaderValue::from_str(&self.value).map_err(|e| HookError::InvalidHeader {
            header: self.header.clone(),
            reason: format!("invalid header value: {}", e),
        })?;

        match self.mode {
            HeaderMode::Complete => {
                if !headers.contains_key(&name) {
                    headers.insert(name, value);
                }
            }
            HeaderMode::Override => {
                headers.insert(name, value);
            }
        }
        Ok(())
    }
}

/// 레거시 `staticHeaders`의 스칼라 값
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl StaticValue {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) if is_integral(value) => Some(Self::Integer(i)),
                _ => n.as_f64().map(Self::Float),
            },
            _ => None,
        }
    }
}

impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}

/// `headers`와 `staticHeaders`를 하나로 합친 표현
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HeaderSpec {
    #[default]
    None,
    Directives(Vec<HeaderDirective>),
    Static(Vec<(String, StaticValue)>),
}

/// 큐잉 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum QueueingStrategy {
    Default,
    DiscardPayload,
    #[serde(rename_all = "camelCase")]
    ReducedPropagation {
        #[serde(deserialize_with = "whole_number")]
        interval_ms: u64,
    },
}

/// 스키마의 `integer`는 소수부가 0인 실수(`30.0`, `1e3`)도 허용하므로 둘 다 받습니다.
struct WholeNumberVisitor;

impl<'de> Visitor<'de> for WholeNumberVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative whole number")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        // 2^64 미만이어야 u64로 손실 없이 변환됨
        if v.fract() == 0.0 && v >= 0.0 && v < 18_446_744_073_709_551_616.0 {
            Ok(v as u64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    deserializer.deserialize_any(WholeNumberVisitor)
}

fn optional_whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    whole_number(deserializer).map(Some)
}

/// 훅 전달 대상
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// 게이트웨이 내부 경로
    Path(String),
    /// 절대 URL
    Url(Url),
}

impl Destination {
    fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.has_host() => Self::Url(url),
            _ => Self::Path(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Url(url) => url.as_str(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawHook {
    destination: String,
    #[serde(default)]
    methods: Vec<HttpMethod>,
    filter: Option<String>,
    headers: Option<Vec<HeaderDirective>>,
    static_headers: Option<serde_json::Map<String, Value>>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    expire_after: Option<u64>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    queue_expire_after: Option<u64>,
    #[serde(rename = "type")]
    hook_type: Option<HookType>,
    full_url: Option<bool>,
    queueing_strategy: Option<QueueingStrategy>,
    collection: Option<bool>,
    listable: Option<bool>,
}

/// 검증된 훅 문서의 타입 있는 표현
///
/// 생성 이후 변경되지 않으며 설정 재로딩 시 통째로 교체됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct HookDescriptor {
    pub destination: Destination,
    pub methods: BTreeSet<HttpMethod>,
    pub filter: Option<String>,
    pub headers: HeaderSpec,
    pub expire_after: Option<u64>,
    pub queue_expire_after: Option<u64>,
    pub hook_type: Option<HookType>,
    pub full_url: Option<bool>,
    pub queueing_strategy: Option<QueueingStrategy>,
    pub collection: Option<bool>,
    pub listable: Option<bool>,
}

impl HookDescriptor {
    /// 검증을 통과한 문서를 변환합니다. 실패는 검증을 건너뛴 호출자의 버그입니다.
    pub fn from_validated(doc: &Value) -> Result<Self, HookError> {
        let raw = RawHook::deserialize(doc).map_err(|e| HookError::Internal {
            reason: format!("hook document was not validated: {}", e),
        })?;

        let headers = match (raw.headers, raw.static_headers) {
            (Some(_), Some(_)) => {
                return Err(HookError::Internal {
                    reason: "hook document was not validated: headers and staticHeaders both present".to_string(),
                })
            }
            (Some(directives), None) => HeaderSpec::Directives(directives),
            (None, Some(map)) => {
                let mut entries = Vec::with_capacity(map.len());
                for (name, value) in &map {
                    let value = StaticValue::from_value(value).ok_or_else(|| HookError::Internal {
                        reason: format!("hook document was not validated: staticHeaders.{} is not a scalar", name),
                    })?;
                    entries.push((name.clone(), value));
                }
                HeaderSpec::Static(entries)
            }
            (None, None) => HeaderSpec::None,
        };

        let descriptor = Self {
            destination: Destination::parse(&raw.destination),
            methods: raw.methods.into_iter().collect(),
            filter: raw.filter,
            headers,
            expire_after: raw.expire_after,
            queue_expire_after: raw.queue_expire_after,
            hook_type: raw.hook_type,
            full_url: raw.full_url,
            queueing_strategy: raw.queueing_strategy,
            collection: raw.collection,
            listable: raw.listable,
        };
        debug!(destination = %descriptor.destination, "훅 디스크립터 생성");
        Ok(descriptor)
    }

    /// 메서드 목록이 비어 있으면 모든 메서드에 적용됩니다.
    pub fn accepts_method(&self, method: &Method) -> bool {
        self.methods.is_empty() || self.methods.iter().any(|m| m.as_method() == *method)
    }

    /// filter 패턴을 컴파일합니다.
    pub fn filter_regex(&self) -> Result<Option<Regex>, HookError> {
        self.filter
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| HookError::InvalidFilter {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// 레거시 정적 헤더를 override 모드 지시자로 정규화해 반환합니다.
    pub fn header_directives(&self) -> Vec<HeaderDirective> {
        match &self.headers {
            HeaderSpec::None => Vec::new(),
            HeaderSpec::Directives(directives) => directives.clone(),
            HeaderSpec::Static(entries) => entries
                .iter()
                .map(|(name, value)| HeaderDirective {
                    header: name.clone(),
                    value: value.to_string(),
                    mode: HeaderMode::Override,
                })
                .collect(),
        }
    }

    pub fn full_url(&self) -> bool {
        self.full_url.unwrap_or(false)
    }
}
