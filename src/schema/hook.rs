/// 훅 스키마 정의
///
/// 훅 설정 문서의 검증 계약입니다. 이 문자열의 내용이 곧 검증 규칙이므로
/// 같은 메이저 버전 안에서는 변경하지 않습니다.

/// 카탈로그에 등록되는 훅 스키마 이름
pub const HOOK_SCHEMA_NAME: &str = "gateleen_hooking_schema_hook";

/// 태그형 변형(variant)의 판별 필드를 표시하는 스키마 주석 키
pub const VARIANT_TAG_ANNOTATION: &str = "x-variant-tag";

/// 훅 스키마 상수
pub const HOOK_SCHEMA: &str = r#"{
    "$schema": "http://json-schema.org/draft-07/schema#",
    "description": "Hook",
    "type": "object",
    "required": ["destination"],
    "additionalProperties": false,
    "not": {
        "required": ["headers", "staticHeaders"]
    },
    "properties": {
        "methods": {
            "type": "array",
            "items": {
                "type": "string",
                "enum": ["OPTIONS", "GET", "HEAD", "POST", "PUT", "DELETE", "PATCH"]
            }
        },
        "filter": {
            "type": "string"
        },
        "headers": {
            "type": "array",
            "items": {
                "type": "object",
                "required": ["header", "value"],
                "additionalProperties": false,
                "properties": {
                    "header": {"type": "string", "minLength": 1},
                    "value": {"type": "string"},
                    "mode": {
                        "type": "string",
                        "enum": ["complete", "override"]
                    }
                }
            }
        },
        "staticHeaders": {
            "type": "object",
            "additionalProperties": {
                "type": ["string", "boolean", "number"]
            }
        },
        "destination": {
            "type": "string",
            "minLength": 1
        },
        "expireAfter": {
            "type": "integer",
            "minimum": 0,
            "maximum": 18446744073709551615
        },
        "queueExpireAfter": {
            "type": "integer",
            "minimum": 0,
            "maximum": 18446744073709551615
        },
        "type": {
            "type": "string",
            "enum": ["before", "after"]
        },
        "fullUrl": {
            "type": "boolean"
        },
        "queueingStrategy": {
            "type": "object",
            "required": ["type"],
            "additionalProperties": false,
            "properties": {
                "type": {
                    "x-variant-tag": true,
                    "type": "string",
                    "enum": ["default", "discardPayload", "reducedPropagation"]
                },
                "intervalMs": {
                    "type": "integer",
                    "minimum": 1,
                    "maximum": 18446744073709551615
                }
            },
            "if": {
                "required": ["type"],
                "properties": {
                    "type": {"const": "reducedPropagation"}
                }
            },
            "then": {
                "required": ["intervalMs"]
            }
        },
        "collection": {
            "type": "boolean"
        },
        "listable": {
            "type": "boolean"
        }
    }
}"#;
