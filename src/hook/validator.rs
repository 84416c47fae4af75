use std::sync::Arc;
use jsonschema::error::{ValidationError, ValidationErrorKind};
use serde_json::Value;
use tracing::debug;

use super::descriptor::HookDescriptor;
use super::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use super::error::HookError;
use crate::json::{JsonDocument, JsonPointer};
use crate::schema::{CompiledSchema, SchemaCatalog, SchemaError, HOOK_SCHEMA_NAME, VARIANT_TAG_ANNOTATION};

/// 훅 문서를 컴파일된 훅 스키마로 검증합니다.
///
/// 첫 오류에서 멈추지 않고 모든 위반을 진단으로 모읍니다.
#[derive(Debug, Clone)]
pub struct HookValidator {
    schema: Arc<CompiledSchema>,
}

impl HookValidator {
    pub fn new(catalog: &SchemaCatalog) -> Result<Self, SchemaError> {
        let schema = catalog.require(HOOK_SCHEMA_NAME)?;
        Ok(Self { schema })
    }

    /// 문서를 검증하고 진단 목록을 반환합니다. 비어 있으면 유효한 훅입니다.
    pub fn validate(&self, doc: &Value) -> Diagnostics {
        let schema = &self.schema;
        let mut diagnostics = Diagnostics::new();

        if let Err(errors) = schema.compiled().validate(doc) {
            for error in errors {
                collect(schema.raw(), &error, &mut diagnostics);
            }
        }

        debug!(count = diagnostics.len(), "훅 문서 검증 완료");
        diagnostics
    }

    /// JSON 텍스트를 파싱한 뒤 검증합니다.
    pub fn validate_str(&self, text: &str) -> Result<Diagnostics, HookError> {
        let doc = JsonDocument::parse(text)?;
        Ok(self.validate(doc.root()))
    }

    /// 검증을 통과한 문서만 디스크립터로 변환합니다.
    pub fn lift(&self, doc: &Value) -> Result<HookDescriptor, HookError> {
        let diagnostics = self.validate(doc);
        if !diagnostics.is_empty() {
            return Err(HookError::Invalid(diagnostics));
        }
        HookDescriptor::from_validated(doc)
    }

    pub fn lift_str(&self, text: &str) -> Result<HookDescriptor, HookError> {
        let doc = JsonDocument::parse(text)?;
        self.lift(doc.root())
    }
}

/// jsonschema 오류 하나를 진단으로 변환합니다.
fn collect(raw_schema: &Value, error: &ValidationError<'_>, diagnostics: &mut Diagnostics) {
    let instance = JsonPointer::parse(&error.instance_path.to_string()).unwrap_or_default();
    let keyword_path = JsonPointer::parse(&error.schema_path.to_string()).unwrap_or_default();
    let subschema = keyword_path.parent().and_then(|p| p.resolve(raw_schema).cloned());

    match &error.kind {
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            for name in unexpected {
                diagnostics.push(Diagnostic::new(
                    instance.child(name.as_str()).to_string(),
                    DiagnosticKind::UnknownProperty,
                    format!("property '{}' is not defined in the schema", name),
                ));
            }
        }
        ValidationErrorKind::Required { property } => {
            let name = property.as_str().map(str::to_string).unwrap_or_else(|| property.to_string());
            let is_tag = subschema
                .as_ref()
                .and_then(|s| s.get("properties"))
                .and_then(|p| p.get(&name))
                .map(is_variant_tag)
                .unwrap_or(false);
            let (kind, detail) = if is_tag {
                (DiagnosticKind::VariantTagInvalid, format!("variant tag '{}' is missing", name))
            } else {
                (DiagnosticKind::RequiredMissing, error.to_string())
            };
            diagnostics.push(Diagnostic::new(instance.child(name).to_string(), kind, detail));
        }
        ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
            let kind = if subschema.as_ref().map(is_variant_tag).unwrap_or(false) {
                DiagnosticKind::VariantTagInvalid
            } else {
                DiagnosticKind::EnumViolation
            };
            diagnostics.push(Diagnostic::new(instance.to_string(), kind, error.to_string()));
        }
        ValidationErrorKind::Not { schema } => {
            let detail = match schema.get("required").and_then(Value::as_array) {
                Some(names) => {
                    let names: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
                    format!("properties {} are mutually exclusive", names.join(", "))
                }
                None => error.to_string(),
            };
            diagnostics.push(Diagnostic::new(instance.to_string(), DiagnosticKind::MutualExclusion, detail));
        }
        kind => {
            diagnostics.push(Diagnostic::new(instance.to_string(), classify(kind), error.to_string()));
        }
    }
}

fn classify(kind: &ValidationErrorKind) -> DiagnosticKind {
    match kind {
        ValidationErrorKind::Type { .. } => DiagnosticKind::TypeMismatch,
        ValidationErrorKind::Minimum { .. }
        | ValidationErrorKind::Maximum { .. }
        | ValidationErrorKind::ExclusiveMinimum { .. }
        | ValidationErrorKind::ExclusiveMaximum { .. }
        | ValidationErrorKind::MinLength { .. }
        | ValidationErrorKind::MaxLength { .. }
        | ValidationErrorKind::MinItems { .. }
        | ValidationErrorKind::MaxItems { .. } => DiagnosticKind::BoundsViolation,
        _ => DiagnosticKind::Other,
    }
}

fn is_variant_tag(schema: &Value) -> bool {
    schema.get(VARIANT_TAG_ANNOTATION).and_then(Value::as_bool).unwrap_or(false)
}
