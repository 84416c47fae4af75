use std::fmt;
use std::hash::{Hash, Hasher};
use serde::Serialize;

/// 검증 진단의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    RequiredMissing,
    TypeMismatch,
    EnumViolation,
    BoundsViolation,
    MutualExclusion,
    UnknownProperty,
    VariantTagInvalid,
    /// 매핑되지 않은 스키마 키워드
    Other,
}

impl DiagnosticKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RequiredMissing => "required-missing",
            Self::TypeMismatch => "type-mismatch",
            Self::EnumViolation => "enum-violation",
            Self::BoundsViolation => "bounds-violation",
            Self::MutualExclusion => "mutual-exclusion",
            Self::UnknownProperty => "unknown-property",
            Self::VariantTagInvalid => "variant-tag-invalid",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// JSON 위치, 종류, 상세 메시지로 구성된 검증 진단
///
/// 동등성은 (pointer, kind)로만 판단합니다.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub pointer: String,
    pub kind: DiagnosticKind,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(pointer: impl Into<String>, kind: DiagnosticKind, detail: impl Into<String>) -> Self {
        Self {
            pointer: pointer.into(),
            kind,
            detail: detail.into(),
        }
    }
}

impl PartialEq for Diagnostic {
    fn eq(&self, other: &Self) -> bool {
        self.pointer == other.pointer && self.kind == other.kind
    }
}

impl Eq for Diagnostic {}

impl Hash for Diagnostic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pointer.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pointer = if self.pointer.is_empty() { "/" } else { &self.pointer };
        write!(f, "{} [{}]: {}", pointer, self.kind, self.detail)
    }
}

/// 진단 모음. 같은 (pointer, kind)는 한 번만 기록되며 순서는 의미가 없습니다.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if !self.items.contains(&diagnostic) {
            self.items.push(diagnostic);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn contains(&self, pointer: &str, kind: DiagnosticKind) -> bool {
        self.items.iter().any(|d| d.pointer == pointer && d.kind == kind)
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    /// 순서와 무관하게 같은 진단 집합인지 비교합니다.
    pub fn same_set(&self, other: &Diagnostics) -> bool {
        self.len() == other.len() && self.items.iter().all(|d| other.items.contains(d))
    }
}

impl PartialEq for Diagnostics {
    fn eq(&self, other: &Self) -> bool {
        self.same_set(other)
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        let mut diagnostics = Diagnostics::new();
        diagnostics.extend(iter);
        diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.items.iter().map(|d| d.to_string()).collect();
        f.write_str(&lines.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_detail() {
        let a = Diagnostic::new("/type", DiagnosticKind::EnumViolation, "first");
        let b = Diagnostic::new("/type", DiagnosticKind::EnumViolation, "second");
        let c = Diagnostic::new("/type", DiagnosticKind::TypeMismatch, "first");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_duplicates_are_collapsed() {
        let diagnostics: Diagnostics = vec![
            Diagnostic::new("/type", DiagnosticKind::EnumViolation, "a"),
            Diagnostic::new("/type", DiagnosticKind::EnumViolation, "b"),
            Diagnostic::new("/type", DiagnosticKind::TypeMismatch, "c"),
        ]
        .into_iter()
        .collect();

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.contains("/type", DiagnosticKind::TypeMismatch));
        assert_eq!(diagnostics.count_of(DiagnosticKind::EnumViolation), 1);
    }

    #[test]
    fn test_set_comparison_ignores_order() {
        let left: Diagnostics = vec![
            Diagnostic::new("/a", DiagnosticKind::TypeMismatch, ""),
            Diagnostic::new("/b", DiagnosticKind::BoundsViolation, ""),
        ]
        .into_iter()
        .collect();
        let right: Diagnostics = vec![
            Diagnostic::new("/b", DiagnosticKind::BoundsViolation, ""),
            Diagnostic::new("/a", DiagnosticKind::TypeMismatch, ""),
        ]
        .into_iter()
        .collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::new("", DiagnosticKind::RequiredMissing, "destination is missing");
        assert_eq!(d.to_string(), "/ [required-missing]: destination is missing");
        assert_eq!(
            serde_json::to_value(&d).unwrap()["kind"],
            serde_json::json!("required-missing")
        );
    }
}
