use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 들어온 URL 경로를 정규화할지(`cleaned`) 그대로 둘지(`unmodified`) 결정하는 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathProcessingStrategy {
    Unmodified,
    #[default]
    Cleaned,
}

impl PathProcessingStrategy {
    pub const ALL: [PathProcessingStrategy; 2] = [Self::Unmodified, Self::Cleaned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unmodified => "unmodified",
            Self::Cleaned => "cleaned",
        }
    }
}

impl fmt::Display for PathProcessingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathProcessingStrategy {
    type Err = String;

    /// 대소문자를 구분하지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid path processing strategy: {}", s))
    }
}

impl Serialize for PathProcessingStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PathProcessingStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        let cases = vec![
            ("unmodified", Some(PathProcessingStrategy::Unmodified)),
            ("UNMODIFIED", Some(PathProcessingStrategy::Unmodified)),
            ("Cleaned", Some(PathProcessingStrategy::Cleaned)),
            ("cLeAnEd", Some(PathProcessingStrategy::Cleaned)),
            ("booom", None),
            ("", None),
        ];

        for (input, expected) in cases {
            assert_eq!(input.parse::<PathProcessingStrategy>().ok(), expected, "입력: {}", input);
        }
    }

    #[test]
    fn test_default_is_cleaned() {
        assert_eq!(PathProcessingStrategy::default(), PathProcessingStrategy::Cleaned);
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&PathProcessingStrategy::Unmodified).unwrap();
        assert_eq!(json, "\"unmodified\"");
        let parsed: PathProcessingStrategy = serde_json::from_str("\"CLEANED\"").unwrap();
        assert_eq!(parsed, PathProcessingStrategy::Cleaned);
        assert!(serde_json::from_str::<PathProcessingStrategy>("\"dirty\"").is_err());
    }
}
