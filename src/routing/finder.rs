use hyper::HeaderMap;
use tracing::{info, warn};

use super::strategy::PathProcessingStrategy;

/// 요청별로 경로 처리 전략을 덮어쓰는 헤더
pub const PATH_PROCESSING_STRATEGY_HEADER: &str = "x-path-processing-strategy";

/// 설정된 기본값과 요청 헤더로부터 경로 처리 전략을 결정합니다.
///
/// 기본값은 생성 시 한 번만 정해지므로 여러 스레드에서 공유해도 안전합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStrategyFinder {
    default_strategy: PathProcessingStrategy,
}

impl PathStrategyFinder {
    pub fn new(default_strategy: Option<PathProcessingStrategy>) -> Self {
        let default_strategy = match default_strategy {
            Some(strategy) => {
                info!(strategy = %strategy, "기본 경로 처리 전략 설정");
                strategy
            }
            None => {
                let fallback = PathProcessingStrategy::default();
                warn!(
                    strategy = %fallback,
                    "경로 처리 전략이 설정되지 않아 기본 전략을 사용합니다"
                );
                fallback
            }
        };
        Self { default_strategy }
    }

    pub fn default_strategy(&self) -> PathProcessingStrategy {
        self.default_strategy
    }

    /// 헤더가 없거나 값이 유효하지 않으면 기본 전략을 반환합니다.
    /// 알 수 없는 값은 오류가 아니며 조용히 무시됩니다.
    pub fn resolve(&self, headers: Option<&HeaderMap>) -> PathProcessingStrategy {
        headers
            .and_then(|headers| headers.get(PATH_PROCESSING_STRATEGY_HEADER))
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.default_strategy)
    }
}

impl Default for PathStrategyFinder {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::header::HeaderValue;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_non_utf8_header_falls_back_to_default() {
        let finder = PathStrategyFinder::new(Some(PathProcessingStrategy::Unmodified));
        let mut headers = HeaderMap::new();
        headers.insert(
            PATH_PROCESSING_STRATEGY_HEADER,
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );
        assert_eq!(finder.resolve(Some(&headers)), PathProcessingStrategy::Unmodified);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(build: impl FnOnce() -> PathStrategyFinder) -> (PathStrategyFinder, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let finder = tracing::subscriber::with_default(subscriber, build);
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        (finder, output)
    }

    #[test]
    fn test_missing_default_logs_warning() {
        let (finder, output) = captured(|| PathStrategyFinder::new(None));
        assert_eq!(finder.default_strategy(), PathProcessingStrategy::Cleaned);
        assert!(output.contains("WARN"), "경고 로그 없음: {}", output);
        assert!(output.contains("strategy=cleaned"), "{}", output);

        let (_, output) = captured(|| PathStrategyFinder::new(Some(PathProcessingStrategy::Unmodified)));
        assert!(!output.contains("WARN"), "{}", output);
        assert!(output.contains("INFO"), "{}", output);
    }

    #[test]
    fn test_default_finder_uses_cleaned() {
        assert_eq!(PathStrategyFinder::default().default_strategy(), PathProcessingStrategy::Cleaned);
    }
}
