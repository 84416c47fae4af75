use hook_gateway::routing::{PathProcessingStrategy, PathStrategyFinder, PATH_PROCESSING_STRATEGY_HEADER};
use hyper::header::{HeaderMap, HeaderValue};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(PATH_PROCESSING_STRATEGY_HEADER, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_default_path_processing_strategy() {
    let finder = PathStrategyFinder::new(None);
    assert_eq!(finder.default_strategy(), PathProcessingStrategy::Cleaned);
    assert_eq!(finder.resolve(None), PathProcessingStrategy::Cleaned);

    let finder = PathStrategyFinder::new(Some(PathProcessingStrategy::Unmodified));
    assert_eq!(finder.default_strategy(), PathProcessingStrategy::Unmodified);

    let finder = PathStrategyFinder::new(Some(PathProcessingStrategy::Cleaned));
    assert_eq!(finder.default_strategy(), PathProcessingStrategy::Cleaned);
}

#[test]
fn test_resolve_path_processing_strategy() {
    let finder = PathStrategyFinder::new(Some(PathProcessingStrategy::Unmodified));

    // 헤더 없음 → 기본값
    assert_eq!(finder.resolve(None), PathProcessingStrategy::Unmodified);

    // 전략 헤더 없음 → 기본값
    assert_eq!(finder.resolve(Some(&HeaderMap::new())), PathProcessingStrategy::Unmodified);

    // 잘못된 값 → 기본값
    assert_eq!(finder.resolve(Some(&headers_with("booom"))), PathProcessingStrategy::Unmodified);

    // 유효한 값 → 헤더 값
    assert_eq!(finder.resolve(Some(&headers_with("unmodified"))), PathProcessingStrategy::Unmodified);
    assert_eq!(finder.resolve(Some(&headers_with("cleaned"))), PathProcessingStrategy::Cleaned);
}

#[test]
fn test_header_token_wins_regardless_of_default() {
    let tokens = vec![
        ("unmodified", PathProcessingStrategy::Unmodified),
        ("UNMODIFIED", PathProcessingStrategy::Unmodified),
        ("UnModified", PathProcessingStrategy::Unmodified),
        ("cleaned", PathProcessingStrategy::Cleaned),
        ("CLEANED", PathProcessingStrategy::Cleaned),
        ("cLeAnEd", PathProcessingStrategy::Cleaned),
    ];

    for default in [None, Some(PathProcessingStrategy::Unmodified), Some(PathProcessingStrategy::Cleaned)] {
        let finder = PathStrategyFinder::new(default);
        for (token, expected) in &tokens {
            assert_eq!(
                finder.resolve(Some(&headers_with(token))),
                *expected,
                "기본값 {:?}, 헤더 '{}'",
                default,
                token
            );
        }
    }
}

#[test]
fn test_unknown_tokens_fall_back_to_default() {
    for default in PathProcessingStrategy::ALL {
        let finder = PathStrategyFinder::new(Some(default));
        for token in ["", "clean", "unmodified-ish", "normalized", "0"] {
            assert_eq!(finder.resolve(Some(&headers_with(token))), default, "헤더 '{}'", token);
        }
    }
}

#[test]
fn test_header_name_is_case_insensitive() {
    let finder = PathStrategyFinder::new(None);
    let mut headers = HeaderMap::new();
    headers.insert(
        hyper::header::HeaderName::from_bytes(b"X-Path-Processing-Strategy").unwrap(),
        HeaderValue::from_static("Unmodified"),
    );
    assert_eq!(finder.resolve(Some(&headers)), PathProcessingStrategy::Unmodified);
}
