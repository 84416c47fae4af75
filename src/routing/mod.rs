//! 요청별 경로 처리 전략을 결정하는 모듈입니다.

mod finder;
mod strategy;

pub use finder::{PathStrategyFinder, PATH_PROCESSING_STRATEGY_HEADER};
pub use strategy::PathProcessingStrategy;
