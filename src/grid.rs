//! 스윕 축 균일 격자 생성.

use crate::domain::ValidityBounds;
use crate::error::{EngineError, EngineResult};

/// 곡선 하나당 샘플 수.
pub const SAMPLE_COUNT: usize = 1000;

/// `[min, max]` 닫힌 구간을 `count` 개 점으로 균일 분할한다.
///
/// i 번째 점은 `min + i·(max−min)/(count−1)` 이며 마지막 점은 정확히 `max` 로 맞춘다.
///
/// # Errors
///
/// `count < 2`, `max < min`, 또는 끝점이 유한하지 않으면 [`EngineError::Validation`].
pub fn linspace(min: f64, max: f64, count: usize) -> EngineResult<Vec<f64>> {
    if count < 2 {
        return Err(EngineError::validation(format!(
            "격자 점 수는 2 이상이어야 합니다 (count={count})"
        )));
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(EngineError::validation(format!(
            "격자 끝점이 유한하지 않습니다 ({min}, {max})"
        )));
    }
    if max < min {
        return Err(EngineError::validation(format!(
            "격자 구간이 뒤집혔습니다 (min={min}, max={max})"
        )));
    }

    let span = max - min;
    let denom = (count - 1) as f64;
    let mut points: Vec<f64> = (0..count)
        .map(|i| min + i as f64 * span / denom)
        .collect();
    points[count - 1] = max;
    Ok(points)
}

/// 유효 범위 전체를 [`SAMPLE_COUNT`] 개 점으로 샘플링한다.
pub fn sample(bounds: ValidityBounds) -> EngineResult<Vec<f64>> {
    linspace(bounds.min, bounds.max, SAMPLE_COUNT)
}
