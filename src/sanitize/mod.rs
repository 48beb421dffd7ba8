//! Data Sanitization
//!
//! Numeric hygiene for ratios and scores read from progress records.
//!
//! Functions:
//! - Safe ratio division
//! - Ratio clamping into `[0, 1]`
//! - Quiz score clamping into `[0, 100]`

use crate::types::MAX_QUIZ_SCORE;

/// 检查数值是否无效 (NaN 或 Inf)
pub fn is_invalid(value: f64) -> bool {
    value.is_nan() || value.is_infinite()
}

/// 将比例限制在 [0, 1]，无效值视为 0
pub fn sanitize_ratio(value: f64) -> f64 {
    if is_invalid(value) {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// 计算比例，分母为 0 时返回 0
pub fn safe_ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    sanitize_ratio(count as f64 / total as f64)
}

/// 将测验分数限制在 [0, 100]
pub fn sanitize_quiz_score(score: f64) -> f64 {
    if is_invalid(score) {
        return 0.0;
    }
    score.clamp(0.0, MAX_QUIZ_SCORE)
}
