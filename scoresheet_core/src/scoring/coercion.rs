use crate::types::*;

/// A non-negative number that fits a `Score`, with any fractional part
/// truncated. Anything else is `None`.
pub fn parse_score(value: &str) -> Option<Score> {
    let trimmed = value.trim();
    if let Ok(score) = trimmed.parse::<Score>() {
        return Some(score);
    }

    let float: f64 = trimmed.parse().ok()?;
    if !float.is_finite() || float < 0.0 || float >= Score::MAX as f64 + 1.0 {
        return None;
    }
    Some(float.trunc() as Score)
}

/// Lenient reading used wherever data entry must never be blocked.
pub fn to_nonnegative_int(value: &str, default: Score) -> Score {
    parse_score(value).unwrap_or(default)
}

/// Reading of an imported cell. Any finite number is accepted and coerced,
/// so a negative value becomes 0. Text, blanks and `NaN` are `None`.
pub fn coerce_numeric_cell(value: &str) -> Option<Score> {
    let trimmed = value.trim();
    let is_number = trimmed.parse::<i64>().is_ok()
        || trimmed.parse::<f64>().map_or(false, |float| float.is_finite());
    is_number.then(|| to_nonnegative_int(trimmed, 0))
}

pub fn coerce_or_zero(value: Option<&str>) -> Score {
    value.map_or(0, |v| to_nonnegative_int(v, 0))
}
