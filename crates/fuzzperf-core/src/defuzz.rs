use crate::error::EvaluateError;
use crate::level::{Level, OutputStrengths};

/// Representative crisp value per output category, used as the anchor points
/// of the weighted average. The 30/60/90 table is canonical here; see
/// DESIGN.md for the rejected 20/50/80 variant.
pub const fn centroid(level: Level) -> f32 {
    match level {
        Level::Low => 30.0,
        Level::Medium => 60.0,
        Level::High => 90.0,
    }
}

/// Collapses the aggregated strengths into one crisp score via weighted
/// average over the centroid table.
///
/// Errors with `UndefinedDefuzzification` when every strength is zero
/// instead of dividing by zero.
pub fn defuzzify(strengths: &OutputStrengths) -> Result<f32, EvaluateError> {
    let denominator = strengths.total();
    if denominator <= 0.0 {
        return Err(EvaluateError::UndefinedDefuzzification);
    }

    let weighted: f32 = Level::ALL
        .iter()
        .map(|&level| strengths.get(level) * centroid(level))
        .sum();

    Ok(weighted / denominator)
}
