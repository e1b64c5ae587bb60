use crate::defuzz::defuzzify;
use crate::error::EvaluateError;
use crate::level::Level;
use crate::membership::{activity_membership, gpa_membership};
use crate::rules::infer;

/// Crisp outcome of one evaluation: the defuzzified score rounded to two
/// decimals and the label derived from the unrounded score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub score: f32,
    pub label: Level,
}

/// Runs the full pipeline for one (GPA, activity) pair: fuzzification,
/// rule inference, defuzzification, labeling.
///
/// Pure function of its inputs; no shared state between invocations.
pub fn evaluate(gpa: f32, activity: f32) -> Result<Evaluation, EvaluateError> {
    ensure_finite("gpa", gpa)?;
    ensure_finite("activity", activity)?;

    let gpa_degrees = gpa_membership(gpa);
    let activity_degrees = activity_membership(activity);
    let strengths = infer(&gpa_degrees, &activity_degrees);
    let raw = defuzzify(&strengths)?;

    Ok(Evaluation {
        score: round_two_decimals(raw),
        label: label_for(raw),
    })
}

fn ensure_finite(name: &'static str, value: f32) -> Result<(), EvaluateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EvaluateError::NonFiniteInput { name, value })
    }
}

fn label_for(score: f32) -> Level {
    if score < 60.0 {
        Level::Low
    } else if score < 80.0 {
        Level::Medium
    } else {
        Level::High
    }
}

fn round_two_decimals(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
