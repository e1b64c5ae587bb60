use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluateError {
    #[error("input {name} is not a finite number: {value}")]
    NonFiniteInput { name: &'static str, value: f32 },

    #[error("all aggregated rule strengths are zero, weighted average is undefined")]
    UndefinedDefuzzification,
}
