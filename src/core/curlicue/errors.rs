use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurlicueError {
    #[error("maximum step count must be greater than zero")]
    ZeroMaxSteps,
    #[error("step count {step_count} exceeds maximum {max_steps}")]
    StepCountExceedsMax { step_count: usize, max_steps: usize },
    #[error("scale must be a finite number, got {0}")]
    NonFiniteScale(f64),
    #[error("step size must be a finite number, got {0}")]
    NonFiniteStepSize(f64),
}
