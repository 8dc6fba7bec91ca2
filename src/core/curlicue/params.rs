use crate::core::curlicue::errors::CurlicueError;

/// Numeric parameters of one curlicue generation.
///
/// `step_count <= max_steps` always holds. Input widgets are expected to
/// clamp before values reach this type; anything that slips through is
/// rejected rather than clamped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParameterSet {
    scale: f64,
    step_size: f64,
    step_count: usize,
    max_steps: usize,
}

impl ParameterSet {
    pub fn new(
        scale: f64,
        step_size: f64,
        step_count: usize,
        max_steps: usize,
    ) -> Result<Self, CurlicueError> {
        if max_steps == 0 {
            return Err(CurlicueError::ZeroMaxSteps);
        }

        let mut params = Self {
            scale: 0.0,
            step_size: 0.0,
            step_count: 0,
            max_steps,
        };

        params.set_scale(scale)?;
        params.set_step_size(step_size)?;
        params.set_step_count(step_count)?;

        Ok(params)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), CurlicueError> {
        if !scale.is_finite() {
            return Err(CurlicueError::NonFiniteScale(scale));
        }

        self.scale = scale;
        Ok(())
    }

    pub fn set_step_size(&mut self, step_size: f64) -> Result<(), CurlicueError> {
        if !step_size.is_finite() {
            return Err(CurlicueError::NonFiniteStepSize(step_size));
        }

        self.step_size = step_size;
        Ok(())
    }

    pub fn set_step_count(&mut self, step_count: usize) -> Result<(), CurlicueError> {
        if step_count > self.max_steps {
            return Err(CurlicueError::StepCountExceedsMax {
                step_count,
                max_steps: self.max_steps,
            });
        }

        self.step_count = step_count;
        Ok(())
    }
}
