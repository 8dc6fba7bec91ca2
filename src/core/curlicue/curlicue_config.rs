#[cfg(feature = "gui")]
use std::ops::RangeInclusive;

use crate::core::curlicue::canvas_style::CanvasStyle;
use crate::core::curlicue::errors::CurlicueError;
use crate::core::curlicue::params::ParameterSet;

pub const DEFAULT_FORMULA: &str = "s *i*i";
pub const DEFAULT_STEP_SIZE: f64 = 1.0;
pub const DEFAULT_STEP_COUNT: usize = 2_000;
pub const DEFAULT_MAX_STEPS: usize = 10_000;

// Control panel widget settings.
#[cfg(feature = "gui")]
pub const SCALE_RANGE: RangeInclusive<f64> = -10.0..=10.0;
#[cfg(feature = "gui")]
pub const SCALE_RESOLUTION: f64 = 0.05;
#[cfg(feature = "gui")]
pub const SCALE_DISPLAY_DECIMALS: usize = 5;
#[cfg(feature = "gui")]
pub const STEP_COUNT_FINE_INCREMENT: usize = 1;
#[cfg(feature = "gui")]
pub const STEP_COUNT_LARGE_INCREMENT: usize = 50;

#[must_use]
pub fn golden_ratio() -> f64 {
    (5.0_f64.sqrt() + 1.0) / 2.0
}

/// Startup configuration: initial parameters, buffer capacity and canvas look.
#[derive(Debug, Clone, PartialEq)]
pub struct CurlicueConfig {
    pub formula: String,
    pub scale: f64,
    pub step_size: f64,
    pub step_count: usize,
    pub max_steps: usize,
    pub canvas: CanvasStyle,
}

impl Default for CurlicueConfig {
    fn default() -> Self {
        Self {
            formula: DEFAULT_FORMULA.to_owned(),
            scale: golden_ratio(),
            step_size: DEFAULT_STEP_SIZE,
            step_count: DEFAULT_STEP_COUNT,
            max_steps: DEFAULT_MAX_STEPS,
            canvas: CanvasStyle::default(),
        }
    }
}

impl CurlicueConfig {
    pub fn parameter_set(&self) -> Result<ParameterSet, CurlicueError> {
        ParameterSet::new(self.scale, self.step_size, self.step_count, self.max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let params = CurlicueConfig::default().parameter_set().unwrap();

        assert_eq!(params.step_count(), 2_000);
        assert_eq!(params.max_steps(), 10_000);
        assert_eq!(params.step_size(), 1.0);
        assert!((params.scale() - 1.618_033_988_749_895).abs() < 1e-15);
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_default_scale_lies_on_slider_range() {
        assert!(SCALE_RANGE.contains(&golden_ratio()));
    }

    #[test]
    fn test_invalid_step_count_is_reported() {
        let config = CurlicueConfig {
            step_count: 20_000,
            ..CurlicueConfig::default()
        };

        assert_eq!(
            config.parameter_set(),
            Err(CurlicueError::StepCountExceedsMax {
                step_count: 20_000,
                max_steps: 10_000
            })
        );
    }
}
