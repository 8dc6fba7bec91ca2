use std::f64::consts::TAU;

use thiserror::Error;

use crate::core::actions::generate_curlicue::ports::turn_formula::TurnFormula;
use crate::core::curlicue::params::ParameterSet;
use crate::core::data::coordinate_buffers::CoordinateBuffers;
use crate::core::formula::Formula;
use crate::core::formula::errors::FormulaError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateCurlicueError {
    #[error("step count {step_count} exceeds buffer capacity {capacity}")]
    CapacityExceeded { step_count: usize, capacity: usize },
    #[error("formula does not compile: {0}")]
    Compile(#[source] FormulaError),
    #[error("formula failed at step {step}: {source}")]
    Evaluate { step: usize, source: FormulaError },
}

impl GenerateCurlicueError {
    #[must_use]
    pub fn formula_error(&self) -> Option<&FormulaError> {
        match self {
            Self::CapacityExceeded { .. } => None,
            Self::Compile(source) | Self::Evaluate { source, .. } => Some(source),
        }
    }
}

/// Runs the curlicue recurrence for `params.step_count()` points.
///
/// Point 0 is the origin; every later point advances one `step_size` in the
/// direction `2π · formula(i, s)` from its predecessor. The whole sequence is
/// recomputed from index 0 on every call and only becomes visible in
/// `buffers` once every step succeeded. Entries at or past `step_count` are
/// never touched, and on error the buffers are unchanged.
pub fn generate_curlicue<F: TurnFormula + ?Sized>(
    formula: &F,
    params: &ParameterSet,
    buffers: &mut CoordinateBuffers,
) -> Result<(), GenerateCurlicueError> {
    let step_count = params.step_count();
    let capacity = buffers.capacity();

    if step_count > capacity {
        return Err(GenerateCurlicueError::CapacityExceeded {
            step_count,
            capacity,
        });
    }

    let scale = params.scale();
    let step_size = params.step_size();
    if step_count == 0 {
        return Ok(());
    }

    let (xs, ys) = buffers.staging_mut();

    xs[0] = 0.0;
    ys[0] = 0.0;

    for step in 1..step_count {
        let turns = formula
            .turns(step as i64, scale)
            .map_err(|source| GenerateCurlicueError::Evaluate { step, source })?;
        let theta = TAU * turns;

        xs[step] = xs[step - 1] + step_size * theta.cos();
        ys[step] = ys[step - 1] + step_size * theta.sin();
    }

    buffers.commit(step_count);

    Ok(())
}

/// Compiles `source` and generates from it in one go.
pub fn generate_curlicue_from_source(
    source: &str,
    params: &ParameterSet,
    buffers: &mut CoordinateBuffers,
) -> Result<(), GenerateCurlicueError> {
    let formula = Formula::compile(source).map_err(GenerateCurlicueError::Compile)?;

    generate_curlicue(&formula, params, buffers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curlicue::curlicue_config::golden_ratio;

    const CAPACITY: usize = 64;

    fn params(scale: f64, step_size: f64, step_count: usize) -> ParameterSet {
        ParameterSet::new(scale, step_size, step_count, CAPACITY).unwrap()
    }

    fn generate(source: &str, params: &ParameterSet) -> (Vec<f64>, Vec<f64>) {
        let mut buffers = CoordinateBuffers::new(CAPACITY).unwrap();
        generate_curlicue_from_source(source, params, &mut buffers).unwrap();

        let n = params.step_count();
        (buffers.xs(n).to_vec(), buffers.ys(n).to_vec())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_whole_turns_walk_along_the_x_axis() {
        let (xs, ys) = generate("s*i*i", &params(1.0, 1.0, 3));

        assert_eq!(xs.len(), 3);
        for (i, expected_x) in [0.0, 1.0, 2.0].into_iter().enumerate() {
            assert_close(xs[i], expected_x);
            assert_close(ys[i], 0.0);
        }
    }

    #[test]
    fn test_constant_zero_formula_is_a_straight_line() {
        let (xs, ys) = generate("0", &params(3.7, 0.5, 40));

        for i in 0..40 {
            assert_eq!(xs[i], i as f64 * 0.5);
            assert_eq!(ys[i], 0.0);
        }
    }

    #[test]
    fn test_quarter_turn_walks_up() {
        let (xs, ys) = generate("0.25", &params(0.0, 2.0, 4));

        for i in 0..4 {
            assert_close(xs[i], 0.0);
            assert_close(ys[i], 2.0 * i as f64);
        }
    }

    #[test]
    fn test_origin_is_fixed() {
        for (source, step_count) in [("s*i*i", 1), ("sin(i)*s", 50), ("i/3", 17)] {
            let (xs, ys) = generate(source, &params(-4.2, 1.0, step_count));

            assert_eq!(xs[0], 0.0);
            assert_eq!(ys[0], 0.0);
        }

        let mut buffers = CoordinateBuffers::new(4).unwrap();
        let params = ParameterSet::new(1.0, 1.0, 0, 4).unwrap();
        generate_curlicue_from_source("s", &params, &mut buffers).unwrap();
        assert_eq!(buffers.xs(1), &[0.0]);
        assert_eq!(buffers.ys(1), &[0.0]);
    }

    #[test]
    fn test_zero_and_one_steps_yield_only_the_origin() {
        let (xs, ys) = generate("s*i*i", &params(1.3, 1.0, 0));
        assert!(xs.is_empty() && ys.is_empty());

        let (xs, ys) = generate("s*i*i", &params(1.3, 1.0, 1));
        assert_eq!(xs, vec![0.0]);
        assert_eq!(ys, vec![0.0]);
    }

    #[test]
    fn test_entries_past_step_count_are_untouched() {
        let mut buffers = CoordinateBuffers::new(CAPACITY).unwrap();
        generate_curlicue_from_source("0.25", &params(0.0, 1.0, 30), &mut buffers).unwrap();
        let before = buffers.ys(30).to_vec();

        generate_curlicue_from_source("0", &params(0.0, 1.0, 10), &mut buffers).unwrap();

        assert!(buffers.ys(10).iter().all(|y| *y == 0.0));
        assert_eq!(buffers.ys(30)[10..], before[10..]);
    }

    #[test]
    fn test_generation_is_bit_identical_across_runs() {
        let params = params(golden_ratio(), 1.0, CAPACITY);
        let (xs_a, ys_a) = generate("s*i*i", &params);
        let (xs_b, ys_b) = generate("s*i*i", &params);

        let bits = |values: &[f64]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&xs_a), bits(&xs_b));
        assert_eq!(bits(&ys_a), bits(&ys_b));
    }

    #[test]
    fn test_shorter_generation_is_a_prefix_of_longer_one() {
        let (short_xs, short_ys) = generate("s*i*i", &params(golden_ratio(), 1.0, 20));
        let (long_xs, long_ys) = generate("s*i*i", &params(golden_ratio(), 1.0, 60));

        assert_eq!(short_xs[..], long_xs[..20]);
        assert_eq!(short_ys[..], long_ys[..20]);
    }

    #[test]
    fn test_full_default_run_stays_finite() {
        let params = ParameterSet::new(golden_ratio(), 1.0, 10_000, 10_000).unwrap();
        let mut buffers = CoordinateBuffers::new(10_000).unwrap();

        generate_curlicue_from_source("s *i*i", &params, &mut buffers).unwrap();

        assert!(buffers.xs(10_000).iter().all(|x| x.is_finite()));
        assert!(buffers.ys(10_000).iter().all(|y| y.is_finite()));
    }

    #[test]
    fn test_unknown_variable_leaves_buffers_unchanged() {
        let mut buffers = CoordinateBuffers::new(CAPACITY).unwrap();
        generate_curlicue_from_source("s*i*i", &params(0.3, 1.0, 30), &mut buffers).unwrap();
        let before = (buffers.xs(CAPACITY).to_vec(), buffers.ys(CAPACITY).to_vec());

        let result = generate_curlicue_from_source("s*i*q", &params(0.3, 1.0, 30), &mut buffers);

        assert_eq!(
            result,
            Err(GenerateCurlicueError::Compile(FormulaError::UnknownVariable {
                name: "q".into()
            }))
        );
        assert_eq!(buffers.xs(CAPACITY), &before.0[..]);
        assert_eq!(buffers.ys(CAPACITY), &before.1[..]);
    }

    #[test]
    fn test_evaluation_failure_mid_run_leaves_buffers_unchanged() {
        let mut buffers = CoordinateBuffers::new(CAPACITY).unwrap();
        generate_curlicue_from_source("s*i", &params(0.1, 1.0, 30), &mut buffers).unwrap();
        let before = (buffers.xs(CAPACITY).to_vec(), buffers.ys(CAPACITY).to_vec());

        let result = generate_curlicue_from_source("1/(i-10)", &params(0.1, 1.0, 30), &mut buffers);

        assert_eq!(
            result,
            Err(GenerateCurlicueError::Evaluate {
                step: 10,
                source: FormulaError::DivisionByZero
            })
        );
        assert_eq!(buffers.xs(CAPACITY), &before.0[..]);
        assert_eq!(buffers.ys(CAPACITY), &before.1[..]);
    }

    #[test]
    fn test_step_count_beyond_capacity_is_rejected() {
        let mut buffers = CoordinateBuffers::new(8).unwrap();
        let params = ParameterSet::new(1.0, 1.0, 9, 100).unwrap();

        assert_eq!(
            generate_curlicue_from_source("s", &params, &mut buffers),
            Err(GenerateCurlicueError::CapacityExceeded {
                step_count: 9,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_closure_formulas_receive_every_step_in_order() {
        let seen = std::cell::RefCell::new(Vec::new());
        let formula = |step: i64, scale: f64| {
            seen.borrow_mut().push(step);
            Ok::<f64, FormulaError>(scale)
        };
        let mut buffers = CoordinateBuffers::new(8).unwrap();

        generate_curlicue(&formula, &params(0.0, 1.0, 6), &mut buffers).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_formula_error_accessor() {
        let error = GenerateCurlicueError::Evaluate {
            step: 3,
            source: FormulaError::DivisionByZero,
        };

        assert_eq!(error.formula_error(), Some(&FormulaError::DivisionByZero));
        assert_eq!(
            GenerateCurlicueError::CapacityExceeded {
                step_count: 2,
                capacity: 1
            }
            .formula_error(),
            None
        );
    }
}
