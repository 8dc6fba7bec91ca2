use crate::core::data::point::Point;

/// Fraction of the data range added on each side of an axis.
pub const AXIS_MARGIN: f64 = 0.05;
/// Half-width given to an axis whose data has no extent.
const SINGULAR_HALF_SPAN: f64 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq)]
struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    fn fit(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        let span = max - min;

        if span <= f64::EPSILON * min.abs().max(max.abs()).max(1.0) {
            let centre = (min + max) / 2.0;
            let half_span = (centre.abs() * SINGULAR_HALF_SPAN).max(SINGULAR_HALF_SPAN);
            return Self {
                min: centre - half_span,
                max: centre + half_span,
            };
        }

        Self {
            min: min - span * AXIS_MARGIN,
            max: max + span * AXIS_MARGIN,
        }
    }

    fn normalise(self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Maps data coordinates onto a square pixel viewport.
///
/// Each axis is fitted to its own data range independently, so the plot
/// always fills the viewport. Y grows upwards in data space and downwards
/// in pixel space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_range: AxisRange,
    y_range: AxisRange,
    size: u32,
}

impl Viewport {
    /// Fits a viewport to the given points. Returns `None` when there are no
    /// points or any coordinate is not finite.
    #[must_use]
    pub fn fit(xs: &[f64], ys: &[f64], size: u32) -> Option<Self> {
        if xs.is_empty() || ys.is_empty() || size == 0 {
            return None;
        }

        if !xs.iter().chain(ys).all(|v| v.is_finite()) {
            return None;
        }

        Some(Self {
            x_range: AxisRange::fit(xs),
            y_range: AxisRange::fit(ys),
            size,
        })
    }

    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point {
        let last = f64::from(self.size - 1);
        let px = self.x_range.normalise(x) * last;
        let py = (1.0 - self.y_range.normalise(y)) * last;

        Point {
            x: px.round() as i32,
            y: py.round() as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_rejects_empty_and_non_finite_data() {
        assert_eq!(Viewport::fit(&[], &[], 10), None);
        assert_eq!(Viewport::fit(&[0.0, f64::NAN], &[0.0, 1.0], 10), None);
    }

    #[test]
    fn test_extremes_sit_inside_the_margin() {
        let viewport = Viewport::fit(&[0.0, 10.0], &[0.0, 10.0], 111).unwrap();

        // 10 data units plus 0.5 margin each side map onto 110 pixels.
        assert_eq!(viewport.to_pixel(0.0, 0.0), Point { x: 5, y: 105 });
        assert_eq!(viewport.to_pixel(10.0, 10.0), Point { x: 105, y: 5 });
    }

    #[test]
    fn test_axes_are_fitted_independently() {
        let viewport = Viewport::fit(&[0.0, 100.0], &[0.0, 1.0], 111).unwrap();

        assert_eq!(viewport.to_pixel(100.0, 1.0), Point { x: 105, y: 5 });
    }

    #[test]
    fn test_flat_axis_is_centred() {
        let viewport = Viewport::fit(&[0.0, 4.0], &[0.0, 0.0], 101).unwrap();

        assert_eq!(viewport.to_pixel(2.0, 0.0).y, 50);
    }
}
