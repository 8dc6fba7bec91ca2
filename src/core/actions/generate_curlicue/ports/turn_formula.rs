use crate::core::formula::errors::FormulaError;

/// Maps a step index and the scale to a fractional turn count.
pub trait TurnFormula {
    fn turns(&self, step_index: i64, scale: f64) -> Result<f64, FormulaError>;
}

impl<F> TurnFormula for F
where
    F: Fn(i64, f64) -> Result<f64, FormulaError>,
{
    #[inline]
    fn turns(&self, step_index: i64, scale: f64) -> Result<f64, FormulaError> {
        self(step_index, scale)
    }
}
