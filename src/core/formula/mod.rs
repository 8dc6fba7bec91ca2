//! Turn formulas: scalar expressions over the step index `i` and the scale `s`.
//!
//! A formula is parsed once into an [`expr::Expr`] tree and then evaluated
//! for every step. Arithmetic follows C rules: integers stay integral until a
//! real operand is involved.

pub mod errors;
pub mod expr;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod value;

use crate::core::actions::generate_curlicue::ports::turn_formula::TurnFormula;
use crate::core::formula::errors::FormulaError;
use crate::core::formula::expr::{Bindings, Expr};
use crate::core::formula::parser::parse_formula;

/// A compiled formula together with the text it was compiled from.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    source: String,
    expr: Expr,
}

impl Formula {
    pub fn compile(source: &str) -> Result<Self, FormulaError> {
        let expr = parse_formula(source)?;

        Ok(Self {
            source: source.to_owned(),
            expr,
        })
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl TurnFormula for Formula {
    fn turns(&self, step_index: i64, scale: f64) -> Result<f64, FormulaError> {
        let value = self
            .expr
            .evaluate(Bindings { step_index, scale })?
            .as_real();

        if !value.is_finite() {
            return Err(FormulaError::NonFinite { operation: "formula" });
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_source_verbatim() {
        let formula = Formula::compile("s *i*i").unwrap();

        assert_eq!(formula.source(), "s *i*i");
    }

    #[test]
    fn test_default_formula_turns() {
        let formula = Formula::compile("s *i*i").unwrap();

        assert_eq!(formula.turns(3, 0.5).unwrap(), 4.5);
    }

    #[test]
    fn test_integer_formula_is_promoted_at_the_end() {
        let formula = Formula::compile("i*i/2").unwrap();

        assert_eq!(formula.turns(3, 0.0).unwrap(), 4.0);
    }

    #[test]
    fn test_transcendental_functions() {
        let formula = Formula::compile("sin(pi/2) + log(exp(s))").unwrap();

        let turns = formula.turns(0, 2.0).unwrap();
        assert!((turns - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_deeply_nested_formula_is_rejected_at_compile_time() {
        let source = format!("{}s{}", "(".repeat(5_000), ")".repeat(5_000));

        assert_eq!(
            Formula::compile(&source),
            Err(FormulaError::TooDeep {
                limit: parser::MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_evaluation_errors_surface_per_step() {
        let formula = Formula::compile("1/(i-3)").unwrap();

        assert!(formula.turns(2, 0.0).is_ok());
        assert_eq!(formula.turns(3, 0.0), Err(FormulaError::DivisionByZero));
    }
}
