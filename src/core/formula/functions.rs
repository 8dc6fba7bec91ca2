use crate::core::formula::errors::FormulaError;
use crate::core::formula::value::Value;

/// Scalar math functions available to formulas, named after their C
/// counterparts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Pow,
    Abs,
    Fabs,
    Floor,
    Ceil,
    Round,
    Trunc,
    Fmod,
    Hypot,
    Fmin,
    Fmax,
}

impl Function {
    pub const ALL: &'static [Self] = &[
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Atan2,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Log,
        Self::Log10,
        Self::Log2,
        Self::Sqrt,
        Self::Cbrt,
        Self::Pow,
        Self::Abs,
        Self::Fabs,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Trunc,
        Self::Fmod,
        Self::Hypot,
        Self::Fmin,
        Self::Fmax,
    ];

    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|function| function.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Atan2 => "atan2",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Pow => "pow",
            Self::Abs => "abs",
            Self::Fabs => "fabs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Trunc => "trunc",
            Self::Fmod => "fmod",
            Self::Hypot => "hypot",
            Self::Fmin => "fmin",
            Self::Fmax => "fmax",
        }
    }

    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Atan2 | Self::Pow | Self::Fmod | Self::Hypot | Self::Fmin | Self::Fmax => 2,
            _ => 1,
        }
    }

    /// Applies the function to already evaluated arguments.
    ///
    /// The caller guarantees `args.len() == self.arity()`.
    pub fn apply(self, args: &[Value]) -> Result<Value, FormulaError> {
        if let (Self::Abs, [Value::Int(value)]) = (self, args) {
            return value
                .checked_abs()
                .map(Value::Int)
                .ok_or(FormulaError::IntegerOverflow { operation: "abs" });
        }

        let x = args.first().map_or(0.0, |arg| arg.as_real());
        let y = args.get(1).map_or(0.0, |arg| arg.as_real());

        let result = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Atan2 => x.atan2(y),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Log => x.ln(),
            Self::Log10 => x.log10(),
            Self::Log2 => x.log2(),
            Self::Sqrt => x.sqrt(),
            Self::Cbrt => x.cbrt(),
            Self::Pow => x.powf(y),
            Self::Abs | Self::Fabs => x.abs(),
            Self::Floor => x.floor(),
            Self::Ceil => x.ceil(),
            Self::Round => x.round(),
            Self::Trunc => x.trunc(),
            Self::Fmod => {
                if y == 0.0 {
                    return Err(FormulaError::DivisionByZero);
                }
                x % y
            }
            Self::Hypot => x.hypot(y),
            Self::Fmin => x.min(y),
            Self::Fmax => x.max(y),
        };

        if !result.is_finite() {
            return Err(FormulaError::Domain {
                function: self.name(),
                argument: x,
            });
        }

        Ok(Value::Real(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_finds_every_function_by_name() {
        for &function in Function::ALL {
            assert_eq!(Function::lookup(function.name()), Some(function));
        }
        assert_eq!(Function::lookup("gamma"), None);
    }

    #[test]
    fn test_abs_keeps_integer_type() {
        assert_eq!(Function::Abs.apply(&[Value::Int(-4)]), Ok(Value::Int(4)));
        assert_eq!(Function::Abs.apply(&[Value::Real(-0.5)]), Ok(Value::Real(0.5)));
        assert_eq!(Function::Fabs.apply(&[Value::Int(-4)]), Ok(Value::Real(4.0)));
    }

    #[test]
    fn test_integer_arguments_promote() {
        assert_eq!(
            Function::Pow.apply(&[Value::Int(2), Value::Int(10)]),
            Ok(Value::Real(1024.0))
        );
        assert_eq!(Function::Sqrt.apply(&[Value::Int(9)]), Ok(Value::Real(3.0)));
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            Function::Sqrt.apply(&[Value::Real(-1.0)]),
            Err(FormulaError::Domain {
                function: "sqrt",
                argument: -1.0
            })
        );
        assert!(matches!(
            Function::Log.apply(&[Value::Int(0)]),
            Err(FormulaError::Domain { function: "log", .. })
        ));
        assert!(matches!(
            Function::Asin.apply(&[Value::Real(2.0)]),
            Err(FormulaError::Domain { function: "asin", .. })
        ));
    }

    #[test]
    fn test_fmod_by_zero() {
        assert_eq!(
            Function::Fmod.apply(&[Value::Real(1.0), Value::Int(0)]),
            Err(FormulaError::DivisionByZero)
        );
        assert_eq!(
            Function::Fmod.apply(&[Value::Real(-7.5), Value::Int(2)]),
            Ok(Value::Real(-1.5))
        );
    }
}
