/// A scalar produced while evaluating a formula.
///
/// Integer arithmetic stays integral until a real operand is involved, so
/// `i*i/2` divides with truncation while `s*i*i` is real throughout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Real(f64),
}

impl Value {
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Real(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_real_promotes_integers() {
        assert_eq!(Value::Int(-3).as_real(), -3.0);
        assert_eq!(Value::Real(0.25).as_real(), 0.25);
    }
}
