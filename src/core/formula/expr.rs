use crate::core::formula::errors::FormulaError;
use crate::core::formula::functions::Function;
use crate::core::formula::value::Value;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

/// Compiled formula tree. Identifiers are resolved at parse time, so a tree
/// only ever references the step index, the scale or a known function.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    StepIndex,
    Scale,
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

/// Values bound to the free variables for one evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bindings {
    pub step_index: i64,
    pub scale: f64,
}

impl Expr {
    pub fn evaluate(&self, bindings: Bindings) -> Result<Value, FormulaError> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::StepIndex => Ok(Value::Int(bindings.step_index)),
            Self::Scale => Ok(Value::Real(bindings.scale)),
            Self::Unary { op, operand } => {
                let value = operand.evaluate(bindings)?;
                match (op, value) {
                    (UnaryOp::Plus, _) => Ok(value),
                    (UnaryOp::Minus, Value::Int(v)) => v
                        .checked_neg()
                        .map(Value::Int)
                        .ok_or(FormulaError::IntegerOverflow { operation: "-" }),
                    (UnaryOp::Minus, Value::Real(v)) => Ok(Value::Real(-v)),
                }
            }
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate(bindings)?;
                let rhs = rhs.evaluate(bindings)?;
                apply_binary(*op, lhs, rhs)
            }
            Self::Call { function, args } => {
                let values = args
                    .iter()
                    .map(|arg| arg.evaluate(bindings))
                    .collect::<Result<Vec<_>, _>>()?;
                function.apply(&values)
            }
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, FormulaError> {
    if let (Value::Int(a), Value::Int(b)) = (lhs, rhs) {
        return apply_integer(op, a, b);
    }

    let (a, b) = (lhs.as_real(), rhs.as_real());

    if matches!(op, BinaryOp::Div | BinaryOp::Rem) && b == 0.0 {
        return Err(FormulaError::DivisionByZero);
    }

    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Rem => a % b,
    };

    if !result.is_finite() {
        return Err(FormulaError::NonFinite {
            operation: op.symbol(),
        });
    }

    Ok(Value::Real(result))
}

// Truncating division and remainder, as in C.
fn apply_integer(op: BinaryOp, a: i64, b: i64) -> Result<Value, FormulaError> {
    if matches!(op, BinaryOp::Div | BinaryOp::Rem) && b == 0 {
        return Err(FormulaError::DivisionByZero);
    }

    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => a.checked_div(b),
        BinaryOp::Rem => a.checked_rem(b),
    };

    result.map(Value::Int).ok_or(FormulaError::IntegerOverflow {
        operation: op.symbol(),
    })
}
