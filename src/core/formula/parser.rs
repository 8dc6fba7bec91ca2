use std::f64::consts::{E, PI, TAU};

use crate::core::formula::errors::FormulaError;
use crate::core::formula::expr::{BinaryOp, Expr, UnaryOp};
use crate::core::formula::functions::Function;
use crate::core::formula::lexer::{SpannedToken, Token, tokenize};
use crate::core::formula::value::Value;

pub const STEP_INDEX_VARIABLE: &str = "i";
pub const SCALE_VARIABLE: &str = "s";

const CONSTANTS: &[(&str, f64)] = &[
    ("pi", PI),
    ("M_PI", PI),
    ("tau", TAU),
    ("e", E),
    ("M_E", E),
];

/// Deepest nesting a formula may have, counting parentheses, unary signs,
/// function calls and operator chains. Evaluation recurses at most this deep.
pub const MAX_DEPTH: usize = 256;

pub fn parse_formula(src: &str) -> Result<Expr, FormulaError> {
    let tokens = tokenize(src)?;

    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let node = parser.parse_expression()?;

    if let Some(spanned) = parser.next_token() {
        return Err(unexpected(&spanned, "an operator or end of formula"));
    }

    Ok(node.expr)
}

// An expression together with the height of its tree.
struct Node {
    expr: Expr,
    height: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    fn branch(expr: Expr, child_height: usize) -> Result<Self, FormulaError> {
        let height = child_height + 1;

        if height > MAX_DEPTH {
            return Err(FormulaError::TooDeep { limit: MAX_DEPTH });
        }

        Ok(Self { expr, height })
    }

    fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Result<Self, FormulaError> {
        let child_height = lhs.height.max(rhs.height);
        let expr = Expr::Binary {
            op,
            lhs: Box::new(lhs.expr),
            rhs: Box::new(rhs.expr),
        };

        Self::branch(expr, child_height)
    }
}

struct Parser {
    tokens: Vec<SpannedToken>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<SpannedToken>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    // expression := term (('+' | '-') term)*
    fn parse_expression(&mut self) -> Result<Node, FormulaError> {
        let mut lhs = self.parse_term()?;

        while let Some(op) = self.peek_binary_op(&[BinaryOp::Add, BinaryOp::Sub]) {
            self.pos += 1;
            let rhs = self.parse_term()?;
            lhs = Node::binary(op, lhs, rhs)?;
        }

        Ok(lhs)
    }

    // term := unary (('*' | '/' | '%') unary)*
    fn parse_term(&mut self) -> Result<Node, FormulaError> {
        let mut lhs = self.parse_unary()?;

        while let Some(op) = self.peek_binary_op(&[BinaryOp::Mul, BinaryOp::Div, BinaryOp::Rem]) {
            self.pos += 1;
            let rhs = self.parse_unary()?;
            lhs = Node::binary(op, lhs, rhs)?;
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Node, FormulaError> {
        let op = match self.peek() {
            Some(Token::Plus) => Some(UnaryOp::Plus),
            Some(Token::Minus) => Some(UnaryOp::Minus),
            _ => None,
        };
        let Some(op) = op else {
            return self.parse_primary();
        };
        self.pos += 1;

        self.descend()?;
        let operand = self.parse_unary()?;
        self.ascend();

        let child_height = operand.height;
        Node::branch(
            Expr::Unary {
                op,
                operand: Box::new(operand.expr),
            },
            child_height,
        )
    }

    fn parse_primary(&mut self) -> Result<Node, FormulaError> {
        const EXPECTED: &str = "a number, variable, function call or '('";

        let spanned = self
            .next_token()
            .ok_or(FormulaError::UnexpectedEnd { expected: EXPECTED })?;

        match spanned.token {
            Token::Number(value) => Ok(Node::leaf(Expr::Literal(value))),
            Token::LParen => {
                self.descend()?;
                let inner = self.parse_expression()?;
                self.ascend();
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Ident(name) => {
                if self.peek() == Some(&Token::LParen) {
                    self.pos += 1;
                    self.descend()?;
                    let call = self.parse_call(name)?;
                    self.ascend();
                    Ok(call)
                } else {
                    resolve_variable(name).map(Node::leaf)
                }
            }
            _ => Err(unexpected(&spanned, EXPECTED)),
        }
    }

    fn parse_call(&mut self, name: String) -> Result<Node, FormulaError> {
        let mut args = Vec::new();
        let mut child_height = 0;

        if self.peek() == Some(&Token::RParen) {
            self.pos += 1;
        } else {
            loop {
                let arg = self.parse_expression()?;
                child_height = child_height.max(arg.height);
                args.push(arg.expr);

                let spanned = self
                    .next_token()
                    .ok_or(FormulaError::UnexpectedEnd { expected: "',' or ')'" })?;
                match spanned.token {
                    Token::Comma => continue,
                    Token::RParen => break,
                    _ => return Err(unexpected(&spanned, "',' or ')'")),
                }
            }
        }

        let function = Function::lookup(&name).ok_or(FormulaError::UnknownFunction { name })?;

        if args.len() != function.arity() {
            return Err(FormulaError::WrongArity {
                name: function.name(),
                expected: function.arity(),
                found: args.len(),
            });
        }

        Node::branch(Expr::Call { function, args }, child_height)
    }

    fn descend(&mut self) -> Result<(), FormulaError> {
        self.depth += 1;

        if self.depth > MAX_DEPTH {
            return Err(FormulaError::TooDeep { limit: MAX_DEPTH });
        }

        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|spanned| &spanned.token)
    }

    fn peek_binary_op(&self, accepted: &[BinaryOp]) -> Option<BinaryOp> {
        let op = match self.peek()? {
            Token::Plus => BinaryOp::Add,
            Token::Minus => BinaryOp::Sub,
            Token::Star => BinaryOp::Mul,
            Token::Slash => BinaryOp::Div,
            Token::Percent => BinaryOp::Rem,
            _ => return None,
        };

        accepted.contains(&op).then_some(op)
    }

    fn next_token(&mut self) -> Option<SpannedToken> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), FormulaError> {
        match self.next_token() {
            Some(spanned) if spanned.token == token => Ok(()),
            Some(spanned) => Err(unexpected(&spanned, expected)),
            None => Err(FormulaError::UnexpectedEnd { expected }),
        }
    }
}

fn resolve_variable(name: String) -> Result<Expr, FormulaError> {
    if name == STEP_INDEX_VARIABLE {
        return Ok(Expr::StepIndex);
    }

    if name == SCALE_VARIABLE {
        return Ok(Expr::Scale);
    }

    let constant = CONSTANTS
        .iter()
        .find(|(constant, _)| *constant == name)
        .map(|&(_, value)| Expr::Literal(Value::Real(value)));

    constant.ok_or(FormulaError::UnknownVariable { name })
}

fn unexpected(spanned: &SpannedToken, expected: &'static str) -> FormulaError {
    FormulaError::UnexpectedToken {
        found: spanned.token.to_string(),
        expected,
        position: spanned.position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[test]
    fn test_multiplication_is_left_associative() {
        assert_eq!(
            parse_formula("s *i*i").unwrap(),
            binary(
                BinaryOp::Mul,
                binary(BinaryOp::Mul, Expr::Scale, Expr::StepIndex),
                Expr::StepIndex
            )
        );
    }

    #[test]
    fn test_precedence_and_parentheses() {
        assert_eq!(
            parse_formula("1 + i * 2").unwrap(),
            binary(
                BinaryOp::Add,
                Expr::Literal(Value::Int(1)),
                binary(BinaryOp::Mul, Expr::StepIndex, Expr::Literal(Value::Int(2)))
            )
        );
        assert_eq!(
            parse_formula("(1 + i) * 2").unwrap(),
            binary(
                BinaryOp::Mul,
                binary(BinaryOp::Add, Expr::Literal(Value::Int(1)), Expr::StepIndex),
                Expr::Literal(Value::Int(2))
            )
        );
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_multiplication() {
        assert_eq!(
            parse_formula("-s*i").unwrap(),
            binary(
                BinaryOp::Mul,
                Expr::Unary {
                    op: UnaryOp::Minus,
                    operand: Box::new(Expr::Scale)
                },
                Expr::StepIndex
            )
        );
    }

    #[test]
    fn test_constants_resolve_to_literals() {
        assert_eq!(
            parse_formula("M_PI").unwrap(),
            Expr::Literal(Value::Real(PI))
        );
        assert_eq!(parse_formula("e").unwrap(), Expr::Literal(Value::Real(E)));
    }

    #[test]
    fn test_function_calls() {
        assert_eq!(
            parse_formula("atan2(i, s)").unwrap(),
            Expr::Call {
                function: Function::Atan2,
                args: vec![Expr::StepIndex, Expr::Scale]
            }
        );
    }

    #[test]
    fn test_empty_formula() {
        assert_eq!(parse_formula("   ").unwrap_err(), FormulaError::Empty);
    }

    #[test]
    fn test_unknown_variable() {
        assert_eq!(
            parse_formula("s*i*k").unwrap_err(),
            FormulaError::UnknownVariable { name: "k".into() }
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            parse_formula("gamma(i)").unwrap_err(),
            FormulaError::UnknownFunction {
                name: "gamma".into()
            }
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_formula("pow(i)").unwrap_err(),
            FormulaError::WrongArity {
                name: "pow",
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            parse_formula("sin()").unwrap_err(),
            FormulaError::WrongArity {
                name: "sin",
                expected: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(
            parse_formula("(s*i").unwrap_err(),
            FormulaError::UnexpectedEnd { expected: "')'" }
        );
        assert_eq!(
            parse_formula("s*i)").unwrap_err(),
            FormulaError::UnexpectedToken {
                found: "')'".into(),
                expected: "an operator or end of formula",
                position: 3
            }
        );
    }

    #[test]
    fn test_moderate_nesting_is_accepted() {
        let nested = format!("{}s{}", "(".repeat(100), ")".repeat(100));

        assert_eq!(parse_formula(&nested).unwrap(), Expr::Scale);
        assert!(parse_formula(&format!("{}s", "-".repeat(100))).is_ok());
    }

    #[test]
    fn test_excessive_nesting_is_an_error() {
        let too_deep = FormulaError::TooDeep { limit: MAX_DEPTH };
        let parentheses = format!("{}s{}", "(".repeat(5_000), ")".repeat(5_000));
        let signs = format!("{}s", "-".repeat(5_000));
        let calls = format!("{}s{}", "sin(".repeat(5_000), ")".repeat(5_000));
        let chain = format!("{}1", "1+".repeat(5_000));

        for formula in [parentheses, signs, calls, chain] {
            assert_eq!(parse_formula(&formula).unwrap_err(), too_deep);
        }
    }

    #[test]
    fn test_dangling_operator() {
        assert!(matches!(
            parse_formula("s*").unwrap_err(),
            FormulaError::UnexpectedEnd { .. }
        ));
        assert!(matches!(
            parse_formula("2 i").unwrap_err(),
            FormulaError::UnexpectedToken { position: 2, .. }
        ));
    }
}
