use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// Tolerance for comparing evaluated results against integer targets and
/// for snapping near-integer results.
pub const EPSILON: f64 = 1e-10;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Value(f64),
    Op(Operator),
    Open,
    Close,
}

impl Operator {
    /// # Errors
    ///
    /// Returns an error when dividing by zero.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if is_zero(right) {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Evaluates a flat arithmetic expression with parentheses, following
/// standard precedence: parenthesized runs innermost first, then `*`/`/`
/// chains left to right, then `+`/`-` left to right.
///
/// The result is snapped to the nearest integer when within [`EPSILON`]
/// of one, so exact-integer arithmetic survives intermediate division.
///
/// # Errors
///
/// Returns [`ExpressionError::DivisionByZero`] when any division has a
/// zero divisor; callers treat this as "no result for this arrangement".
/// Malformed input (unknown characters, unbalanced brackets, dangling
/// operators) is reported through the remaining variants.
pub fn evaluate(expression: &str) -> Result<f64, ExpressionError> {
    let tokens = tokenize(expression)?;
    let tokens = reduce_parentheses(tokens)?;
    let value = evaluate_flat(&tokens)?;
    Ok(snap_to_integer(value))
}

fn snap_to_integer(value: f64) -> f64 {
    if (value - value.round()).abs() < EPSILON {
        value.round()
    } else {
        value
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut number: Option<f64> = None;

    for c in expression.chars() {
        if let Some(digit) = c.to_digit(10) {
            number = Some(number.unwrap_or(0.0) * 10.0 + f64::from(digit));
            continue;
        }
        if let Some(value) = number.take() {
            tokens.push(Token::Value(value));
        }
        if c.is_ascii_whitespace() {
            continue;
        }
        match c {
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            _ => match Operator::from_symbol(c) {
                Some(op) => tokens.push(Token::Op(op)),
                None => return Err(ExpressionError::UnexpectedCharacter(c)),
            },
        }
    }
    if let Some(value) = number.take() {
        tokens.push(Token::Value(value));
    }
    Ok(tokens)
}

/// Repeatedly evaluates an innermost parenthesized run and splices the
/// numeric result back, until no brackets remain.
fn reduce_parentheses(mut tokens: Vec<Token>) -> Result<Vec<Token>, ExpressionError> {
    loop {
        let mut open_at: Option<usize> = None;
        let mut close_at: Option<usize> = None;
        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Open => open_at = Some(i),
                Token::Close => {
                    close_at = Some(i);
                    break;
                }
                _ => {}
            }
        }
        match (open_at, close_at) {
            (None, None) => return Ok(tokens),
            (Some(open), Some(close)) if open < close => {
                let value = evaluate_flat(&tokens[open + 1..close])?;
                tokens.splice(open..=close, [Token::Value(value)]);
            }
            _ => return Err(ExpressionError::UnbalancedParentheses),
        }
    }
}

/// Evaluates a bracket-free token run: multiplicative chains collapse to
/// a single value as they are read, additive operators apply afterwards.
fn evaluate_flat(tokens: &[Token]) -> Result<f64, ExpressionError> {
    let mut terms: Vec<f64> = Vec::new();
    let mut additive_ops: Vec<Operator> = Vec::new();
    let mut pending: Option<Operator> = None;

    for token in tokens {
        match token {
            Token::Value(value) => match pending.take() {
                None if terms.is_empty() => terms.push(*value),
                None => return Err(ExpressionError::MalformedExpression),
                Some(op) if op.is_multiplicative() => {
                    let last = terms
                        .last_mut()
                        .ok_or(ExpressionError::MalformedExpression)?;
                    *last = op.apply(*last, *value)?;
                }
                Some(op) => {
                    additive_ops.push(op);
                    terms.push(*value);
                }
            },
            Token::Op(op) => {
                if terms.is_empty() || pending.is_some() {
                    return Err(ExpressionError::MalformedExpression);
                }
                pending = Some(*op);
            }
            Token::Open | Token::Close => return Err(ExpressionError::MalformedExpression),
        }
    }
    if pending.is_some() {
        return Err(ExpressionError::MalformedExpression);
    }

    let mut total = *terms.first().ok_or(ExpressionError::MalformedExpression)?;
    for (op, term) in additive_ops.iter().zip(terms.iter().skip(1)) {
        total = op.apply(total, *term)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{is_zero, snap_to_integer};

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(f64::EPSILON / 2.0));
        assert!(!is_zero(f64::EPSILON * 2.0));
        assert!(!is_zero(1.0));
    }

    #[test]
    fn test_snap_to_integer() {
        assert_eq!(snap_to_integer(5.0), 5.0);
        assert_eq!(snap_to_integer(4.999_999_999_999_99), 5.0);
        assert_eq!(snap_to_integer(5.000_000_000_000_01), 5.0);
        assert_eq!(snap_to_integer(5.5), 5.5);
        assert_eq!(snap_to_integer(-3.000_000_000_000_01), -3.0);
    }
}
