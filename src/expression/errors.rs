use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unexpected character in expression: '{0}'")]
    UnexpectedCharacter(char),
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Malformed expression")]
    MalformedExpression,
}
