use crate::interpreter::error::EvalError;
use crate::interpreter::token::TokenKind;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

impl UnaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<UnaryOperator> {
        match kind {
            TokenKind::Minus => Some(UnaryOperator::Negate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
        }
    }

    /// The localized name shown when rendering a tree.
    pub fn display_name(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "negativo",
        }
    }

    pub(crate) fn associativity(&self) -> Associativity {
        Associativity::Right
    }

    /// Binds tighter than every binary operator.
    pub(crate) fn precedence(&self) -> u8 {
        2
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
        }
    }
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }

    /// The localized name shown when rendering a tree.
    pub fn display_name(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "suma",
            BinaryOperator::Subtract => "resta",
            BinaryOperator::Multiply => "multiplicación",
            BinaryOperator::Divide => "división",
        }
    }

    pub(crate) fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Applies the operator to finite operands. A result outside the `f64` range is an error.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EvalError> {
        let result = match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide if b == 0.0 => {
                return Err(EvalError::DivisionByZero { dividend: a })
            }
            BinaryOperator::Divide => a / b,
        };
        if !result.is_finite() {
            return Err(EvalError::Overflow {
                left: a,
                operator: self.symbol(),
                right: b,
            });
        }
        Ok(result)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Add;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn negation_binds_tighter_than_every_binary_operator() {
        let binary_operators = [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ];
        assert!(binary_operators
            .iter()
            .all(|operator| UnaryOperator::Negate.precedence() > operator.precedence()))
    }

    #[test]
    fn minus_token_maps_to_both_subtraction_and_negation() {
        assert_eq!(
            BinaryOperator::from_token(TokenKind::Minus),
            Some(BinaryOperator::Subtract)
        );
        assert_eq!(
            UnaryOperator::from_token(TokenKind::Minus),
            Some(UnaryOperator::Negate)
        );
        assert_eq!(UnaryOperator::from_token(TokenKind::Plus), None);
    }

    #[test]
    fn divide_by_zero_returns_error() {
        let result = BinaryOperator::Divide.evaluate(5.0, 0.0);
        assert_eq!(result, Err(EvalError::DivisionByZero { dividend: 5.0 }))
    }

    #[test]
    fn divide_by_negative_zero_returns_error() {
        assert!(BinaryOperator::Divide.evaluate(1.0, -0.0).is_err())
    }

    #[test]
    fn result_beyond_f64_range_returns_error() {
        let error = BinaryOperator::Multiply.evaluate(1e300, 1e10).unwrap_err();

        assert_eq!(
            error,
            EvalError::Overflow {
                left: 1e300,
                operator: "*",
                right: 1e10
            }
        );
    }

    #[test]
    fn large_finite_result_is_returned() {
        let result = BinaryOperator::Add.evaluate(1e308, 1e307).unwrap();

        assert!(result.is_finite());
    }

    #[test]
    fn display_names_are_localized() {
        assert_eq!(BinaryOperator::Multiply.display_name(), "multiplicación");
        assert_eq!(UnaryOperator::Negate.display_name(), "negativo");
    }
}
