/// Calculator evaluator
/// Strictly left to right, no precedence: `2 + 3 * 4` is `(2 + 3) * 4`.
///
/// Reading rules:
/// - a leading number starts the accumulator; if there is none the result
///   is 0 and nothing else is read
/// - then repeatedly: one operator (the next non-whitespace character,
///   whatever it is) and one number
/// - the first pair whose number cannot be read ends the expression; the
///   rest of the input is ignored

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Result<Self, EvalError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(EvalError::UnsupportedOperator),
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

/// One `(operator, operand)` pair; the symbol is checked when applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub symbol: char,
    pub operand: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub leading: f64,
    pub terms: Vec<Term>,
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn symbol(&mut self) -> Option<char> {
        self.skip_whitespace();
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    /// Decimal literal at the front: `[+-]digits[.digits][e[+-]digits]`.
    /// An `e` with no exponent digits makes the whole literal unreadable.
    fn number(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let bytes = self.rest.as_bytes();
        let digits_from = |mut i: usize| {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            i
        };

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end = 1;
        }
        let int_end = digits_from(end);
        let mut mantissa_digits = int_end - end;
        end = int_end;

        if bytes.get(end) == Some(&b'.') {
            let frac_end = digits_from(end + 1);
            mantissa_digits += frac_end - end - 1;
            end = frac_end;
        }
        if mantissa_digits == 0 {
            return None;
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp = end + 1;
            if matches!(bytes.get(exp), Some(b'+' | b'-')) {
                exp += 1;
            }
            let exp_end = digits_from(exp);
            if exp_end == exp {
                return None;
            }
            end = exp_end;
        }

        let value = self.rest[..end].parse::<f64>().ok()?;
        self.rest = &self.rest[end..];
        Some(value)
    }
}

/// Read `input` into an expression. Never fails; see the module rules.
pub fn parse(input: &str) -> Expression {
    let mut scanner = Scanner { rest: input };
    let Some(leading) = scanner.number() else {
        return Expression {
            leading: 0.0,
            terms: Vec::new(),
        };
    };

    let mut terms = Vec::new();
    while let Some(symbol) = scanner.symbol() {
        let Some(operand) = scanner.number() else {
            break;
        };
        terms.push(Term { symbol, operand });
    }

    Expression { leading, terms }
}

impl Expression {
    /// Fold the terms left to right, stopping at the first error
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.terms.iter().try_fold(self.leading, |acc, term| {
            Operator::from_symbol(term.symbol)?.apply(acc, term.operand)
        })
    }
}

pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    parse(input).evaluate()
}

/// The calculator log line for `input`: `"<input> = <result>"` on success,
/// the error message otherwise
pub fn evaluate_line(input: &str) -> Result<String, EvalError> {
    evaluate(input).map(|value| format!("{} = {:.2}", input, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_operator_precedence() {
        assert_eq!(evaluate_line("2 + 3 * 4").unwrap(), "2 + 3 * 4 = 20.00");
        assert_eq!(evaluate("10 - 4 / 2").unwrap(), 3.0);
    }

    #[test]
    fn division_by_zero_halts() {
        assert_eq!(evaluate("10 / 0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("10 / 0.0 + 1"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1 / -0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unsupported_operator_halts() {
        assert_eq!(evaluate("5 & 2"), Err(EvalError::UnsupportedOperator));
        assert_eq!(evaluate("5 & 2 / 0"), Err(EvalError::UnsupportedOperator));
        assert_eq!(evaluate("5 / 0 & 2"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unreadable_leading_number_is_zero() {
        assert_eq!(evaluate_line("abc + 2").unwrap(), "abc + 2 = 0.00");
        assert_eq!(evaluate_line("").unwrap(), " = 0.00");
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(evaluate("7 + 1 xyz").unwrap(), 8.0);
        assert_eq!(evaluate("5 &").unwrap(), 5.0);
        assert_eq!(evaluate("5 + ").unwrap(), 5.0);
        assert_eq!(evaluate("3 * 2 + x 4").unwrap(), 6.0);
    }

    #[test]
    fn signed_and_fractional_operands() {
        assert_eq!(evaluate("5--3").unwrap(), 8.0);
        assert_eq!(evaluate("2*-1.5").unwrap(), -3.0);
        assert_eq!(evaluate("-.5 + 1e1").unwrap(), 9.5);
        assert_eq!(evaluate_line("1 / 3").unwrap(), "1 / 3 = 0.33");
    }

    #[test]
    fn dangling_exponent_is_unreadable() {
        assert_eq!(evaluate_line("1e + 2").unwrap(), "1e + 2 = 0.00");
        assert_eq!(evaluate("2 + 1e").unwrap(), 2.0);
        assert_eq!(evaluate("2 + 1e- 3").unwrap(), 2.0);
        assert_eq!(evaluate("2 * 1E+1").unwrap(), 20.0);
    }

    #[test]
    fn operator_is_any_next_character() {
        assert_eq!(
            parse("2 34").terms,
            vec![Term {
                symbol: '3',
                operand: 4.0
            }]
        );
        assert_eq!(evaluate("2 34"), Err(EvalError::UnsupportedOperator));
    }

    #[test]
    fn error_messages() {
        assert_eq!(EvalError::DivisionByZero.to_string(), "Error: division by zero");
        assert_eq!(EvalError::UnsupportedOperator.to_string(), "Error: unsupported operation");
    }
}
