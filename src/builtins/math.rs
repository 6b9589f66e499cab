//! Arithmetic builtins: `+ - * / % ^`
//!
//! One parameterized builtin covers all six operators: every operand is
//! type-checked up front, then the operator left-folds from the first
//! argument. `-` with a single operand negates it.

use crate::error::{Error, Result};
use crate::runtime::{Environment, Value};

use super::Builtin;

/// Registers the arithmetic builtins
pub fn register(env: &mut Environment) {
    for op in [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Mod, Op::Pow] {
        super::register(env, ArithmeticFn::new(op));
    }
}

/// Arithmetic operator identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%` (operands truncated to integers)
    Mod,
    /// `^` (operands truncated to integers)
    Pow,
}

impl Op {
    /// The symbol the operator is bound to
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Mod => "%",
            Op::Pow => "^",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Op::Add => "Addition",
            Op::Sub => "Subtraction and negation",
            Op::Mul => "Multiplication",
            Op::Div => "Division",
            Op::Mod => "Integer modulo",
            Op::Pow => "Integer exponentiation",
        }
    }

    /// Applies the operator to one fold step
    fn apply(self, x: f64, y: f64) -> Result<f64> {
        match self {
            Op::Add => Ok(x + y),
            Op::Sub => Ok(x - y),
            Op::Mul => Ok(x * y),
            Op::Div => {
                if y == 0.0 {
                    Err(Error::DivisionByZero)
                } else {
                    Ok(x / y)
                }
            }
            // Modulo truncates both operands toward zero first; a divisor
            // that truncates to zero is division by zero
            Op::Mod => {
                let (a, b) = (x.trunc() as i64, y.trunc() as i64);
                if b == 0 {
                    Err(Error::DivisionByZero)
                } else {
                    Ok((a % b) as f64)
                }
            }
            // Exponentiation also truncates its operands; the result is
            // stored back as a double
            Op::Pow => Ok(x.trunc().powf(y.trunc())),
        }
    }
}

/// Left-fold arithmetic over numeric arguments
pub struct ArithmeticFn {
    op: Op,
}

impl ArithmeticFn {
    /// Creates the builtin for one operator
    pub fn new(op: Op) -> Self {
        ArithmeticFn { op }
    }
}

impl Builtin for ArithmeticFn {
    fn name(&self) -> &str {
        self.op.symbol()
    }

    fn description(&self) -> &str {
        self.op.describe()
    }

    fn call(&self, _env: &mut Environment, args: Vec<Value>) -> Result<Value> {
        // Every operand must be numeric before any arithmetic happens
        let mut numbers = Vec::with_capacity(args.len());
        for (index, arg) in args.iter().enumerate() {
            match arg {
                Value::Number(n) => numbers.push(*n),
                other => {
                    return Err(Error::WrongArgType {
                        function: self.op.symbol().to_string(),
                        index,
                        expected: "Number".to_string(),
                        got: other.type_name().to_string(),
                    })
                }
            }
        }

        let mut operands = numbers.into_iter();
        let Some(first) = operands.next() else {
            return Err(Error::WrongArgCount {
                function: self.op.symbol().to_string(),
                expected: 1,
                got: 0,
            });
        };

        let mut operands = operands.peekable();
        if self.op == Op::Sub && operands.peek().is_none() {
            return Ok(Value::Number(-first));
        }

        let mut acc = first;
        for y in operands {
            acc = self.op.apply(acc, y)?;
        }

        Ok(Value::Number(acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: Op, ns: &[f64]) -> Result<Value> {
        let mut env = Environment::new();
        let args = ns.iter().copied().map(Value::Number).collect();
        ArithmeticFn::new(op).call(&mut env, args)
    }

    #[test]
    fn test_left_fold_reduction() {
        assert_eq!(apply(Op::Add, &[1.0, 2.0, 3.0]).unwrap(), Value::Number(6.0));
        assert_eq!(
            apply(Op::Sub, &[10.0, 3.0, 2.0]).unwrap(),
            Value::Number(5.0)
        );
        assert_eq!(apply(Op::Mul, &[2.0, 3.0, 4.0]).unwrap(), Value::Number(24.0));
        assert_eq!(apply(Op::Div, &[24.0, 3.0, 2.0]).unwrap(), Value::Number(4.0));
    }

    #[test]
    fn test_unary_minus_negates() {
        assert_eq!(apply(Op::Sub, &[5.0]).unwrap(), Value::Number(-5.0));
        assert_eq!(apply(Op::Sub, &[-2.5]).unwrap(), Value::Number(2.5));
    }

    #[test]
    fn test_single_operand_passes_through_for_other_ops() {
        assert_eq!(apply(Op::Add, &[5.0]).unwrap(), Value::Number(5.0));
        assert_eq!(apply(Op::Div, &[5.0]).unwrap(), Value::Number(5.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(apply(Op::Div, &[10.0, 0.0]).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_modulo_truncates_operands() {
        assert_eq!(apply(Op::Mod, &[17.0, 5.0]).unwrap(), Value::Number(2.0));
        // 7.9 % 3.9 operates on 7 % 3
        assert_eq!(apply(Op::Mod, &[7.9, 3.9]).unwrap(), Value::Number(1.0));
        assert_eq!(apply(Op::Mod, &[-7.0, 3.0]).unwrap(), Value::Number(-1.0));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(apply(Op::Mod, &[5.0, 0.0]).unwrap_err(), Error::DivisionByZero);
        // A divisor under one truncates to zero
        assert_eq!(apply(Op::Mod, &[5.0, 0.4]).unwrap_err(), Error::DivisionByZero);
    }

    #[test]
    fn test_exponent_truncates_operands() {
        assert_eq!(apply(Op::Pow, &[2.0, 10.0]).unwrap(), Value::Number(1024.0));
        // 2.7 ^ 3.9 operates on 2 ^ 3
        assert_eq!(apply(Op::Pow, &[2.7, 3.9]).unwrap(), Value::Number(8.0));
    }

    #[test]
    fn test_non_number_operand_is_rejected_by_position() {
        let mut env = Environment::new();
        let err = ArithmeticFn::new(Op::Add)
            .call(
                &mut env,
                vec![
                    Value::Number(1.0),
                    Value::qexpr(vec![]),
                    Value::Number(2.0),
                ],
            )
            .unwrap_err();

        assert_eq!(
            err,
            Error::WrongArgType {
                function: "+".to_string(),
                index: 1,
                expected: "Number".to_string(),
                got: "Q-Expression".to_string(),
            }
        );
    }

    #[test]
    fn test_no_partial_result_after_zero_division() {
        // The fold is abandoned at the failing step
        assert_eq!(
            apply(Op::Div, &[8.0, 2.0, 0.0, 4.0]).unwrap_err(),
            Error::DivisionByZero
        );
    }
}
