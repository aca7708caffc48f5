//! Four-operation integer calculator and the demo that prints a sample
//! computation with it.

pub mod error {
    use thiserror::Error;

    /// Errors returned by calculator operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
    pub enum CalcError {
        #[error("division by zero")]
        DivisionByZero,
    }
}

pub mod calculator {
    use tracing::debug;

    use crate::error::CalcError;

    /// Integer input to every calculator operation.
    pub type Operand = i64;

    /// Stateless calculator over two integer operands.
    ///
    /// Addition, subtraction and multiplication wrap on overflow, so they
    /// are total over the whole `i64` range.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Calculator;

    impl Calculator {
        pub fn new() -> Self {
            Calculator
        }

        /// Adds two numbers.
        pub fn add(&self, a: Operand, b: Operand) -> Operand {
            debug!(a, b, "add");
            a.wrapping_add(b)
        }

        /// Subtracts `b` from `a`.
        pub fn subtract(&self, a: Operand, b: Operand) -> Operand {
            debug!(a, b, "subtract");
            a.wrapping_sub(b)
        }

        /// Multiplies two numbers.
        pub fn multiply(&self, a: Operand, b: Operand) -> Operand {
            debug!(a, b, "multiply");
            a.wrapping_mul(b)
        }

        /// Divides `a` by `b` as floating point.
        ///
        /// Fails with [`CalcError::DivisionByZero`] when `b` is zero.
        pub fn divide(&self, a: Operand, b: Operand) -> Result<f64, CalcError> {
            if b == 0 {
                debug!(a, "refusing to divide by zero");
                return Err(CalcError::DivisionByZero);
            }
            debug!(a, b, "divide");
            Ok(a as f64 / b as f64)
        }
    }
}

pub mod demo {
    use std::io::Write;

    use anyhow::{Context, Result};
    use tracing::info;

    use crate::calculator::Calculator;

    pub const LAUNCH_BANNER: &str = "🚀 Launching calculator demo";
    pub const SUCCESS_BANNER: &str = "✅ Calculator demo finished successfully!";

    /// What the demo prints besides the addition.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct DemoOptions {
        /// Also print the result of `10 / 2`.
        pub with_division: bool,
    }

    /// Runs the demo, writing the banner and result lines to `out`.
    pub fn run<W: Write>(out: &mut W, options: DemoOptions) -> Result<()> {
        info!(?options, "starting demo");
        let calculator = Calculator::new();

        writeln!(out, "{}", LAUNCH_BANNER).context("failed to write launch banner")?;

        let sum = calculator.add(5, 3);
        writeln!(out, "Result of addition 5 + 3 = {}", sum)
            .context("failed to write addition result")?;

        if options.with_division {
            let line = match calculator.divide(10, 2) {
                Ok(quotient) => format!("Result of division 10 / 2 = {}", quotient),
                Err(e) => format!("Error: {}", e),
            };
            writeln!(out, "{}", line).context("failed to write division result")?;
        }

        writeln!(out, "{}", SUCCESS_BANNER).context("failed to write success banner")?;
        out.flush().context("failed to flush output")?;

        info!("demo finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::calculator::Calculator;
    use super::demo::{self, DemoOptions};
    use super::error::CalcError;

    #[test]
    fn test_add() {
        assert_eq!(Calculator::new().add(5, 3), 8);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Calculator::new().subtract(5, 3), 2);
    }

    #[test]
    fn test_default_is_new() {
        assert_eq!(Calculator::default(), Calculator::new());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[traced_test]
    #[test]
    fn test_divide_by_zero_is_logged() {
        assert_eq!(
            Calculator::new().divide(7, 0),
            Err(CalcError::DivisionByZero)
        );
        assert!(logs_contain("refusing to divide by zero"));
    }

    #[traced_test]
    #[test]
    fn test_demo_logs_start_and_finish() {
        let mut out = Vec::new();
        demo::run(&mut out, DemoOptions::default()).unwrap();
        assert!(logs_contain("starting demo"));
        assert!(logs_contain("demo finished"));
    }
}
