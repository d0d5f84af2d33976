//! Text rendering of factorial outcomes for the command line driver.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::factorial::{self, FactorialError};

pub const BANNER: &str = "--- Factorial Calculator ---";

/// One evaluated input, ready to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub n: i32,
    pub outcome: Result<i64, FactorialError>,
}

impl Report {
    pub fn evaluate(n: i32) -> Self {
        Report { n, outcome: factorial::factorial(n) }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "Factorial of {n} ({n}!) is: {value}", n = self.n),
            Err(error) => write!(f, "{error}"),
        }
    }
}

/// Evaluates every input in order and writes the banner followed by one line per input.
pub fn run(inputs: &[i32], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;
    for &n in inputs {
        let report = Report::evaluate(n);
        debug!(?report, "evaluated");
        writeln!(out, "{report}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        assert_eq!(Report::evaluate(5).to_string(), "Factorial of 5 (5!) is: 120");
        assert_eq!(Report::evaluate(0).to_string(), "Factorial of 0 (0!) is: 1");
        assert_eq!(
            Report::evaluate(21).to_string(),
            "Warning: Overflow occurred! Factorial of 21 is too large."
        );
        assert_eq!(
            Report::evaluate(-3).to_string(),
            "Error: Factorial is not defined for negative numbers."
        );
    }

    #[test]
    fn test_run_empty() {
        let mut buf = Vec::new();
        run(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{BANNER}\n\n"));
    }
}
