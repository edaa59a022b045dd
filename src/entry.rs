use std::io::Write;

use anyhow::Result;
use log::debug;

use crate::arith::{add, multiply};
use crate::report::{print_result, write_result};

pub const FIXTURE_X: i32 = 10;
pub const FIXTURE_Y: i32 = 20;

/// Sum and product of the fixture inputs, in that order.
pub fn compute() -> (i32, i32) {
    let x = FIXTURE_X;
    let y = FIXTURE_Y;
    let sum = add(x, y);
    let product = multiply(x, y);
    debug!("x={} y={} sum={} product={}", x, y, sum, product);
    (sum, product)
}

/// The program's entry sequence: report the sum, then the product, on stdout.
pub fn run() -> Result<()> {
    let (sum, product) = compute();
    print_result(sum)?;
    print_result(product)?;
    Ok(())
}

/// Same sequence as `run`, written to an arbitrary sink.
pub fn run_to<W: Write>(out: &mut W) -> Result<()> {
    let (sum, product) = compute();
    write_result(out, sum)?;
    write_result(out, product)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globals::global_var;

    #[test]
    fn computes_sum_and_product() {
        assert_eq!(compute(), (30, 200));
    }

    #[test]
    fn writes_sum_then_product() -> Result<()> {
        let mut buf = Vec::new();
        run_to(&mut buf)?;
        assert_eq!(String::from_utf8(buf)?, "Result: 30\nResult: 200\n");
        Ok(())
    }

    #[test]
    fn leaves_global_untouched() -> Result<()> {
        assert_eq!(global_var(), 42);
        run_to(&mut std::io::sink())?;
        assert_eq!(global_var(), 42);
        Ok(())
    }
}
