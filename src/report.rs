use std::io::{self, Write};

use anyhow::{Context, Result};

pub const RESULT_PREFIX: &str = "Result: ";

/// Writes a single `Result: <value>` line. Write failures are returned to the
/// caller rather than ignored.
pub fn write_result<W: Write>(out: &mut W, value: i32) -> Result<()> {
    writeln!(out, "{}{}", RESULT_PREFIX, value)
        .with_context(|| format!("Failed to write result {}", value))
}

// Unmangled so `break print_result` resolves by name, like `add` and `multiply`.
#[no_mangle]
#[inline(never)]
pub fn print_result(value: i32) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, value)?;
    handle.flush().context("Failed to flush stdout")
}
