use std::sync::atomic::{AtomicI32, Ordering};

pub const GLOBAL_VAR_INIT: i32 = 42;

/// Process-wide integer, exported as `global_var` so it can be inspected by
/// name from a debugger. Nothing in the program writes to it.
#[used]
#[export_name = "global_var"]
pub static GLOBAL_VAR: AtomicI32 = AtomicI32::new(GLOBAL_VAR_INIT);

pub fn global_var() -> i32 {
    GLOBAL_VAR.load(Ordering::Relaxed)
}
