use log::trace;

// Both functions wrap on overflow in every profile. They stay unmangled and
// out-of-line so `break add` / `break multiply` resolve in a debugger.

#[no_mangle]
#[inline(never)]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    let result = a.wrapping_add(b);
    trace!("add({}, {}) = {}", a, b, result);
    result
}

#[no_mangle]
#[inline(never)]
pub extern "C" fn multiply(a: i32, b: i32) -> i32 {
    let result = a.wrapping_mul(b);
    trace!("multiply({}, {}) = {}", a, b, result);
    result
}
