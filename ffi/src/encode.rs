use core::ffi::{c_char, c_int};

use crate::memory::into_c_string;

/// Encodes `len` bytes at `bytes` and returns an owned NUL-terminated string.
///
/// Returns null when `len` is negative or `bytes` is null with a non-zero length.
///
/// # Safety
///
/// `bytes` must point to `len` readable bytes unless `len` is zero.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b58_encode(bytes: *const u8, len: c_int) -> *mut c_char {
    let Ok(len) = usize::try_from(len) else {
        return core::ptr::null_mut();
    };

    let input: &[u8] = if len == 0 {
        &[]
    } else if bytes.is_null() {
        return core::ptr::null_mut();
    } else {
        unsafe { core::slice::from_raw_parts(bytes, len) }
    };

    into_c_string(logic::encode(input))
}
