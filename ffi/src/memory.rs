use core::ffi::c_char;
use std::ffi::CString;

/// Hands `encoded` over to the caller as a NUL-terminated string.
pub(crate) fn into_c_string(encoded: String) -> *mut c_char {
    // base58 output never contains NUL
    match CString::new(encoded) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => core::ptr::null_mut(),
    }
}

/// Hands `bytes` over to the caller; `b58_free_bytes` gets the length back.
pub(crate) fn into_raw_bytes(bytes: Vec<u8>) -> *mut u8 {
    Box::into_raw(bytes.into_boxed_slice()) as *mut u8
}

/// Releases a string returned by `b58_encode`. Null is ignored.
///
/// # Safety
///
/// `s` must come from `b58_encode` and must not be used or freed again.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b58_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(s) });
}

/// Releases a buffer returned by `b58_decode`. Null is ignored.
///
/// # Safety
///
/// `ptr` and `len` must be exactly what `b58_decode` returned, and the
/// buffer must not be used or freed again.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b58_free_bytes(ptr: *mut u8, len: usize) {
    if ptr.is_null() {
        return;
    }
    let slice = core::ptr::slice_from_raw_parts_mut(ptr, len);
    drop(unsafe { Box::from_raw(slice) });
}
