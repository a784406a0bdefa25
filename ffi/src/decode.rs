use core::ffi::{CStr, c_char};

use crate::memory::into_raw_bytes;

/// Decodes a NUL-terminated Base58 string into an owned byte buffer.
///
/// On success the buffer length is written to `out_len`. On failure (null
/// pointers, non-UTF-8 text or a character outside the alphabet) null is
/// returned and `out_len`, when given, is set to zero.
///
/// # Safety
///
/// `text` must be a valid NUL-terminated string and `out_len` must be
/// writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn b58_decode(text: *const c_char, out_len: *mut usize) -> *mut u8 {
    if out_len.is_null() {
        return core::ptr::null_mut();
    }
    unsafe { *out_len = 0 };

    if text.is_null() {
        return core::ptr::null_mut();
    }

    let text = unsafe { CStr::from_ptr(text) };
    let Ok(text) = text.to_str() else {
        return core::ptr::null_mut();
    };

    match logic::decode(text) {
        Ok(bytes) => {
            let len = bytes.len();
            let ptr = into_raw_bytes(bytes);
            unsafe { *out_len = len };
            ptr
        }
        Err(_) => core::ptr::null_mut(),
    }
}
