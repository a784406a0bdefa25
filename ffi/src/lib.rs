//! C ABI over the Base58 codec.
//!
//! Every pointer handed out by this library is owned by the caller and must
//! be released with the matching free function: strings from [`b58_encode`]
//! with [`b58_free_string`], buffers from [`b58_decode`] with
//! [`b58_free_bytes`].

mod decode;
mod encode;
mod memory;

pub use decode::*;
pub use encode::*;
pub use memory::*;
