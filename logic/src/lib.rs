#![no_std]

extern crate alloc;

mod base58;
mod error;
mod id;

pub use base58::*;
pub use error::*;
pub use id::*;
