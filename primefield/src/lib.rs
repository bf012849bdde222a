#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_qualifications
)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "std")]
extern crate std;

pub mod encoding;

mod error;
mod monty;

pub use crate::{
    error::{Error, Result},
    monty::{FieldElement, MontyField},
};
pub use bigint::{self, U256, Word};
pub use subtle;
pub use zeroize;

/// Number of limbs in the integers backing every field.
pub const LIMBS: usize = U256::LIMBS;

/// Largest supported modulus width in bits.
pub const MAX_BITS: u32 = U256::BITS;

/// Largest supported modulus width in bytes.
pub const MAX_BYTES: usize = U256::BYTES;
