#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "std")]
extern crate std;

pub mod ecdsa;
pub mod keygen;
pub mod registry;

mod error;
mod params;
mod session;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    ecdsa::Signature,
    error::{Error, Result},
    keygen::SecretScalar,
    params::CurveParameters,
    session::Session,
};
pub use primefield;
pub use primeorder;
