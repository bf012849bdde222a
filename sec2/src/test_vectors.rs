//! Test vectors.

pub mod ecdsa;
