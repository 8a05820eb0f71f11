//! Cryptographic identifiers and thin adapters over the primitive crates.
//!
//! The signing engine never talks to a primitive directly, key material and
//! the matching sign/verify operations sit behind
//! [`PublicKeyTrait`]/[`SecretKeyTrait`](crate::types::SecretKeyTrait).
//! The adapters in here are the building blocks for implementations of those
//! traits.
//!
//! [`PublicKeyTrait`]: crate::types::PublicKeyTrait

pub mod dsa;
pub mod eddsa;
pub mod hash;
pub mod public_key;
pub mod rsa;
pub mod sym;
