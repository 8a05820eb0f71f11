//! # OpenPGP packet framework and signature subsystem
//!
//! Parsing and serializing of the binary OpenPGP packet format, together
//! with creation and verification of signatures over arbitrary input data
//! and key/identity material.
//!
//! The asymmetric primitives and key packets themselves are consumed
//! through the [`types::PublicKeyTrait`]/[`types::SecretKeyTrait`] seams;
//! thin adapters over the RustCrypto implementations live in [`crypto`].
//!
//! ```rust
//! use opgp::crypto::hash::HashAlgorithm;
//! use opgp::crypto::public_key::PublicKeyAlgorithm;
//! use opgp::packet::{SignatureConfig, SignatureType};
//! # use opgp::errors::Result;
//!
//! # fn sign_and_verify(
//! #     signing_key: &impl opgp::types::SecretKeyTrait,
//! #     verification_key: &impl opgp::types::PublicKeyTrait,
//! # ) -> Result<()> {
//! const DATA: &[u8] = b"Hello World";
//!
//! let sig_cfg = SignatureConfig::v4(
//!     SignatureType::Binary,
//!     PublicKeyAlgorithm::RSA,
//!     HashAlgorithm::Sha256,
//! );
//!
//! let signature = sig_cfg.sign(signing_key, String::new, DATA)?;
//! signature.verify(verification_key, DATA)?;
//! # Ok(())
//! # }
//! ```

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

#[macro_use]
pub mod errors;

pub mod crypto;
pub mod normalize_lines;
pub mod packet;
pub mod parsing;
pub mod ser;
pub mod types;
