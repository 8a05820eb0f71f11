use std::fmt;

use bytes::Bytes;

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::public_key::PublicKeyAlgorithm;
use crate::errors::Result;
use crate::types::{Fingerprint, KeyId, KeyVersion, Mpi};

/// The public half of a key, as the signature subsystem sees it.
///
/// Key packets themselves live outside this crate. Implementations hand the
/// signing engine the serialized key packet body via [`hashable_body`], the
/// engine adds the `0x99`-framed length prefix when it feeds key material
/// into a hash.
///
/// [`hashable_body`]: PublicKeyTrait::hashable_body
pub trait PublicKeyTrait: fmt::Debug {
    fn version(&self) -> KeyVersion;

    fn algorithm(&self) -> PublicKeyAlgorithm;

    fn key_id(&self) -> KeyId;

    fn fingerprint(&self) -> Fingerprint;

    /// The serialized public key packet body, as used for fingerprint
    /// derivation and signature hashing. Without any framing.
    fn hashable_body(&self) -> Result<Bytes>;

    /// Verify a signed message.
    /// Data will be hashed using `hash`, before verifying.
    fn verify_signature(&self, hash: HashAlgorithm, data: &[u8], sig: &[Mpi]) -> Result<()>;
}

impl<T: PublicKeyTrait> PublicKeyTrait for &T {
    fn version(&self) -> KeyVersion {
        (*self).version()
    }

    fn algorithm(&self) -> PublicKeyAlgorithm {
        (*self).algorithm()
    }

    fn key_id(&self) -> KeyId {
        (*self).key_id()
    }

    fn fingerprint(&self) -> Fingerprint {
        (*self).fingerprint()
    }

    fn hashable_body(&self) -> Result<Bytes> {
        (*self).hashable_body()
    }

    fn verify_signature(&self, hash: HashAlgorithm, data: &[u8], sig: &[Mpi]) -> Result<()> {
        (*self).verify_signature(hash, data, sig)
    }
}

/// A key holding (possibly locked) private material.
pub trait SecretKeyTrait: PublicKeyTrait {
    /// Produce the signature MPIs over the given digest.
    ///
    /// `key_pw` is only invoked when the private material is locked;
    /// implementations surface [`Error::WrongPassphrase`] when unlocking
    /// fails and [`Error::KeyMaterialMissing`] when they hold no private
    /// material for the declared algorithm.
    ///
    /// [`Error::WrongPassphrase`]: crate::errors::Error::WrongPassphrase
    /// [`Error::KeyMaterialMissing`]: crate::errors::Error::KeyMaterialMissing
    fn create_signature<F>(&self, key_pw: F, hash: HashAlgorithm, data: &[u8]) -> Result<Vec<Mpi>>
    where
        F: FnOnce() -> String;
}
