use num_enum::{FromPrimitive, IntoPrimitive};

use crate::crypto::public_key::PublicKeyAlgorithm;

/// Class octet of a revocation key subpacket.
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum RevocationKeyClass {
    Default = 0x80,
    Sensitive = 0x80 | 0x40,

    #[num_enum(catch_all)]
    Other(u8),
}

/// A key that is authorized to issue revocations for the key carrying
/// this signature.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-5.2.3.15>
#[derive(derive_more::Debug, PartialEq, Eq, Clone)]
pub struct RevocationKey {
    pub class: RevocationKeyClass,
    pub algorithm: PublicKeyAlgorithm,
    #[debug("{}", hex::encode(fingerprint))]
    pub fingerprint: [u8; 20],
}

impl RevocationKey {
    pub fn new(
        class: RevocationKeyClass,
        algorithm: PublicKeyAlgorithm,
        fingerprint: [u8; 20],
    ) -> Self {
        RevocationKey {
            class,
            algorithm,
            fingerprint,
        }
    }
}
