use num_enum::{FromPrimitive, IntoPrimitive};

/// Available public key algorithms.
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-9.1>
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive, IntoPrimitive, Hash)]
#[repr(u8)]
pub enum PublicKeyAlgorithm {
    /// RSA (Encrypt and Sign)
    RSA = 1,
    /// DEPRECATED: RSA (Encrypt-Only)
    RSAEncrypt = 2,
    /// DEPRECATED: RSA (Sign-Only)
    RSASign = 3,
    /// Elgamal (Sign-Only)
    ElgamalSign = 16,
    /// DSA (Digital Signature Algorithm)
    DSA = 17,
    /// Elliptic Curve: RFC-6637
    ECDH = 18,
    /// ECDSA: RFC-6637
    ECDSA = 19,
    /// DEPRECATED: Elgamal (Encrypt and Sign)
    Elgamal = 20,
    /// Reserved for Diffie-Hellman (X9.42, as defined for IETF-S/MIME)
    DiffieHellman = 21,
    /// EdDSA with the legacy key format
    EdDSALegacy = 22,

    /// Private experimental range (from OpenPGP)
    Private100 = 100,
    Private101 = 101,
    Private102 = 102,
    Private103 = 103,
    Private104 = 104,
    Private105 = 105,
    Private106 = 106,
    Private107 = 107,
    Private108 = 108,
    Private109 = 109,
    Private110 = 110,

    #[num_enum(catch_all)]
    Unknown(u8),
}

impl PublicKeyAlgorithm {
    /// Can this algorithm produce signatures?
    pub const fn can_sign(self) -> bool {
        matches!(
            self,
            Self::RSA
                | Self::RSASign
                | Self::ElgamalSign
                | Self::DSA
                | Self::ECDSA
                | Self::EdDSALegacy
        )
    }

    /// Can this algorithm encrypt data?
    pub const fn can_encrypt(self) -> bool {
        matches!(
            self,
            Self::RSA | Self::RSAEncrypt | Self::ECDH | Self::Elgamal | Self::DiffieHellman
        )
    }

    /// How many MPIs make up a signature value of this algorithm.
    ///
    /// Returns `None` for identifiers that have no known signature shape.
    pub const fn signature_mpi_count(self) -> Option<usize> {
        match self {
            Self::RSA | Self::RSAEncrypt | Self::RSASign => Some(1),
            Self::DSA | Self::ECDSA | Self::EdDSALegacy => Some(2),
            Self::Elgamal | Self::ElgamalSign => Some(2),
            Self::Private100
            | Self::Private101
            | Self::Private102
            | Self::Private103
            | Self::Private104
            | Self::Private105
            | Self::Private106
            | Self::Private107
            | Self::Private108
            | Self::Private109
            | Self::Private110 => Some(1),
            Self::ECDH | Self::DiffieHellman | Self::Unknown(_) => None,
        }
    }
}
