use bytes::{Buf, Bytes};

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::public_key::PublicKeyAlgorithm;
use crate::errors::{Error, Result};
use crate::packet::signature::config::SignatureConfig;
use crate::packet::signature::subpacket::{dt_from_timestamp, parse_subpacket_area};
use crate::packet::signature::types::{Signature, SignatureType, SignatureVersion};
use crate::parsing::BufParsing;
use crate::types::{KeyId, Mpi, PacketHeaderVersion};

impl Signature {
    /// Parses a `Signature` packet body.
    ///
    /// Ref: <https://tools.ietf.org/html/rfc4880.html#section-5.2>
    pub fn from_buf(packet_version: PacketHeaderVersion, mut i: Bytes) -> Result<Self> {
        let version = SignatureVersion::from(i.read_u8()?);

        match version {
            SignatureVersion::V2 | SignatureVersion::V3 => parse_v3(packet_version, version, i),
            SignatureVersion::V4 => parse_v4(packet_version, i),
            SignatureVersion::Other(version) => {
                unsupported_err!("signature version {}", version)
            }
        }
    }
}

/// Parse a v2 or v3 signature packet body (the version octet already read).
///
/// Ref: <https://tools.ietf.org/html/rfc4880.html#section-5.2.2>
fn parse_v3<B: Buf>(
    packet_version: PacketHeaderVersion,
    version: SignatureVersion,
    mut i: B,
) -> Result<Signature> {
    // One-octet length of following hashed material. MUST be 5.
    let hashed_len = i.read_u8()?;
    ensure_eq!(hashed_len, 5, "invalid hashed material length");

    // One-octet signature type.
    let typ = SignatureType::from(i.read_u8()?);
    // Four-octet creation time.
    let created = dt_from_timestamp(i.read_be_u32()?)?;
    // Eight-octet Key ID of signer.
    let issuer = KeyId::from(i.read_array::<8>()?);
    // One-octet public-key algorithm.
    let pub_alg = PublicKeyAlgorithm::from(i.read_u8()?);
    // One-octet hash algorithm.
    let hash_alg = HashAlgorithm::from(i.read_u8()?);
    // Two-octet field holding left 16 bits of signed hash value.
    let signed_hash_value = i.read_array::<2>()?;
    // One or more multiprecision integers comprising the signature.
    let signature = read_signature_mpis(i, pub_alg)?;

    Ok(Signature::v3(
        packet_version,
        version,
        typ,
        pub_alg,
        hash_alg,
        created,
        issuer,
        signed_hash_value,
        signature,
    ))
}

/// Parse a v4 signature packet body (the version octet already read).
///
/// Ref: <https://tools.ietf.org/html/rfc4880.html#section-5.2.3>
fn parse_v4(packet_version: PacketHeaderVersion, mut i: Bytes) -> Result<Signature> {
    // One-octet signature type.
    let typ = SignatureType::from(i.read_u8()?);
    // One-octet public-key algorithm.
    let pub_alg = PublicKeyAlgorithm::from(i.read_u8()?);
    // One-octet hash algorithm.
    let hash_alg = HashAlgorithm::from(i.read_u8()?);

    // Two-octet scalar octet count for following hashed subpacket data.
    let hashed_len = i.read_be_u16()?;
    // Hashed subpacket data set (zero or more subpackets).
    // The raw bytes are kept, verification replays them.
    let hashed_area = i.read_take(hashed_len.into())?;
    let hashed_subpackets = parse_subpacket_area(hashed_area.clone())?;

    // Two-octet scalar octet count for the following unhashed subpacket data.
    let unhashed_len = i.read_be_u16()?;
    // Unhashed subpacket data set (zero or more subpackets).
    let unhashed_area = i.read_take(unhashed_len.into())?;
    let unhashed_subpackets = parse_subpacket_area(unhashed_area)?;

    // Two-octet field holding the left 16 bits of the signed hash value.
    let signed_hash_value = i.read_array::<2>()?;
    // One or more multiprecision integers comprising the signature.
    let signature = read_signature_mpis(i, pub_alg)?;

    let config = SignatureConfig {
        version: SignatureVersion::V4,
        typ,
        pub_alg,
        hash_alg,
        hashed_subpackets,
        unhashed_subpackets,
        created: None,
        issuer: None,
        hashed_area_raw: Some(hashed_area),
    };

    Ok(Signature::from_config(
        packet_version,
        config,
        signed_hash_value,
        signature,
    ))
}

/// Reads the algorithm-dependent sequence of signature MPIs.
fn read_signature_mpis<B: Buf>(mut i: B, alg: PublicKeyAlgorithm) -> Result<Vec<Mpi>> {
    let count = alg
        .signature_mpi_count()
        .ok_or(Error::UnsupportedAlgorithm { alg: alg.into() })?;

    (0..count).map(|_| Mpi::from_buf(&mut i)).collect()
}
