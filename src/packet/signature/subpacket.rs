use byteorder::{BigEndian, WriteBytesExt};
use bytes::{Buf, Bytes};
use chrono::{DateTime, Duration, TimeZone, Utc};
use smallvec::SmallVec;

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::public_key::PublicKeyAlgorithm;
use crate::crypto::sym::SymmetricKeyAlgorithm;
use crate::errors::{Error, Result};
use crate::parsing::BufParsing;
use crate::ser::Serialize;
use crate::types::{CompressionAlgorithm, KeyId, KeyVersion, RevocationKey, RevocationKeyClass};

use super::{Notation, RevocationCode, Signature};

use bstr::BString;

/// Available signature subpacket types
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SubpacketType {
    SignatureCreationTime,
    SignatureExpirationTime,
    ExportableCertification,
    TrustSignature,
    RegularExpression,
    Revocable,
    KeyExpirationTime,
    PreferredSymmetricAlgorithms,
    RevocationKey,
    Issuer,
    Notation,
    PreferredHashAlgorithms,
    PreferredCompressionAlgorithms,
    KeyServerPreferences,
    PreferredKeyServer,
    PrimaryUserId,
    PolicyURI,
    KeyFlags,
    SignersUserID,
    RevocationReason,
    Features,
    SignatureTarget,
    EmbeddedSignature,
    IssuerFingerprint,
    Experimental(u8),
    Other(u8),
}

impl SubpacketType {
    pub fn as_u8(&self, is_critical: bool) -> u8 {
        let raw: u8 = match self {
            SubpacketType::SignatureCreationTime => 2,
            SubpacketType::SignatureExpirationTime => 3,
            SubpacketType::ExportableCertification => 4,
            SubpacketType::TrustSignature => 5,
            SubpacketType::RegularExpression => 6,
            SubpacketType::Revocable => 7,
            SubpacketType::KeyExpirationTime => 9,
            SubpacketType::PreferredSymmetricAlgorithms => 11,
            SubpacketType::RevocationKey => 12,
            SubpacketType::Issuer => 16,
            SubpacketType::Notation => 20,
            SubpacketType::PreferredHashAlgorithms => 21,
            SubpacketType::PreferredCompressionAlgorithms => 22,
            SubpacketType::KeyServerPreferences => 23,
            SubpacketType::PreferredKeyServer => 24,
            SubpacketType::PrimaryUserId => 25,
            SubpacketType::PolicyURI => 26,
            SubpacketType::KeyFlags => 27,
            SubpacketType::SignersUserID => 28,
            SubpacketType::RevocationReason => 29,
            SubpacketType::Features => 30,
            SubpacketType::SignatureTarget => 31,
            SubpacketType::EmbeddedSignature => 32,
            SubpacketType::IssuerFingerprint => 33,
            SubpacketType::Experimental(n) => *n,
            SubpacketType::Other(n) => *n,
        };

        if is_critical {
            // set critical bit
            raw | 0b1000_0000
        } else {
            raw
        }
    }

    #[inline]
    pub fn from_u8(n: u8) -> (Self, bool) {
        let is_critical = (n >> 7) == 1;
        // remove critical bit
        let n = n & 0b0111_1111;

        let m = match n {
            2 => SubpacketType::SignatureCreationTime,
            3 => SubpacketType::SignatureExpirationTime,
            4 => SubpacketType::ExportableCertification,
            5 => SubpacketType::TrustSignature,
            6 => SubpacketType::RegularExpression,
            7 => SubpacketType::Revocable,
            9 => SubpacketType::KeyExpirationTime,
            11 => SubpacketType::PreferredSymmetricAlgorithms,
            12 => SubpacketType::RevocationKey,
            16 => SubpacketType::Issuer,
            20 => SubpacketType::Notation,
            21 => SubpacketType::PreferredHashAlgorithms,
            22 => SubpacketType::PreferredCompressionAlgorithms,
            23 => SubpacketType::KeyServerPreferences,
            24 => SubpacketType::PreferredKeyServer,
            25 => SubpacketType::PrimaryUserId,
            26 => SubpacketType::PolicyURI,
            27 => SubpacketType::KeyFlags,
            28 => SubpacketType::SignersUserID,
            29 => SubpacketType::RevocationReason,
            30 => SubpacketType::Features,
            31 => SubpacketType::SignatureTarget,
            32 => SubpacketType::EmbeddedSignature,
            33 => SubpacketType::IssuerFingerprint,
            100..=110 => SubpacketType::Experimental(n),
            _ => SubpacketType::Other(n),
        };

        (m, is_critical)
    }
}

/// Represents a subpacket length.
///
/// The encoding that was read is preserved, so a valid but non minimal
/// length survives re-serialization byte for byte.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-5.2.3.1>
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum SubpacketLength {
    /// 1 byte encoding, must be less than `192`.
    One(#[cfg_attr(test, proptest(strategy = "0u8..=191"))] u8),
    /// 2 byte encoding
    Two(#[cfg_attr(test, proptest(strategy = "192u16..=16319"))] u16),
    /// 5 byte encoding
    Five(#[cfg_attr(test, proptest(strategy = "255u32.."))] u32),
}

impl SubpacketLength {
    /// Parses a subpacket length from the given buffer.
    pub(crate) fn from_buf<B: Buf>(mut i: B) -> Result<Self> {
        let olen = i.read_u8()?;
        let len = match olen {
            // One-Octet Lengths
            0..=191 => Self::One(olen),
            // Two-Octet Lengths
            192..=254 => {
                let a = i.read_u8()?;
                let l = ((olen as u16 - 192) << 8) + 192 + a as u16;
                Self::Two(l)
            }
            // Five-Octet Lengths
            255 => {
                let len = i.read_be_u32()?;
                Self::Five(len)
            }
        };
        Ok(len)
    }

    /// Encodes the given length into a minimal version.
    pub(crate) fn encode(len: u32) -> Self {
        match len {
            0..=191 => Self::One(len as u8),
            192..=8383 => Self::Two(len as u16),
            _ => Self::Five(len),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::One(l) => *l as _,
            Self::Two(l) => *l as _,
            Self::Five(l) => *l as _,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for SubpacketLength {
    fn to_writer<W: std::io::Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Self::One(l) => {
                writer.write_u8(*l)?;
            }
            Self::Two(l) => {
                writer.write_u8((((l - 192) >> 8) + 192) as u8)?;
                writer.write_u8(((l - 192) & 0xFF) as u8)?;
            }
            Self::Five(l) => {
                writer.write_u8(0xFF)?;
                writer.write_u32::<BigEndian>(*l)?
            }
        }
        Ok(())
    }

    fn write_len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(_) => 2,
            Self::Five(_) => 5,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Subpacket {
    pub is_critical: bool,
    pub data: SubpacketData,
    /// The length encoding this subpacket was read with (or will be
    /// written with). Covers the type octet and the payload.
    pub len: SubpacketLength,
}

impl Subpacket {
    /// Construct a new regular subpacket.
    pub fn regular(data: SubpacketData) -> Result<Self> {
        let raw_len = (data.body_len() + 1).try_into()?;
        let len = SubpacketLength::encode(raw_len);
        Ok(Subpacket {
            is_critical: false,
            data,
            len,
        })
    }

    /// Construct a new critical subpacket.
    pub fn critical(data: SubpacketData) -> Result<Self> {
        let raw_len = (data.body_len() + 1).try_into()?;
        let len = SubpacketLength::encode(raw_len);
        Ok(Subpacket {
            is_critical: true,
            data,
            len,
        })
    }

    pub fn typ(&self) -> SubpacketType {
        self.data.typ()
    }
}

impl Serialize for Subpacket {
    fn to_writer<W: std::io::Write>(&self, writer: &mut W) -> Result<()> {
        self.len.to_writer(writer)?;
        writer.write_u8(self.typ().as_u8(self.is_critical))?;
        self.data.body_to_writer(writer)?;

        Ok(())
    }

    fn write_len(&self) -> usize {
        self.len.write_len() + self.len.len()
    }
}

#[derive(derive_more::Debug, PartialEq, Eq, Clone)]
pub enum SubpacketData {
    /// The time the signature was made.
    SignatureCreationTime(DateTime<Utc>),
    /// The time the signature will expire, relative to the creation time.
    SignatureExpirationTime(Duration),
    /// When the key is going to expire, relative to the key creation time.
    KeyExpirationTime(Duration),
    /// The OpenPGP Key ID of the key issuing the signature.
    Issuer(KeyId),
    /// List of symmetric algorithms that indicate which algorithms the key holder prefers to use.
    PreferredSymmetricAlgorithms(SmallVec<[SymmetricKeyAlgorithm; 8]>),
    /// List of hash algorithms that indicate which algorithms the key holder prefers to use.
    PreferredHashAlgorithms(SmallVec<[HashAlgorithm; 8]>),
    /// List of compression algorithms that indicate which algorithms the key holder prefers to use.
    PreferredCompressionAlgorithms(SmallVec<[CompressionAlgorithm; 8]>),
    KeyServerPreferences(#[debug("{}", hex::encode(_0))] SmallVec<[u8; 4]>),
    KeyFlags(#[debug("{}", hex::encode(_0))] SmallVec<[u8; 1]>),
    Features(#[debug("{}", hex::encode(_0))] SmallVec<[u8; 1]>),
    RevocationReason(RevocationCode, BString),
    IsPrimary(bool),
    Revocable(bool),
    EmbeddedSignature(Box<Signature>),
    PreferredKeyServer(String),
    Notation(Notation),
    RevocationKey(RevocationKey),
    SignersUserID(BString),
    /// The URI of the policy under which the signature was issued
    PolicyURI(String),
    TrustSignature(u8, u8),
    RegularExpression(BString),
    ExportableCertification(bool),
    IssuerFingerprint(KeyVersion, #[debug("{}", hex::encode(_1))] Bytes),
    SignatureTarget(
        PublicKeyAlgorithm,
        HashAlgorithm,
        #[debug("{}", hex::encode(_2))] Bytes,
    ),
    Experimental(u8, #[debug("{}", hex::encode(_1))] Bytes),
    Other(u8, #[debug("{}", hex::encode(_1))] Bytes),
}

pub(crate) fn dt_from_timestamp(ts: u32) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(ts.into(), 0)
        .single()
        .ok_or_else(|| format_err!("invalid unix timestamp {}", ts))
}

impl SubpacketData {
    /// Decodes a single subpacket payload of the given type.
    pub(crate) fn from_buf(typ: SubpacketType, mut body: Bytes) -> Result<Self> {
        let data = match typ {
            SubpacketType::SignatureCreationTime => {
                Self::SignatureCreationTime(dt_from_timestamp(body.read_be_u32()?)?)
            }
            SubpacketType::SignatureExpirationTime => {
                Self::SignatureExpirationTime(Duration::seconds(body.read_be_u32()?.into()))
            }
            SubpacketType::KeyExpirationTime => {
                Self::KeyExpirationTime(Duration::seconds(body.read_be_u32()?.into()))
            }
            SubpacketType::Issuer => Self::Issuer(KeyId::from(body.read_array::<8>()?)),
            SubpacketType::PreferredSymmetricAlgorithms => Self::PreferredSymmetricAlgorithms(
                body.iter().map(|v| SymmetricKeyAlgorithm::from(*v)).collect(),
            ),
            SubpacketType::PreferredHashAlgorithms => Self::PreferredHashAlgorithms(
                body.iter().map(|v| HashAlgorithm::from(*v)).collect(),
            ),
            SubpacketType::PreferredCompressionAlgorithms => Self::PreferredCompressionAlgorithms(
                body.iter().map(|v| CompressionAlgorithm::from(*v)).collect(),
            ),
            SubpacketType::KeyServerPreferences => {
                Self::KeyServerPreferences(body.iter().copied().collect())
            }
            SubpacketType::KeyFlags => Self::KeyFlags(body.iter().copied().collect()),
            SubpacketType::Features => Self::Features(body.iter().copied().collect()),
            SubpacketType::RevocationReason => {
                let code = RevocationCode::from(body.read_u8()?);
                let reason = BString::new(body.rest().to_vec());
                Self::RevocationReason(code, reason)
            }
            SubpacketType::PrimaryUserId => Self::IsPrimary(body.read_u8()? == 1),
            SubpacketType::Revocable => Self::Revocable(body.read_u8()? == 1),
            SubpacketType::EmbeddedSignature => {
                let sig = Signature::from_buf(Default::default(), body)?;
                Self::EmbeddedSignature(Box::new(sig))
            }
            SubpacketType::PreferredKeyServer => {
                Self::PreferredKeyServer(std::str::from_utf8(&body)?.to_string())
            }
            SubpacketType::Notation => {
                let readable = body.read_u8()? == 0x80;
                let padding = body.read_array::<3>()?;
                ensure_eq!(padding, [0, 0, 0], "invalid notation flags");
                let name_len = body.read_be_u16()?;
                let value_len = body.read_be_u16()?;
                let name = BString::new(body.read_take(name_len.into())?.to_vec());
                let value = BString::new(body.read_take(value_len.into())?.to_vec());
                Self::Notation(Notation {
                    readable,
                    name,
                    value,
                })
            }
            SubpacketType::RevocationKey => {
                let class = RevocationKeyClass::from(body.read_u8()?);
                let algorithm = PublicKeyAlgorithm::from(body.read_u8()?);
                let fp = body.read_array::<20>()?;
                Self::RevocationKey(RevocationKey::new(class, algorithm, fp))
            }
            SubpacketType::SignersUserID => Self::SignersUserID(BString::new(body.rest().to_vec())),
            SubpacketType::PolicyURI => {
                Self::PolicyURI(std::str::from_utf8(&body)?.to_string())
            }
            SubpacketType::TrustSignature => {
                Self::TrustSignature(body.read_u8()?, body.read_u8()?)
            }
            SubpacketType::RegularExpression => {
                Self::RegularExpression(BString::new(body.rest().to_vec()))
            }
            SubpacketType::ExportableCertification => {
                Self::ExportableCertification(body.read_u8()? == 1)
            }
            SubpacketType::IssuerFingerprint => {
                let version = KeyVersion::from(body.read_u8()?);
                Self::IssuerFingerprint(version, body.rest())
            }
            SubpacketType::SignatureTarget => {
                let pub_alg = PublicKeyAlgorithm::from(body.read_u8()?);
                let hash_alg = HashAlgorithm::from(body.read_u8()?);
                Self::SignatureTarget(pub_alg, hash_alg, body.rest())
            }
            SubpacketType::Experimental(n) => Self::Experimental(n, body),
            SubpacketType::Other(n) => Self::Other(n, body),
        };

        Ok(data)
    }

    pub fn typ(&self) -> SubpacketType {
        match self {
            Self::SignatureCreationTime(_) => SubpacketType::SignatureCreationTime,
            Self::SignatureExpirationTime(_) => SubpacketType::SignatureExpirationTime,
            Self::KeyExpirationTime(_) => SubpacketType::KeyExpirationTime,
            Self::Issuer(_) => SubpacketType::Issuer,
            Self::PreferredSymmetricAlgorithms(_) => SubpacketType::PreferredSymmetricAlgorithms,
            Self::PreferredHashAlgorithms(_) => SubpacketType::PreferredHashAlgorithms,
            Self::PreferredCompressionAlgorithms(_) => {
                SubpacketType::PreferredCompressionAlgorithms
            }
            Self::KeyServerPreferences(_) => SubpacketType::KeyServerPreferences,
            Self::KeyFlags(_) => SubpacketType::KeyFlags,
            Self::Features(_) => SubpacketType::Features,
            Self::RevocationReason(_, _) => SubpacketType::RevocationReason,
            Self::IsPrimary(_) => SubpacketType::PrimaryUserId,
            Self::Revocable(_) => SubpacketType::Revocable,
            Self::EmbeddedSignature(_) => SubpacketType::EmbeddedSignature,
            Self::PreferredKeyServer(_) => SubpacketType::PreferredKeyServer,
            Self::Notation(_) => SubpacketType::Notation,
            Self::RevocationKey(_) => SubpacketType::RevocationKey,
            Self::SignersUserID(_) => SubpacketType::SignersUserID,
            Self::PolicyURI(_) => SubpacketType::PolicyURI,
            Self::TrustSignature(_, _) => SubpacketType::TrustSignature,
            Self::RegularExpression(_) => SubpacketType::RegularExpression,
            Self::ExportableCertification(_) => SubpacketType::ExportableCertification,
            Self::IssuerFingerprint(_, _) => SubpacketType::IssuerFingerprint,
            Self::SignatureTarget(_, _, _) => SubpacketType::SignatureTarget,
            Self::Experimental(n, _) => SubpacketType::Experimental(*n),
            Self::Other(n, _) => SubpacketType::Other(*n),
        }
    }

    fn body_to_writer(&self, writer: &mut impl std::io::Write) -> Result<()> {
        match self {
            Self::SignatureCreationTime(t) => {
                writer.write_u32::<BigEndian>(t.timestamp() as u32)?;
            }
            Self::SignatureExpirationTime(d) => {
                writer.write_u32::<BigEndian>(d.num_seconds() as u32)?;
            }
            Self::KeyExpirationTime(d) => {
                writer.write_u32::<BigEndian>(d.num_seconds() as u32)?;
            }
            Self::Issuer(id) => {
                writer.write_all(id.as_ref())?;
            }
            Self::PreferredSymmetricAlgorithms(algs) => {
                writer.write_all(&algs.iter().map(|&a| u8::from(a)).collect::<Vec<_>>())?;
            }
            Self::PreferredHashAlgorithms(algs) => {
                writer.write_all(&algs.iter().map(|&a| u8::from(a)).collect::<Vec<_>>())?;
            }
            Self::PreferredCompressionAlgorithms(algs) => {
                writer.write_all(&algs.iter().map(|&a| u8::from(a)).collect::<Vec<_>>())?;
            }
            Self::KeyServerPreferences(prefs) => {
                writer.write_all(prefs)?;
            }
            Self::KeyFlags(flags) => {
                writer.write_all(flags)?;
            }
            Self::Features(features) => {
                writer.write_all(features)?;
            }
            Self::RevocationReason(code, reason) => {
                writer.write_u8((*code).into())?;
                writer.write_all(reason)?;
            }
            Self::IsPrimary(is_primary) => {
                writer.write_u8(u8::from(*is_primary))?;
            }
            Self::Revocable(revocable) => {
                writer.write_u8(u8::from(*revocable))?;
            }
            Self::EmbeddedSignature(sig) => {
                sig.to_writer(writer)?;
            }
            Self::PreferredKeyServer(server) => {
                writer.write_all(server.as_bytes())?;
            }
            Self::Notation(notation) => {
                let is_readable = if notation.readable { 0x80 } else { 0 };
                writer.write_all(&[is_readable, 0, 0, 0])?;
                writer.write_u16::<BigEndian>(notation.name.len().try_into()?)?;
                writer.write_u16::<BigEndian>(notation.value.len().try_into()?)?;
                writer.write_all(&notation.name)?;
                writer.write_all(&notation.value)?;
            }
            Self::RevocationKey(rev_key) => {
                writer.write_u8(rev_key.class.into())?;
                writer.write_u8(rev_key.algorithm.into())?;
                writer.write_all(&rev_key.fingerprint)?;
            }
            Self::SignersUserID(body) => {
                writer.write_all(body)?;
            }
            Self::PolicyURI(uri) => {
                writer.write_all(uri.as_bytes())?;
            }
            Self::TrustSignature(depth, value) => {
                writer.write_all(&[*depth, *value])?;
            }
            Self::RegularExpression(regexp) => {
                writer.write_all(regexp)?;
            }
            Self::ExportableCertification(is_exportable) => {
                writer.write_u8(u8::from(*is_exportable))?;
            }
            Self::IssuerFingerprint(version, fp) => {
                writer.write_u8((*version).into())?;
                writer.write_all(fp)?;
            }
            Self::SignatureTarget(pub_alg, hash_alg, hash) => {
                writer.write_u8((*pub_alg).into())?;
                writer.write_u8((*hash_alg).into())?;
                writer.write_all(hash)?;
            }
            Self::Experimental(_, body) => {
                writer.write_all(body)?;
            }
            Self::Other(_, body) => {
                writer.write_all(body)?;
            }
        }

        Ok(())
    }

    fn body_len(&self) -> usize {
        match self {
            Self::SignatureCreationTime(_) => 4,
            Self::SignatureExpirationTime(_) => 4,
            Self::KeyExpirationTime(_) => 4,
            Self::Issuer(_) => 8,
            Self::PreferredSymmetricAlgorithms(algs) => algs.len(),
            Self::PreferredHashAlgorithms(algs) => algs.len(),
            Self::PreferredCompressionAlgorithms(algs) => algs.len(),
            Self::KeyServerPreferences(prefs) => prefs.len(),
            Self::KeyFlags(flags) => flags.len(),
            Self::Features(features) => features.len(),
            Self::RevocationReason(_, reason) => 1 + reason.len(),
            Self::IsPrimary(_) => 1,
            Self::Revocable(_) => 1,
            Self::EmbeddedSignature(sig) => sig.write_len(),
            Self::PreferredKeyServer(server) => server.len(),
            Self::Notation(n) => 8 + n.name.len() + n.value.len(),
            Self::RevocationKey(_) => 22,
            Self::SignersUserID(body) => body.len(),
            Self::PolicyURI(uri) => uri.len(),
            Self::TrustSignature(_, _) => 2,
            Self::RegularExpression(regexp) => regexp.len(),
            Self::ExportableCertification(_) => 1,
            Self::IssuerFingerprint(_, fp) => 1 + fp.len(),
            Self::SignatureTarget(_, _, hash) => 2 + hash.len(),
            Self::Experimental(_, body) => body.len(),
            Self::Other(_, body) => body.len(),
        }
    }
}

/// Decodes a whole subpacket area into an ordered sequence of subpackets.
///
/// Each unit consumes exactly its declared length; any inconsistency fails
/// the area.
pub(crate) fn parse_subpacket_area(mut area: Bytes) -> Result<Vec<Subpacket>> {
    let mut packets = Vec::new();
    while !area.is_empty() {
        let packet = parse_subpacket(&mut area).map_err(|err| match err {
            err @ Error::MalformedSubpacket { .. } => err,
            err => Error::MalformedSubpacket {
                message: err.to_string(),
            },
        })?;
        packets.push(packet);
    }

    Ok(packets)
}

fn parse_subpacket(area: &mut Bytes) -> Result<Subpacket> {
    // the subpacket length (1, 2, or 5 octets)
    let len = SubpacketLength::from_buf(&mut *area)?;
    ensure!(!len.is_empty(), "zero length subpacket");
    area.ensure_remaining(len.len())?;

    // the subpacket type (1 octet)
    let (typ, is_critical) = SubpacketType::from_u8(area.read_u8()?);
    let body = area.split_to(len.len() - 1);
    let data = SubpacketData::from_buf(typ, body)?;

    Ok(Subpacket {
        is_critical,
        data,
        len,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn subpacket_length_write_len(len: SubpacketLength) {
            let mut buf = Vec::new();
            len.to_writer(&mut buf).unwrap();
            assert_eq!(buf.len(), len.write_len());
        }


        #[test]
        fn subpacket_length_packet_roundtrip(len: SubpacketLength) {
            let mut buf = Vec::new();
            len.to_writer(&mut buf).unwrap();
            let new_len = SubpacketLength::from_buf(&mut &buf[..]).unwrap();
            assert_eq!(len, new_len);
        }
    }

    #[test]
    fn test_subpacket_pref_sym_alg() {
        let input = vec![9, 8, 7, 3, 2];
        let res = SubpacketData::from_buf(
            SubpacketType::PreferredSymmetricAlgorithms,
            Bytes::from(input.clone()),
        )
        .unwrap();
        assert_eq!(
            res,
            SubpacketData::PreferredSymmetricAlgorithms(
                input
                    .iter()
                    .map(|i| SymmetricKeyAlgorithm::from(*i))
                    .collect()
            )
        );
    }

    #[test]
    fn test_subpacket_area_roundtrip() {
        let packets = vec![
            Subpacket::regular(SubpacketData::SignatureCreationTime(
                dt_from_timestamp(1_600_000_000).unwrap(),
            ))
            .unwrap(),
            Subpacket::critical(SubpacketData::SignatureExpirationTime(Duration::seconds(
                3600,
            )))
            .unwrap(),
            Subpacket::regular(SubpacketData::Issuer(KeyId::from([1, 2, 3, 4, 5, 6, 7, 8])))
                .unwrap(),
            Subpacket::regular(SubpacketData::Other(50, Bytes::from_static(b"junk"))).unwrap(),
        ];

        let mut buf = Vec::new();
        for p in &packets {
            p.to_writer(&mut buf).unwrap();
        }

        let back = parse_subpacket_area(Bytes::from(buf)).unwrap();
        assert_eq!(packets, back);
        assert!(back[1].is_critical);
    }

    #[test]
    fn test_subpacket_inconsistent_length() {
        // declared 10 bytes (type + 9 payload), only 3 available
        let raw = [10u8, 2, 0, 0];
        let err = parse_subpacket_area(Bytes::copy_from_slice(&raw)).unwrap_err();
        assert!(matches!(err, Error::MalformedSubpacket { .. }));
    }

    #[test]
    fn test_non_canonical_length_survives() {
        // creation time subpacket with a 5-octet length encoding of 5
        let mut raw = vec![0xFF, 0, 0, 0, 5, 2];
        raw.extend_from_slice(&[0x5F, 0x5E, 0x10, 0x00]);

        let packets = parse_subpacket_area(Bytes::from(raw.clone())).unwrap();
        assert_eq!(packets.len(), 1);
        assert_eq!(packets[0].len, SubpacketLength::Five(5));

        let mut buf = Vec::new();
        packets[0].to_writer(&mut buf).unwrap();
        assert_eq!(buf, raw);
    }
}
