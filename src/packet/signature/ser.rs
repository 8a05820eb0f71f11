use std::io;

use byteorder::{BigEndian, WriteBytesExt};

use crate::errors::Result;
use crate::packet::signature::types::{Signature, SignatureVersion};
use crate::ser::Serialize;

impl Serialize for Signature {
    fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        match self.config.version {
            SignatureVersion::V2 | SignatureVersion::V3 => self.to_writer_v3(writer),
            SignatureVersion::V4 => self.to_writer_v4(writer),
            SignatureVersion::Other(version) => {
                unsupported_err!("signature version {}", version)
            }
        }
    }

    fn write_len(&self) -> usize {
        match self.config.version {
            // version, hashed length marker, type, creation time, issuer,
            // algorithms, quick check
            SignatureVersion::V2 | SignatureVersion::V3 => {
                1 + 1 + 1 + 4 + 8 + 1 + 1 + 2 + self.signature.write_len()
            }
            // version, type, algorithms, two length-prefixed subpacket
            // areas, quick check
            SignatureVersion::V4 | SignatureVersion::Other(_) => {
                let unhashed_len: usize = self
                    .config
                    .unhashed_subpackets
                    .iter()
                    .map(|p| p.write_len())
                    .sum();

                4 + 2
                    + self.config.hashed_area_len()
                    + 2
                    + unhashed_len
                    + 2
                    + self.signature.write_len()
            }
        }
    }
}

impl Signature {
    /// Serializes a v2 or v3 signature body.
    fn to_writer_v3<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        let created = self
            .config
            .created
            .as_ref()
            .ok_or_else(|| format_err!("missing creation time for a v3 signature"))?;
        let issuer = self
            .config
            .issuer
            .as_ref()
            .ok_or_else(|| format_err!("missing issuer for a v3 signature"))?;

        writer.write_u8(self.config.version.into())?;
        // One-octet length of following hashed material. MUST be 5.
        writer.write_u8(0x05)?;
        writer.write_u8(self.config.typ.into())?;
        writer.write_u32::<BigEndian>(created.timestamp() as u32)?;
        writer.write_all(issuer.as_ref())?;
        writer.write_u8(self.config.pub_alg.into())?;
        writer.write_u8(self.config.hash_alg.into())?;

        // signed hash value
        writer.write_all(&self.signed_hash_value)?;

        // the actual signature
        self.signature.to_writer(writer)?;

        Ok(())
    }

    /// Serializes a v4 signature body.
    fn to_writer_v4<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&[
            // version
            self.config.version.into(),
            // type
            self.config.typ.into(),
            // public algorithm
            self.config.pub_alg.into(),
            // hash algorithm
            self.config.hash_alg.into(),
        ])?;

        // hashed subpackets, replayed verbatim for received signatures
        let hashed_area = self.config.hashed_area_bytes()?;
        writer.write_u16::<BigEndian>(hashed_area.len().try_into()?)?;
        writer.write_all(&hashed_area)?;

        // unhashed subpackets
        let mut unhashed_area = Vec::new();
        for packet in &self.config.unhashed_subpackets {
            packet.to_writer(&mut unhashed_area)?;
        }
        writer.write_u16::<BigEndian>(unhashed_area.len().try_into()?)?;
        writer.write_all(&unhashed_area)?;

        // signed hash value
        writer.write_all(&self.signed_hash_value)?;

        // the actual signature
        self.signature.to_writer(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::Duration;

    use super::*;
    use crate::crypto::hash::HashAlgorithm;
    use crate::crypto::public_key::PublicKeyAlgorithm;
    use crate::packet::signature::subpacket::{dt_from_timestamp, Subpacket, SubpacketData};
    use crate::packet::SignatureType;
    use crate::types::{KeyId, Mpi};

    fn roundtrip(sig: &Signature) -> Signature {
        let buf = sig.to_bytes().unwrap();
        assert_eq!(buf.len(), sig.write_len());
        Signature::from_buf(Default::default(), Bytes::from(buf)).unwrap()
    }

    #[test]
    fn test_v4_roundtrip() {
        let sig = Signature::v4(
            Default::default(),
            SignatureType::Binary,
            PublicKeyAlgorithm::RSA,
            HashAlgorithm::Sha256,
            [0xAA, 0xBB],
            vec![Mpi::from_slice(&[0x01, 0x02, 0x03])],
            vec![
                Subpacket::regular(SubpacketData::SignatureCreationTime(
                    dt_from_timestamp(1_600_000_000).unwrap(),
                ))
                .unwrap(),
                Subpacket::critical(SubpacketData::SignatureExpirationTime(Duration::seconds(
                    123_456,
                )))
                .unwrap(),
            ],
            vec![Subpacket::regular(SubpacketData::Issuer(KeyId::from([
                8, 7, 6, 5, 4, 3, 2, 1,
            ])))
            .unwrap()],
        );

        let back = roundtrip(&sig);
        // the parsed copy carries the raw hashed area, the config content
        // must match field for field
        assert_eq!(sig.config.version, back.config.version);
        assert_eq!(sig.config.typ, back.config.typ);
        assert_eq!(sig.config.hashed_subpackets, back.config.hashed_subpackets);
        assert_eq!(
            sig.config.unhashed_subpackets,
            back.config.unhashed_subpackets
        );
        assert_eq!(sig.signed_hash_value, back.signed_hash_value);
        assert_eq!(sig.signature, back.signature);

        // and the re-serialization is byte identical
        assert_eq!(sig.to_bytes().unwrap(), back.to_bytes().unwrap());
    }

    #[test]
    fn test_v3_roundtrip() {
        let sig = Signature::v3(
            Default::default(),
            crate::packet::SignatureVersion::V3,
            SignatureType::Binary,
            PublicKeyAlgorithm::RSA,
            HashAlgorithm::Sha1,
            dt_from_timestamp(1_234_567_890).unwrap(),
            KeyId::from([1, 2, 3, 4, 5, 6, 7, 8]),
            [0x01, 0x02],
            vec![Mpi::from_slice(&[0xFF; 16])],
        );

        let back = roundtrip(&sig);
        assert_eq!(sig, back);
    }
}
