use std::fmt;
use std::io::{self, Read};

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use digest::DynDigest;
use iter_read::IterRead;
use log::debug;

use crate::crypto::hash::{HashAlgorithm, WriteHasher};
use crate::crypto::public_key::PublicKeyAlgorithm;
use crate::errors::Result;
use crate::normalize_lines::{LineBreak, Normalized};
use crate::packet::signature::subpacket::{Subpacket, SubpacketData};
use crate::packet::signature::types::{Signature, SignatureType, SignatureVersion};
use crate::ser::Serialize;
use crate::types::{KeyId, PublicKeyTrait, SecretKeyTrait, Tag};

/// A signature in the making.
///
/// This is the mutable builder stage: subpacket lists may still be edited
/// and no signature value exists yet. Every `sign*` operation consumes the
/// config and produces an immutable [`Signature`], so a packet under
/// construction can never be handed to a verifier.
#[derive(Clone, PartialEq, Eq)]
pub struct SignatureConfig {
    pub version: SignatureVersion,
    pub typ: SignatureType,
    pub pub_alg: PublicKeyAlgorithm,
    pub hash_alg: HashAlgorithm,

    pub hashed_subpackets: Vec<Subpacket>,
    pub unhashed_subpackets: Vec<Subpacket>,

    // only set on v2 and v3 signatures
    pub created: Option<DateTime<Utc>>,
    pub issuer: Option<KeyId>,

    /// The hashed subpacket area exactly as received.
    ///
    /// A received signature replays these bytes when the signed data is
    /// reconstructed, so a valid but non canonical encoding verifies
    /// against the bytes the signer actually hashed. Fresh configs encode
    /// their subpacket list instead.
    pub(crate) hashed_area_raw: Option<Bytes>,
}

impl SignatureConfig {
    /// Create a config for a fresh v4 signature.
    pub fn v4(typ: SignatureType, pub_alg: PublicKeyAlgorithm, hash_alg: HashAlgorithm) -> Self {
        SignatureConfig {
            version: SignatureVersion::V4,
            typ,
            pub_alg,
            hash_alg,
            hashed_subpackets: Vec::new(),
            unhashed_subpackets: Vec::new(),
            created: None,
            issuer: None,
            hashed_area_raw: None,
        }
    }

    /// Create a config for a fresh v3 signature.
    /// Note: This is a historical packet version!
    pub fn v3(
        typ: SignatureType,
        pub_alg: PublicKeyAlgorithm,
        hash_alg: HashAlgorithm,
        created: DateTime<Utc>,
        issuer: KeyId,
    ) -> Self {
        SignatureConfig {
            version: SignatureVersion::V3,
            typ,
            pub_alg,
            hash_alg,
            hashed_subpackets: Vec::new(),
            unhashed_subpackets: Vec::new(),
            created: Some(created),
            issuer: Some(issuer),
            hashed_area_raw: None,
        }
    }

    /// Sign the given data.
    pub fn sign<F, R>(mut self, key: &impl SecretKeyTrait, key_pw: F, data: R) -> Result<Signature>
    where
        F: FnOnce() -> String,
        R: Read,
    {
        self.prepare(key)?;

        let mut hasher = self.hash_alg.new_hasher()?;

        self.hash_data_to_sign(&mut hasher, data)?;
        let len = self.hash_signature_data(&mut hasher)?;
        hasher.update(&self.trailer(len)?);

        self.finish(key, key_pw, hasher)
    }

    /// Create a certification signature over a key and an identity packet.
    pub fn sign_certification<F>(
        mut self,
        key: &impl SecretKeyTrait,
        key_pw: F,
        tag: Tag,
        id: &impl Serialize,
    ) -> Result<Signature>
    where
        F: FnOnce() -> String,
    {
        ensure!(
            self.is_certification(),
            "can not sign non certification as certification"
        );
        debug!("signing certification {:#?}", self.typ);

        self.prepare(key)?;

        let mut hasher = self.hash_alg.new_hasher()?;

        hash_key_material(&mut hasher, key)?;
        hash_identity(self.version, &mut hasher, tag, id)?;

        let len = self.hash_signature_data(&mut hasher)?;
        hasher.update(&self.trailer(len)?);

        self.finish(key, key_pw, hasher)
    }

    /// Sign a subkey binding, the primary key hashes first.
    pub fn sign_key_binding<F>(
        mut self,
        signing_key: &impl SecretKeyTrait,
        key_pw: F,
        key: &impl PublicKeyTrait,
    ) -> Result<Signature>
    where
        F: FnOnce() -> String,
    {
        debug!(
            "signing key binding: {:#?} - {:#?} - {:#?}",
            self, signing_key, key
        );

        self.prepare(signing_key)?;

        let mut hasher = self.hash_alg.new_hasher()?;

        // Signing key
        hash_key_material(&mut hasher, signing_key)?;
        // Key being bound
        hash_key_material(&mut hasher, key)?;

        let len = self.hash_signature_data(&mut hasher)?;
        hasher.update(&self.trailer(len)?);

        self.finish(signing_key, key_pw, hasher)
    }

    /// Signs a direct key signature or a revocation.
    pub fn sign_key<F>(
        mut self,
        signing_key: &impl SecretKeyTrait,
        key_pw: F,
        key: &impl PublicKeyTrait,
    ) -> Result<Signature>
    where
        F: FnOnce() -> String,
    {
        debug!("signing key (revocation): {:#?} - {:#?}", self, key);

        self.prepare(signing_key)?;

        let mut hasher = self.hash_alg.new_hasher()?;

        hash_key_material(&mut hasher, key)?;

        let len = self.hash_signature_data(&mut hasher)?;
        hasher.update(&self.trailer(len)?);

        self.finish(signing_key, key_pw, hasher)
    }

    /// Appends the mandatory subpackets (or v3 fields) before signing.
    ///
    /// A creation time always ends up in the hashed area; the issuer key
    /// id is added to the unhashed area unless issuer information is
    /// already present. Any replayed raw area is discarded, a fresh
    /// signature hashes its own encoding.
    fn prepare(&mut self, key: &impl PublicKeyTrait) -> Result<()> {
        // the key must hold material for the declared algorithm
        if key.algorithm() != self.pub_alg {
            return Err(crate::errors::Error::KeyMaterialMissing);
        }

        self.hashed_area_raw = None;

        match self.version {
            SignatureVersion::V2 | SignatureVersion::V3 => {
                if self.created.is_none() {
                    self.created = Some(Utc::now());
                }
                if self.issuer.is_none() {
                    self.issuer = Some(key.key_id());
                }
            }
            SignatureVersion::V4 => {
                if !self
                    .hashed_subpackets
                    .iter()
                    .any(|p| matches!(p.data, SubpacketData::SignatureCreationTime(_)))
                {
                    self.hashed_subpackets.push(Subpacket::regular(
                        SubpacketData::SignatureCreationTime(Utc::now()),
                    )?);
                }

                if !self.subpackets().any(|p| {
                    matches!(
                        p.data,
                        SubpacketData::Issuer(_) | SubpacketData::IssuerFingerprint(_, _)
                    )
                }) {
                    self.unhashed_subpackets
                        .push(Subpacket::regular(SubpacketData::Issuer(key.key_id()))?);
                }
            }
            SignatureVersion::Other(version) => {
                unsupported_err!("signature version {}", version)
            }
        }

        Ok(())
    }

    fn finish<F>(
        self,
        key: &impl SecretKeyTrait,
        key_pw: F,
        hasher: Box<dyn DynDigest>,
    ) -> Result<Signature>
    where
        F: FnOnce() -> String,
    {
        let hash = hasher.finalize();

        let signed_hash_value = [hash[0], hash[1]];
        let signature = key.create_signature(key_pw, self.hash_alg, &hash)?;

        Ok(Signature::from_config(
            Default::default(),
            self,
            signed_hash_value,
            signature,
        ))
    }

    /// Returns what kind of signature this is.
    pub fn typ(&self) -> SignatureType {
        self.typ
    }

    /// Feed the input data into the hasher, for the signature types that
    /// sign literal input.
    ///
    /// Canonical text signatures normalize line endings to `<CR><LF>`
    /// first; standalone and timestamp signatures hash no input at all.
    pub fn hash_data_to_sign<R>(&self, hasher: &mut Box<dyn DynDigest>, mut data: R) -> Result<usize>
    where
        R: Read,
    {
        match self.typ {
            SignatureType::Binary => {
                Ok(io::copy(&mut data, &mut WriteHasher(hasher))? as usize)
            }
            SignatureType::Text => {
                let normalized =
                    Normalized::new(data.bytes().flat_map(|b| b.ok()), LineBreak::Crlf);
                Ok(io::copy(&mut IterRead::new(normalized), &mut WriteHasher(hasher))? as usize)
            }
            SignatureType::Standalone | SignatureType::Timestamp => Ok(0),
            SignatureType::CertGeneric
            | SignatureType::CertPersona
            | SignatureType::CertCasual
            | SignatureType::CertPositive
            | SignatureType::CertRevocation => {
                bail!("certifications sign a key and an identity, not literal input")
            }
            SignatureType::SubkeyBinding
            | SignatureType::SubkeyRevocation
            | SignatureType::KeyBinding
            | SignatureType::Key
            | SignatureType::KeyRevocation => {
                bail!("key signatures sign key material, not literal input")
            }
            SignatureType::ThirdParty => unimplemented_err!("signing ThirdParty"),
            SignatureType::Other(typ) => unsupported_err!("signature type {:#x}", typ),
        }
    }

    /// Feed the signature packet's own hashed material into the hasher.
    ///
    /// Returns the number of bytes contributed, which the v4 trailer
    /// encodes to pin down the hashed length.
    pub fn hash_signature_data(&self, hasher: &mut Box<dyn DynDigest>) -> Result<usize> {
        match self.version {
            SignatureVersion::V2 | SignatureVersion::V3 => {
                let created = self
                    .created
                    .as_ref()
                    .ok_or_else(|| format_err!("missing creation time for a v3 signature"))?;

                let mut buf = [0u8; 5];
                buf[0] = self.typ.into();
                BigEndian::write_u32(&mut buf[1..], created.timestamp() as u32);

                hasher.update(&buf);

                // no trailer
                Ok(0)
            }
            SignatureVersion::V4 => {
                let hashed_area = self.hashed_area_bytes()?;
                let len: u16 = hashed_area.len().try_into()?;

                let mut res = vec![
                    // version
                    self.version.into(),
                    // type
                    self.typ.into(),
                    // public algorithm
                    self.pub_alg.into(),
                    // hash algorithm
                    self.hash_alg.into(),
                    // will be filled with the length
                    0u8,
                    0u8,
                ];
                BigEndian::write_u16(&mut res[4..6], len);
                res.extend_from_slice(&hashed_area);

                hasher.update(&res);

                Ok(res.len())
            }
            SignatureVersion::Other(version) => {
                unsupported_err!("signature version {}", version)
            }
        }
    }

    /// The hashed subpacket area, without its length prefix.
    ///
    /// Received signatures replay the original bytes, fresh ones encode
    /// their subpacket list.
    pub(crate) fn hashed_area_bytes(&self) -> Result<Vec<u8>> {
        if let Some(raw) = &self.hashed_area_raw {
            return Ok(raw.to_vec());
        }

        let mut buf = Vec::new();
        for packet in &self.hashed_subpackets {
            packet.to_writer(&mut buf)?;
        }
        Ok(buf)
    }

    pub(crate) fn hashed_area_len(&self) -> usize {
        match &self.hashed_area_raw {
            Some(raw) => raw.len(),
            None => self
                .hashed_subpackets
                .iter()
                .map(|p| p.write_len())
                .sum(),
        }
    }

    /// The trailer closing the signed data.
    ///
    /// For v4 this is the version, a `0xFF` marker and the big-endian
    /// length of the signature's own hashed contribution, guarding
    /// against truncation and extension. v3 has no trailer.
    pub fn trailer(&self, len: usize) -> Result<Vec<u8>> {
        match self.version {
            SignatureVersion::V2 | SignatureVersion::V3 => {
                // Nothing to do
                Ok(Vec::new())
            }
            SignatureVersion::V4 => {
                let mut trailer = vec![self.version.into(), 0xFF, 0, 0, 0, 0];
                BigEndian::write_u32(&mut trailer[2..], len.try_into()?);
                Ok(trailer)
            }
            SignatureVersion::Other(version) => {
                unsupported_err!("signature version {}", version)
            }
        }
    }

    /// Returns an iterator over all subpackets of this signature,
    /// hashed before unhashed, in their original order.
    pub fn subpackets(&self) -> impl Iterator<Item = &Subpacket> {
        self.hashed_subpackets
            .iter()
            .chain(self.unhashed_subpackets.iter())
    }

    /// Returns if the signature is a certification or not.
    pub fn is_certification(&self) -> bool {
        self.typ.is_certification()
    }

    /// The creation time; the direct v3 field wins, then the hashed area,
    /// then the unhashed one.
    pub fn created(&self) -> Option<&DateTime<Utc>> {
        if self.created.is_some() {
            return self.created.as_ref();
        }

        self.subpackets().find_map(|p| match &p.data {
            SubpacketData::SignatureCreationTime(d) => Some(d),
            _ => None,
        })
    }

    /// All claimed issuer key ids, the direct v3 field first.
    pub fn issuer(&self) -> Vec<&KeyId> {
        self.issuer
            .iter()
            .chain(self.subpackets().filter_map(|p| match &p.data {
                SubpacketData::Issuer(id) => Some(id),
                _ => None,
            }))
            .collect()
    }

    /// All claimed issuer fingerprints.
    pub fn issuer_fingerprint(&self) -> Vec<&Bytes> {
        self.subpackets()
            .filter_map(|p| match &p.data {
                SubpacketData::IssuerFingerprint(_, fp) => Some(fp),
                _ => None,
            })
            .collect()
    }
}

/// Feeds `0x99`-framed key material into the hasher: the marker octet, the
/// big-endian body length, then the key packet body.
pub(crate) fn hash_key_material(
    hasher: &mut Box<dyn DynDigest>,
    key: &impl PublicKeyTrait,
) -> Result<()> {
    let body = key.hashable_body()?;
    let len: u16 = body.len().try_into()?;

    let mut prefix = [0x99, 0u8, 0u8];
    BigEndian::write_u16(&mut prefix[1..], len);

    hasher.update(&prefix);
    hasher.update(&body);

    Ok(())
}

/// Feeds an identity packet into the hasher.
///
/// v4 signatures prefix the body with a tag-specific marker octet and a
/// big-endian length; v3 signatures hash the bare body.
pub(crate) fn hash_identity(
    version: SignatureVersion,
    hasher: &mut Box<dyn DynDigest>,
    tag: Tag,
    id: &impl Serialize,
) -> Result<()> {
    let mut packet_buf = Vec::new();
    id.to_writer(&mut packet_buf)?;

    match version {
        SignatureVersion::V2 | SignatureVersion::V3 => {
            // Nothing to do
        }
        SignatureVersion::V4 => {
            let prefix = match tag {
                Tag::UserId => 0xB4,
                Tag::UserAttribute => 0xD1,
                _ => bail!("invalid tag for certification validation: {:?}", tag),
            };

            let mut prefix_buf = [prefix, 0u8, 0u8, 0u8, 0u8];
            BigEndian::write_u32(&mut prefix_buf[1..], packet_buf.len().try_into()?);

            hasher.update(&prefix_buf);
        }
        SignatureVersion::Other(version) => {
            unsupported_err!("signature version {}", version)
        }
    }

    hasher.update(&packet_buf);

    Ok(())
}

impl fmt::Debug for SignatureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureConfig")
            .field("version", &self.version)
            .field("typ", &self.typ)
            .field("pub_alg", &self.pub_alg)
            .field("hash_alg", &self.hash_alg)
            .field("created", &self.created)
            .field("issuer", &self.issuer)
            .field("hashed_subpackets", &self.hashed_subpackets)
            .field("unhashed_subpackets", &self.unhashed_subpackets)
            .finish()
    }
}
