use std::io::Read;

use bitfield::bitfield;
use bstr::{BStr, BString};
use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use digest::DynDigest;
use log::debug;
use num_enum::{FromPrimitive, IntoPrimitive};

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::public_key::PublicKeyAlgorithm;
use crate::crypto::sym::SymmetricKeyAlgorithm;
use crate::errors::{Error, Result};
use crate::packet::signature::config::{hash_identity, hash_key_material, SignatureConfig};
use crate::packet::signature::subpacket::{Subpacket, SubpacketData, SubpacketType};
use crate::packet::PacketTrait;
use crate::ser::Serialize;
use crate::types::{
    CompressionAlgorithm, KeyId, Mpi, PacketHeaderVersion, PublicKeyTrait, RevocationKey, Tag,
};

/// Signature Packet
///
/// A parsed signature is immutable, the accessors only ever derive values
/// from the stored fields. Fresh signatures are produced by consuming a
/// [`SignatureConfig`] through one of its `sign*` operations.
///
/// Ref: <https://tools.ietf.org/html/rfc4880.html#section-5.2>
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
pub struct Signature {
    packet_version: PacketHeaderVersion,

    pub config: SignatureConfig,
    #[debug("{}", hex::encode(signed_hash_value))]
    pub signed_hash_value: [u8; 2],
    pub signature: Vec<Mpi>,
}

impl Signature {
    /// Constructor for a v2 or v3 signature packet.
    /// Note: These are historical packet versions!
    #[allow(clippy::too_many_arguments)]
    pub fn v3(
        packet_version: PacketHeaderVersion,
        version: SignatureVersion,
        typ: SignatureType,
        pub_alg: PublicKeyAlgorithm,
        hash_alg: HashAlgorithm,
        created: DateTime<Utc>,
        issuer: KeyId,
        signed_hash_value: [u8; 2],
        signature: Vec<Mpi>,
    ) -> Self {
        Signature {
            packet_version,
            config: SignatureConfig {
                version,
                typ,
                pub_alg,
                hash_alg,
                hashed_subpackets: vec![],
                unhashed_subpackets: vec![],
                created: Some(created),
                issuer: Some(issuer),
                hashed_area_raw: None,
            },
            signed_hash_value,
            signature,
        }
    }

    /// Constructor for a v4 signature packet.
    #[allow(clippy::too_many_arguments)]
    pub fn v4(
        packet_version: PacketHeaderVersion,
        typ: SignatureType,
        pub_alg: PublicKeyAlgorithm,
        hash_alg: HashAlgorithm,
        signed_hash_value: [u8; 2],
        signature: Vec<Mpi>,
        hashed_subpackets: Vec<Subpacket>,
        unhashed_subpackets: Vec<Subpacket>,
    ) -> Self {
        Signature {
            packet_version,
            config: SignatureConfig {
                version: SignatureVersion::V4,
                typ,
                pub_alg,
                hash_alg,
                hashed_subpackets,
                unhashed_subpackets,
                created: None,
                issuer: None,
                hashed_area_raw: None,
            },
            signed_hash_value,
            signature,
        }
    }

    pub(crate) fn from_config(
        packet_version: PacketHeaderVersion,
        config: SignatureConfig,
        signed_hash_value: [u8; 2],
        signature: Vec<Mpi>,
    ) -> Self {
        Signature {
            packet_version,
            config,
            signed_hash_value,
            signature,
        }
    }

    /// Returns what kind of signature this is.
    pub fn typ(&self) -> SignatureType {
        self.config.typ()
    }

    /// The version of this signature packet.
    pub fn version(&self) -> SignatureVersion {
        self.config.version
    }

    /// The used `HashAlgorithm`.
    pub fn hash_alg(&self) -> HashAlgorithm {
        self.config.hash_alg
    }

    /// The used `PublicKeyAlgorithm`.
    pub fn pub_alg(&self) -> PublicKeyAlgorithm {
        self.config.pub_alg
    }

    /// Does `key` match any issuer or issuer fingerprint of `sig`?
    /// If yes, we consider `key` a candidate to verify `sig` against.
    ///
    /// We also consider `key` a match for `sig` by default, if `sig`
    /// contains no issuer-related information at all.
    fn match_identity(sig: &Signature, key: &impl PublicKeyTrait) -> bool {
        let issuers = sig.issuer();
        let issuer_fps = sig.issuer_fingerprint();

        if issuers.is_empty() && issuer_fps.is_empty() {
            return true;
        }

        issuers.iter().any(|&key_id| key_id == &key.key_id())
            || issuer_fps
                .iter()
                .any(|fp| fp.as_ref() == key.fingerprint().as_bytes())
    }

    /// Structural pre-checks shared by all verification entry points.
    ///
    /// An unknown subpacket type with the critical bit set renders the
    /// whole signature unverifiable. When an evaluation time is given, an
    /// expired signature is rejected as well.
    fn ensure_verifiable(&self, at: Option<DateTime<Utc>>) -> Result<()> {
        for p in self.config.subpackets() {
            if p.is_critical {
                match p.data {
                    SubpacketData::Other(n, _) | SubpacketData::Experimental(n, _) => {
                        return Err(Error::CriticalSubpacketUnknown { typ: n });
                    }
                    _ => {}
                }
            }
        }

        if let Some(at) = at {
            if self.is_expired_at(at) {
                return Err(Error::SignatureExpired);
            }
        }

        Ok(())
    }

    /// Quick-check comparison followed by the asymmetric primitive.
    ///
    /// The two stored hash bytes are compared first, a mismatch never
    /// reaches the primitive.
    fn finish_verification(&self, key: &impl PublicKeyTrait, hash: &[u8]) -> Result<()> {
        if self.signed_hash_value[..] != hash[0..2] {
            return Err(Error::VerificationFailed {
                reason: "invalid signed hash value".to_string(),
            });
        }

        key.verify_signature(self.config.hash_alg, hash, &self.signature)
    }

    /// Verify this signature over the given input data.
    ///
    /// Expiry is evaluated at the current time; use [`Signature::verify_dated`]
    /// to evaluate at a different time, or to skip the expiry check.
    pub fn verify<R>(&self, key: &impl PublicKeyTrait, data: R) -> Result<()>
    where
        R: Read,
    {
        self.verify_dated(key, data, Some(Utc::now()))
    }

    /// Verify this signature over the given input data, evaluating expiry
    /// at `at`. Passing `None` skips the expiry check.
    pub fn verify_dated<R>(
        &self,
        key: &impl PublicKeyTrait,
        data: R,
        at: Option<DateTime<Utc>>,
    ) -> Result<()>
    where
        R: Read,
    {
        self.ensure_verifiable(at)?;

        if !Self::match_identity(self, key) {
            return Err(Error::VerificationFailed {
                reason: format!(
                    "no matching issuer or issuer fingerprint for key {:?}",
                    key.key_id()
                ),
            });
        }

        let mut hasher = self.config.hash_alg.new_hasher()?;

        self.config.hash_data_to_sign(&mut hasher, data)?;
        let len = self.config.hash_signature_data(&mut hasher)?;
        hasher.update(&self.config.trailer(len)?);

        let hash = hasher.finalize();
        self.finish_verification(key, &hash)
    }

    /// Verifies a certification signature type (for self-signatures).
    pub fn verify_certification(
        &self,
        key: &impl PublicKeyTrait,
        tag: Tag,
        id: &impl Serialize,
    ) -> Result<()> {
        self.verify_third_party_certification(&key, &key, tag, id)
    }

    /// Verifies a certification signature type (for third-party signatures).
    pub fn verify_third_party_certification(
        &self,
        signee: &impl PublicKeyTrait,
        signer: &impl PublicKeyTrait,
        tag: Tag,
        id: &impl Serialize,
    ) -> Result<()> {
        debug!("verifying certification {:?} {:#?}", signee.key_id(), self);

        self.ensure_verifiable(None)?;

        if !Self::match_identity(self, signer) {
            return Err(Error::VerificationFailed {
                reason: format!(
                    "no matching issuer or issuer fingerprint for key {:?}",
                    signer.key_id()
                ),
            });
        }

        let mut hasher = self.config.hash_alg.new_hasher()?;

        // the key of the signee
        hash_key_material(&mut hasher, signee)?;
        // the identity packet being certified
        hash_identity(self.config.version, &mut hasher, tag, id)?;

        let len = self.config.hash_signature_data(&mut hasher)?;
        hasher.update(&self.config.trailer(len)?);

        let hash = hasher.finalize();
        self.finish_verification(signer, &hash)
    }

    /// Verifies a subkey binding (which binds a subkey to the primary key).
    ///
    /// "Subkey Binding Signature (type ID 0x18)"
    pub fn verify_key_binding(
        &self,
        signer: &impl PublicKeyTrait,
        signee: &impl PublicKeyTrait,
    ) -> Result<()> {
        self.verify_key_binding_internal(signer, signee, false)
    }

    /// Verifies a primary key binding signature, or "back signature"
    /// (which links the primary to a signing subkey).
    ///
    /// "Primary Key Binding Signature (type ID 0x19)"
    pub fn verify_primary_key_binding(
        &self,
        signer: &impl PublicKeyTrait,
        signee: &impl PublicKeyTrait,
    ) -> Result<()> {
        self.verify_key_binding_internal(signer, signee, true)
    }

    /// Verify key binding signatures.
    ///
    /// - when backsig is false: verify a "Subkey Binding Signature (type ID 0x18)"
    /// - when backsig is true: verify a "Primary Key Binding Signature (type ID 0x19)"
    fn verify_key_binding_internal(
        &self,
        signer: &impl PublicKeyTrait,
        signee: &impl PublicKeyTrait,
        backsig: bool,
    ) -> Result<()> {
        debug!(
            "verifying key binding: {:#?} - {:#?} - {:#?} (backsig: {})",
            self, signer, signee, backsig
        );

        self.ensure_verifiable(None)?;

        let mut hasher = self.config.hash_alg.new_hasher()?;

        // Hash the two keys, primary first:
        // - for a regular binding signature the signer is the primary key
        // - for a back signature the signee is the primary key
        if !backsig {
            hash_key_material(&mut hasher, signer)?;
            hash_key_material(&mut hasher, signee)?;
        } else {
            hash_key_material(&mut hasher, signee)?;
            hash_key_material(&mut hasher, signer)?;
        }

        let len = self.config.hash_signature_data(&mut hasher)?;
        hasher.update(&self.config.trailer(len)?);

        let hash = hasher.finalize();
        self.finish_verification(signer, &hash)
    }

    /// Verifies a direct key signature or a revocation.
    pub fn verify_key(&self, key: &impl PublicKeyTrait) -> Result<()> {
        debug!("verifying key (revocation): {:#?} - {:#?}", self, key);

        self.ensure_verifiable(None)?;

        if !Self::match_identity(self, key) {
            return Err(Error::VerificationFailed {
                reason: format!(
                    "no matching issuer or issuer fingerprint for key {:?}",
                    key.key_id()
                ),
            });
        }

        let mut hasher = self.config.hash_alg.new_hasher()?;

        hash_key_material(&mut hasher, key)?;

        let len = self.config.hash_signature_data(&mut hasher)?;
        hasher.update(&self.config.trailer(len)?);

        let hash = hasher.finalize();
        self.finish_verification(key, &hash)
    }

    /// Returns if the signature is a certification or not.
    pub fn is_certification(&self) -> bool {
        self.config.is_certification()
    }

    /// All subpackets of the given type, hashed before unhashed, in their
    /// original order.
    pub fn subpackets_of_type(
        &self,
        typ: SubpacketType,
    ) -> impl Iterator<Item = &Subpacket> + '_ {
        self.config
            .subpackets()
            .filter(move |p| p.data.typ() == typ)
    }

    /// The time the signature was created.
    ///
    /// v3 signatures carry this as a direct field, v4 signatures in a
    /// subpacket; the hashed area wins over the unhashed one.
    pub fn created(&self) -> Option<&DateTime<Utc>> {
        self.config.created()
    }

    pub fn issuer(&self) -> Vec<&KeyId> {
        self.config.issuer()
    }

    pub fn issuer_fingerprint(&self) -> Vec<&Bytes> {
        self.config.issuer_fingerprint()
    }

    pub fn key_expiration_time(&self) -> Option<&Duration> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::KeyExpirationTime(d) => Some(d),
            _ => None,
        })
    }

    pub fn signature_expiration_time(&self) -> Option<&Duration> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::SignatureExpirationTime(d) => Some(d),
            _ => None,
        })
    }

    /// The absolute time at which this signature stops being valid,
    /// derived from the creation time and the expiration subpacket.
    /// v3 signatures never expire.
    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        let expiration = self.signature_expiration_time()?;
        let created = self.created()?;
        Some(*created + *expiration)
    }

    /// Is this signature expired, evaluated at the current time?
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Is this signature expired, evaluated at the given time?
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expiration_date().is_some_and(|expires| at > expires)
    }

    pub fn preferred_symmetric_algs(&self) -> &[SymmetricKeyAlgorithm] {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::PreferredSymmetricAlgorithms(d) => Some(&d[..]),
                _ => None,
            })
            .unwrap_or(&[][..])
    }

    pub fn preferred_hash_algs(&self) -> &[HashAlgorithm] {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::PreferredHashAlgorithms(d) => Some(&d[..]),
                _ => None,
            })
            .unwrap_or(&[][..])
    }

    pub fn preferred_compression_algs(&self) -> &[CompressionAlgorithm] {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::PreferredCompressionAlgorithms(d) => Some(&d[..]),
                _ => None,
            })
            .unwrap_or(&[][..])
    }

    pub fn key_server_prefs(&self) -> &[u8] {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::KeyServerPreferences(d) => Some(&d[..]),
                _ => None,
            })
            .unwrap_or(&[][..])
    }

    fn key_flags_opt(&self) -> Option<KeyFlags> {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::KeyFlags(d) => Some(d[..].into()),
                _ => None,
            })
    }

    pub fn key_flags(&self) -> KeyFlags {
        self.key_flags_opt().unwrap_or_default()
    }

    pub fn features(&self) -> &[u8] {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::Features(d) => Some(&d[..]),
                _ => None,
            })
            .unwrap_or(&[][..])
    }

    pub fn revocation_reason_code(&self) -> Option<&RevocationCode> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::RevocationReason(code, _) => Some(code),
            _ => None,
        })
    }

    pub fn revocation_reason_string(&self) -> Option<&BStr> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::RevocationReason(_, reason) => Some(reason.as_ref()),
            _ => None,
        })
    }

    /// Does this signature mark its user id as the primary one?
    pub fn is_primary_user_id(&self) -> bool {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::IsPrimary(d) => Some(*d),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn is_revocable(&self) -> bool {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::Revocable(d) => Some(*d),
                _ => None,
            })
            .unwrap_or(true)
    }

    pub fn embedded_signature(&self) -> Option<&Signature> {
        // Data from both the hashed and the unhashed area is considered,
        // because the embedded signature is cryptographically secured on
        // its own.
        self.config.subpackets().find_map(|p| match &p.data {
            SubpacketData::EmbeddedSignature(d) => Some(&**d),
            _ => None,
        })
    }

    pub fn preferred_key_server(&self) -> Option<&str> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::PreferredKeyServer(d) => Some(d.as_str()),
            _ => None,
        })
    }

    pub fn notations(&self) -> Vec<&Notation> {
        self.config
            .hashed_subpackets
            .iter()
            .filter_map(|p| match &p.data {
                SubpacketData::Notation(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    pub fn revocation_key(&self) -> Option<&RevocationKey> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::RevocationKey(d) => Some(d),
            _ => None,
        })
    }

    /// Gets the user id of the signer
    ///
    /// Note that the user id may not be valid utf-8, if it was created
    /// using a different encoding. But since the RFC describes every
    /// text as utf-8 it is up to the caller whether to error on non utf-8 data.
    pub fn signers_userid(&self) -> Option<&BStr> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::SignersUserID(d) => Some(d.as_ref()),
            _ => None,
        })
    }

    pub fn policy_uri(&self) -> Option<&str> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::PolicyURI(d) => Some(d.as_ref()),
            _ => None,
        })
    }

    pub fn trust_signature(&self) -> Option<(u8, u8)> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::TrustSignature(depth, value) => Some((*depth, *value)),
            _ => None,
        })
    }

    pub fn regular_expression(&self) -> Option<&BStr> {
        self.config.hashed_subpackets.iter().find_map(|p| match &p.data {
            SubpacketData::RegularExpression(d) => Some(d.as_ref()),
            _ => None,
        })
    }

    pub fn exportable_certification(&self) -> bool {
        self.config
            .hashed_subpackets
            .iter()
            .find_map(|p| match &p.data {
                SubpacketData::ExportableCertification(d) => Some(*d),
                _ => None,
            })
            .unwrap_or(true)
    }

    /// May the key vouched for by this signature be used to sign messages?
    ///
    /// Key flag subpackets win when present; without them the signature
    /// type and the algorithm capability decide. Flags are advisory
    /// metadata, authenticated only through this signature's own validity.
    pub fn can_be_used_to_sign(&self) -> bool {
        match self.key_flags_opt() {
            Some(flags) => flags.sign(),
            None => {
                matches!(
                    self.typ(),
                    SignatureType::Binary | SignatureType::Text | SignatureType::Standalone
                ) && self.config.pub_alg.can_sign()
            }
        }
    }

    /// May the key vouched for by this signature be used to encrypt?
    pub fn can_be_used_to_encrypt(&self) -> bool {
        match self.key_flags_opt() {
            Some(flags) => flags.encrypt_comms() || flags.encrypt_storage(),
            None => self.config.pub_alg.can_encrypt(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SignatureVersion {
    /// Deprecated
    V2 = 2,
    V3 = 3,
    V4 = 4,

    #[num_enum(catch_all)]
    Other(u8),
}

impl Default for SignatureVersion {
    fn default() -> Self {
        Self::V4
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SignatureType {
    /// Signature of a binary document.
    /// This means the signer owns it, created it, or certifies that it has not been modified.
    Binary = 0x00,
    /// Signature of a canonical text document.
    /// The signature is calculated over the text data with its line endings
    /// converted to `<CR><LF>`.
    Text = 0x01,
    /// Standalone signature.
    /// This signature is a signature of only its own subpacket contents.
    /// It is calculated identically to a signature over a zero-length
    /// binary document.
    Standalone = 0x02,
    /// Generic certification of a User ID and Public-Key packet.
    /// The issuer of this certification does not make any particular
    /// assertion as to how well the certifier has checked that the owner
    /// of the key is in fact the person described by the User ID.
    CertGeneric = 0x10,
    /// Persona certification of a User ID and Public-Key packet.
    /// The issuer of this certification has not done any verification of
    /// the claim that the owner of this key is the User ID specified.
    CertPersona = 0x11,
    /// Casual certification of a User ID and Public-Key packet.
    /// The issuer of this certification has done some casual
    /// verification of the claim of identity.
    CertCasual = 0x12,
    /// Positive certification of a User ID and Public-Key packet.
    /// The issuer of this certification has done substantial
    /// verification of the claim of identity.
    CertPositive = 0x13,
    /// Subkey Binding Signature.
    /// A statement by the top-level signing key that indicates that it owns
    /// the subkey. This signature is calculated directly on the primary key
    /// and subkey, and not on any User ID or other packets.
    SubkeyBinding = 0x18,
    /// Primary Key Binding Signature.
    /// A statement by a signing subkey, indicating that it is owned by the
    /// primary key. Calculated the same way as a 0x18 signature.
    KeyBinding = 0x19,
    /// Signature directly on a key.
    /// This signature is calculated directly on a key. It binds the
    /// information in the Signature subpackets to the key.
    Key = 0x1F,
    /// Key revocation signature.
    /// The signature is calculated directly on the key being revoked.
    KeyRevocation = 0x20,
    /// Subkey revocation signature.
    /// The signature is calculated directly on the subkey being revoked.
    SubkeyRevocation = 0x28,
    /// Certification revocation signature.
    /// This signature revokes an earlier User ID certification signature
    /// (signature class 0x10 through 0x13) or direct-key signature (0x1F).
    CertRevocation = 0x30,
    /// Timestamp signature.
    /// This signature is only meaningful for the timestamp contained in it.
    Timestamp = 0x40,
    /// Third-Party Confirmation signature.
    /// This signature is a signature over some other OpenPGP Signature
    /// packet(s). It is analogous to a notary seal on the signed data.
    ThirdParty = 0x50,

    #[num_enum(catch_all)]
    Other(u8),
}

impl SignatureType {
    /// Is this a certification over a key and user id?
    pub fn is_certification(&self) -> bool {
        matches!(
            self,
            SignatureType::CertGeneric
                | SignatureType::CertPersona
                | SignatureType::CertCasual
                | SignatureType::CertPositive
                | SignatureType::CertRevocation
        )
    }
}

bitfield! {
    #[derive(Default, PartialEq, Eq, Copy, Clone)]
    pub struct KeyFlags(u8);
    impl Debug;

    pub certify, set_certify: 0;
    pub sign, set_sign: 1;
    pub encrypt_comms, set_encrypt_comms: 2;
    pub encrypt_storage, set_encrypt_storage: 3;
    pub shared, set_shared: 4;
    pub authentication, set_authentication: 5;
    pub group, set_group: 7;
}

impl<'a> From<&'a [u8]> for KeyFlags {
    fn from(other: &'a [u8]) -> Self {
        if other.is_empty() {
            Default::default()
        } else {
            KeyFlags(other[0])
        }
    }
}

impl From<KeyFlags> for smallvec::SmallVec<[u8; 1]> {
    fn from(flags: KeyFlags) -> Self {
        smallvec::smallvec![flags.0]
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Notation {
    pub readable: bool,
    pub name: BString,
    pub value: BString,
}

/// Codes for revocation reasons
#[derive(Debug, PartialEq, Eq, Copy, Clone, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum RevocationCode {
    /// No reason specified (key revocations or cert revocations)
    NoReason = 0,
    /// Key is superseded (key revocations)
    KeySuperseded = 1,
    /// Key material has been compromised (key revocations)
    KeyCompromised = 2,
    /// Key is retired and no longer used (key revocations)
    KeyRetired = 3,
    /// User ID information is no longer valid (cert revocations)
    CertUserIdInvalid = 32,

    /// Undefined code
    #[num_enum(catch_all)]
    Other(u8),
}

impl PacketTrait for Signature {
    fn packet_version(&self) -> PacketHeaderVersion {
        self.packet_version
    }

    fn tag(&self) -> Tag {
        Tag::Signature
    }
}
