mod common;

use bytes::Bytes;
use chrono::{Duration, TimeZone, Utc};
use hex_literal::hex;
use pretty_assertions::assert_eq;

use opgp::crypto::hash::HashAlgorithm;
use opgp::crypto::public_key::PublicKeyAlgorithm;
use opgp::errors::Error;
use opgp::packet::{
    Signature, SignatureConfig, SignatureType, SignatureVersion, Subpacket, SubpacketData,
    UserId,
};
use opgp::ser::Serialize;
use opgp::types::{KeyId, PublicKeyTrait, SecretKeyTrait, Tag};

use common::{CountingKey, TestEddsaKey, TestRsaKey};

#[test]
fn sign_and_verify_binary_rsa_sha256() {
    let key = TestRsaKey::generate(1);

    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );

    let sig = cfg
        .sign(&key, String::new, &b"hello world"[..])
        .expect("signing");

    // the mandatory subpackets got appended
    assert!(sig.created().is_some());
    assert_eq!(sig.issuer(), vec![&key.key_id()]);

    sig.verify(&key, &b"hello world"[..]).expect("verification");

    // flipping any single byte of the input must fail the verification
    let mut corrupted = b"hello world".to_vec();
    for i in 0..corrupted.len() {
        corrupted[i] ^= 0x01;
        let res = sig.verify(&key, &corrupted[..]);
        assert!(
            matches!(res, Err(Error::VerificationFailed { .. })),
            "byte {} flip must fail, got {:?}",
            i,
            res
        );
        corrupted[i] ^= 0x01;
    }
}

#[test]
fn sign_and_verify_after_wire_roundtrip() {
    let key = TestRsaKey::generate(2);

    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    let sig = cfg.sign(&key, String::new, &b"wire data"[..]).unwrap();

    let bytes = sig.to_bytes().unwrap();
    let parsed = Signature::from_buf(Default::default(), Bytes::from(bytes)).unwrap();

    parsed.verify(&key, &b"wire data"[..]).expect("verification");
    assert_eq!(parsed.typ(), SignatureType::Binary);
    assert_eq!(parsed.issuer(), vec![&key.key_id()]);
}

#[test]
fn sign_text_normalizes_line_endings() {
    let key = TestRsaKey::generate(3);

    let cfg = SignatureConfig::v4(
        SignatureType::Text,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    let sig = cfg
        .sign(&key, String::new, &b"line one\nline two\n"[..])
        .unwrap();

    // the same text with different line endings verifies fine
    sig.verify(&key, &b"line one\r\nline two\r\n"[..])
        .expect("crlf form");
    sig.verify(&key, &b"line one\nline two\n"[..])
        .expect("lf form");

    // different text does not
    assert!(sig.verify(&key, &b"line one\nline 2\n"[..]).is_err());
}

#[test]
fn wrong_passphrase_is_surfaced() {
    let key = TestRsaKey::with_passphrase(4, "correct horse");

    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );

    let res = cfg
        .clone()
        .sign(&key, || "battery staple".to_string(), &b"data"[..]);
    assert!(matches!(res, Err(Error::WrongPassphrase)));

    cfg.sign(&key, || "correct horse".to_string(), &b"data"[..])
        .expect("unlocked signing");
}

#[test]
fn algorithm_mismatch_is_missing_key_material() {
    let key = TestRsaKey::generate(16);

    // the config declares EdDSA, the key only holds RSA material
    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::EdDSALegacy,
        HashAlgorithm::Sha256,
    );
    let res = cfg.sign(&key, String::new, &b"data"[..]);
    assert!(matches!(res, Err(Error::KeyMaterialMissing)));
}

#[test]
fn quick_check_short_circuits_before_primitive() {
    let key = TestRsaKey::generate(5);

    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    let mut sig = cfg.sign(&key, String::new, &b"payload"[..]).unwrap();

    // sanity: with an intact quick check the primitive runs exactly once
    let counting = CountingKey::new(&key);
    sig.verify(&counting, &b"payload"[..]).unwrap();
    assert_eq!(counting.verify_calls(), 1);

    // a corrupted quick check fails without invoking the primitive
    sig.signed_hash_value = [
        sig.signed_hash_value[0].wrapping_add(1),
        sig.signed_hash_value[1],
    ];
    let counting = CountingKey::new(&key);
    let res = sig.verify(&counting, &b"payload"[..]);
    assert!(matches!(res, Err(Error::VerificationFailed { .. })));
    assert_eq!(counting.verify_calls(), 0);
}

#[test]
fn unknown_critical_subpacket_invalidates() {
    let key = TestRsaKey::generate(6);

    let mut cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    cfg.hashed_subpackets.push(
        Subpacket::critical(SubpacketData::Other(70, Bytes::from_static(b"mystery"))).unwrap(),
    );

    // the signature itself is cryptographically sound
    let sig = cfg.sign(&key, String::new, &b"data"[..]).unwrap();

    let res = sig.verify(&key, &b"data"[..]);
    assert!(matches!(res, Err(Error::CriticalSubpacketUnknown { typ: 70 })));

    // the same subpacket without the critical bit is ignored semantically
    let mut cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    cfg.hashed_subpackets.push(
        Subpacket::regular(SubpacketData::Other(70, Bytes::from_static(b"mystery"))).unwrap(),
    );
    let sig = cfg.sign(&key, String::new, &b"data"[..]).unwrap();
    sig.verify(&key, &b"data"[..]).expect("non critical unknown");
}

#[test]
fn expiration_boundaries() {
    let key = TestRsaKey::generate(7);

    let created = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
    let expires_in = Duration::seconds(3600);

    let mut cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    cfg.hashed_subpackets
        .push(Subpacket::regular(SubpacketData::SignatureCreationTime(created)).unwrap());
    cfg.hashed_subpackets
        .push(Subpacket::regular(SubpacketData::SignatureExpirationTime(expires_in)).unwrap());

    let sig = cfg.sign(&key, String::new, &b"data"[..]).unwrap();

    assert_eq!(sig.expiration_date(), Some(created + expires_in));
    assert!(!sig.is_expired_at(created + Duration::seconds(3599)));
    assert!(!sig.is_expired_at(created + Duration::seconds(3600)));
    assert!(sig.is_expired_at(created + Duration::seconds(3601)));

    // verification honors the expiry unless the caller opts out
    let late = created + Duration::seconds(7200);
    let res = sig.verify_dated(&key, &b"data"[..], Some(late));
    assert!(matches!(res, Err(Error::SignatureExpired)));

    sig.verify_dated(&key, &b"data"[..], None)
        .expect("expiry check skipped");
    sig.verify_dated(&key, &b"data"[..], Some(created + Duration::seconds(60)))
        .expect("not yet expired");
}

#[test]
fn parse_v3_fixed_layout() {
    // version 3, hashed length 5, type 0x00, timestamp 1234567890,
    // key id, RSA, SHA1, quick check, one RSA signature MPI (13 bits)
    let raw = hex!("030500499602d211223344556677880102abcd000d1fff").to_vec();

    let sig = Signature::from_buf(Default::default(), Bytes::from(raw.clone())).unwrap();

    assert_eq!(sig.version(), SignatureVersion::V3);
    assert_eq!(sig.typ(), SignatureType::Binary);
    assert_eq!(
        sig.created(),
        Some(&Utc.timestamp_opt(1_234_567_890, 0).unwrap())
    );
    assert_eq!(
        sig.issuer(),
        vec![&KeyId::from_slice(&[0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]).unwrap()]
    );
    assert_eq!(sig.pub_alg(), PublicKeyAlgorithm::RSA);
    assert_eq!(sig.hash_alg(), HashAlgorithm::Sha1);
    assert_eq!(sig.signed_hash_value, [0xAB, 0xCD]);
    assert_eq!(sig.signature.len(), 1);
    assert_eq!(sig.signature[0].bit_len(), 13);
    assert_eq!(sig.signature[0].as_bytes(), &[0x1F, 0xFF]);

    // v3 signatures carry no subpackets and never expire
    assert!(sig.expiration_date().is_none());
    assert!(!sig.is_expired());

    // byte exact round-trip
    assert_eq!(sig.to_bytes().unwrap(), raw);
}

#[test]
fn subkey_binding_hashes_both_keys() {
    let primary = TestEddsaKey::generate(8);
    let subkey = TestEddsaKey::generate(9);

    let cfg = SignatureConfig::v4(
        SignatureType::SubkeyBinding,
        PublicKeyAlgorithm::EdDSALegacy,
        HashAlgorithm::Sha256,
    );
    let sig = cfg
        .sign_key_binding(&primary, String::new, &subkey)
        .expect("binding signature");

    assert_eq!(sig.typ(), SignatureType::SubkeyBinding);
    sig.verify_key_binding(&primary, &subkey)
        .expect("binding verification");

    // omitting the subkey (direct key signature shape) must fail
    assert!(sig.verify_key(&primary).is_err());
    // so must swapping the order of the two key blocks
    assert!(sig.verify_key_binding(&subkey, &primary).is_err());
}

#[test]
fn certification_over_user_id() {
    let key = TestRsaKey::generate(10);
    let user_id = UserId::from_str(Default::default(), "Alice <alice@example.com>");

    let mut cfg = SignatureConfig::v4(
        SignatureType::CertPositive,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    cfg.hashed_subpackets
        .push(Subpacket::regular(SubpacketData::IsPrimary(true)).unwrap());

    let sig = cfg
        .sign_certification(&key, String::new, Tag::UserId, &user_id)
        .expect("certification");

    assert!(sig.is_certification());
    assert!(sig.is_primary_user_id());

    sig.verify_certification(&key, Tag::UserId, &user_id)
        .expect("certification verification");

    // a different user id must not verify
    let other_id = UserId::from_str(Default::default(), "Mallory <mallory@example.com>");
    assert!(sig
        .verify_certification(&key, Tag::UserId, &other_id)
        .is_err());

    // signing a certification over literal data makes no sense
    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    assert!(cfg
        .sign_certification(&key, String::new, Tag::UserId, &user_id)
        .is_err());
}

#[test]
fn verify_rejects_foreign_issuer() {
    let key = TestRsaKey::generate(11);
    let other = TestRsaKey::generate(12);

    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    let sig = cfg.sign(&key, String::new, &b"data"[..]).unwrap();

    // the issuer subpacket names `key`, so `other` is not even tried
    let res = sig.verify(&other, &b"data"[..]);
    assert!(matches!(res, Err(Error::VerificationFailed { .. })));
}

#[test]
fn v3_sign_and_verify() {
    let key = TestRsaKey::generate(13);

    let created = Utc.timestamp_opt(1_400_000_000, 0).unwrap();
    let cfg = SignatureConfig::v3(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
        created,
        key.key_id(),
    );

    let sig = cfg.sign(&key, String::new, &b"old style"[..]).unwrap();
    assert_eq!(sig.created(), Some(&created));

    sig.verify(&key, &b"old style"[..]).expect("verification");
    assert!(sig.verify(&key, &b"new style"[..]).is_err());

    // wire roundtrip keeps it verifiable
    let parsed =
        Signature::from_buf(Default::default(), Bytes::from(sig.to_bytes().unwrap())).unwrap();
    parsed.verify(&key, &b"old style"[..]).expect("verification");
}

/// A received hashed area is replayed byte for byte when the signed data is
/// rebuilt. A non canonical subpacket length encoding would change under
/// re-encoding and break the signature, so this exercises the replay path
/// end to end.
#[test]
fn non_canonical_subpacket_length_replays() {
    let key = TestEddsaKey::generate(14);

    // creation time subpacket, length 5 in the 5-octet encoding
    let mut hashed_area = vec![0xFF, 0x00, 0x00, 0x00, 0x05, 0x02];
    hashed_area.extend_from_slice(&1_600_000_000u32.to_be_bytes());

    // signature fields covered by the hash
    let mut tail = vec![
        0x04,
        SignatureType::Binary.into(),
        PublicKeyAlgorithm::EdDSALegacy.into(),
        HashAlgorithm::Sha256.into(),
    ];
    tail.extend_from_slice(&(hashed_area.len() as u16).to_be_bytes());
    tail.extend_from_slice(&hashed_area);

    // signed data: input, hashed material, trailer
    let mut signed_data = b"hello world".to_vec();
    signed_data.extend_from_slice(&tail);
    signed_data.extend_from_slice(&[0x04, 0xFF]);
    signed_data.extend_from_slice(&(tail.len() as u32).to_be_bytes());

    let digest = HashAlgorithm::Sha256.digest(&signed_data).unwrap();
    let mpis = key.create_signature(String::new, HashAlgorithm::Sha256, &digest).unwrap();

    // assemble the packet body
    let mut body = tail.clone();
    body.extend_from_slice(&0u16.to_be_bytes());
    body.extend_from_slice(&digest[..2]);
    for mpi in &mpis {
        mpi.to_writer(&mut body).unwrap();
    }

    let sig = Signature::from_buf(Default::default(), Bytes::from(body.clone())).unwrap();

    // the non canonical encoding survived the parse
    assert_eq!(
        sig.created(),
        Some(&Utc.timestamp_opt(1_600_000_000, 0).unwrap())
    );

    // and verification replays the original bytes
    sig.verify(&key, &b"hello world"[..]).expect("verification");

    // serialization is byte identical to the received packet body
    assert_eq!(sig.to_bytes().unwrap(), body);
}

#[test]
fn capability_flags() {
    let key = TestRsaKey::generate(15);

    // no key flags: the signature type and algorithm decide
    let cfg = SignatureConfig::v4(
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    let sig = cfg.sign(&key, String::new, &b"data"[..]).unwrap();
    assert!(sig.can_be_used_to_sign());
    assert!(sig.can_be_used_to_encrypt());

    // explicit key flags win
    let mut cfg = SignatureConfig::v4(
        SignatureType::SubkeyBinding,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
    );
    cfg.hashed_subpackets.push(
        Subpacket::regular(SubpacketData::KeyFlags(smallvec::smallvec![0x0C])).unwrap(),
    );
    let sig = cfg
        .sign_key_binding(&key, String::new, &key)
        .expect("binding");
    assert!(!sig.can_be_used_to_sign());
    assert!(sig.can_be_used_to_encrypt());
    assert!(sig.key_flags().encrypt_comms());
    assert!(sig.key_flags().encrypt_storage());
}
