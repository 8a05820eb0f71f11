//! Minimal in-memory keys backing the signature tests.
//!
//! Key packets live outside this crate, so the tests bring their own
//! implementations of the key traits, built on the crypto adapters.

use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use opgp::crypto::hash::HashAlgorithm;
use opgp::crypto::public_key::PublicKeyAlgorithm;
use opgp::crypto::{eddsa, rsa as rsa_adapter};
use opgp::errors::{Error, Result};
use opgp::ser::Serialize;
use opgp::types::{Fingerprint, KeyId, KeyVersion, Mpi, PublicKeyTrait, SecretKeyTrait};

const KEY_CREATION_TIME: u32 = 1_500_000_000;

fn v4_fingerprint(body: &[u8]) -> Fingerprint {
    let mut data = Vec::with_capacity(body.len() + 3);
    data.push(0x99);
    data.extend_from_slice(&(body.len() as u16).to_be_bytes());
    data.extend_from_slice(body);

    let digest = HashAlgorithm::Sha1.digest(&data).expect("sha1");
    Fingerprint::new(KeyVersion::V4, &digest).expect("fingerprint")
}

fn key_id_from(fp: &Fingerprint) -> KeyId {
    KeyId::from_slice(&fp.as_bytes()[12..]).expect("key id")
}

/// An RSA key pair with an optional passphrase "lock".
#[derive(Debug)]
pub struct TestRsaKey {
    secret: RsaPrivateKey,
    public: RsaPublicKey,
    passphrase: Option<String>,
}

impl TestRsaKey {
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let secret = RsaPrivateKey::new(&mut rng, 1024).expect("rsa key generation");
        let public = RsaPublicKey::from(&secret);

        TestRsaKey {
            secret,
            public,
            passphrase: None,
        }
    }

    pub fn with_passphrase(seed: u64, passphrase: &str) -> Self {
        let mut key = Self::generate(seed);
        key.passphrase = Some(passphrase.to_string());
        key
    }
}

impl PublicKeyTrait for TestRsaKey {
    fn version(&self) -> KeyVersion {
        KeyVersion::V4
    }

    fn algorithm(&self) -> PublicKeyAlgorithm {
        PublicKeyAlgorithm::RSA
    }

    fn key_id(&self) -> KeyId {
        key_id_from(&self.fingerprint())
    }

    fn fingerprint(&self) -> Fingerprint {
        v4_fingerprint(&self.hashable_body().expect("body"))
    }

    fn hashable_body(&self) -> Result<Bytes> {
        let mut buf = Vec::new();
        buf.push(0x04);
        buf.extend_from_slice(&KEY_CREATION_TIME.to_be_bytes());
        buf.push(PublicKeyAlgorithm::RSA.into());
        Mpi::from_slice(&self.public.n().to_bytes_be()).to_writer(&mut buf)?;
        Mpi::from_slice(&self.public.e().to_bytes_be()).to_writer(&mut buf)?;

        Ok(buf.into())
    }

    fn verify_signature(&self, hash: HashAlgorithm, data: &[u8], sig: &[Mpi]) -> Result<()> {
        rsa_adapter::verify(&self.public, hash, data, sig)
    }
}

impl SecretKeyTrait for TestRsaKey {
    fn create_signature<F>(&self, key_pw: F, hash: HashAlgorithm, data: &[u8]) -> Result<Vec<Mpi>>
    where
        F: FnOnce() -> String,
    {
        if let Some(expected) = &self.passphrase {
            if &key_pw() != expected {
                return Err(Error::WrongPassphrase);
            }
        }

        rsa_adapter::sign(&self.secret, hash, data)
    }
}

/// Curve OID for Ed25519 in the legacy key format (1.3.6.1.4.1.11591.15.1).
const ED25519_OID: [u8; 9] = [0x2B, 0x06, 0x01, 0x04, 0x01, 0xDA, 0x47, 0x0F, 0x01];

/// An Ed25519 key pair in the legacy framing.
#[derive(Debug)]
pub struct TestEddsaKey {
    secret: [u8; 32],
    /// `0x40`-prefixed compressed public point.
    q: Vec<u8>,
}

impl TestEddsaKey {
    pub fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);

        let signing_key = ed25519_dalek::SigningKey::from_bytes(&secret);
        let mut q = Vec::with_capacity(33);
        q.push(0x40);
        q.extend_from_slice(&signing_key.verifying_key().to_bytes());

        TestEddsaKey { secret, q }
    }
}

impl PublicKeyTrait for TestEddsaKey {
    fn version(&self) -> KeyVersion {
        KeyVersion::V4
    }

    fn algorithm(&self) -> PublicKeyAlgorithm {
        PublicKeyAlgorithm::EdDSALegacy
    }

    fn key_id(&self) -> KeyId {
        key_id_from(&self.fingerprint())
    }

    fn fingerprint(&self) -> Fingerprint {
        v4_fingerprint(&self.hashable_body().expect("body"))
    }

    fn hashable_body(&self) -> Result<Bytes> {
        let mut buf = Vec::new();
        buf.push(0x04);
        buf.extend_from_slice(&KEY_CREATION_TIME.to_be_bytes());
        buf.push(PublicKeyAlgorithm::EdDSALegacy.into());
        buf.push(ED25519_OID.len() as u8);
        buf.extend_from_slice(&ED25519_OID);
        Mpi::from_slice(&self.q).to_writer(&mut buf)?;

        Ok(buf.into())
    }

    fn verify_signature(&self, _hash: HashAlgorithm, data: &[u8], sig: &[Mpi]) -> Result<()> {
        eddsa::verify(&self.q, data, sig)
    }
}

impl SecretKeyTrait for TestEddsaKey {
    fn create_signature<F>(&self, _key_pw: F, _hash: HashAlgorithm, data: &[u8]) -> Result<Vec<Mpi>>
    where
        F: FnOnce() -> String,
    {
        eddsa::sign(&self.secret, data)
    }
}

/// Wraps a key and counts how often the asymmetric primitive is invoked.
#[derive(Debug)]
pub struct CountingKey<'a, K> {
    inner: &'a K,
    verify_calls: AtomicUsize,
}

impl<'a, K> CountingKey<'a, K> {
    pub fn new(inner: &'a K) -> Self {
        CountingKey {
            inner,
            verify_calls: AtomicUsize::new(0),
        }
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }
}

impl<K: PublicKeyTrait> PublicKeyTrait for CountingKey<'_, K> {
    fn version(&self) -> KeyVersion {
        self.inner.version()
    }

    fn algorithm(&self) -> PublicKeyAlgorithm {
        self.inner.algorithm()
    }

    fn key_id(&self) -> KeyId {
        self.inner.key_id()
    }

    fn fingerprint(&self) -> Fingerprint {
        self.inner.fingerprint()
    }

    fn hashable_body(&self) -> Result<Bytes> {
        self.inner.hashable_body()
    }

    fn verify_signature(&self, hash: HashAlgorithm, data: &[u8], sig: &[Mpi]) -> Result<()> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.verify_signature(hash, data, sig)
    }
}
