//! EdDSA in the legacy OpenPGP framing (algorithm 22, curve Ed25519).
//!
//! The public point is stored `0x40`-prefixed in compressed form, the
//! signature is split into two MPIs holding R and S.

use signature::{Signer, Verifier};

use crate::errors::Result;
use crate::types::Mpi;

/// Sign the given digest with Ed25519.
pub fn sign(secret: &[u8; 32], digest: &[u8]) -> Result<Vec<Mpi>> {
    let key = ed25519_dalek::SigningKey::from_bytes(secret);

    let signature = key.sign(digest);
    let bytes = signature.to_bytes();

    let r = &bytes[..32];
    let s = &bytes[32..];

    Ok(vec![Mpi::from_slice(r), Mpi::from_slice(s)])
}

/// Verify an EdDSA signature against a `0x40`-prefixed public point.
pub fn verify(q: &[u8], hashed: &[u8], sig: &[Mpi]) -> Result<()> {
    ensure_eq!(q.len(), 33, "invalid Q (len)");
    ensure_eq!(q[0], 0x40, "invalid Q (prefix)");
    ensure_eq!(sig.len(), 2, "EdDSA signature must have two MPIs");

    let pk: ed25519_dalek::VerifyingKey = q[1..].try_into()?;

    // MPI encoding strips leading zeros, R and S are fixed 32 byte values
    let r = sig[0].as_bytes();
    let s = sig[1].as_bytes();
    ensure!(r.len() <= 32, "invalid R (len)");
    ensure!(s.len() <= 32, "invalid S (len)");

    let mut bytes = [0u8; 64];
    bytes[32 - r.len()..32].copy_from_slice(r);
    bytes[64 - s.len()..].copy_from_slice(s);

    let signature = ed25519_dalek::Signature::from_bytes(&bytes);
    pk.verify(hashed, &signature)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_eddsa_sign_verify() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);

        let signing_key = ed25519_dalek::SigningKey::from_bytes(&secret);
        let mut q = Vec::with_capacity(33);
        q.push(0x40);
        q.extend_from_slice(&signing_key.verifying_key().to_bytes());

        let digest = crate::crypto::hash::HashAlgorithm::Sha256
            .digest(b"hello world")
            .unwrap();
        let sig = sign(&secret, &digest).unwrap();
        assert_eq!(sig.len(), 2);

        verify(&q, &digest, &sig).unwrap();
        assert!(verify(&q, &digest[1..], &sig).is_err());
    }
}
