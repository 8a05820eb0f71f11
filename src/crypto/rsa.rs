use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};

use crate::crypto::hash::HashAlgorithm;
use crate::errors::Result;
use crate::types::Mpi;

/// Maps a hash algorithm to the matching PKCS#1 v1.5 digest-info scheme.
fn pkcs1v15(hash: HashAlgorithm) -> Result<Pkcs1v15Sign> {
    let scheme = match hash {
        HashAlgorithm::Md5 => Pkcs1v15Sign::new::<md5::Md5>(),
        HashAlgorithm::Sha1 => Pkcs1v15Sign::new::<sha1::Sha1>(),
        HashAlgorithm::Ripemd160 => Pkcs1v15Sign::new::<ripemd::Ripemd160>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<sha2::Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<sha2::Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<sha2::Sha512>(),
        HashAlgorithm::Sha224 => Pkcs1v15Sign::new::<sha2::Sha224>(),
        HashAlgorithm::Sha3_256 => Pkcs1v15Sign::new::<sha3::Sha3_256>(),
        HashAlgorithm::Sha3_512 => Pkcs1v15Sign::new::<sha3::Sha3_512>(),
        _ => unimplemented_err!("pkcs1v15 with {:?}", hash),
    };

    Ok(scheme)
}

/// Sign using RSA, with PKCS1v15 padding.
pub fn sign(key: &RsaPrivateKey, hash: HashAlgorithm, digest: &[u8]) -> Result<Vec<Mpi>> {
    let sig = key.sign(pkcs1v15(hash)?, digest)?;

    Ok(vec![Mpi::from_slice(&sig)])
}

/// Verify a RSA, PKCS1v15 padded signature.
pub fn verify(key: &RsaPublicKey, hash: HashAlgorithm, hashed: &[u8], sig: &[Mpi]) -> Result<()> {
    ensure_eq!(sig.len(), 1, "RSA signature must have a single MPI");

    // MPI encoding strips leading zeros, the primitive expects exactly
    // modulus-sized input
    let raw = sig[0].as_bytes();
    let size = key.size();
    ensure!(raw.len() <= size, "signature longer than the modulus");

    let mut padded = vec![0u8; size - raw.len()];
    padded.extend_from_slice(raw);

    key.verify(pkcs1v15(hash)?, hashed, &padded)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_rsa_sign_verify() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let key = RsaPrivateKey::new(&mut rng, 1024).unwrap();
        let pub_key = RsaPublicKey::from(&key);

        let digest = HashAlgorithm::Sha256.digest(b"hello world").unwrap();
        let sig = sign(&key, HashAlgorithm::Sha256, &digest).unwrap();
        assert_eq!(sig.len(), 1);

        verify(&pub_key, HashAlgorithm::Sha256, &digest, &sig).unwrap();

        let other_digest = HashAlgorithm::Sha256.digest(b"hello worle").unwrap();
        assert!(verify(&pub_key, HashAlgorithm::Sha256, &other_digest, &sig).is_err());
    }
}
