use dsa::{Signature, SigningKey, VerifyingKey};
use signature::hazmat::PrehashVerifier;

use crate::crypto::hash::HashAlgorithm;
use crate::errors::Result;
use crate::types::Mpi;

/// Sign using DSA, with deterministic RFC 6979 nonces.
pub fn sign(key: &SigningKey, hash: HashAlgorithm, digest: &[u8]) -> Result<Vec<Mpi>> {
    let signature = match hash {
        HashAlgorithm::Md5 => key.sign_prehashed_rfc6979::<md5::Md5>(digest),

        // sha1_checked does not implement BlockSizeUser, so the plain
        // implementation is used for nonce derivation here
        HashAlgorithm::Sha1 => key.sign_prehashed_rfc6979::<sha1::Sha1>(digest),

        HashAlgorithm::Ripemd160 => key.sign_prehashed_rfc6979::<ripemd::Ripemd160>(digest),
        HashAlgorithm::Sha256 => key.sign_prehashed_rfc6979::<sha2::Sha256>(digest),
        HashAlgorithm::Sha384 => key.sign_prehashed_rfc6979::<sha2::Sha384>(digest),
        HashAlgorithm::Sha512 => key.sign_prehashed_rfc6979::<sha2::Sha512>(digest),
        HashAlgorithm::Sha224 => key.sign_prehashed_rfc6979::<sha2::Sha224>(digest),
        HashAlgorithm::Sha3_256 => key.sign_prehashed_rfc6979::<sha3::Sha3_256>(digest),
        HashAlgorithm::Sha3_512 => key.sign_prehashed_rfc6979::<sha3::Sha3_512>(digest),
        _ => unimplemented_err!("hasher {:?}", hash),
    }?;

    Ok(vec![
        Mpi::from_slice(&signature.r().to_bytes_be()),
        Mpi::from_slice(&signature.s().to_bytes_be()),
    ])
}

/// Verify a DSA signature.
pub fn verify(key: &VerifyingKey, hashed: &[u8], sig: &[Mpi]) -> Result<()> {
    ensure_eq!(sig.len(), 2, "DSA signature must have two MPIs");

    let signature = Signature::from_components(sig[0].to_biguint(), sig[1].to_biguint())?;
    key.verify_prehash(hashed, &signature)?;

    Ok(())
}
