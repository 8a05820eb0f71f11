use crate::errors::Result;
use crate::types::KeyVersion;

/// Represents a key fingerprint.
#[derive(Clone, Eq, PartialEq, derive_more::Debug)]
pub enum Fingerprint {
    #[debug("{}", hex::encode(_0))]
    V2([u8; 16]),
    #[debug("{}", hex::encode(_0))]
    V3([u8; 16]),
    #[debug("{}", hex::encode(_0))]
    V4([u8; 20]),

    /// Fingerprint with unknown key version
    #[debug("{}", hex::encode(_0))]
    Other(Vec<u8>),
}

impl Fingerprint {
    pub fn new(version: KeyVersion, fp: &[u8]) -> Result<Self> {
        let fp = match version {
            KeyVersion::V2 => Fingerprint::V2(
                fp.try_into()
                    .map_err(|_| format_err!("invalid v2 fingerprint length {}", fp.len()))?,
            ),
            KeyVersion::V3 => Fingerprint::V3(
                fp.try_into()
                    .map_err(|_| format_err!("invalid v3 fingerprint length {}", fp.len()))?,
            ),
            KeyVersion::V4 => Fingerprint::V4(
                fp.try_into()
                    .map_err(|_| format_err!("invalid v4 fingerprint length {}", fp.len()))?,
            ),
            KeyVersion::Other(_) => Fingerprint::Other(fp.to_vec()),
        };

        Ok(fp)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::V2(_) | Self::V3(_) => 16,
            Self::V4(_) => 20,
            Self::Other(fp) => fp.len(),
        }
    }

    pub fn version(&self) -> Option<KeyVersion> {
        match self {
            Self::V2(_) => Some(KeyVersion::V2),
            Self::V3(_) => Some(KeyVersion::V3),
            Self::V4(_) => Some(KeyVersion::V4),
            Self::Other(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::V2(fp) | Self::V3(fp) => &fp[..],
            Self::V4(fp) => &fp[..],
            Self::Other(fp) => fp,
        }
    }
}
