use num_enum::{FromPrimitive, IntoPrimitive};

/// Available compression algorithms.
///
/// Only the identifiers are modeled here, they show up in algorithm
/// preference subpackets. The codecs themselves are not part of this crate.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-9.3>
#[derive(Debug, PartialEq, Eq, Clone, Copy, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum CompressionAlgorithm {
    Uncompressed = 0,
    ZIP = 1,
    ZLIB = 2,
    BZip2 = 3,

    /// Private experimental range (from OpenPGP)
    Private10 = 110,

    #[num_enum(catch_all)]
    Other(u8),
}
