use std::io;

use byteorder::{BigEndian, WriteBytesExt};
use bytes::Bytes;
use num_bigint::BigUint;

use crate::errors::{Error, Result};
use crate::parsing::BufParsing;
use crate::ser::Serialize;

/// Number of bits we accept when reading or writing MPIs.
/// The value is the same as gnupgs.
const MAX_EXTERN_MPI_BITS: u16 = 16384;

/// Represents an owned multiprecision integer.
///
/// The declared bit count from the length prefix is kept next to the payload,
/// so a value that arrived with leading zero bits re-encodes to the exact
/// bytes it was read from. The integer value itself is always interpreted as
/// an unsigned big-endian number.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-3.2>
#[derive(Default, Clone, PartialEq, Eq, derive_more::Debug)]
#[debug("Mpi({bits}, {})", hex::encode(bytes))]
pub struct Mpi {
    bits: u16,
    bytes: Bytes,
}

impl Mpi {
    /// Parses the given buffer as an MPI.
    ///
    /// The buffer is expected to be length-prefixed.
    pub fn from_buf<B: bytes::Buf>(mut i: B) -> Result<Self> {
        let bits = i.read_be_u16()?;

        if bits > MAX_EXTERN_MPI_BITS {
            return Err(Error::InvalidInput);
        }

        let len_bytes = (bits + 7) >> 3;
        let bytes = i.read_take(usize::from(len_bytes))?;

        Ok(Mpi { bits, bytes })
    }

    /// Represent the data in `raw` as an Mpi.
    /// Note that `raw` is not expected to be length-prefixed!
    ///
    /// Strips leading zeros and records the minimal bit count.
    pub fn from_slice(raw: &[u8]) -> Self {
        let stripped = strip_leading_zeros(raw);
        Mpi {
            bits: bit_size(stripped) as u16,
            bytes: stripped.to_vec().into(),
        }
    }

    /// The declared bit count of this MPI, as found in the length prefix.
    pub fn bit_len(&self) -> usize {
        self.bits.into()
    }

    /// Number of payload bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The payload bytes, as read. May contain leading zeros.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

/// Returns the bit length of a given slice.
#[inline]
fn bit_size(val: &[u8]) -> usize {
    if val.is_empty() {
        0
    } else {
        (val.len() * 8) - val[0].leading_zeros() as usize
    }
}

#[inline]
fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .position(|b| b != &0)
        .map_or(&[], |offset| &bytes[offset..])
}

impl AsRef<[u8]> for Mpi {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl Serialize for Mpi {
    fn to_writer<W: io::Write>(&self, w: &mut W) -> Result<()> {
        w.write_u16::<BigEndian>(self.bits)?;
        w.write_all(&self.bytes)?;

        Ok(())
    }

    fn write_len(&self) -> usize {
        2 + self.bytes.len()
    }
}

impl From<BigUint> for Mpi {
    fn from(other: BigUint) -> Self {
        let bytes = other.to_bytes_be();
        Mpi::from_slice(&bytes)
    }
}

impl From<&BigUint> for Mpi {
    fn from(other: &BigUint) -> Self {
        let bytes = other.to_bytes_be();
        Mpi::from_slice(&bytes)
    }
}

impl From<Mpi> for BigUint {
    fn from(other: Mpi) -> Self {
        BigUint::from_bytes_be(other.as_ref())
    }
}
