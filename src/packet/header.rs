use byteorder::{BigEndian, WriteBytesExt};
use bytes::Buf;

use crate::errors::{Error, Result};
use crate::parsing::BufParsing;
use crate::ser::Serialize;
use crate::types::{PacketHeaderVersion, PacketLength, Tag};

/// Maximum size of a partial packet chunk.
const MAX_PARTIAL_LEN: usize = 1 << 30;

/// Represents a packet header.
///
/// The header carries the packet tag and the length of the body that
/// follows. Two envelope formats exist, the legacy one and the OpenPGP one,
/// and both survive round-trips through this type.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-4.2>
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PacketHeader {
    version: PacketHeaderVersion,
    tag: Tag,
    length: PacketLength,
}

/// Reads a new-format ("OpenPGP") length, including partial body lengths.
pub(crate) fn read_new_length<B: Buf>(mut i: B) -> Result<PacketLength> {
    let olen = i.read_u8()?;
    let len = match olen {
        // One-Octet Lengths
        0..=191 => PacketLength::Fixed(olen.into()),
        // Two-Octet Lengths
        192..=223 => {
            let a = i.read_u8()?;
            PacketLength::Fixed(((olen as usize - 192) << 8) + 192 + a as usize)
        }
        // Partial Body Lengths
        224..=254 => PacketLength::Partial(1 << (olen as usize & 0x1F)),
        // Five-Octet Lengths
        255 => PacketLength::Fixed(i.read_be_u32()?.try_into()?),
    };
    Ok(len)
}

impl PacketHeader {
    /// Parse a single packet header from the given buffer.
    ///
    /// Exactly the header bytes are consumed.
    pub fn from_buf<B: Buf>(mut i: B) -> Result<Self> {
        let header = i.read_u8()?;

        // the top bit of the leading octet is always set
        if header & 0b1000_0000 == 0 {
            return Err(Error::MalformedHeader { bits: header });
        }

        if header & 0b0100_0000 != 0 {
            // new format: 0b11, six bit tag, variable length encoding
            let tag = Tag::from(header & 0b0011_1111);
            let length = read_new_length(&mut i)?;

            Ok(PacketHeader {
                version: PacketHeaderVersion::New,
                tag,
                length,
            })
        } else {
            // old format: 0b10, four bit tag, two bit length type
            let tag = Tag::from((header >> 2) & 0b0000_1111);
            let length = match header & 0b0000_0011 {
                // One-Octet Lengths
                0 => PacketLength::Fixed(i.read_u8()?.into()),
                // Two-Octet Lengths
                1 => PacketLength::Fixed(i.read_be_u16()?.into()),
                // Four-Octet Lengths
                2 => PacketLength::Fixed(i.read_be_u32()?.try_into()?),
                3 => PacketLength::Indeterminate,
                _ => unreachable!("old packet length type is only 2 bits"),
            };

            Ok(PacketHeader {
                version: PacketHeaderVersion::Old,
                tag,
                length,
            })
        }
    }

    pub fn from_parts(
        version: PacketHeaderVersion,
        tag: Tag,
        length: PacketLength,
    ) -> Result<Self> {
        match version {
            PacketHeaderVersion::Old => {
                ensure!(
                    u8::from(tag) < 16,
                    "tag is not compatible with old packet headers: {:?}",
                    tag
                );
                ensure!(
                    !matches!(length, PacketLength::Partial(_)),
                    "partial lengths are only supported in new style headers"
                );
            }
            PacketHeaderVersion::New => {
                ensure!(
                    !matches!(length, PacketLength::Indeterminate),
                    "indeterminate packet length is only supported in old style headers"
                );
                if let PacketLength::Partial(l) = length {
                    ensure!(l.count_ones() == 1, "partial length must be a power of two");
                    ensure!(
                        l <= MAX_PARTIAL_LEN,
                        "partial length must be less or equal than {}",
                        MAX_PARTIAL_LEN
                    );
                }
            }
        }

        Ok(PacketHeader {
            version,
            tag,
            length,
        })
    }

    /// Creates a `New` style packet header.
    pub fn new_fixed(tag: Tag, length: usize) -> Self {
        PacketHeader {
            version: PacketHeaderVersion::New,
            tag,
            length: PacketLength::Fixed(length),
        }
    }

    /// Returns the packet header version.
    pub const fn version(&self) -> PacketHeaderVersion {
        self.version
    }

    /// Returns the packet length.
    pub const fn packet_length(&self) -> PacketLength {
        self.length
    }

    /// Returns the packet tag.
    pub const fn tag(&self) -> Tag {
        self.tag
    }
}

impl Serialize for PacketHeader {
    fn to_writer<W: std::io::Write>(&self, writer: &mut W) -> Result<()> {
        let tag = u8::from(self.tag);
        match self.version {
            PacketHeaderVersion::New => {
                writer.write_u8(0b1100_0000 | tag)?;
                match self.length {
                    PacketLength::Fixed(len) => {
                        if len < 192 {
                            writer.write_u8(len as u8)?;
                        } else if len < 8384 {
                            writer.write_u8((((len - 192) >> 8) + 192) as u8)?;
                            writer.write_u8(((len - 192) & 0xFF) as u8)?;
                        } else {
                            writer.write_u8(255)?;
                            writer.write_u32::<BigEndian>(len.try_into()?)?;
                        }
                    }
                    PacketLength::Partial(len) => {
                        debug_assert_eq!(len.count_ones(), 1); // must be a power of two

                        // y & 0x1F
                        let n = len.trailing_zeros();
                        writer.write_u8((224 + n) as u8)?;
                    }
                    PacketLength::Indeterminate => {
                        unreachable!(
                            "invalid state: indeterminate lengths for new style packet header"
                        );
                    }
                }
            }
            PacketHeaderVersion::Old => {
                match self.length {
                    PacketLength::Fixed(len) => {
                        if len < 256 {
                            // one octet
                            writer.write_u8(0b1000_0000 | (tag << 2))?;
                            writer.write_u8(len as u8)?;
                        } else if len < 65536 {
                            // two octets
                            writer.write_u8(0b1000_0001 | (tag << 2))?;
                            writer.write_u16::<BigEndian>(len as u16)?;
                        } else {
                            // four octets
                            writer.write_u8(0b1000_0010 | (tag << 2))?;
                            writer.write_u32::<BigEndian>(len.try_into()?)?;
                        }
                    }
                    PacketLength::Indeterminate => {
                        writer.write_u8(0b1000_0011 | (tag << 2))?;
                    }
                    PacketLength::Partial(_) => {
                        unreachable!("invalid state: partial lengths for old style packet header");
                    }
                }
            }
        }

        Ok(())
    }

    fn write_len(&self) -> usize {
        match self.version {
            PacketHeaderVersion::New => match self.length {
                PacketLength::Fixed(len) => {
                    if len < 192 {
                        2
                    } else if len < 8384 {
                        3
                    } else {
                        6
                    }
                }
                PacketLength::Partial(_) => 2,
                PacketLength::Indeterminate => {
                    unreachable!("invalid state: indeterminate lengths for new style packet header")
                }
            },
            PacketHeaderVersion::Old => match self.length {
                PacketLength::Fixed(len) => {
                    if len < 256 {
                        2
                    } else if len < 65536 {
                        3
                    } else {
                        5
                    }
                }
                PacketLength::Indeterminate => 1,
                PacketLength::Partial(_) => {
                    unreachable!("invalid state: partial lengths for old style packet header")
                }
            },
        }
    }
}
