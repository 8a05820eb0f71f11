use std::io;

use bstr::{BStr, BString};
use bytes::Bytes;

use crate::errors::Result;
use crate::packet::PacketTrait;
use crate::ser::Serialize;
use crate::types::{PacketHeaderVersion, Tag};

/// User ID Packet
///
/// The RFC describes the content as UTF-8 text, but implementations in the
/// wild produced other encodings, so the raw bytes are preserved.
///
/// Ref: <https://tools.ietf.org/html/rfc4880.html#section-5.11>
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UserId {
    packet_version: PacketHeaderVersion,
    id: BString,
}

impl UserId {
    /// Parses a `UserId` packet from the given buffer.
    pub fn from_buf(packet_version: PacketHeaderVersion, input: Bytes) -> Result<Self> {
        Ok(UserId {
            packet_version,
            id: BString::new(input.to_vec()),
        })
    }

    pub fn from_str(packet_version: PacketHeaderVersion, input: &str) -> Self {
        UserId {
            packet_version,
            id: BString::new(input.as_bytes().to_vec()),
        }
    }

    pub fn id(&self) -> &BStr {
        self.id.as_ref()
    }
}

impl Serialize for UserId {
    fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.id)?;
        Ok(())
    }

    fn write_len(&self) -> usize {
        self.id.len()
    }
}

impl PacketTrait for UserId {
    fn packet_version(&self) -> PacketHeaderVersion {
        self.packet_version
    }

    fn tag(&self) -> Tag {
        Tag::UserId
    }
}
