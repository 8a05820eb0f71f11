use std::io;

use bytes::Bytes;

use crate::errors::Result;
use crate::packet::PacketTrait;
use crate::ser::Serialize;
use crate::types::{PacketHeaderVersion, Tag};

/// A packet with a tag this crate assigns no semantics to.
///
/// The body is carried opaquely so unknown packets survive a parse and
/// re-serialize cycle, instead of failing the whole stream.
#[derive(derive_more::Debug, PartialEq, Eq, Clone)]
pub struct RawPacket {
    packet_version: PacketHeaderVersion,
    tag: Tag,
    #[debug("{}", hex::encode(body))]
    body: Bytes,
}

impl RawPacket {
    pub fn from_buf(packet_version: PacketHeaderVersion, tag: Tag, body: Bytes) -> Self {
        RawPacket {
            packet_version,
            tag,
            body,
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl Serialize for RawPacket {
    fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.body)?;
        Ok(())
    }

    fn write_len(&self) -> usize {
        self.body.len()
    }
}

impl PacketTrait for RawPacket {
    fn packet_version(&self) -> PacketHeaderVersion {
        self.packet_version
    }

    fn tag(&self) -> Tag {
        self.tag
    }
}
