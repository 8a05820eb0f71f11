use std::io;

use crate::errors::Result;
use crate::packet::{RawPacket, Signature, UserId};
use crate::ser::Serialize;
use crate::types::{PacketHeaderVersion, Tag};

/// Represents a Packet. A packet is the record structure used to encode a
/// chunk of data in OpenPGP.
///
/// Ref: <https://www.rfc-editor.org/rfc/rfc4880.html#section-4>
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Packet {
    Signature(Signature),
    UserId(UserId),
    /// Any tag without a body parser registered here.
    Raw(RawPacket),
}

impl From<Signature> for Packet {
    fn from(other: Signature) -> Packet {
        Packet::Signature(other)
    }
}

impl From<UserId> for Packet {
    fn from(other: UserId) -> Packet {
        Packet::UserId(other)
    }
}

impl From<RawPacket> for Packet {
    fn from(other: RawPacket) -> Packet {
        Packet::Raw(other)
    }
}

impl Serialize for Packet {
    fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Self::Signature(p) => p.to_writer_with_header(writer),
            Self::UserId(p) => p.to_writer_with_header(writer),
            Self::Raw(p) => p.to_writer_with_header(writer),
        }
    }

    fn write_len(&self) -> usize {
        match self {
            Self::Signature(p) => p.write_len_with_header(),
            Self::UserId(p) => p.write_len_with_header(),
            Self::Raw(p) => p.write_len_with_header(),
        }
    }
}

impl PacketTrait for Packet {
    fn packet_version(&self) -> PacketHeaderVersion {
        match self {
            Self::Signature(p) => p.packet_version(),
            Self::UserId(p) => p.packet_version(),
            Self::Raw(p) => p.packet_version(),
        }
    }

    fn tag(&self) -> Tag {
        match self {
            Self::Signature(p) => p.tag(),
            Self::UserId(p) => p.tag(),
            Self::Raw(p) => p.tag(),
        }
    }
}

pub trait PacketTrait: Serialize {
    /// The header style this packet arrived with (or should be written with).
    fn packet_version(&self) -> PacketHeaderVersion;

    fn tag(&self) -> Tag;

    /// Write this packet including the packet header.
    fn to_writer_with_header<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        self.packet_version()
            .write_header(writer, self.tag(), self.write_len())?;
        self.to_writer(writer)?;

        Ok(())
    }

    /// Length in bytes used when calling `to_writer_with_header`.
    fn write_len_with_header(&self) -> usize {
        self.packet_version().header_len(self.write_len()) + self.write_len()
    }
}

impl<'a, T: 'a + PacketTrait> PacketTrait for &'a T {
    fn packet_version(&self) -> PacketHeaderVersion {
        (*self).packet_version()
    }

    fn tag(&self) -> Tag {
        (*self).tag()
    }
}

/// Serializes a packet, including its header, to the given writer.
pub fn write_packet(writer: &mut impl io::Write, packet: &impl PacketTrait) -> Result<()> {
    packet.to_writer_with_header(writer)
}
