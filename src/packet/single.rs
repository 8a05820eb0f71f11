use bytes::{Buf, Bytes, BytesMut};
use log::debug;

use crate::errors::{Error, Result};
use crate::packet::header::read_new_length;
use crate::packet::{PacketHeader, RawPacket, Signature, UserId};
use crate::packet::{Packet, PacketTrait};
use crate::parsing::BufParsing;
use crate::types::{PacketHeaderVersion, PacketLength, Tag};

/// Reads a single packet from the front of `input`.
///
/// Header level problems (a reserved leading bit pattern, a body running past
/// the end of the buffer) are fatal, as the packet boundary is lost. A body
/// that parses badly is reported as [`Error::InvalidPacketContent`] after the
/// buffer advanced past it, so the caller may skip the packet and continue.
pub fn next_packet(input: &mut Bytes) -> Result<Packet> {
    let header = PacketHeader::from_buf(&mut *input)?;
    debug!("parsing packet {:?}", header);

    let body = read_body(input, header.packet_length())?;

    match body_parser(header.version(), header.tag(), body) {
        Ok(packet) => Ok(packet),
        Err(err) => Err(Error::InvalidPacketContent {
            source: Box::new(err),
        }),
    }
}

/// Assembles the full body for the parsed header.
///
/// Partial body lengths are chained until a fixed length chunk terminates the
/// packet; an indeterminate length runs to the end of the input.
fn read_body(input: &mut Bytes, length: PacketLength) -> Result<Bytes> {
    match length {
        PacketLength::Fixed(len) => input.read_take(len),
        PacketLength::Indeterminate => Ok(input.rest()),
        PacketLength::Partial(len) => {
            let mut body = BytesMut::from(&input.read_take(len)?[..]);

            loop {
                match read_new_length(&mut *input)? {
                    PacketLength::Partial(len) => {
                        body.extend_from_slice(&input.read_take(len)?);
                    }
                    PacketLength::Fixed(len) => {
                        body.extend_from_slice(&input.read_take(len)?);
                        break;
                    }
                    PacketLength::Indeterminate => {
                        bail!("indeterminate lengths are not valid partial body chunks");
                    }
                }
            }

            Ok(body.freeze())
        }
    }
}

fn body_parser(version: PacketHeaderVersion, tag: Tag, body: Bytes) -> Result<Packet> {
    let res: Result<Packet> = match tag {
        Tag::Signature => Signature::from_buf(version, body).map(Into::into),
        Tag::UserId => UserId::from_buf(version, body).map(Into::into),
        _ => Ok(RawPacket::from_buf(version, tag, body).into()),
    };

    if let Ok(ref packet) = res {
        debug_assert_eq!(packet.tag(), tag);
    }

    res
}
