use bytes::Bytes;
use log::debug;

use crate::errors::{Error, Result};
use crate::packet::{single, Packet};

/// Parse packets, one at a time, from an in-memory byte buffer.
///
/// Yields one `Result<Packet>` per packet found. An
/// [`Error::InvalidPacketContent`] item covers exactly one packet whose body
/// did not parse; iteration continues behind it, so callers decide whether to
/// skip the packet or abort the stream. Any other error ends the iteration,
/// as the packet boundaries are no longer trustworthy.
#[derive(Debug)]
pub struct PacketParser {
    input: Bytes,
}

impl PacketParser {
    pub fn new(input: impl Into<Bytes>) -> Self {
        PacketParser {
            input: input.into(),
        }
    }
}

impl Iterator for PacketParser {
    type Item = Result<Packet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.input.is_empty() {
            return None;
        }

        match single::next_packet(&mut self.input) {
            Ok(packet) => {
                debug!("-- parsed packet {:?} --", packet);
                Some(Ok(packet))
            }
            Err(err @ Error::InvalidPacketContent { .. }) => Some(Err(err)),
            Err(err) => {
                // lost the packet boundary, stop after reporting
                self.input = Bytes::new();
                Some(Err(err))
            }
        }
    }
}

/// Parses all packets in the given buffer, failing on the first error.
pub fn parse_packets(input: impl Into<Bytes>) -> Result<Vec<Packet>> {
    PacketParser::new(input).collect()
}
