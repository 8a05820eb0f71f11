//! # Packet module
//!
//! Handles the outer packet envelope (tag plus body length), dispatches body
//! parsing by tag, and contains the signature packet together with its
//! signing and verification logic.

mod header;
mod many;
mod packet_sum;
mod raw;
mod signature;
mod single;
mod user_id;

pub use self::header::PacketHeader;
pub use self::many::{parse_packets, PacketParser};
pub use self::packet_sum::{write_packet, Packet, PacketTrait};
pub use self::raw::RawPacket;
pub use self::signature::*;
pub use self::single::next_packet;
pub use self::user_id::UserId;
