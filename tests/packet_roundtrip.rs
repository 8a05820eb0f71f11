use bytes::Bytes;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use opgp::packet::{
    next_packet, parse_packets, write_packet, Packet, PacketTrait, Signature, SignatureType,
    SignatureVersion, Subpacket, SubpacketData, UserId,
};
use opgp::crypto::hash::HashAlgorithm;
use opgp::crypto::public_key::PublicKeyAlgorithm;
use opgp::ser::Serialize;
use opgp::types::{KeyId, Mpi, PacketHeaderVersion, Tag};

fn sample_signature() -> Signature {
    Signature::v4(
        PacketHeaderVersion::New,
        SignatureType::Binary,
        PublicKeyAlgorithm::RSA,
        HashAlgorithm::Sha256,
        [0x12, 0x34],
        vec![Mpi::from_slice(&[0x0F; 128])],
        vec![Subpacket::regular(SubpacketData::SignatureCreationTime(
            Utc.timestamp_opt(1_600_000_000, 0).unwrap(),
        ))
        .unwrap()],
        vec![Subpacket::regular(SubpacketData::Issuer(KeyId::from([
            1, 2, 3, 4, 5, 6, 7, 8,
        ])))
        .unwrap()],
    )
}

#[test]
fn signature_packet_roundtrip() {
    let sig = sample_signature();

    let mut buf = Vec::new();
    write_packet(&mut buf, &sig).unwrap();

    let mut input = Bytes::from(buf.clone());
    let packet = next_packet(&mut input).unwrap();
    assert!(input.is_empty());

    let parsed = match packet {
        Packet::Signature(s) => s,
        other => panic!("unexpected packet: {:?}", other),
    };

    assert_eq!(parsed.version(), SignatureVersion::V4);
    assert_eq!(parsed.typ(), sig.typ());
    assert_eq!(parsed.signed_hash_value, sig.signed_hash_value);
    assert_eq!(parsed.signature, sig.signature);

    // serializing the parsed packet reproduces the exact bytes
    let mut buf2 = Vec::new();
    write_packet(&mut buf2, &parsed).unwrap();
    assert_eq!(buf, buf2);
}

#[test]
fn mixed_stream_roundtrip() {
    let mut buf = Vec::new();

    // unknown (trust) packet, old format
    buf.extend_from_slice(&[0b1000_0000 | (12 << 2), 0x03, 0xAA, 0xBB, 0xCC]);
    // user id packet, new format
    let user_id = UserId::from_str(PacketHeaderVersion::New, "Bob <bob@example.com>");
    write_packet(&mut buf, &user_id).unwrap();
    // signature packet
    write_packet(&mut buf, &sample_signature()).unwrap();

    let packets = parse_packets(buf.clone()).unwrap();
    assert_eq!(packets.len(), 3);

    assert_eq!(packets[0].tag(), Tag::Trust);
    assert_eq!(packets[0].packet_version(), PacketHeaderVersion::Old);
    assert_eq!(packets[1].tag(), Tag::UserId);
    assert_eq!(packets[2].tag(), Tag::Signature);

    match &packets[1] {
        Packet::UserId(id) => assert_eq!(id.id().to_string(), "Bob <bob@example.com>"),
        other => panic!("unexpected packet: {:?}", other),
    }

    // the whole stream reproduces byte for byte, header styles included
    let mut buf2 = Vec::new();
    for packet in &packets {
        packet.to_writer(&mut buf2).unwrap();
    }
    assert_eq!(buf, buf2);
}

#[test]
fn indeterminate_length_runs_to_end() {
    let mut raw = vec![0b1000_0000 | (11 << 2) | 3];
    raw.extend_from_slice(b"literal bytes until the end");

    let mut input = Bytes::from(raw);
    let packet = next_packet(&mut input).unwrap();

    assert_eq!(packet.tag(), Tag::LiteralData);
    assert!(input.is_empty());
    match packet {
        Packet::Raw(ref p) => assert_eq!(p.body(), b"literal bytes until the end"),
        other => panic!("unexpected packet: {:?}", other),
    }
}

#[test]
fn malformed_leading_octet_is_rejected() {
    let res = parse_packets(vec![0x00, 0x01, 0x02]);
    assert!(res.is_err());
}
