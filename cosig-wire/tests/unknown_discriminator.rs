use cosig_wire::{decode, DecodeError};

#[test]
fn unknown_leading_byte_fails_to_decode() {
    let bytes = [0xFFu8, 0x00, 0x01];
    let err = decode(&bytes).expect_err("0xFF is not an enumerated MessageType");
    assert!(matches!(err, DecodeError::UnknownDiscriminator(0xFF)));
}

#[test]
fn empty_buffer_fails_to_decode() {
    let err = decode(&[]).expect_err("empty buffer has no discriminator byte");
    assert!(matches!(err, DecodeError::Empty));
}

#[test]
fn truncated_payload_fails_to_decode() {
    // StampRequest's discriminator with a payload too short to be a valid bincode Vec<u8>.
    let bytes = [cosig_wire::MessageType::StampRequest as u8, 0xFF];
    let err = decode(&bytes).expect_err("truncated length prefix should not deserialize");
    assert!(matches!(err, DecodeError::Payload { variant: "StampRequest", .. }));
}
