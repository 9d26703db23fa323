use cosig_wire::{
    decode, encode, EntryReply, EntryRequest, Envelope, ErrorReply, HashId, MerkleProof,
    ProofReply, ProofRequest, SignedEntry, StampReply, StampRequest,
};

fn roundtrip(env: Envelope) {
    let bytes = encode(&env).expect("encode");
    let decoded = decode(&bytes).expect("decode");
    assert_eq!(decoded, env);
}

#[test]
fn stamp_request_roundtrips() {
    let val: Vec<u8> = (0u16..=0xFF).map(|b| b as u8).collect();
    roundtrip(Envelope::StampRequest(StampRequest { val }));
}

#[test]
fn stamp_reply_roundtrips() {
    let sig = vec![7u8; 64];
    roundtrip(Envelope::StampReply(StampReply { sig }));
}

#[test]
fn entry_request_and_reply_roundtrip() {
    roundtrip(Envelope::EntryRequest(EntryRequest { seq: 42 }));

    let root: HashId = [9u8; 32];
    roundtrip(Envelope::EntryReply(EntryReply {
        log: SignedEntry {
            entry: bincode::serialize(&cosig_wire::LogEntry { seq: 42, root, time: Some(1_700_000_000) })
                .unwrap(),
            sig: vec![1, 2, 3],
        },
    }));
}

#[test]
fn proof_request_and_reply_roundtrip() {
    roundtrip(Envelope::ProofRequest(ProofRequest { old: 3, new: 9 }));

    let proof = MerkleProof {
        siblings: vec![[1u8; 32], [2u8; 32], [3u8; 32]],
        is_right: vec![true, false, true],
    };
    roundtrip(Envelope::ProofReply(ProofReply { proof }));
}

#[test]
fn error_reply_roundtrips() {
    roundtrip(Envelope::Error(ErrorReply { msg: "batch not found".into() }));
}

#[test]
fn discriminator_byte_matches_message_type() {
    let bytes = encode(&Envelope::StampRequest(StampRequest { val: vec![] })).unwrap();
    assert_eq!(bytes[0], cosig_wire::MessageType::StampRequest as u8);

    let bytes = encode(&Envelope::Error(ErrorReply { msg: String::new() })).unwrap();
    assert_eq!(bytes[0], cosig_wire::MessageType::Error as u8);
}
