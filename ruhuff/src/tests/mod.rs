use std::fs;
use std::path::{Path, PathBuf};

use crate::HuffmanTree;


/// Encode `data` in a fresh temp dir, decode the result again and check
/// that the round trip reproduces the input exactly.
fn encode_decode_compare(data: &[u8]) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.bin");
    let encoded = dir.path().join("encoded.bin");
    let decoded = dir.path().join("decoded.bin");
    fs::write(&input, data).unwrap();

    let mut tree = HuffmanTree::new();
    tree.encode_file(&input, &encoded).unwrap();
    tree.clear();
    tree.decode_file(&encoded, &decoded).unwrap();

    assert_eq!(fs::read(&decoded).unwrap(), data);
}

/// Write `data` into `dir` and compress it, returning the encoded path.
fn encode_bytes(dir: &Path, data: &[u8]) -> PathBuf {
    let input = dir.join("input.bin");
    let encoded = dir.join("encoded.bin");
    fs::write(&input, data).unwrap();
    let mut tree = HuffmanTree::new();
    tree.encode_file(&input, &encoded).unwrap();
    encoded
}
