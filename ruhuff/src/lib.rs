//! A static Huffman coder for arbitrary byte streams.
//!
//! The compressed container is self describing: it stores the symbol count
//! and the complete frequency table, so a decoder rebuilds the exact coding
//! tree from the file itself. No codes are ever transmitted.
//!
//! The main entry point is [`HuffmanTree`], which drives both compression
//! and decompression of whole files:
//!
//! ```no_run
//! use ruhuff::HuffmanTree;
//!
//! let mut tree = HuffmanTree::new();
//! tree.encode_file("notes.txt", "notes.huf")?;
//! tree.clear();
//! tree.decode_file("notes.huf", "notes.decoded.txt")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

pub mod container;
pub mod decoding;
pub mod encoding;
pub mod huffman;

#[cfg(test)]
mod tests;

pub use container::{HeaderError, ALPHABET_SIZE, HEADER_BYTES};
pub use huffman::{DecodeError, EncodeError, HuffmanTree};
