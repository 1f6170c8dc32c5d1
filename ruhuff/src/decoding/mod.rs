//! Utilities used for decoding compressed streams

pub mod bit_reader;
