//! Utilities used for encoding data into the compressed container format

pub mod bit_writer;
