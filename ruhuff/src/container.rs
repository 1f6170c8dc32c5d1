//! The on disk container format for compressed streams.
//!
//! A compressed file starts with a fixed size header followed by the
//! Huffman coded payload:
//!
//! ```text
//! [i64 symbol_count]
//! [i64 frequency[0]] ... [i64 frequency[255]]
//! [payload: one code per original byte, MSB first, zero padded at the end]
//! ```
//!
//! All header integers are byte aligned and stored in native byte order.
//! The frequency table alone is enough to rebuild the coding tree, so no
//! codes are stored.

use std::io::{self, Read, Write};

use crate::decoding::bit_reader::BitReader;
use crate::encoding::bit_writer::BitWriter;

/// Number of distinct symbols, one for every possible byte value.
pub const ALPHABET_SIZE: usize = 256;

/// Size of the container header: the symbol count plus one frequency entry
/// per byte value, each stored as a full `i64`.
pub const HEADER_BYTES: i64 = (ALPHABET_SIZE as i64 + 1) * 8;

/// The fixed size prefix of every compressed file.
pub struct Header {
    /// Total number of symbol occurrences in the original stream.
    pub symbol_count: i64,
    /// Frequency count per byte value.
    pub entries: [i64; ALPHABET_SIZE],
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HeaderError {
    #[error("Error while reading container header: {0}")]
    ReadError(#[source] io::Error),
    #[error("Negative symbol count in container header: {got}")]
    NegativeSymbolCount { got: i64 },
}

impl Header {
    /// Read a header from the front of a compressed stream.
    pub fn read(reader: &mut BitReader<impl Read>) -> Result<Header, HeaderError> {
        let symbol_count = reader.read_raw_i64().map_err(HeaderError::ReadError)?;
        if symbol_count < 0 {
            return Err(HeaderError::NegativeSymbolCount { got: symbol_count });
        }
        let mut entries = [0i64; ALPHABET_SIZE];
        for entry in entries.iter_mut() {
            *entry = reader.read_raw_i64().map_err(HeaderError::ReadError)?;
        }
        Ok(Header {
            symbol_count,
            entries,
        })
    }

    /// Write the header to the front of a compressed stream.
    pub fn write(&self, writer: &mut BitWriter<impl Write>) -> io::Result<()> {
        writer.write_raw_i64(self.symbol_count)?;
        for &entry in self.entries.iter() {
            writer.write_raw_i64(entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, HeaderError, ALPHABET_SIZE, HEADER_BYTES};
    use crate::decoding::bit_reader::BitReader;
    use crate::encoding::bit_writer::BitWriter;
    use std::io::Cursor;

    #[test]
    fn header_round_trips() {
        let mut entries = [0i64; ALPHABET_SIZE];
        entries[usize::from(b'x')] = 17;
        entries[0] = 3;
        let header = Header {
            symbol_count: 20,
            entries,
        };

        let mut writer = BitWriter::new(Vec::new());
        header.write(&mut writer).unwrap();
        let encoded = writer.into_inner();
        assert_eq!(encoded.len() as i64, HEADER_BYTES);

        let mut reader = BitReader::new(Cursor::new(encoded));
        let read_back = Header::read(&mut reader).unwrap();
        assert_eq!(read_back.symbol_count, 20);
        assert_eq!(read_back.entries, entries);
    }

    #[test]
    fn truncated_header_is_rejected() {
        // Seven bytes cannot even hold the symbol count
        let mut reader = BitReader::new(Cursor::new(vec![0u8; 7]));
        assert!(matches!(
            Header::read(&mut reader),
            Err(HeaderError::ReadError(_))
        ));

        // A full symbol count but a truncated frequency table
        let mut reader = BitReader::new(Cursor::new(vec![0u8; 100]));
        assert!(matches!(
            Header::read(&mut reader),
            Err(HeaderError::ReadError(_))
        ));
    }

    #[test]
    fn negative_symbol_count_is_rejected() {
        let mut encoded = Vec::new();
        encoded.extend_from_slice(&(-1i64).to_ne_bytes());
        encoded.extend_from_slice(&[0u8; 8 * ALPHABET_SIZE]);
        let mut reader = BitReader::new(Cursor::new(encoded));
        assert!(matches!(
            Header::read(&mut reader),
            Err(HeaderError::NegativeSymbolCount { got: -1 })
        ));
    }
}
