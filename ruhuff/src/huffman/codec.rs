use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use super::tree::{self, Node};
use crate::container::{Header, HeaderError, ALPHABET_SIZE, HEADER_BYTES};
use crate::decoding::bit_reader::BitReader;
use crate::encoding::bit_writer::BitWriter;

/// Drives the whole encode/decode pipeline: frequency counting, tree
/// construction, code derivation, container serialization and the symbol by
/// symbol decode walk.
///
/// One instance can process several files in sequence when
/// [`HuffmanTree::clear`] is called between operations. The size counters
/// stay inspectable after an operation until the next `clear`.
///
/// Not meant for concurrent use: every operation mutates the shared
/// frequency table, code table and tree.
pub struct HuffmanTree {
    /// Frequency count per byte value.
    entries: [i64; ALPHABET_SIZE],
    /// Bit code per byte value, empty for bytes that never occurred.
    codes: Vec<Vec<bool>>,
    root: Option<Box<Node>>,
    /// Total number of symbol occurrences in the original stream.
    symbol_count: i64,
    input_size: i64,
    output_size: i64,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("Unable to open input file: {0}")]
    OpenInput(#[source] io::Error),
    #[error("Unable to open output file: {0}")]
    OpenOutput(#[source] io::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Unable to open input file: {0}")]
    OpenInput(#[source] io::Error),
    #[error("Unable to open output file: {0}")]
    OpenOutput(#[source] io::Error),
    #[error(transparent)]
    Header(#[from] HeaderError),
    #[error("Unable to read expected bits: {0}")]
    TruncatedStream(#[source] io::Error),
    #[error("Invalid bit sequence")]
    InvalidSequence,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self::new()
    }
}

impl HuffmanTree {
    pub fn new() -> Self {
        HuffmanTree {
            entries: [0; ALPHABET_SIZE],
            codes: vec![Vec::new(); ALPHABET_SIZE],
            root: None,
            symbol_count: 0,
            input_size: 0,
            output_size: 0,
        }
    }

    /// Compress `input` into `output`.
    ///
    /// The input is read twice: one pass counts byte frequencies, the
    /// second pass emits the codes. Both files are closed on every exit
    /// path, including the failing ones.
    pub fn encode_file(
        &mut self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), EncodeError> {
        let mut source = BufReader::new(File::open(input).map_err(EncodeError::OpenInput)?);
        let mut sink = BufWriter::new(File::create(output).map_err(EncodeError::OpenOutput)?);
        self.count_entries(&mut source)?;
        self.build_tree();
        source.rewind()?;
        self.write_compressed(&mut source, &mut sink)?;
        Ok(())
    }

    /// Decompress `input` into `output`.
    ///
    /// The tree is rebuilt from the frequency table stored in the container
    /// header; the code assignment is deterministic, so it comes out
    /// identical to the one the encoder used.
    pub fn decode_file(
        &mut self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), DecodeError> {
        let mut source =
            BitReader::new(BufReader::new(File::open(input).map_err(DecodeError::OpenInput)?));
        let mut sink = BufWriter::new(File::create(output).map_err(DecodeError::OpenOutput)?);
        self.load_header(&mut source)?;
        self.build_tree();
        self.decode_symbols(&mut source, &mut sink)?;
        sink.flush()?;
        Ok(())
    }

    /// Reset all state so the instance can process another file.
    pub fn clear(&mut self) {
        self.entries = [0; ALPHABET_SIZE];
        for code in self.codes.iter_mut() {
            code.clear();
        }
        self.root = None;
        self.symbol_count = 0;
        self.input_size = 0;
        self.output_size = 0;
    }

    /// Bytes read by the last operation. On the decode side this includes
    /// the container header.
    pub fn input_size(&self) -> i64 {
        self.input_size
    }

    /// Bytes written by the last operation. On the encode side this
    /// includes the container header.
    pub fn output_size(&self) -> i64 {
        self.output_size
    }

    /// Number of symbol occurrences in the original stream.
    pub fn symbol_count(&self) -> i64 {
        self.symbol_count
    }

    /// The derived bit code for every byte value, empty for byte values
    /// with zero frequency.
    pub fn codes(&self) -> &[Vec<bool>] {
        &self.codes
    }

    fn count_entries(&mut self, source: &mut impl Read) -> io::Result<()> {
        let mut buf = [0u8; 4096];
        loop {
            let read = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            for &byte in &buf[..read] {
                self.entries[usize::from(byte)] += 1;
            }
            self.symbol_count += read as i64;
            self.input_size += read as i64;
        }
        Ok(())
    }

    fn build_tree(&mut self) {
        let built = tree::build(&self.entries);
        self.root = built.root;
        self.codes = built.codes;
    }

    fn write_compressed(&mut self, source: &mut impl Read, sink: &mut impl Write) -> io::Result<()> {
        let mut writer = BitWriter::new(&mut *sink);
        Header {
            symbol_count: self.symbol_count,
            entries: self.entries,
        }
        .write(&mut writer)?;
        self.output_size += HEADER_BYTES;

        let mut buf = [0u8; 4096];
        loop {
            let read = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            for &byte in &buf[..read] {
                for &bit in &self.codes[usize::from(byte)] {
                    writer.write_bit(bit)?;
                }
            }
        }
        writer.flush()?;
        let total_bits = writer.bits_written();
        sink.flush()?;
        if total_bits != 0 {
            self.output_size += ((total_bits - 1) / 8 + 1) as i64;
        }
        Ok(())
    }

    fn load_header(&mut self, source: &mut BitReader<impl Read>) -> Result<(), HeaderError> {
        let header = Header::read(source)?;
        self.symbol_count = header.symbol_count;
        self.entries = header.entries;
        self.input_size += HEADER_BYTES;
        Ok(())
    }

    fn decode_symbols(
        &mut self,
        source: &mut BitReader<impl Read>,
        sink: &mut impl Write,
    ) -> Result<(), DecodeError> {
        for _ in 0..self.symbol_count {
            let mut node = self.root.as_deref().ok_or(DecodeError::InvalidSequence)?;
            while !node.is_leaf() {
                let bit = source.read_bit().map_err(DecodeError::TruncatedStream)?;
                let next = if bit {
                    node.right.as_deref()
                } else {
                    node.left.as_deref()
                };
                node = next.ok_or(DecodeError::InvalidSequence)?;
            }
            sink.write_all(&[node.symbol()])?;
            self.output_size += 1;
        }
        let total_bits = source.bits_read();
        if total_bits != 0 {
            self.input_size += ((total_bits - 1) / 8 + 1) as i64;
        }
        Ok(())
    }
}
