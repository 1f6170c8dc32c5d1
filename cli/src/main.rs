//! Command line front end for the `ruhuff` Huffman coder.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use ruhuff::{HuffmanTree, HEADER_BYTES};
use tracing::info;

/// Compress or decompress a file with static Huffman coding
#[derive(Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("mode").required(true)))]
struct Cli {
    /// Compress the input file
    #[arg(short = 'c', group = "mode")]
    compress: bool,

    /// Decompress the input file
    #[arg(short = 'u', group = "mode")]
    decompress: bool,

    /// Path of the file to process
    #[arg(short, long)]
    file: PathBuf,

    /// Path the result is written to
    #[arg(short, long)]
    output: PathBuf,

    /// Print three lines of statistics: payload read, payload written,
    /// header size
    #[arg(short, long)]
    stats: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let mut tree = HuffmanTree::new();
    if cli.compress {
        tree.encode_file(&cli.file, &cli.output)?;
        info!(
            "compressed {} ({} bytes) into {} ({} bytes)",
            cli.file.display(),
            tree.input_size(),
            cli.output.display(),
            tree.output_size(),
        );
        if cli.stats {
            println!("{}", tree.input_size());
            println!("{}", tree.output_size() - HEADER_BYTES);
            println!("{}", HEADER_BYTES);
        }
    } else {
        debug_assert!(cli.decompress);
        tree.decode_file(&cli.file, &cli.output)?;
        info!(
            "decompressed {} ({} bytes) into {} ({} bytes)",
            cli.file.display(),
            tree.input_size(),
            cli.output.display(),
            tree.output_size(),
        );
        if cli.stats {
            println!("{}", tree.input_size() - HEADER_BYTES);
            println!("{}", tree.output_size());
            println!("{}", HEADER_BYTES);
        }
    }
    Ok(())
}
