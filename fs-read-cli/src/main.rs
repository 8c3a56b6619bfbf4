use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fs_read::BoundedReader;

mod error;
mod size;

use crate::error::AppError;
use crate::size::parse_size;

#[derive(Parser, Debug)]
#[clap(name = "fs-read-cli", version)]
#[clap(about = "Read a file without holding more than a size limit in memory", long_about = None)]
struct Cli {
    #[clap(value_parser)]
    path: PathBuf,

    #[clap(
        long,
        default_value = "64M",
        value_parser = parse_size,
        help = "Largest content accepted, e.g. 4096, 64K, 16M"
    )]
    max_size: usize,

    #[clap(
        long,
        value_parser = parse_size,
        help = "Bytes requested from the file per read"
    )]
    chunk_size: Option<usize>,

    #[clap(
        long,
        action,
        help = "Print the bytes read so far even when the read fails"
    )]
    partial: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut reader = BoundedReader::new();
    if let Some(chunk_size) = cli.chunk_size {
        reader = reader.with_chunk_size(chunk_size);
    }

    let mut bytes = Vec::new();
    let outcome = reader.read_into(&cli.path, Some(&mut bytes), cli.max_size);
    log::debug!(
        "{} bytes retained from {}",
        outcome.retained(),
        cli.path.display()
    );

    if outcome.is_success() || cli.partial {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
    }

    outcome
        .into_result()
        .map_err(|source| AppError::Read {
            path: cli.path,
            source,
        })?;
    Ok(())
}
