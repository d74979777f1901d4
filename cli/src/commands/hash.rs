//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read buffer size for streamed files.
const READ_CHUNK: usize = 128 * 1024;

/// Stream a file through the hasher.
pub fn digest_file(path: &Path, seed: u64) -> Result<u64> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = komihash::Hasher::with_seed(seed);
    let mut buffer = vec![0u8; READ_CHUNK];

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hasher.finalize())
}

/// Hash files in parallel, printing results in argument order.
pub fn hash_files(files: &[PathBuf], seed: u64) -> Result<()> {
    // Indexed collect keeps the argument order
    let results: Vec<(&PathBuf, Result<u64>)> = files
        .par_iter()
        .map(|path| (path, digest_file(path, seed)))
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hash) => println!("{hash:016x}  {}", file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", file_path.display());
                failed += 1;
            }
        }
    }

    if failed != 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
