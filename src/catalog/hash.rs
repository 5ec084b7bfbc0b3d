use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute the lowercase-hex SHA-256 digest of a file's raw bytes.
///
/// The file is streamed through the hasher in binary form, so no
/// text-mode translation can alter the byte sequence and large files are
/// never buffered whole.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
