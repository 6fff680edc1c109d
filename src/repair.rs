//! Double UTF-8 mojibake repair
//!
//! Undoes the classic corruption where UTF-8 bytes were misread as Latin-1
//! and the result re-encoded as UTF-8. Reversing the trip: decode the file
//! as UTF-8, map each char back to its Latin-1 byte, and decode those bytes
//! as UTF-8 again. The original bytes are kept verbatim in a `.bak` sibling
//! before the file is overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffix appended to the original path for the backup copy.
pub const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("file is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("character {ch:?} (U+{code:04X}) is outside the Latin-1 range; file does not look double-encoded")]
    NotLatin1 { ch: char, code: u32 },

    #[error("recovered bytes are not valid UTF-8: {0}")]
    RecoveredNotUtf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Backup path: the original path with [`BACKUP_SUFFIX`] appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Map each char to its Latin-1 byte. Fails on the first char whose code
/// point exceeds 0xFF.
fn latin1_bytes(text: &str) -> Result<Vec<u8>, RepairError> {
    text.chars()
        .map(|ch| {
            u8::try_from(u32::from(ch)).map_err(|_| RepairError::NotLatin1 {
                ch,
                code: u32::from(ch),
            })
        })
        .collect()
}

/// Recover the originally intended text from double-encoded bytes.
pub fn recover_text(raw: &[u8]) -> Result<String, RepairError> {
    let once = std::str::from_utf8(raw)?;
    let latin1 = latin1_bytes(once)?;
    Ok(String::from_utf8(latin1)?)
}

/// Repair one double-encoded file in place, returning the backup path.
///
/// The original file is untouched on any failure: the backup is only
/// written once the recovery pipeline has fully succeeded, and the file is
/// only rewritten after the backup exists.
pub fn repair_file(path: &Path) -> Result<PathBuf, RepairError> {
    let raw = fs::read(path)?;
    let fixed = recover_text(&raw)?;

    let backup = backup_path(path);
    fs::write(&backup, &raw)?;
    fs::write(path, fixed.as_bytes())?;

    Ok(backup)
}
