//! Text/binary classification
//!
//! A file is treated as text when a sample of its leading bytes contains
//! only byte values commonly seen in text files. This is a heuristic, not
//! a content-type sniffer; exotic encodings may misclassify.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes sampled for classification.
pub const SAMPLE_LEN: usize = 1024;

/// Byte values accepted in a text sample: bell, backspace, tab, newline,
/// form feed, carriage return, escape, and everything from 0x20 upward
/// except DEL (0x7F).
fn is_allowed_byte(b: u8) -> bool {
    matches!(b, 0x07 | 0x08 | b'\t' | b'\n' | 0x0C | b'\r' | 0x1B) || (b >= 0x20 && b != 0x7F)
}

/// Classify a byte sample as text.
///
/// The sample must be non-empty and every byte must be in the allowed set.
pub fn is_text_sample(sample: &[u8]) -> bool {
    !sample.is_empty() && sample.iter().copied().all(is_allowed_byte)
}

/// Classify a file as text by sampling its first [`SAMPLE_LEN`] bytes.
///
/// Any read error classifies the file as not-text (fail closed).
pub fn is_text_file(path: &Path) -> bool {
    let mut sample = Vec::with_capacity(SAMPLE_LEN);
    match File::open(path) {
        Ok(file) => {
            if file.take(SAMPLE_LEN as u64).read_to_end(&mut sample).is_err() {
                return false;
            }
        }
        Err(_) => return false,
    }
    is_text_sample(&sample)
}
