//! mojikit - encoding check and repair tools for CJK text files
//!
//! mojikit ships two binaries built on this library:
//! - `mojiscan`: walk a directory tree and flag files whose encoding
//!   cannot be confirmed against a fixed candidate list
//! - `mojifix`: undo "double UTF-8" mojibake corruption in place,
//!   keeping a `.bak` copy of the original bytes

pub mod classify;
pub mod probe;
pub mod repair;
pub mod report;
pub mod scan;
