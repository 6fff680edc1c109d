//! Encoding probing
//!
//! Tries a fixed, ordered list of candidate encodings against a file's full
//! byte content, preferring a candidate under which the content decodes
//! cleanly AND contains CJK ideographs. A valid UTF-8 buffer without CJK
//! characters is still accepted via a final fallback, so the probe only
//! hard-fails when even plain UTF-8 decoding fails.

use encoding_rs::{Encoding, BIG5, GBK, UTF_16BE, UTF_16LE, UTF_8};

/// Status text for the UTF-8-without-CJK fallback.
pub const STATUS_NO_CJK: &str = "OK (no CJK chars detected)";

/// Status text for content that decodes under no candidate.
pub const STATUS_ISSUE: &str = "Encoding issue detected";

/// The candidate encodings, in probe order. The names are the labels the
/// probe reports; gb2312 resolves to the GBK decoder and bare utf-16 to
/// little-endian, per the WHATWG label mapping.
fn candidates() -> [(&'static str, &'static Encoding); 7] {
    [
        ("utf-8", UTF_8),
        ("big5", BIG5),
        ("gbk", GBK),
        ("gb2312", GBK),
        ("utf-16", UTF_16LE),
        ("utf-16le", UTF_16LE),
        ("utf-16be", UTF_16BE),
    ]
}

/// Outcome of probing a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Decoded cleanly under a candidate and contains CJK ideographs.
    Cjk { encoding: &'static str },
    /// Valid UTF-8 but no CJK characters found under any candidate.
    NoCjk,
    /// Not decodable under any candidate, including plain UTF-8.
    Undecodable,
}

impl ProbeOutcome {
    /// Whether the probe confirmed a plausible encoding.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ProbeOutcome::Undecodable)
    }

    /// Human-readable status line for the scan report.
    pub fn status(&self) -> String {
        match self {
            ProbeOutcome::Cjk { encoding } => format!("OK ({})", encoding),
            ProbeOutcome::NoCjk => STATUS_NO_CJK.to_string(),
            ProbeOutcome::Undecodable => STATUS_ISSUE.to_string(),
        }
    }
}

/// CJK Unified Ideographs block, used as the "intentionally Chinese text"
/// signal.
fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Strict decode: malformed input is a failure, never replacement.
fn decode_strict<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Option<std::borrow::Cow<'a, str>> {
    encoding.decode_without_bom_handling_and_without_replacement(bytes)
}

/// Probe a full byte buffer against the candidate list.
pub fn probe_bytes(bytes: &[u8]) -> ProbeOutcome {
    for (name, encoding) in candidates() {
        if let Some(decoded) = decode_strict(encoding, bytes) {
            if contains_cjk(&decoded) {
                return ProbeOutcome::Cjk { encoding: name };
            }
        }
    }

    // No candidate produced CJK content; accept anything that is at least
    // valid UTF-8.
    if decode_strict(UTF_8, bytes).is_some() {
        ProbeOutcome::NoCjk
    } else {
        ProbeOutcome::Undecodable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_cjk_reports_utf8() {
        let outcome = probe_bytes("你好世界".as_bytes());
        assert!(outcome.is_ok());
        assert!(outcome.status().contains("utf-8"));
    }

    #[test]
    fn test_ascii_only_falls_back() {
        let outcome = probe_bytes(b"plain ascii, nothing ideographic");
        assert!(outcome.is_ok());
        assert_eq!(outcome.status(), STATUS_NO_CJK);
    }

    #[test]
    fn test_utf8_non_cjk_unicode_falls_back() {
        // Valid UTF-8, but no char in U+4E00..=U+9FFF
        let outcome = probe_bytes("héllo wörld — καλημέρα".as_bytes());
        assert_eq!(outcome, ProbeOutcome::NoCjk);
    }

    #[test]
    fn test_big5_cjk_detected() {
        let (bytes, _, had_errors) = BIG5.encode("你好");
        assert!(!had_errors);
        let outcome = probe_bytes(&bytes);
        assert_eq!(outcome, ProbeOutcome::Cjk { encoding: "big5" });
        assert_eq!(outcome.status(), "OK (big5)");
    }

    #[test]
    fn test_utf16le_cjk_detected_as_utf16() {
        let mut bytes = Vec::new();
        for unit in "你好".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let outcome = probe_bytes(&bytes);
        // The bare "utf-16" candidate comes before "utf-16le"
        assert_eq!(outcome, ProbeOutcome::Cjk { encoding: "utf-16" });
    }

    #[test]
    fn test_undecodable_bytes() {
        // Invalid UTF-8 (0xC3 lead without trail), invalid Big5/GBK trail
        // byte 0x28, stray 0x80, and odd length so both UTF-16 variants fail
        let outcome = probe_bytes(&[0xC3, 0x28, 0x80]);
        assert!(!outcome.is_ok());
        assert_eq!(outcome.status(), STATUS_ISSUE);
    }

    #[test]
    fn test_empty_buffer_is_valid_utf8() {
        assert_eq!(probe_bytes(b""), ProbeOutcome::NoCjk);
    }
}
