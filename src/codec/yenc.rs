//! yEnc per-byte transform with escaping and line folding.
//!
//! # Algorithm Overview
//!
//! yEnc maps each raw byte to `(byte + 42) mod 256`, which leaves the vast
//! majority of values printable as-is. The handful of results that collide
//! with control meaning on a text channel (NUL, LF, CR, the escape marker
//! `=` itself, and `.` which is special at line start in NNTP) are written
//! as an escape pair instead: the marker `0x3D` followed by the value
//! shifted by a further +64 mod 256.
//!
//! Output is folded into lines of at most `line_width` encoded bytes. The
//! escape marker counts toward the width, but the fold check only runs
//! after a data byte, so an escape pair is never split across lines; a
//! line carrying such a pair at its end may hold `line_width + 1` bytes.
//! This accounting matches every deployed yEnc decoder and must not be
//! "fixed".
//!
//! # References
//!
//! Based on "yEnc - Efficient encoding for Usenet and eMail" version 1.3
//! by Juergen Helbing.

use bytes::Bytes;

use crate::crc::Crc32;

/// Escape marker byte (`=`).
const ESCAPE: u8 = 0x3D;

/// Encoded values that collide with control meaning on the text channel:
/// NUL, LF, CR, `=`, `.`.
const CRITICAL: [u8; 5] = [0x00, 0x0A, 0x0D, 0x3D, 0x2E];

/// The output of encoding one raw chunk.
///
/// This is the transform's half of a [`Part`](crate::Part): the wire
/// bytes plus the integrity state of the raw input. The splitter supplies
/// the positional metadata and builds the final record in one step.
#[derive(Debug)]
pub(crate) struct Encoded {
    /// Escaped, line-folded wire bytes.
    pub data: Bytes,

    /// CRC32 state over the raw chunk (carries the chunk length, so the
    /// splitter can fold it into the whole-file checksum).
    pub crc: Crc32,

    /// Raw (pre-encoding) byte count of the chunk.
    pub raw_len: u64,
}

/// Encodes one raw chunk into its escaped, line-folded wire form.
///
/// An empty chunk produces empty output with a CRC32 of 0. No trailing
/// CRLF is appended when the chunk ends mid-line; a CRLF does land at the
/// very end when the final line fills exactly.
pub(crate) fn encode_part(raw: &[u8], line_width: usize) -> Encoded {
    // Worst case is 2x expansion plus a CRLF per line.
    let mut out = Vec::with_capacity(raw.len() + raw.len() / 8 + 2);

    let mut crc = Crc32::new();
    crc.update(raw);

    let mut line_len = 0usize;
    for &byte in raw {
        let mut enc = byte.wrapping_add(42);

        if CRITICAL.contains(&enc) {
            out.push(ESCAPE);
            line_len += 1;
            enc = enc.wrapping_add(64);
        }

        out.push(enc);
        line_len += 1;

        // Fold only after a data byte; an escape pair never splits.
        if line_len >= line_width {
            out.extend_from_slice(b"\r\n");
            line_len = 0;
        }
    }

    Encoded {
        data: Bytes::from(out),
        crc,
        raw_len: raw.len() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chunk() {
        let encoded = encode_part(&[], 128);
        assert!(encoded.data.is_empty());
        assert_eq!(encoded.crc.finalize(), 0);
        assert_eq!(encoded.raw_len, 0);
    }

    #[test]
    fn test_plain_byte() {
        // 0x20 + 42 = 0x4A, not critical
        let encoded = encode_part(&[0x20], 128);
        assert_eq!(encoded.data.as_ref(), &[0x4A]);
        assert_eq!(encoded.raw_len, 1);
    }

    #[test]
    fn test_raw_nul_needs_no_escape() {
        // 0x00 + 42 = 0x2A, which is not in the critical set
        let encoded = encode_part(&[0x00], 128);
        assert_eq!(encoded.data.as_ref(), &[0x2A]);
    }

    #[test]
    fn test_nul_byte_escapes() {
        // Raw 0xD6 encodes to 0x00, which must escape to 0x3D 0x40
        let encoded = encode_part(&[0xD6], 128);
        assert_eq!(encoded.data.as_ref(), &[ESCAPE, 0x40]);
    }

    #[test]
    fn test_all_critical_values_escape() {
        // Raw bytes whose encoded value lands on each critical value
        for &critical in &CRITICAL {
            let raw = critical.wrapping_sub(42);
            let encoded = encode_part(&[raw], 128);
            assert_eq!(
                encoded.data.as_ref(),
                &[ESCAPE, critical.wrapping_add(64)],
                "raw byte 0x{:02X} must escape",
                raw
            );
        }
    }

    #[test]
    fn test_crc_is_over_raw_bytes() {
        let raw = b"escaping changes the wire bytes, not the checksum";
        let encoded = encode_part(raw, 16);
        assert_eq!(encoded.crc.finalize(), Crc32::hash(raw));
        assert_eq!(encoded.raw_len, raw.len() as u64);
    }

    #[test]
    fn test_line_folding() {
        // 0x20 encodes to 0x4A, never critical, so width 4 folds every 4 bytes
        let encoded = encode_part(&[0x20; 10], 4);
        assert_eq!(
            encoded.data.as_ref(),
            b"JJJJ\r\nJJJJ\r\nJJ" as &[u8],
        );
    }

    #[test]
    fn test_exact_fill_ends_with_crlf() {
        let encoded = encode_part(&[0x20; 8], 4);
        assert_eq!(encoded.data.as_ref(), b"JJJJ\r\nJJJJ\r\n" as &[u8]);
    }

    #[test]
    fn test_escape_pair_straddles_line_boundary() {
        // Three plain bytes fill positions 1-3 of a width-4 line, then an
        // escape pair lands as positions 4 and 5 before the fold.
        let encoded = encode_part(&[0x20, 0x20, 0x20, 0xD6], 4);
        assert_eq!(
            encoded.data.as_ref(),
            &[0x4A, 0x4A, 0x4A, ESCAPE, 0x40, 0x0D, 0x0A],
        );
    }

    #[test]
    fn test_no_fold_after_escape_marker_alone() {
        // Escape marker as the width'th byte must not fold; the pair's data
        // byte follows first.
        let encoded = encode_part(&[0x20, 0xD6], 2);
        assert_eq!(encoded.data.as_ref(), &[0x4A, ESCAPE, 0x40, 0x0D, 0x0A]);
    }

    #[test]
    fn test_worst_case_expansion() {
        // Every byte escapes: 2 wire bytes per raw byte plus folds
        let raw = vec![0xD6u8; 64];
        let encoded = encode_part(&raw, 128);
        let wire: Vec<u8> = encoded
            .data
            .iter()
            .copied()
            .filter(|&b| b != 0x0D && b != 0x0A)
            .collect();
        assert_eq!(wire.len(), 128);
    }
}
