use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::UueFile;

static UUE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^begin [0-7]{3} ([^\r\n]+)\r?\n((?s:.*?))^end\b").unwrap()
});

/// Decode every `begin <mode> <name> … end` uuencoded block in `text`, in
/// document order. Decoding is best-effort: a block with a bad length byte
/// or a truncated body is logged and skipped, never fatal: the surrounding
/// filing parse must not fail on a damaged attachment.
pub fn decode_uuencoded_files(text: &str) -> Vec<UueFile> {
    let mut files = Vec::new();
    for caps in UUE_BLOCK.captures_iter(text) {
        let name = caps[1].trim().to_string();
        match decode_block(&caps[2]) {
            Some(data) => {
                log::debug!("decoded uuencoded attachment {:?} ({} bytes)", name, data.len());
                files.push(UueFile { name, data });
            }
            None => log::warn!("skipping malformed uuencoded block {:?}", name),
        }
    }
    files
}

// Classic uuencoding: each line starts with a length byte, then 4-character
// groups of 6-bit values offset by 0x20 that pack into 3 bytes.
fn decode_block(body: &str) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let bytes = line.as_bytes();
        let len = (bytes[0].wrapping_sub(0x20) & 0x3f) as usize;
        if len == 0 {
            // "`" (or space) terminator line
            break;
        }
        if len > 45 {
            return None;
        }
        let mut chars = bytes[1..].iter().map(|&b| b.wrapping_sub(0x20) & 0x3f);
        let mut decoded = Vec::with_capacity(len);
        while decoded.len() < len {
            let a = chars.next()?;
            let b = chars.next()?;
            decoded.push((a << 2) | (b >> 4));
            if decoded.len() < len {
                let c = chars.next()?;
                decoded.push((b << 4) | (c >> 2));
                if decoded.len() < len {
                    let d = chars.next()?;
                    decoded.push((c << 6) | d);
                }
            }
        }
        out.extend_from_slice(&decoded);
    }
    Some(out)
}
