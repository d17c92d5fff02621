// crates/roundtrip-core/src/fill.rs

/// Counting pattern: byte k holds k mod 256.
pub fn fill_seq(buf: &mut [u8]) {
    for (k, b) in buf.iter_mut().enumerate() {
        *b = k as u8;
    }
}

/// CRC-32 of a generated input, logged so runs can be compared.
pub fn fingerprint(buf: &[u8]) -> u32 {
    crc32fast::hash(buf)
}

/// Offset of the first byte where `a` and `b` differ, if any.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}
