//! Shared dedup fingerprint for query history.
//!
//! This is a 32-bit rolling string hash (`h = h * 31 + unit`), used only to
//! recognise repeated queries. It is non-cryptographic and collisions are
//! tolerated; do not use it for anything security related.

/// Fingerprint a canonical query string.
///
/// Hashes the UTF-16 code units of `input` with `h = (h << 5) - h + unit`,
/// wrapping to a signed 32-bit integer after every step, and returns the
/// signed decimal representation. The empty string hashes to `"0"`.
pub fn dedup_hash(input: &str) -> String {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.to_string()
}
