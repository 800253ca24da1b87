//! md5-based point derivation. One 16-byte digest yields 4 independent
//! 32-bit circle points, assembled little-endian from successive 4-byte
//! groups.

#[inline]
pub fn digest(data: &[u8]) -> [u8; 16] {
    md5::compute(data).0
}

/// 4 bytes of the digest at `offset` (0, 4, 8 or 12) as one circle point.
#[inline]
pub fn point_hash32(digest: &[u8; 16], offset: usize) -> u32 {
    debug_assert!(offset % 4 == 0 && offset <= 12);
    ((digest[offset + 3] as u32) << 24)
        | ((digest[offset + 2] as u32) << 16)
        | ((digest[offset + 1] as u32) << 8)
        | (digest[offset] as u32)
}

/// Hash of a lookup key: digest it, take the first 4-byte group.
#[inline]
pub fn key_hash32(key: &[u8]) -> u32 {
    point_hash32(&digest(key), 0)
}
