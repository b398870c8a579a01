//! Bounds-checked byte windows shared by every decode.

use crate::error::{BitError, Result};

/// Copy exactly `N` bytes of `bytes` starting at `offset`.
///
/// Fails with [`BitError::InsufficientData`] when fewer than `N` bytes remain,
/// including when `offset` lies past the end of the slice. Bytes after the
/// window are ignored.
#[inline]
pub(crate) fn window<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset
        .checked_add(N)
        .filter(|&end| end <= bytes.len())
        .ok_or(BitError::InsufficientData {
            needed: N,
            offset,
            len: bytes.len(),
        })?;

    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[offset..end]);
    Ok(out)
}
