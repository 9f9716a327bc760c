use crate::error::PixelveilError;
use crate::result::Result;

/// Maximum payload bytes a carrier of the given dimensions can hold at one
/// bit per color channel, header overhead not yet deducted.
pub fn capacity_bytes(width: u32, height: u32, channels_per_pixel: u8) -> usize {
    width as usize * height as usize * channels_per_pixel as usize / 8
}

/// Verifies that a framed payload of `header_bits + body_len_bytes * 8` bits
/// fits into a carrier of `capacity_bytes`.
///
/// Embedding is all-or-nothing: this check runs before any pixel is touched,
/// and a failed check guarantees the carrier stays byte identical.
pub fn check_fits(capacity_bytes: usize, header_bits: usize, body_len_bytes: usize) -> Result<()> {
    let required = header_bits + body_len_bytes * 8;
    let available = capacity_bytes * 8;
    if required > available {
        return Err(PixelveilError::Capacity {
            required,
            available,
        });
    }

    Ok(())
}
