use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use image::{ImageBuffer, Pixel};
use std::io::Cursor;

use crate::bit_iterator::{pack_bits, BitIterator};
use crate::capacity::{capacity_bytes, check_fits};
use crate::error::PixelveilError;
use crate::media::image::iterators::{channels, channels_mut};
use crate::result::Result;

/// Width of the frame's length header in bits. The header is a big-endian
/// unsigned integer counting the payload bytes that follow, so extraction
/// knows where to stop without a terminator sentinel.
pub const LENGTH_HEADER_BITS: usize = 32;

/// The LSB engine. Embeds a length-framed payload into the least significant
/// bits of an image's color channels, and recovers it again.
///
/// Each call is one self-contained traversal, there is no state between
/// calls. Embed and extract share the traversal order defined in
/// [`crate::media::image::iterators`].
pub struct LsbCodec;

impl LsbCodec {
    /// Embeds `payload` into the carrier, mutating it in place.
    ///
    /// The capacity check runs against the exact framed bit length before
    /// any channel is written: on a capacity failure the carrier is
    /// guaranteed byte identical to its pre-call state. Channels beyond the
    /// last frame bit keep their original values.
    pub fn embed<P>(carrier: &mut ImageBuffer<P, Vec<u8>>, payload: &[u8]) -> Result<()>
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = carrier.dimensions();
        let capacity = capacity_bytes(width, height, P::CHANNEL_COUNT);
        check_fits(capacity, LENGTH_HEADER_BITS, payload.len())?;

        let mut frame = Vec::with_capacity(LENGTH_HEADER_BITS / 8 + payload.len());
        frame.write_u32::<BigEndian>(payload.len() as u32)?;
        frame.extend_from_slice(payload);

        for (channel, bit) in channels_mut(carrier).zip(BitIterator::new(&frame[..])) {
            *channel = (*channel & (u8::MAX - 1)) | bit;
        }

        Ok(())
    }

    /// Reads a payload back out of the carrier.
    ///
    /// Fails with [`PixelveilError::ImplausibleLength`] when the decoded
    /// header cannot belong to this carrier — for an image without embedded
    /// data the header bits are effectively random, so this is the signal
    /// that there is nothing to find. Fails with
    /// [`PixelveilError::Truncated`] when the carrier ends mid-frame.
    /// Never returns a partial payload.
    pub fn extract<P>(carrier: &ImageBuffer<P, Vec<u8>>) -> Result<Vec<u8>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = carrier.dimensions();
        let capacity = capacity_bytes(width, height, P::CHANNEL_COUNT);
        let mut bits = channels(carrier).map(|c| c & 1);

        let header: Vec<u8> = bits.by_ref().take(LENGTH_HEADER_BITS).collect();
        if header.len() < LENGTH_HEADER_BITS {
            return Err(PixelveilError::Truncated {
                needed: LENGTH_HEADER_BITS,
                got: header.len(),
            });
        }

        let length = Cursor::new(pack_bits(&header)?).read_u32::<BigEndian>()? as usize;
        let body_capacity = capacity.saturating_sub(LENGTH_HEADER_BITS / 8);
        if length > body_capacity {
            return Err(PixelveilError::ImplausibleLength {
                length,
                capacity: body_capacity,
            });
        }

        let body: Vec<u8> = bits.take(length * 8).collect();
        if body.len() < length * 8 {
            return Err(PixelveilError::Truncated {
                needed: LENGTH_HEADER_BITS + length * 8,
                got: LENGTH_HEADER_BITS + body.len(),
            });
        }

        pack_bits(&body)
    }
}
