use std::io::{ErrorKind, Read};
use std::slice;

use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::error::PixelveilError;
use crate::result::Result;

/// Iterates over the bits of a byte stream, most significant bit first
/// within each byte. Yields `0` or `1` as `u8`.
///
/// The frame embedded into a carrier is defined in this bit order, so this
/// iterator is the only place where bytes are taken apart.
pub struct BitIterator<I> {
    i: usize,
    input: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(input: I) -> Self {
        BitIterator {
            i: 0,
            input,
            byte: None,
        }
    }
}

impl<I> BitIterator<I>
where
    I: Read,
{
    fn read_byte(&mut self) -> Option<u8> {
        let mut b = 0;
        loop {
            match self.input.read(slice::from_mut(&mut b)) {
                Ok(0) => return None,
                Ok(..) => return Some(b),
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = (self.i % 8) as u8;
        if bit == 0 {
            self.byte = self.read_byte();
        }
        let byte = self.byte?;
        self.i += 1;

        Some((byte >> (7 - bit)) & 1)
    }
}

/// Packs a sequence of bits back into bytes, most significant bit first.
///
/// The inverse of [`BitIterator`]. Fails with [`PixelveilError::Framing`]
/// when the bit count is not a multiple of 8 — with internally produced bit
/// sequences that would be a programming error.
pub fn pack_bits(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(PixelveilError::Framing { bits: bits.len() });
    }

    let mut bytes = Vec::with_capacity(bits.len() / 8);
    let mut writer = BitWriter::endian(&mut bytes, BigEndian);
    for bit in bits {
        writer.write_bit(*bit != 0)?;
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_iterate_bits_msb_first() {
        let b = [0b0100_1000u8];
        let bits: Vec<u8> = BitIterator::new(&b[..]).collect();

        assert_eq!(bits, vec![0, 1, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn should_end_after_the_last_bit_of_the_last_byte() {
        let b = [0xffu8, 0x00];
        let mut it = BitIterator::new(&b[..]).skip(15);

        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn should_produce_a_fresh_sequence_per_iterator() {
        let b = [0b1010_0001u8];
        let first: Vec<u8> = BitIterator::new(&b[..]).collect();
        let second: Vec<u8> = BitIterator::new(&b[..]).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn should_pack_bits_back_into_bytes() {
        let bytes = b"pixelveil";
        let bits: Vec<u8> = BitIterator::new(&bytes[..]).collect();

        assert_eq!(bits.len(), bytes.len() * 8);
        assert_eq!(pack_bits(&bits).unwrap(), bytes);
    }

    #[test]
    fn should_reject_unaligned_bit_sequences() {
        let bits = [1u8, 0, 1];

        match pack_bits(&bits) {
            Err(PixelveilError::Framing { bits: 3 }) => (),
            other => panic!("expected a framing error, got {other:?}"),
        }
    }
}
