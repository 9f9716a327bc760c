use image::{ImageBuffer, Pixel};
use std::slice::{Iter, IterMut};

/// The one traversal order shared by embedding and extraction: row-major
/// over pixels, and within a pixel the channels in storage order (R, G, B,
/// then A when present). This matches the flat sample layout of
/// `ImageBuffer`, so the iterators are plain slice iterators.
///
/// Both codec paths MUST go through these two functions. A divergence does
/// not fail loudly, it silently extracts garbage.
pub(crate) fn channels<P>(img: &ImageBuffer<P, Vec<u8>>) -> Iter<'_, u8>
where
    P: Pixel<Subpixel = u8>,
{
    img.as_raw().iter()
}

/// Mutable counterpart of [`channels`], identical order.
pub(crate) fn channels_mut<P>(img: &mut ImageBuffer<P, Vec<u8>>) -> IterMut<'_, u8>
where
    P: Pixel<Subpixel = u8>,
{
    use std::ops::DerefMut;
    img.deref_mut().iter_mut()
}
