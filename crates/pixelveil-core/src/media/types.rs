use std::fs::File;
use std::path::Path;

pub use image::{RgbImage, RgbaImage};
use log::error;

use crate::capacity::capacity_bytes;
use crate::error::PixelveilError;
use crate::media::image::LsbCodec;
use crate::result::Result;

use super::Persist;

/// A carrier image for steganography.
///
/// PNGs that decode as plain RGB keep their three channels, everything else
/// is normalized to RGBA8 — the channel count decides the capacity and the
/// traversal, so it must be identical on the embed and the extract side.
#[derive(Debug, Clone)]
pub enum Carrier {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Carrier {
    pub fn from_rgb(img: RgbImage) -> Self {
        Self::Rgb(img)
    }

    pub fn from_rgba(img: RgbaImage) -> Self {
        Self::Rgba(img)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        match f.extension() {
            Some(ext) if ext.to_string_lossy().to_lowercase() == "png" => {
                match image::open(f).map_err(|_e| PixelveilError::InvalidImageMedia)? {
                    image::DynamicImage::ImageRgb8(img) => Ok(Self::Rgb(img)),
                    other => Ok(Self::Rgba(other.to_rgba8())),
                }
            }
            _ => Err(PixelveilError::UnsupportedMedia),
        }
    }

    /// Maximum payload bytes this carrier can hold, header overhead included.
    pub fn capacity(&self) -> usize {
        match self {
            Carrier::Rgb(i) => capacity_bytes(i.width(), i.height(), 3),
            Carrier::Rgba(i) => capacity_bytes(i.width(), i.height(), 4),
        }
    }

    pub fn embed_data(&mut self, data: &[u8]) -> Result<&mut Self> {
        match self {
            Carrier::Rgb(i) => LsbCodec::embed(i, data)?,
            Carrier::Rgba(i) => LsbCodec::embed(i, data)?,
        }

        Ok(self)
    }

    pub fn extract_data(&self) -> Result<Vec<u8>> {
        match self {
            Carrier::Rgb(i) => LsbCodec::extract(i),
            Carrier::Rgba(i) => LsbCodec::extract(i),
        }
    }

    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Carrier::Rgb(i) => i.write_to(&mut writer, image::ImageFormat::Png),
            Carrier::Rgba(i) => i.write_to(&mut writer, image::ImageFormat::Png),
        }
        .map_err(|e| {
            error!("Error saving image: {e}");
            PixelveilError::ImageEncodingError
        })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelveilError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
