//! # Pixelveil Core API
//!
//! Hides an encrypted, compressed payload in the least significant bits of
//! a PNG carrier image and recovers it bit-exactly.
//!
//! The building blocks, bottom up:
//! - [`bit_iterator`] turns byte streams into bit streams and back
//! - [`capacity`] decides whether a payload fits a carrier before any pixel
//!   is touched
//! - [`media::image::LsbCodec`] embeds and extracts the length-framed
//!   payload along a fixed row-major channel traversal
//! - [`pipeline`] seals (compress + encrypt) and opens (decrypt +
//!   decompress) the payload around the codec
//!
//! # Usage Example
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! let stego = temp_dir.path().join("image-with-a-secret-inside.png");
//! let recovered = temp_dir.path().join("recovered.txt");
//!
//! image::RgbaImage::from_fn(64, 64, |x, y| image::Rgba([x as u8, y as u8, 128, 255]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! pixelveil_core::api::embed::prepare()
//!     .with_message("Hello, World!")       // will hide this message inside the image
//!     .with_password("SuperSecret42")      // will seal the payload with this password
//!     .with_image(&carrier)
//!     .with_output(&stego)
//!     .execute()
//!     .expect("Failed to embed message in image");
//!
//! pixelveil_core::api::extract::prepare()
//!     .from_secret_file(&stego)
//!     .using_password("SuperSecret42")
//!     .into_output_file(&recovered)
//!     .execute()
//!     .expect("Failed to extract message from image");
//!
//! let message = std::fs::read_to_string(&recovered).unwrap();
//! assert_eq!(message, "Hello, World!");
//! ```

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod capacity;
pub mod commands;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod result;

pub use crate::error::PixelveilError;
pub use crate::media::image::{LsbCodec, LENGTH_HEADER_BITS};
pub use crate::media::{Carrier, Persist};
pub use crate::result::Result;


#[cfg(test)]
mod e2e_tests {
    use super::*;
    use crate::commands::{embed, extract, extract_raw};
    use crate::test_utils::prepare_small_rgba_image;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn prepare_carrier_file(dir: &TempDir, width: u32, height: u32) -> PathBuf {
        let carrier = dir.path().join("carrier.png");
        prepare_small_rgba_image(width, height)
            .save(&carrier)
            .expect("Carrier image was not written.");
        carrier
    }

    #[test]
    fn should_embed_and_extract_a_message() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 64, 64);
        let stego = out_dir.path().join("stego.png");
        let recovered = out_dir.path().join("recovered.txt");

        embed(
            &carrier,
            &stego,
            None,
            Some("don't tell anyone".into()),
            Some("Secret42".into()),
        )?;
        assert!(
            fs::metadata(&stego)?.len() > 0,
            "Stego image is not supposed to be empty"
        );

        extract(&stego, &recovered, Some("Secret42".into()))?;

        assert_eq!(fs::read(&recovered)?, b"don't tell anyone");

        Ok(())
    }

    #[test]
    fn should_embed_and_extract_a_binary_payload_file() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 128, 128);
        let stego = out_dir.path().join("stego.png");
        let payload_file = out_dir.path().join("payload.bin");
        let recovered = out_dir.path().join("recovered.bin");

        let payload: Vec<u8> = (0..1666u32).map(|i| (i % 251) as u8).collect();
        fs::write(&payload_file, &payload)?;

        embed(
            &carrier,
            &stego,
            Some(payload_file),
            None,
            Some("Secret42".into()),
        )?;
        extract(&stego, &recovered, Some("Secret42".into()))?;

        assert_eq!(fs::read(&recovered)?, payload);

        Ok(())
    }

    #[test]
    fn should_not_extract_with_the_wrong_password() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 64, 64);
        let stego = out_dir.path().join("stego.png");
        let recovered = out_dir.path().join("recovered.txt");

        embed(
            &carrier,
            &stego,
            None,
            Some("for your eyes only".into()),
            Some("Secret42".into()),
        )?;

        match extract(&stego, &recovered, Some("Secret43".into())) {
            Err(PixelveilError::Authentication(_)) => (),
            other => panic!("expected an authentication error, got {other:?}"),
        }
        assert!(
            !recovered.exists(),
            "no partial plaintext may be written on authentication failure"
        );

        Ok(())
    }

    #[test]
    fn should_report_no_hidden_data_for_a_plain_carrier() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 64, 64);
        let recovered = out_dir.path().join("recovered.txt");

        match extract(&carrier, &recovered, Some("Secret42".into())) {
            Err(PixelveilError::ImplausibleLength { .. }) => (),
            other => panic!("expected an implausible length error, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn should_reject_an_undersized_carrier_and_write_no_output() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 8, 8);
        let stego = out_dir.path().join("stego.png");

        // 8x8 RGBA holds 32 bytes, the sealed payload alone is larger
        match embed(
            &carrier,
            &stego,
            None,
            Some("way too much for such a small image".into()),
            Some("Secret42".into()),
        ) {
            Err(PixelveilError::Capacity { .. }) => (),
            other => panic!("expected a capacity error, got {other:?}"),
        }
        assert!(!stego.exists(), "no output may be written on a failed embed");

        Ok(())
    }

    #[test]
    fn should_dump_the_sealed_bytes_raw() -> Result<()> {
        let out_dir = TempDir::new()?;
        let carrier = prepare_carrier_file(&out_dir, 64, 64);
        let stego = out_dir.path().join("stego.png");
        let raw_dump = out_dir.path().join("sealed.bin");

        embed(
            &carrier,
            &stego,
            None,
            Some("rawhide".into()),
            Some("Secret42".into()),
        )?;
        extract_raw(&stego, &raw_dump)?;

        let sealed = fs::read(&raw_dump)?;
        assert!(!sealed.is_empty(), "Raw dump was empty.");

        // the dump is the sealed ciphertext, opening it yields the payload
        assert_eq!(pipeline::open(&sealed, "Secret42")?, b"rawhide");

        Ok(())
    }
}
