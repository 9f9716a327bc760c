//! The payload pipeline: what goes into a carrier is never the plaintext,
//! it is `encrypt(compress(plaintext))`. The codec treats the result as an
//! opaque byte string.

use crate::error::PixelveilError;
use crate::result::Result;

const ZSTD_LEVEL: i32 = 3;

/// Compresses and encrypts a plaintext payload for embedding.
///
/// The returned ciphertext carries its own nonce, salt and Poly1305 tag, so
/// [`open`] needs nothing but the password.
pub fn seal(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let compressed = compress(plaintext)?;

    pixelveil_cipher::encrypt_data(password, &compressed).map_err(PixelveilError::Encryption)
}

/// Decrypts and decompresses an extracted payload.
///
/// Decryption runs first and short-circuits: a wrong password, tampered
/// bytes, or input that is no ciphertext at all surface as
/// [`PixelveilError::Authentication`], and unauthenticated data is never
/// fed to the decompressor. A decompression failure after successful
/// authentication surfaces as [`PixelveilError::Decompression`].
pub fn open(ciphertext: &[u8], password: &str) -> Result<Vec<u8>> {
    let compressed = pixelveil_cipher::decrypt_data(password, ciphertext)
        .map_err(PixelveilError::Authentication)?;

    decompress(&compressed)
}

fn compress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::encode_all(data, ZSTD_LEVEL).map_err(PixelveilError::IoError)
}

fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    zstd::decode_all(data).map_err(|source| PixelveilError::Decompression { source })
}
