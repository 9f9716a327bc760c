//! Password based authenticated encryption for payloads, using argon2id for
//! key derivation and XChaCha20Poly1305 for the cipher itself.
//!
//! The ciphertext layout is `cipher data || nonce || salt`, so everything the
//! decryption side needs besides the password travels with the data.

use argon2::{Argon2, ParamsBuilder};
use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

pub mod error;

pub use crate::error::CipherError;

const NONCE_LEN: usize = 24;
const SALT_LEN: usize = 32;
const KEY_LEN: usize = 32;

pub type Result<T> = std::result::Result<T, CipherError>;
pub type Key = [u8; KEY_LEN];

/// decrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for decryption
///
/// Fails with [`CipherError::TruncatedCiphertext`] when the input is too
/// short to even hold the trailing nonce and salt, and with
/// [`CipherError::DecryptionError`] when the password is wrong or the data
/// was tampered with.
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < SALT_LEN + NONCE_LEN {
        return Err(CipherError::TruncatedCiphertext);
    }
    let salt = &data[data.len() - SALT_LEN..];
    let nonce = &data[data.len() - SALT_LEN - NONCE_LEN..data.len() - SALT_LEN];
    let key = derive_key(password.as_bytes(), salt)?;

    let decryptor = XChaCha20Poly1305::new(&key.into());
    let decipher_data = decryptor
        .decrypt(nonce.into(), &data[0..data.len() - SALT_LEN - NONCE_LEN])
        .map_err(CipherError::DecryptionError)?;

    Ok(decipher_data)
}

/// encrypt data with password, it uses argon2id for key derivation and XChaCha20Poly1305 for encryption
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let key = derive_key(password.as_bytes(), &salt)?;

    let mut nonce = XChaCha20Poly1305::generate_nonce(&mut OsRng);
    debug_assert!(nonce.len() == NONCE_LEN);

    let encryptor = XChaCha20Poly1305::new(&key.into());
    let mut cipher_data = encryptor
        .encrypt(&nonce, data)
        .map_err(CipherError::EncryptionError)?;
    cipher_data.extend_from_slice(&nonce);
    cipher_data.extend_from_slice(&salt);

    nonce.as_mut_slice().zeroize();
    salt.zeroize();

    Ok(cipher_data)
}

fn default_secure_argon<'key>() -> Result<Argon2<'key>> {
    // increased time costs to make it more secure
    let params = ParamsBuilder::default()
        .t_cost(10)
        .output_len(KEY_LEN)
        .build()
        .map_err(CipherError::KeyDerivationParamError)?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

fn derive_key(password: &[u8], salt: &[u8]) -> Result<Key> {
    let mut output_key_material = [0u8; KEY_LEN];
    default_secure_argon()?
        .hash_password_into(password, salt, &mut output_key_material)
        .map_err(CipherError::KeyDerivationError)?;

    Ok(output_key_material)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation() {
        let password = b"hunter42"; // Bad password; don't actually use!
        let salt = rand::random::<[u8; SALT_LEN]>();

        let key = derive_key(password, &salt).unwrap();

        assert_ne!(salt, [0u8; SALT_LEN]);
        assert_ne!(key, [0u8; KEY_LEN]);
    }

    #[test]
    fn test_key_derivation_is_deterministic_per_salt() {
        let salt = rand::random::<[u8; SALT_LEN]>();

        let key1 = derive_key(b"hunter42", &salt).unwrap();
        let key2 = derive_key(b"hunter42", &salt).unwrap();
        let key3 = derive_key(b"hunter43", &salt).unwrap();

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
    }

    #[test]
    fn test_encryption_round_trip() {
        let password = "resistance is futile";
        let data = b"lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

        let cipher_data = encrypt_data(password, data).unwrap();
        let decipher_data = decrypt_data(password, &cipher_data).unwrap();

        assert_ne!(data, cipher_data.as_slice());
        assert_eq!(data, decipher_data.as_slice());
    }

    #[test]
    fn test_decryption_with_wrong_password_fails() {
        let cipher_data = encrypt_data("right password", b"some payload").unwrap();

        let result = decrypt_data("wrong password", &cipher_data);

        assert!(matches!(result, Err(CipherError::DecryptionError(_))));
    }

    #[test]
    fn test_decryption_of_tampered_data_fails() {
        let mut cipher_data = encrypt_data("password42", b"some payload").unwrap();
        cipher_data[0] ^= 0x1;

        let result = decrypt_data("password42", &cipher_data);

        assert!(matches!(result, Err(CipherError::DecryptionError(_))));
    }

    #[test]
    fn test_decryption_of_truncated_data_fails() {
        let result = decrypt_data("password42", &[0u8; NONCE_LEN]);

        assert!(matches!(result, Err(CipherError::TruncatedCiphertext)));
    }
}
