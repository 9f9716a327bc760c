use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::Carrier;
use crate::PixelveilError;

pub fn prepare() -> ExtractRawApi {
    ExtractRawApi::default()
}

/// Extracts the de-framed LSB stream without opening the payload pipeline,
/// i.e. the still sealed ciphertext. Useful for inspection and debugging.
#[derive(Default, Debug)]
pub struct ExtractRawApi {
    secret_image: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl ExtractRawApi {
    /// This is the stego image that contains the data to be extracted
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where the sealed bytes will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the raw extraction and block until the dump is written
    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(secret_image) = self.secret_image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(PixelveilError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&secret_image)?;
        let sealed = carrier.extract_data()?;

        let mut destination_file = File::create(destination_file)
            .map_err(|source| PixelveilError::WriteError { source })?;

        destination_file
            .write_all(sealed.as_slice())
            .map_err(|source| PixelveilError::WriteError { source })
    }
}
