use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::Carrier;
use crate::{pipeline, PixelveilError};

use super::Password;

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Default, Debug)]
pub struct ExtractApi {
    secret_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
    password: Password,
}

impl ExtractApi {
    /// This is the stego image that contains the data to be extracted
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file the recovered payload will be written to
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Set the password used for opening the payload
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the extraction and block until the payload is written
    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(secret_image) = self.secret_image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(PixelveilError::TargetNotSet);
        };
        let Some(password) = self.password.as_ref() else {
            return Err(PixelveilError::MissingPassword);
        };

        let carrier = Carrier::from_file(&secret_image)?;
        let sealed = carrier.extract_data()?;
        let plaintext = pipeline::open(&sealed, password)?;

        let mut output_file =
            File::create(output_file).map_err(|source| PixelveilError::WriteError { source })?;

        output_file
            .write_all(plaintext.as_slice())
            .map_err(|source| PixelveilError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_a_secret_image() {
        let result = prepare().execute();

        assert!(matches!(result, Err(PixelveilError::CarrierNotSet)));
    }

    #[test]
    fn should_insist_on_an_output_file() {
        let result = prepare().from_secret_file("secret.png").execute();

        assert!(matches!(result, Err(PixelveilError::TargetNotSet)));
    }

    #[test]
    fn should_insist_on_a_password() {
        let result = prepare()
            .from_secret_file("secret.png")
            .into_output_file("payload.bin")
            .execute();

        assert!(matches!(result, Err(PixelveilError::MissingPassword)));
    }
}
