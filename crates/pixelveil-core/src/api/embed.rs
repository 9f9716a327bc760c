use std::fs;
use std::path::{Path, PathBuf};

use crate::media::{Carrier, Persist};
use crate::{pipeline, PixelveilError};

use super::Password;

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Default, Debug)]
pub struct EmbedApi {
    message: Option<String>,
    payload_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
}

impl EmbedApi {
    /// Hide the given text message
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the contents of the given file
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn use_payload_file(mut self, payload_file: Option<PathBuf>) -> Self {
        self.payload_file = payload_file;
        self
    }

    /// The carrier image, used readonly
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the resulting stego image will be written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password used for sealing the payload
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the embedding and block until the stego image is written
    pub fn execute(self) -> Result<(), PixelveilError> {
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };
        let Some(password) = self.password.as_ref() else {
            return Err(PixelveilError::MissingPassword);
        };

        let plaintext = match (&self.payload_file, &self.message) {
            (Some(file), _) => {
                fs::read(file).map_err(|source| PixelveilError::ReadError { source })?
            }
            (None, Some(message)) => message.as_bytes().to_vec(),
            (None, None) => return Err(PixelveilError::MissingPayload),
        };

        let sealed = pipeline::seal(&plaintext, password)?;

        let mut carrier = Carrier::from_file(&image)?;
        carrier.embed_data(&sealed)?.save_as(&output)
    }
}
