use std::path::{Path, PathBuf};

use crate::PixelveilError;

pub fn embed(
    image: &Path,
    write_to_file: &Path,
    payload_file: Option<PathBuf>,
    message: Option<String>,
    password: Option<String>,
) -> Result<(), PixelveilError> {
    crate::api::embed::prepare()
        .with_image(image)
        .with_output(write_to_file)
        .use_payload_file(payload_file)
        .use_message(message)
        .using_password(password)
        .execute()
}
