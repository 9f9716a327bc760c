use std::path::Path;

use crate::PixelveilError;

pub fn extract_raw(secret_image: &Path, destination_file: &Path) -> Result<(), PixelveilError> {
    crate::api::extract_raw::prepare()
        .from_secret_file(secret_image)
        .into_raw_file(destination_file)
        .execute()
}
