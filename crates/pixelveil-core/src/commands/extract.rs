use std::path::Path;

use crate::PixelveilError;

pub fn extract(
    secret_image: &Path,
    output_file: &Path,
    password: Option<String>,
) -> Result<(), PixelveilError> {
    crate::api::extract::prepare()
        .from_secret_file(secret_image)
        .into_output_file(output_file)
        .using_password(password)
        .execute()
}
