pub mod embed;
pub mod extract;
pub mod extract_raw;
