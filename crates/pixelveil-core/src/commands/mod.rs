mod embed;
mod extract;
mod extract_raw;

pub use embed::embed;
pub use extract::extract;
pub use extract_raw::extract_raw;
