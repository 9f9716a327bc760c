pub mod embed;
pub mod extract;
pub mod extract_raw;
pub mod shared;

pub use shared::Password;
