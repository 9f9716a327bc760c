pub mod image;
pub mod types;

use std::path::Path;

pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
