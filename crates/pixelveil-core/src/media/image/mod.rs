pub mod iterators;
pub mod lsb_codec;

pub use lsb_codec::{LsbCodec, LENGTH_HEADER_BITS};
