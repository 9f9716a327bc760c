use thiserror::Error;

pub use pixelveil_cipher::CipherError;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents an unsupported carrier media, for example a JPEG file whose
    /// lossy re-encoding would destroy the embedded bits
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a payload that does not fit into the carrier. Both sides of
    /// the comparison are reported in bits. Raised before any pixel is
    /// touched, so the carrier is guaranteed unmodified.
    #[error("Capacity error: the framed payload requires {required} bits but the carrier only provides {available}")]
    Capacity { required: usize, available: usize },

    /// Represents a bit sequence that is not byte aligned, a contract
    /// violation of the bit packing layer
    #[error("Framing error: {bits} bits cannot be packed into whole bytes")]
    Framing { bits: usize },

    /// Represents a decoded length header that cannot belong to this carrier.
    /// This is the primary signal that an image carries no hidden data.
    #[error("No hidden data found: header decodes to {length} bytes, the carrier can hold at most {capacity}")]
    ImplausibleLength { length: usize, capacity: usize },

    /// Represents a carrier that ran out of channels mid-frame, for example a
    /// cropped or resized stego image
    #[error("Hidden data is truncated: needed {needed} bits, the carrier provided {got}")]
    Truncated { needed: usize, got: usize },

    /// Represents an error when encrypting the payload
    #[error("Encryption error")]
    Encryption(CipherError),

    /// Represents a wrong password or a tampered ciphertext. No partial
    /// plaintext ever escapes this case.
    #[error("Decryption failed: wrong password or corrupted data")]
    Authentication(CipherError),

    /// Represents ciphertext that authenticated correctly but does not
    /// decompress, i.e. data corruption
    #[error("Decompression error")]
    Decompression { source: std::io::Error },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload data or message")]
    MissingPayload,

    #[error("API Error: Missing password")]
    MissingPassword,
}
