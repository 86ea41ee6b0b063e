//! Error types for Art-Net output
use thiserror::Error;

/// Art-Net sender errors
#[derive(Error, Debug)]
pub enum ArtNetError {
    /// Interface address given to `bind` is not a valid IPv4 address
    #[error("Invalid interface address: {0}")]
    InvalidInterface(String),

    /// `send` or `socket_address` called before `bind` completed
    #[error("Socket is not bound; call bind before sending")]
    NotBound,

    /// `bind` called on an already bound sender
    #[error("Socket is already bound")]
    AlreadyBound,

    /// Operation attempted after `close`
    #[error("Socket is closed")]
    SocketClosed,

    /// DMX payload exceeds the 512 channels of one universe
    #[error("DMX payload too long: {0} channels (max 512)")]
    PayloadTooLong(usize),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Art-Net operations
pub type Result<T> = std::result::Result<T, ArtNetError>;
