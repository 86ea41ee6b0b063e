//! LumenFlow Art-Net - DMX output over Ethernet
//!
//! This crate encodes DMX512 lighting-control data as Art-Net packets and
//! transmits them over UDP from a chosen local network interface:
//!
//! - **Packet encoding**: byte-exact ArtDmx framing (header + body) per
//!   the Art-Net 4 wire format
//! - **Sending**: an async UDP sender that binds with `SO_REUSEADDR`,
//!   selects the outbound multicast interface (important on multi-homed
//!   hosts), and fires packets at port 6454 without awaiting replies
//!
//! Art-Net is best-effort by design; there are no retries or
//! acknowledgments here. Senders are expected to refresh continuously
//! from their own timing loop.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lumenflow_artnet::{ArtNetSender, ArtNetSenderConfig};
//!
//! # async fn run() -> lumenflow_artnet::Result<()> {
//! let mut sender = ArtNetSender::new(ArtNetSenderConfig {
//!     network_interface: "192.168.1.10".to_string(),
//!     debug: false,
//! })?;
//!
//! // Bind before sending; picks the egress interface for the lighting LAN
//! sender.bind("192.168.1.10").await?;
//!
//! // Universe 0, three channels
//! sender.send("192.168.1.255", 0, &[255, 128, 0]).await?;
//!
//! sender.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`packet`] - Art-Net opcodes, header and ArtDmx encoding
//! - [`sender`] - Socket lifecycle and transmission
//! - [`error`] - Error types

/// Error types
pub mod error;
/// Packet encoding
pub mod packet;
/// UDP sender
pub mod sender;

pub use error::{ArtNetError, Result};
pub use packet::{ArtDmx, OpCode, ARTNET_ID, ARTNET_PORT, DMX_CHANNELS, PROTOCOL_VERSION};
pub use sender::{ArtNetSender, ArtNetSenderConfig};
