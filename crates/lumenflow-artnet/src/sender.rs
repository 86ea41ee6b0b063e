//! Asynchronous Art-Net output over an interface-bound UDP socket
//!
//! On multi-homed hosts the lighting network usually hangs off one
//! specific NIC; the sender therefore sets the outbound multicast
//! interface explicitly after binding so broadcast/multicast DMX egresses
//! the right one.

use std::net::{Ipv4Addr, SocketAddr};

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;

use crate::error::{ArtNetError, Result};
use crate::packet::{ArtDmx, ARTNET_PORT, DMX_CHANNELS};

/// Configuration for [`ArtNetSender`]
#[derive(Debug, Clone)]
pub struct ArtNetSenderConfig {
    /// Address of the local interface the sender is meant to egress on.
    /// The authoritative address is the one passed to
    /// [`ArtNetSender::bind`]; this field records intent and shows up in
    /// diagnostics.
    pub network_interface: String,
    /// Log socket lifecycle events at debug level. Diagnostics only, no
    /// effect on the data path.
    pub debug: bool,
}

/// Socket lifecycle: `Unbound -> Bound (bind) -> Closed (close)`.
enum SocketState {
    Unbound(Socket),
    Bound(UdpSocket),
    Closed,
}

/// Art-Net sender for outputting DMX data
///
/// Owns one UDP socket. [`bind`](Self::bind) must complete before
/// [`send`](Self::send); calling out of order fails fast with a lifecycle
/// error rather than transmitting on an unconfigured socket.
pub struct ArtNetSender {
    state: SocketState,
    config: ArtNetSenderConfig,
}

impl ArtNetSender {
    /// Create a new Art-Net sender
    ///
    /// Allocates the UDP socket (with `SO_REUSEADDR`, so several senders
    /// or processes can share a local port) but does not bind it yet.
    pub fn new(config: ArtNetSenderConfig) -> Result<Self> {
        let socket = Self::make_socket()?;

        if config.debug {
            tracing::debug!(
                interface = %config.network_interface,
                "Art-Net socket allocated (reuse-address on)"
            );
        }

        Ok(Self {
            state: SocketState::Unbound(socket),
            config,
        })
    }

    fn make_socket() -> Result<Socket> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        Ok(socket)
    }

    /// Bind to an OS-assigned local port and select the outbound
    /// multicast interface.
    ///
    /// # Arguments
    /// * `interface_address` - IPv4 address of the local interface serving
    ///   the lighting network (e.g. `"192.168.1.10"`)
    ///
    /// Fails with [`ArtNetError::InvalidInterface`] before touching the
    /// socket if the address does not parse. After an OS-level failure the
    /// sender holds a fresh unbound socket, so the caller may retry with a
    /// different address.
    pub async fn bind(&mut self, interface_address: &str) -> Result<()> {
        let interface: Ipv4Addr = interface_address
            .parse()
            .map_err(|_| ArtNetError::InvalidInterface(interface_address.to_string()))?;

        let socket = match std::mem::replace(&mut self.state, SocketState::Closed) {
            SocketState::Unbound(socket) => socket,
            state @ SocketState::Bound(_) => {
                self.state = state;
                return Err(ArtNetError::AlreadyBound);
            }
            SocketState::Closed => return Err(ArtNetError::SocketClosed),
        };

        match Self::bind_socket(socket, interface) {
            Ok(socket) => {
                let local = socket.local_addr()?;
                tracing::info!(%local, %interface, "Art-Net socket bound, sending over selected interface");
                self.state = SocketState::Bound(socket);
                Ok(())
            }
            Err(err) => {
                self.state = SocketState::Unbound(Self::make_socket()?);
                Err(err)
            }
        }
    }

    fn bind_socket(socket: Socket, interface: Ipv4Addr) -> Result<UdpSocket> {
        let local = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0));
        socket.bind(&local.into())?;
        socket.set_multicast_if_v4(&interface)?;
        socket.set_nonblocking(true)?;
        Ok(UdpSocket::from_std(socket.into())?)
    }

    /// Send one universe of DMX data via Art-Net
    ///
    /// # Arguments
    /// * `host` - Destination host (unicast, broadcast or multicast); port
    ///   is always [`ARTNET_PORT`]
    /// * `universe` - 16-bit Port-Address (SubUni/Net)
    /// * `data` - Channel values, at most 512
    ///
    /// Fire and forget: resolves once the kernel accepts the datagram.
    /// Art-Net carries no acknowledgments and the sender performs no
    /// retries; callers are expected to refresh continuously.
    pub async fn send(&self, host: &str, universe: u16, data: &[u8]) -> Result<()> {
        let socket = match &self.state {
            SocketState::Bound(socket) => socket,
            SocketState::Unbound(_) => return Err(ArtNetError::NotBound),
            SocketState::Closed => return Err(ArtNetError::SocketClosed),
        };

        if data.len() > DMX_CHANNELS {
            return Err(ArtNetError::PayloadTooLong(data.len()));
        }

        let packet = ArtDmx {
            sequence: 0,
            physical: 0,
            universe,
            data,
        };

        socket.send_to(&packet.encode(), (host, ARTNET_PORT)).await?;

        tracing::trace!(host, universe, channels = data.len(), "Sent ArtDmx packet");

        Ok(())
    }

    /// Release the socket. Further sends fail with
    /// [`ArtNetError::SocketClosed`]; closing twice is a no-op.
    pub fn close(&mut self) {
        if matches!(self.state, SocketState::Closed) {
            return;
        }
        self.state = SocketState::Closed;

        if self.config.debug {
            tracing::debug!("Art-Net socket closed");
        }
    }

    /// The locally bound address, port and family. Valid only while the
    /// sender is bound.
    pub fn socket_address(&self) -> Result<SocketAddr> {
        match &self.state {
            SocketState::Bound(socket) => Ok(socket.local_addr()?),
            SocketState::Unbound(_) => Err(ArtNetError::NotBound),
            SocketState::Closed => Err(ArtNetError::SocketClosed),
        }
    }
}
