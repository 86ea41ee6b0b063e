//! Art-Net packet encoding
//!
//! Art-Net is a UDP-based protocol for transmitting DMX512 over Ethernet.
//! This module builds the exact wire bytes of an ArtDmx packet: a fixed
//! 12-byte header followed by an opcode-specific body.

/// Art-Net UDP port, fixed by the protocol.
pub const ARTNET_PORT: u16 = 6454;

/// Protocol identifier: the 7 ASCII characters of `Art-Net` plus a NUL.
pub const ARTNET_ID: [u8; 8] = *b"Art-Net\0";

/// Art-Net protocol version (emitted big-endian: high byte 0, low byte 14).
pub const PROTOCOL_VERSION: u16 = 14;

/// Maximum number of channels in one DMX512 universe.
pub const DMX_CHANNELS: usize = 512;

/// Art-Net opcodes
///
/// Only [`OpCode::Dmx`] has a body encoding here; the remaining variants
/// are reserved for future packet kinds (Poll/PollReply discovery is out
/// of scope beyond the constants themselves).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum OpCode {
    Poll = 0x2000,
    PollReply = 0x2100,
    Dmx = 0x5000,
    Nzs = 0x5100,
}

/// Build the fixed Art-Net header for an opcode.
///
/// Layout: ID (8 bytes), opcode (little-endian), protocol version
/// (big-endian). The opcode/length endianness asymmetry is part of the
/// wire format. Being `const`, the DMX header is evaluated once at
/// compile time rather than rebuilt per send.
pub const fn header(opcode: OpCode) -> [u8; 12] {
    let op = (opcode as u16).to_le_bytes();
    let ver = PROTOCOL_VERSION.to_be_bytes();
    [
        ARTNET_ID[0],
        ARTNET_ID[1],
        ARTNET_ID[2],
        ARTNET_ID[3],
        ARTNET_ID[4],
        ARTNET_ID[5],
        ARTNET_ID[6],
        ARTNET_ID[7],
        op[0],
        op[1],
        ver[0],
        ver[1],
    ]
}

const DMX_HEADER: [u8; 12] = header(OpCode::Dmx);

/// One ArtDmx packet: a universe worth of DMX channel data.
///
/// Constructed fresh per send (stack-scoped, nothing shared between
/// sends). `sequence` and `physical` stay 0 when unused.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtDmx<'a> {
    pub sequence: u8,
    pub physical: u8,
    /// 16-bit Port-Address, emitted as SubUni (low byte) then Net (high byte).
    pub universe: u16,
    /// Raw channel values, at most [`DMX_CHANNELS`] in normal use.
    pub data: &'a [u8],
}

impl ArtDmx<'_> {
    /// Encode into the exact wire byte sequence (header followed by body).
    ///
    /// Performs no range validation: the length field is `data.len()`
    /// masked to 16 bits, and payloads over 512 channels are encoded
    /// as-is. [`ArtNetSender::send`](crate::ArtNetSender::send) rejects
    /// oversized payloads before encoding.
    pub fn encode(&self) -> Vec<u8> {
        let mut packet = Vec::with_capacity(DMX_HEADER.len() + 6 + self.data.len());

        packet.extend_from_slice(&DMX_HEADER);
        packet.push(self.sequence);
        packet.push(self.physical);

        // Port-Address: SubUni then Net
        packet.extend_from_slice(&self.universe.to_le_bytes());

        // Data length is the one big-endian field in the body
        packet.extend_from_slice(&(self.data.len() as u16).to_be_bytes());

        packet.extend_from_slice(self.data);
        packet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dmx_packet_structure() {
        let packet = ArtDmx {
            universe: 0,
            data: &[0u8; 512],
            ..ArtDmx::default()
        }
        .encode();

        // Header
        assert_eq!(&packet[0..8], b"Art-Net\0");

        // OpCode (little-endian)
        assert_eq!(packet[8], 0x00);
        assert_eq!(packet[9], 0x50);

        // Protocol version (big-endian)
        assert_eq!(packet[10], 0);
        assert_eq!(packet[11], 14);

        // Sequence and physical unused
        assert_eq!(packet[12], 0);
        assert_eq!(packet[13], 0);

        // Length (big-endian)
        assert_eq!(packet[16], 0x02);
        assert_eq!(packet[17], 0x00);

        assert_eq!(packet.len(), 18 + 512);
    }

    #[test]
    fn test_known_dmx_packet_bytes() {
        let packet = ArtDmx {
            universe: 1,
            data: &[0, 255, 128],
            ..ArtDmx::default()
        }
        .encode();

        assert_eq!(
            packet,
            [
                65, 114, 116, 45, 78, 101, 116, 0, // "Art-Net\0"
                0, 80, // OpDmx lo/hi
                0, 14, // protocol version
                0, 0, // sequence, physical
                1, 0, // SubUni, Net
                0, 3, // length hi/lo
                0, 255, 128, // channel data
            ]
        );
    }

    #[test]
    fn test_universe_split_into_subuni_and_net() {
        let packet = ArtDmx {
            universe: 0x0105,
            data: &[],
            ..ArtDmx::default()
        }
        .encode();

        assert_eq!(packet[14], 0x05); // SubUni
        assert_eq!(packet[15], 0x01); // Net
        assert_eq!(packet.len(), 18);
        assert_eq!((packet[16], packet[17]), (0, 0));
    }

    #[test]
    fn test_header_constants_per_opcode() {
        assert_eq!(&header(OpCode::Poll)[8..10], &[0x00, 0x20]);
        assert_eq!(&header(OpCode::PollReply)[8..10], &[0x00, 0x21]);
        assert_eq!(&header(OpCode::Nzs)[8..10], &[0x00, 0x51]);
        assert_eq!(&header(OpCode::Dmx)[0..8], b"Art-Net\0");
    }

    #[test]
    fn test_decode_recovers_universe_and_data() {
        let data = [7u8, 0, 42, 255, 1];
        let packet = ArtDmx {
            universe: 0x2B0C,
            data: &data,
            ..ArtDmx::default()
        }
        .encode();

        let universe = u16::from_le_bytes([packet[14], packet[15]]);
        let length = u16::from_be_bytes([packet[16], packet[17]]) as usize;

        assert_eq!(universe, 0x2B0C);
        assert_eq!(length, data.len());
        assert_eq!(&packet[18..18 + length], &data);
    }

    proptest! {
        #[test]
        fn prop_encode_layout(universe: u16, data in proptest::collection::vec(any::<u8>(), 0..=512)) {
            let packet = ArtDmx {
                universe,
                data: &data,
                ..ArtDmx::default()
            }
            .encode();

            prop_assert_eq!(packet.len(), 18 + data.len());
            prop_assert_eq!(&packet[0..8], b"Art-Net\0");
            prop_assert_eq!([packet[14], packet[15]], universe.to_le_bytes());
            prop_assert_eq!([packet[16], packet[17]], (data.len() as u16).to_be_bytes());
            prop_assert_eq!(&packet[18..], &data[..]);
        }
    }
}
