use super::{read_u16, WireError};
use bytes::{BufMut, BytesMut};

pub const HEADER_LEN: usize = 12;

const FLAG_QR: u16 = 0x8000;
const FLAG_TC: u16 = 0x0200;
const RCODE_MASK: u16 = 0x000F;

pub const RCODE_NXDOMAIN: u8 = 3;

/// The fixed twelve-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Header for a single-question query with every flag clear.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            qdcount: 1,
            ..Self::default()
        }
    }

    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < HEADER_LEN {
            return Err(WireError::Truncated { offset: buf.len() });
        }
        Ok(Self {
            id: read_u16(buf, 0)?,
            flags: read_u16(buf, 2)?,
            qdcount: read_u16(buf, 4)?,
            ancount: read_u16(buf, 6)?,
            nscount: read_u16(buf, 8)?,
            arcount: read_u16(buf, 10)?,
        })
    }

    pub fn encode_into(&self, out: &mut BytesMut) {
        out.put_u16(self.id);
        out.put_u16(self.flags);
        out.put_u16(self.qdcount);
        out.put_u16(self.ancount);
        out.put_u16(self.nscount);
        out.put_u16(self.arcount);
    }

    #[inline]
    pub fn is_response(&self) -> bool {
        self.flags & FLAG_QR != 0
    }

    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.flags & FLAG_TC != 0
    }

    #[inline]
    pub fn rcode(&self) -> u8 {
        (self.flags & RCODE_MASK) as u8
    }

    /// Records announced across the answer, authority and additional sections.
    pub fn record_count(&self) -> usize {
        self.ancount as usize + self.nscount as usize + self.arcount as usize
    }
}
