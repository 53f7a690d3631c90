//! DNS wire format: query encoding and response decoding with label
//! compression. Every read is bounds-checked; malformed input surfaces as
//! [`WireError`] instead of a panic.

pub mod error;
pub mod header;
pub mod message;
pub mod name;
pub mod query;

pub use error::WireError;
pub use header::Header;
pub use message::{decode_message, decode_response, DecodedResponse};
pub use name::{decode_name, encode_name};
pub use query::{EncodedQuery, QueryBuilder};

pub const CLASS_IN: u16 = 1;

#[inline]
pub(crate) fn read_u16(buf: &[u8], offset: usize) -> Result<u16, WireError> {
    match buf.get(offset..offset + 2) {
        Some(b) => Ok(u16::from_be_bytes([b[0], b[1]])),
        None => Err(WireError::Truncated { offset }),
    }
}

#[inline]
pub(crate) fn read_u32(buf: &[u8], offset: usize) -> Result<u32, WireError> {
    match buf.get(offset..offset + 4) {
        Some(b) => Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]])),
        None => Err(WireError::Truncated { offset }),
    }
}
