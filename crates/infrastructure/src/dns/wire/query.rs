use super::header::{Header, HEADER_LEN};
use super::name::encode_name;
use super::{WireError, CLASS_IN};
use bytes::{BufMut, Bytes, BytesMut};
use ferrous_resolver_domain::RecordType;

/// A serialized query and the transaction id its response must echo.
#[derive(Debug, Clone)]
pub struct EncodedQuery {
    pub id: u16,
    pub bytes: Bytes,
}

pub struct QueryBuilder;

impl QueryBuilder {
    /// Builds a non-recursive single-question query with a random id.
    pub fn build(domain: &str, record_type: RecordType) -> Result<EncodedQuery, WireError> {
        Self::build_with_id(fastrand::u16(..), domain, record_type)
    }

    pub fn build_with_id(
        id: u16,
        domain: &str,
        record_type: RecordType,
    ) -> Result<EncodedQuery, WireError> {
        let mut out = BytesMut::with_capacity(HEADER_LEN + domain.len() + 6);
        Header::query(id).encode_into(&mut out);
        encode_name(domain, &mut out)?;
        out.put_u16(record_type.to_u16());
        out.put_u16(CLASS_IN);

        Ok(EncodedQuery {
            id,
            bytes: out.freeze(),
        })
    }
}
