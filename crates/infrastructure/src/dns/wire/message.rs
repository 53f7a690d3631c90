use super::header::{Header, HEADER_LEN};
use super::name::decode_name;
use super::{read_u16, read_u32, WireError};
use ferrous_resolver_domain::{RecordData, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

/// Fixed part of a resource record following its owner name.
const RR_FIXED_LEN: usize = 10;

/// Upper bound on the initial record allocation, whatever the header claims.
const RECORD_PREALLOC_CAP: usize = 64;

#[derive(Debug, Clone)]
pub struct DecodedResponse {
    pub header: Header,
    /// Answer, authority and additional records in wire order.
    pub records: Vec<ResourceRecord>,
}

/// Decodes the header and every record the message carries.
///
/// Only a header shorter than twelve bytes fails. Any malformed question or
/// record stops decoding and the records gathered so far are returned.
pub fn decode_response(buf: &[u8]) -> Result<DecodedResponse, WireError> {
    let header = Header::decode(buf)?;
    let mut records = Vec::with_capacity(header.record_count().min(RECORD_PREALLOC_CAP));
    let mut pos = HEADER_LEN;

    for _ in 0..header.qdcount {
        match skip_question(buf, pos) {
            Ok(next) => pos = next,
            Err(e) => {
                debug!(error = %e, offset = pos, "Stopped decoding at question section");
                return Ok(DecodedResponse { header, records });
            }
        }
    }

    for _ in 0..header.record_count() {
        match decode_record(buf, pos) {
            Ok((record, next)) => {
                records.push(record);
                pos = next;
            }
            Err(e) => {
                debug!(
                    error = %e,
                    offset = pos,
                    decoded = records.len(),
                    announced = header.record_count(),
                    "Stopped decoding records, keeping partial result"
                );
                break;
            }
        }
    }

    Ok(DecodedResponse { header, records })
}

pub fn decode_message(buf: &[u8]) -> Result<Vec<ResourceRecord>, WireError> {
    decode_response(buf).map(|response| response.records)
}

fn skip_question(buf: &[u8], pos: usize) -> Result<usize, WireError> {
    let (_, next) = decode_name(buf, pos)?;
    if buf.len() < next + 4 {
        return Err(WireError::Truncated { offset: next });
    }
    Ok(next + 4)
}

fn decode_record(buf: &[u8], pos: usize) -> Result<(ResourceRecord, usize), WireError> {
    let (name, pos) = decode_name(buf, pos)?;
    let record_type = RecordType::from_u16(read_u16(buf, pos)?);
    let class = read_u16(buf, pos + 2)?;
    let ttl = read_u32(buf, pos + 4)?;
    let rdlength = read_u16(buf, pos + 8)? as usize;

    let rdata_start = pos + RR_FIXED_LEN;
    let rdata = buf
        .get(rdata_start..rdata_start + rdlength)
        .ok_or(WireError::Truncated {
            offset: rdata_start,
        })?;
    let data = decode_rdata(buf, rdata_start, rdata, record_type)?;

    let record = ResourceRecord::new(name, record_type, class, ttl, rdata.to_vec(), data);
    Ok((record, rdata_start + rdlength))
}

fn decode_rdata(
    buf: &[u8],
    rdata_start: usize,
    rdata: &[u8],
    record_type: RecordType,
) -> Result<RecordData, WireError> {
    let data = match record_type {
        RecordType::A => match <[u8; 4]>::try_from(rdata) {
            Ok(octets) => RecordData::A(Ipv4Addr::from(octets)),
            Err(_) => RecordData::Opaque,
        },
        RecordType::AAAA => match <[u8; 16]>::try_from(rdata) {
            Ok(octets) => RecordData::Aaaa(Ipv6Addr::from(octets)),
            Err(_) => RecordData::Opaque,
        },
        // Names inside rdata may point anywhere in the message.
        RecordType::NS => RecordData::Ns(decode_name(buf, rdata_start)?.0),
        RecordType::CNAME => RecordData::Cname(decode_name(buf, rdata_start)?.0),
        RecordType::Other(_) => RecordData::Opaque,
    };
    Ok(data)
}
