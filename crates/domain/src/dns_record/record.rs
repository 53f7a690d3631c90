use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Interpreted RDATA of a resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Cname(String),
    /// Any type the resolver does not interpret, or an A/AAAA record whose
    /// RDLENGTH does not match the address size.
    Opaque,
}

impl RecordData {
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Target name carried by NS and CNAME records.
    pub fn name(&self) -> Option<&str> {
        match self {
            RecordData::Ns(name) | RecordData::Cname(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => f.write_str(name),
            RecordData::Opaque => Ok(()),
        }
    }
}

/// A decoded resource record from any section of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Owner name, dot separated, no trailing dot
    pub name: String,
    pub record_type: RecordType,
    pub class: u16,
    /// Time to live in seconds
    pub ttl: u32,
    pub rdata: Vec<u8>,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: u16,
        ttl: u32,
        rdata: Vec<u8>,
        data: RecordData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            rdata,
            data,
        }
    }

    /// Owner comparison is ASCII case-insensitive.
    pub fn is_owned_by(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.record_type == record_type && self.is_owned_by(name)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.name, self.ttl, self.record_type, self.data
        )
    }
}
