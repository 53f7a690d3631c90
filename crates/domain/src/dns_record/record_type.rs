use std::fmt;
use std::str::FromStr;

/// Resource record TYPE. Only the types the resolver interprets get their own
/// variant; every other code is carried through untouched as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub fn mnemonic(&self) -> Option<&'static str> {
        match self {
            RecordType::A => Some("A"),
            RecordType::NS => Some("NS"),
            RecordType::CNAME => Some("CNAME"),
            RecordType::AAAA => Some("AAAA"),
            RecordType::Other(_) => None,
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.to_u16()),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "AAAA" => Ok(RecordType::AAAA),
            _ => Err(format!("Unsupported record type '{}'", s)),
        }
    }
}
