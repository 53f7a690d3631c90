use compact_str::CompactString;
use ferrous_resolver_domain::{DnsQuery, RecordType};
use std::fmt;

/// Lower-cased query name plus record type. Displays as `<name>_<type code>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: CompactString,
    pub record_type: RecordType,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        Self {
            domain: CompactString::new(domain.to_ascii_lowercase()),
            record_type,
        }
    }

    pub fn from_query(query: &DnsQuery) -> Self {
        Self::new(&query.domain, query.record_type)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.domain, self.record_type.to_u16())
    }
}
