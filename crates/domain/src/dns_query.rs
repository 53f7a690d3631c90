use super::validators::normalize_domain_name;
use super::{DomainError, RecordType};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Validates and normalizes `domain` (lower-case, no trailing dot) before
    /// building the query.
    pub fn parse(domain: &str, record_type: RecordType) -> Result<Self, DomainError> {
        let normalized = normalize_domain_name(domain)?;
        Ok(Self::new(normalized, record_type))
    }
}
