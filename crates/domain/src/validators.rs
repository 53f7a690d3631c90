use super::DomainError;

/// Longest label allowed on the wire (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length octets and root terminator included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Normalizes a user supplied domain name into the form used for queries and
/// cache keys: ASCII lower-case, no trailing dot.
///
/// A single trailing dot (FQDN form) is accepted. `"."` and `""` both denote
/// the root zone and normalize to the empty string. Empty interior labels,
/// a leading dot, labels over 63 bytes and names over 255 wire bytes are
/// rejected.
pub fn normalize_domain_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    let mut wire_len = 1;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        wire_len += label.len() + 1;
    }

    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} bytes on the wire",
            name, MAX_NAME_WIRE_LEN
        )));
    }

    Ok(trimmed.to_ascii_lowercase())
}
