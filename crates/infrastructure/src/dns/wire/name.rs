use super::WireError;
use bytes::{BufMut, BytesMut};
use ferrous_resolver_domain::validators::{MAX_LABEL_LEN, MAX_NAME_WIRE_LEN};

const POINTER_MASK: u8 = 0xC0;
const MAX_POINTER_JUMPS: usize = 128;

/// Appends `name` in uncompressed wire form. A single trailing dot is
/// accepted; `""` and `"."` encode the root.
pub fn encode_name(name: &str, out: &mut BytesMut) -> Result<(), WireError> {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        out.put_u8(0);
        return Ok(());
    }

    let mut wire_len = 1;
    for label in name.split('.') {
        if label.is_empty() {
            return Err(WireError::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong { len: label.len() });
        }
        wire_len += label.len() + 1;
    }
    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(WireError::NameTooLong);
    }

    out.reserve(wire_len);
    for label in name.split('.') {
        out.put_u8(label.len() as u8);
        out.put_slice(label.as_bytes());
    }
    out.put_u8(0);
    Ok(())
}

/// Decodes the possibly compressed name at `start`.
///
/// Returns the dotted name (no trailing dot, empty for the root) and the
/// offset just past the name as it appears at `start`: once a pointer has
/// been followed that offset stays at the first pointer + 2.
pub fn decode_name(buf: &[u8], start: usize) -> Result<(String, usize), WireError> {
    let max_jumps = (buf.len() / 2 + 1).min(MAX_POINTER_JUMPS);
    let mut name = String::new();
    let mut pos = start;
    let mut resume: Option<usize> = None;
    let mut jumps = 0;
    let mut wire_len = 1;

    loop {
        let len = *buf.get(pos).ok_or(WireError::Truncated { offset: pos })?;

        match len & POINTER_MASK {
            0x00 if len == 0 => {
                return Ok((name, resume.unwrap_or(pos + 1)));
            }
            0x00 => {
                let len = len as usize;
                let label = buf
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(WireError::Truncated { offset: pos + 1 })?;

                wire_len += len + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(WireError::NameTooLong);
                }

                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(label));
                pos += 1 + len;
            }
            POINTER_MASK => {
                let low = *buf
                    .get(pos + 1)
                    .ok_or(WireError::Truncated { offset: pos + 1 })?;
                if jumps >= max_jumps {
                    return Err(WireError::PointerLoop { offset: pos });
                }
                jumps += 1;
                resume.get_or_insert(pos + 2);
                pos = (((len & !POINTER_MASK) as usize) << 8) | low as usize;
            }
            _ => return Err(WireError::ReservedLabelType { byte: len }),
        }
    }
}
