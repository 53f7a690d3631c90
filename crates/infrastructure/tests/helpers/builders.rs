#![allow(dead_code)]

use std::net::Ipv4Addr;

/// One resource record to place in a scripted reply. Names are written
/// uncompressed.
#[derive(Clone, Debug)]
pub struct Rr {
    pub name: String,
    pub rtype: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl Rr {
    pub fn a(name: &str, ip: Ipv4Addr, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            rtype: 1,
            ttl,
            rdata: ip.octets().to_vec(),
        }
    }

    pub fn ns(zone: &str, target: &str, ttl: u32) -> Self {
        Self {
            name: zone.to_string(),
            rtype: 2,
            ttl,
            rdata: encode_name(target),
        }
    }

    pub fn cname(name: &str, target: &str, ttl: u32) -> Self {
        Self {
            name: name.to_string(),
            rtype: 5,
            ttl,
            rdata: encode_name(target),
        }
    }

    pub fn soa(zone: &str, ttl: u32) -> Self {
        Self {
            name: zone.to_string(),
            rtype: 6,
            ttl,
            rdata: vec![0; 22],
        }
    }
}

/// A scripted reply, rendered against the query it answers so the id and
/// question are echoed.
#[derive(Clone, Debug, Default)]
pub struct Reply {
    pub answers: Vec<Rr>,
    pub authority: Vec<Rr>,
    pub additional: Vec<Rr>,
    pub truncated: bool,
    pub rcode: u8,
    pub id_offset: u16,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, rr: Rr) -> Self {
        self.answers.push(rr);
        self
    }

    pub fn authority(mut self, rr: Rr) -> Self {
        self.authority.push(rr);
        self
    }

    pub fn additional(mut self, rr: Rr) -> Self {
        self.additional.push(rr);
        self
    }

    /// Delegation of `zone` to `nameserver`, optionally with a glue address.
    pub fn referral(zone: &str, nameserver: &str, glue: Option<Ipv4Addr>) -> Self {
        let reply = Self::new().authority(Rr::ns(zone, nameserver, 172800));
        match glue {
            Some(ip) => reply.additional(Rr::a(nameserver, ip, 172800)),
            None => reply,
        }
    }

    pub fn nxdomain(zone: &str) -> Self {
        let mut reply = Self::new().authority(Rr::soa(zone, 900));
        reply.rcode = 3;
        reply
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn with_rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    /// Answers with a transaction id that does not match the query.
    pub fn with_wrong_id(mut self) -> Self {
        self.id_offset = 1;
        self
    }

    pub fn render(&self, query: &[u8]) -> Vec<u8> {
        let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(self.id_offset);
        let mut flags: u16 = 0x8000 | u16::from(self.rcode & 0x0f);
        if self.truncated {
            flags |= 0x0200;
        }

        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&id.to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());
        out.extend_from_slice(&query[4..6]);
        out.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        out.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());
        out.extend_from_slice(&query[12..]);

        for rr in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            out.extend_from_slice(&encode_name(&rr.name));
            out.extend_from_slice(&rr.rtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
            out.extend_from_slice(&rr.ttl.to_be_bytes());
            out.extend_from_slice(&(rr.rdata.len() as u16).to_be_bytes());
            out.extend_from_slice(&rr.rdata);
        }
        out
    }
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Question name and type of a query built by the resolver.
pub fn question_of(query: &[u8]) -> (String, u16) {
    let (name, next) = ferrous_resolver_infrastructure::dns::wire::decode_name(query, 12)
        .expect("query carries a question");
    let qtype = u16::from_be_bytes([query[next], query[next + 1]]);
    (name, qtype)
}
