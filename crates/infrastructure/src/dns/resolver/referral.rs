use ferrous_resolver_domain::{RecordType, ResourceRecord};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::net::Ipv4Addr;

/// How a nameserver's reply moves the resolution forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Records owned by the target with the queried type, in wire order.
    Answer(Vec<ResourceRecord>),
    Referral(Referral),
    /// Neither an answer nor a delegation.
    NoData,
}

/// Delegation to a child zone: NS target names in wire order, plus every A
/// record of the reply keyed by lower-cased owner name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Referral {
    pub nameservers: SmallVec<[String; 8]>,
    pub glue: FxHashMap<String, Ipv4Addr>,
}

impl Referral {
    /// First nameserver, in referral order, that has a glue address.
    pub fn next_hop(&self) -> Option<(&str, Ipv4Addr)> {
        self.nameservers.iter().find_map(|ns| {
            self.glue
                .get(&ns.to_ascii_lowercase())
                .map(|ip| (ns.as_str(), *ip))
        })
    }

    pub fn first_nameserver(&self) -> Option<&str> {
        self.nameservers.first().map(String::as_str)
    }
}

/// Answers win over referrals present in the same reply.
pub fn classify(
    records: &[ResourceRecord],
    target: &str,
    record_type: RecordType,
) -> Classification {
    let answers: Vec<ResourceRecord> = records
        .iter()
        .filter(|r| r.matches(target, record_type))
        .cloned()
        .collect();
    if !answers.is_empty() {
        return Classification::Answer(answers);
    }

    let mut referral = Referral::default();
    for record in records {
        match record.record_type {
            RecordType::NS => {
                if let Some(name) = record.data.name() {
                    referral.nameservers.push(name.to_string());
                }
            }
            RecordType::A => {
                if let Some(ip) = record.data.ipv4() {
                    referral.glue.insert(record.name.to_ascii_lowercase(), ip);
                }
            }
            _ => {}
        }
    }

    if referral.nameservers.is_empty() {
        Classification::NoData
    } else {
        Classification::Referral(referral)
    }
}
