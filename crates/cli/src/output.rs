use ferrous_resolver_application::ports::DnsResolution;
use std::fmt::Write;

pub const CACHE_HIT_BANNER: &str = "[Cache Hit]";
pub const NO_RECORDS: &str = "NXDOMAIN or no records found.";
pub const CACHE_CLEARED: &str = "Cache cleared.";

pub const USAGE: &str =
    "Usage: ferrous-resolver <domain> <type> [-d]\n       ferrous-resolver clear-cache";

/// One `name ttl TYPE data` line per record, preceded by the cache-hit
/// banner when the answer came from the cache.
pub fn render_resolution(resolution: &DnsResolution) -> String {
    let mut out = String::new();
    if resolution.cache_hit {
        out.push_str(CACHE_HIT_BANNER);
        out.push('\n');
    }
    if resolution.records.is_empty() {
        out.push_str(NO_RECORDS);
        out.push('\n');
        return out;
    }
    for record in resolution.records.iter() {
        let _ = writeln!(out, "{}", record);
    }
    out
}
