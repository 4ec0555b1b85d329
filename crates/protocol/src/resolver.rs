use crate::wire::{QTYPE_A, QTYPE_NS, QTYPE_SOA};
use dashdns_domain::{ParsedQuery, ResponseKind, ZoneConfig};
use std::net::IpAddr;

/// Decides what to answer for a parsed question. Pure function over
/// the query and the zone configuration; all rejection paths are
/// NXDOMAIN, never an error.
///
/// Order of decisions:
/// 1. Names outside the zone (wrong suffix) are NXDOMAIN.
/// 2. The apex answers SOA and NS; any other qtype at the apex —
///    including A — is NXDOMAIN.
/// 3. Subdomains only answer A queries.
/// 4. A subdomain matching a configured nameserver hostname answers
///    with its index-aligned configured IP, or NXDOMAIN when that IP
///    is missing or unparseable — it never falls through to dash
///    decoding.
/// 5. Any other subdomain has its dashes replaced with dots and
///    answers A when the result is a valid IPv4 literal.
pub fn resolve(query: &ParsedQuery, zone: &ZoneConfig) -> ResponseKind {
    let name = normalize(&query.question_name);
    let domain = normalize(&zone.domain);

    if name == domain {
        return match query.qtype {
            QTYPE_SOA => ResponseKind::Soa,
            QTYPE_NS => ResponseKind::Ns,
            _ => ResponseKind::NxDomain,
        };
    }

    let Some(subdomain) = name.strip_suffix(&format!(".{domain}")) else {
        return ResponseKind::NxDomain;
    };

    if query.qtype != QTYPE_A {
        return ResponseKind::NxDomain;
    }

    for (i, nameserver) in zone.nameservers.iter().enumerate() {
        if normalize(nameserver) == name {
            return match zone.nameserver_ip(i).map(str::parse::<IpAddr>) {
                Some(Ok(IpAddr::V4(ip))) => ResponseKind::A(ip),
                _ => ResponseKind::NxDomain,
            };
        }
    }

    // `1.2.3.4` from `1-2-3-4`; std's parser rejects leading zeros,
    // octets over 255, and wrong segment counts.
    match subdomain.replace('-', ".").parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => ResponseKind::A(ip),
        _ => ResponseKind::NxDomain,
    }
}

/// One trailing dot stripped, lowercased.
fn normalize(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}
