use super::{
    APEX_TTL, A_TTL, CLASS_IN, HEADER_LEN, QTYPE_A, QTYPE_NS, QTYPE_SOA, SOA_EXPIRE, SOA_MINIMUM,
    SOA_REFRESH, SOA_RETRY, SOA_SERIAL,
};
use dashdns_domain::{ResponseKind, ZoneConfig};

/// Compression pointer to the question name at offset 12.
const NAME_PTR: [u8; 2] = [0xC0, 0x0C];

/// Builds the complete response datagram for one query.
///
/// The original 12-byte header is copied and patched: byte 2 becomes
/// `0x84 | (original & 0x01)` (QR=1, Opcode=0, AA=1, TC=0, RD echoed),
/// byte 3 becomes `0x80` (RA=1, RCODE=0) or `0x83` for NXDOMAIN.
/// QDCOUNT is left as the client sent it; ANCOUNT reflects the answers
/// appended below; NSCOUNT and ARCOUNT are always zero. The question
/// bytes `[12, question_end)` are spliced in verbatim.
pub fn encode(
    raw_query: &[u8],
    question_end: usize,
    kind: ResponseKind,
    zone: &ZoneConfig,
) -> Vec<u8> {
    let question_end = question_end.clamp(HEADER_LEN, raw_query.len());

    let mut buf = Vec::with_capacity(question_end + 96);
    buf.extend_from_slice(&raw_query[..HEADER_LEN]);
    buf[2] = 0x84 | (raw_query[2] & 0x01);
    buf[3] = 0x80 | kind.rcode();
    buf[8..HEADER_LEN].fill(0);
    buf.extend_from_slice(&raw_query[HEADER_LEN..question_end]);

    let ancount: u16 = match kind {
        ResponseKind::A(ip) => {
            push_answer(&mut buf, QTYPE_A, A_TTL, &ip.octets());
            1
        }
        ResponseKind::Soa => {
            push_answer(&mut buf, QTYPE_SOA, APEX_TTL, &soa_rdata(zone));
            1
        }
        ResponseKind::Ns => {
            let targets = ns_targets(zone);
            let count = targets.len() as u16;
            for target in targets {
                let mut rdata = Vec::new();
                encode_name(&target, &mut rdata);
                push_answer(&mut buf, QTYPE_NS, APEX_TTL, &rdata);
            }
            count
        }
        ResponseKind::NxDomain => 0,
    };
    buf[6..8].copy_from_slice(&ancount.to_be_bytes());

    buf
}

/// One answer record: question-name pointer, TYPE, CLASS=IN, TTL, then
/// RDLENGTH computed from the actual RDATA bytes.
fn push_answer(buf: &mut Vec<u8>, rtype: u16, ttl: u32, rdata: &[u8]) {
    buf.extend_from_slice(&NAME_PTR);
    buf.extend_from_slice(&rtype.to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(rdata);
}

/// Label-encodes `name`, zero-terminated. Empty labels (from a
/// trailing dot) are dropped.
fn encode_name(name: &str, out: &mut Vec<u8>) {
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
}

fn soa_rdata(zone: &ZoneConfig) -> Vec<u8> {
    let mname = zone
        .nameservers
        .first()
        .cloned()
        .unwrap_or_else(|| format!("ns1.{}", zone.domain));

    let mut rdata = Vec::new();
    encode_name(&mname, &mut rdata);
    encode_name(&format!("hostmaster.{}", zone.domain), &mut rdata);
    for field in [SOA_SERIAL, SOA_REFRESH, SOA_RETRY, SOA_EXPIRE, SOA_MINIMUM] {
        rdata.extend_from_slice(&field.to_be_bytes());
    }
    rdata
}

/// NS answer targets: the configured nameservers capped at two.
/// Fewer than two configured pads with a synthesized `ns2.<domain>`,
/// a quirk preserved from the behavior this zone has always shown.
fn ns_targets(zone: &ZoneConfig) -> Vec<String> {
    let mut targets: Vec<String> = zone.nameservers.iter().take(2).cloned().collect();
    while targets.len() < 2 {
        targets.push(format!("ns2.{}", zone.domain));
    }
    targets
}
