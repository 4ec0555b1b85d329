#![allow(dead_code)]

use dashdns_domain::ZoneConfig;

/// Standard query flags: RD set, everything else clear.
pub const FLAGS_RD: u16 = 0x0100;

pub fn zone(domain: &str) -> ZoneConfig {
    ZoneConfig {
        domain: domain.to_string(),
        nameservers: vec![],
        nameserver_ips: vec![],
    }
}

pub fn zone_with_ns(domain: &str, nameservers: &[&str], ips: &[&str]) -> ZoneConfig {
    ZoneConfig {
        domain: domain.to_string(),
        nameservers: nameservers.iter().map(|s| s.to_string()).collect(),
        nameserver_ips: ips.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn build_query(name: &str, qtype: u16) -> Vec<u8> {
    build_query_with(0x1234, FLAGS_RD, name, qtype)
}

/// Header + one label-encoded question, the shape every stub resolver
/// sends: QDCOUNT=1, empty answer/authority/additional sections.
pub fn build_query_with(id: u16, flags: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&[0u8; 6]);
    for label in name.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf
}

pub fn rcode(resp: &[u8]) -> u8 {
    resp[3] & 0x0F
}

pub fn qdcount(resp: &[u8]) -> u16 {
    u16::from_be_bytes([resp[4], resp[5]])
}

pub fn ancount(resp: &[u8]) -> u16 {
    u16::from_be_bytes([resp[6], resp[7]])
}

pub fn nscount(resp: &[u8]) -> u16 {
    u16::from_be_bytes([resp[8], resp[9]])
}

pub fn arcount(resp: &[u8]) -> u16 {
    u16::from_be_bytes([resp[10], resp[11]])
}

pub struct Answer {
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

/// Parses the answer section starting at `question_end`, asserting the
/// layout this server always produces: a `0xC00C` owner pointer per
/// record and nothing after the last answer.
pub fn parse_answers(resp: &[u8], question_end: usize) -> Vec<Answer> {
    let mut answers = Vec::new();
    let mut pos = question_end;
    for _ in 0..ancount(resp) {
        assert_eq!(
            &resp[pos..pos + 2],
            &[0xC0, 0x0C],
            "answer owner must point at the question name"
        );
        let rtype = u16::from_be_bytes([resp[pos + 2], resp[pos + 3]]);
        let class = u16::from_be_bytes([resp[pos + 4], resp[pos + 5]]);
        let ttl = u32::from_be_bytes([
            resp[pos + 6],
            resp[pos + 7],
            resp[pos + 8],
            resp[pos + 9],
        ]);
        let rdlen = u16::from_be_bytes([resp[pos + 10], resp[pos + 11]]) as usize;
        let rdata = resp[pos + 12..pos + 12 + rdlen].to_vec();
        answers.push(Answer {
            rtype,
            class,
            ttl,
            rdata,
        });
        pos += 12 + rdlen;
    }
    assert_eq!(pos, resp.len(), "trailing bytes after the answer section");
    answers
}

/// Decodes a label-encoded name, returning it and the bytes consumed
/// (including the terminating zero octet).
pub fn decode_name(bytes: &[u8]) -> (String, usize) {
    let mut labels = Vec::new();
    let mut pos = 0;
    loop {
        let len = bytes[pos] as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        labels.push(String::from_utf8(bytes[pos..pos + len].to_vec()).unwrap());
        pos += len;
    }
    (labels.join("."), pos)
}
