use super::HEADER_LEN;
use crate::error::WireError;
use dashdns_domain::ParsedQuery;

/// Minimal parse of a raw query datagram.
///
/// Reads the transaction id and raw flag bytes from the header, then
/// walks the length-prefixed labels of the question name starting at
/// offset 12 until the terminating zero octet. Labels are decoded as
/// UTF-8 and joined with `.`; QTYPE follows the zero octet and QCLASS
/// is skipped without validation (though its bytes must be present,
/// since the question span is echoed verbatim into the response).
pub fn decode(buf: &[u8]) -> Result<ParsedQuery, WireError> {
    if buf.len() < HEADER_LEN {
        return Err(WireError::TruncatedHeader(buf.len()));
    }

    let transaction_id = u16::from_be_bytes([buf[0], buf[1]]);

    let mut labels: Vec<&str> = Vec::new();
    let mut pos = HEADER_LEN;
    loop {
        let len = *buf.get(pos).ok_or(WireError::QuestionOverrun)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = buf
            .get(pos..pos + len)
            .ok_or(WireError::QuestionOverrun)?;
        labels.push(std::str::from_utf8(label).map_err(|_| WireError::InvalidLabel)?);
        pos += len;
    }

    if buf.len() < pos + 4 {
        return Err(WireError::QuestionOverrun);
    }
    let qtype = u16::from_be_bytes([buf[pos], buf[pos + 1]]);

    Ok(ParsedQuery {
        transaction_id,
        flags_byte2: buf[2],
        flags_byte3: buf[3],
        question_name: labels.join("."),
        qtype,
        question_end: pos + 4,
    })
}

/// Walks the question section with clamped bounds, for echoing the
/// question of a query that failed to decode. Mirrors the decoder's
/// label walk but cannot fail; the returned end never exceeds the
/// buffer length, so a truncated question is echoed truncated.
pub fn salvage_question_end(buf: &[u8]) -> usize {
    let mut pos = HEADER_LEN;
    while pos < buf.len() && buf[pos] != 0 {
        pos += buf[pos] as usize + 1;
    }
    // zero octet plus QTYPE/QCLASS
    (pos + 5).min(buf.len())
}
