/// A successfully decoded question, one per received datagram.
///
/// `question_end` is the exclusive end of the question section in the
/// original buffer; the span `[12, question_end)` covers the encoded
/// name, its terminating zero octet, and the 4-byte QTYPE/QCLASS field,
/// and is spliced verbatim into every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub transaction_id: u16,
    /// Raw header byte 2 of the query; the RD bit is echoed back.
    pub flags_byte2: u8,
    /// Raw header byte 3 of the query.
    pub flags_byte3: u8,
    /// Dot-joined question labels, e.g. `192-168-1-1.somedomain.com`.
    pub question_name: String,
    pub qtype: u16,
    pub question_end: usize,
}

impl ParsedQuery {
    /// True when the client asked for recursion.
    pub fn recursion_desired(&self) -> bool {
        self.flags_byte2 & 0x01 != 0
    }
}
