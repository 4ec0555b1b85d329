use std::net::Ipv4Addr;

/// What the resolver decided to answer with. Carries everything the
/// wire encoder needs; nothing survives past one encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// One A record with the given address.
    A(Ipv4Addr),
    /// The zone's SOA record, built from static configuration.
    Soa,
    /// The zone's NS records, built from static configuration.
    Ns,
    /// Name does not exist: header + question only, RCODE=3.
    NxDomain,
}

impl ResponseKind {
    /// The 4-bit response code this kind carries in header byte 3.
    pub fn rcode(&self) -> u8 {
        match self {
            ResponseKind::NxDomain => 3,
            _ => 0,
        }
    }
}
