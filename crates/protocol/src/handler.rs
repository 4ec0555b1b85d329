use crate::error::WireError;
use crate::resolver;
use crate::wire;
use dashdns_domain::{ResponseKind, ZoneConfig};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-datagram pipeline: decode, resolve, encode. Holds only the
/// shared zone configuration; every call is independent and
/// idempotent.
pub struct QueryHandler {
    zone: Arc<ZoneConfig>,
}

impl QueryHandler {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        Self { zone }
    }

    /// Produces the complete response datagram for one received query.
    ///
    /// A query whose question cannot be parsed is still answered with a
    /// best-effort NXDOMAIN echoing the transaction id, RD bit, and
    /// whatever question bytes can be salvaged. The one fatal case is a
    /// datagram without a full 12-byte header: there is no valid query
    /// to answer, so the error propagates and the transport drops the
    /// datagram.
    pub fn handle(&self, raw: &[u8]) -> Result<Vec<u8>, WireError> {
        let query = match wire::decode(raw) {
            Ok(query) => query,
            Err(err @ WireError::TruncatedHeader(_)) => return Err(err),
            Err(err) => {
                warn!(error = %err, len = raw.len(), "Malformed query, answering NXDOMAIN");
                let question_end = wire::salvage_question_end(raw);
                return Ok(wire::encode(
                    raw,
                    question_end,
                    ResponseKind::NxDomain,
                    &self.zone,
                ));
            }
        };

        let kind = resolver::resolve(&query, &self.zone);
        debug!(
            name = %query.question_name,
            qtype = query.qtype,
            answer = ?kind,
            "Resolved query"
        );
        Ok(wire::encode(raw, query.question_end, kind, &self.zone))
    }
}
