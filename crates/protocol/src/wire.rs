//! RFC 1035 wire format, constrained to what this zone emits:
//! one question echoed verbatim, zero to two answers, nothing in the
//! authority or additional sections.
mod decode;
mod encode;

pub use decode::{decode, salvage_question_end};
pub use encode::encode;

pub const HEADER_LEN: usize = 12;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_NS: u16 = 2;
pub const QTYPE_SOA: u16 = 6;

pub(crate) const CLASS_IN: u16 = 1;

/// TTL for synthesized A answers.
pub(crate) const A_TTL: u32 = 300;
/// TTL for the apex SOA and NS answers.
pub(crate) const APEX_TTL: u32 = 3600;

pub(crate) const SOA_SERIAL: u32 = 1;
pub(crate) const SOA_REFRESH: u32 = 7200;
pub(crate) const SOA_RETRY: u32 = 900;
pub(crate) const SOA_EXPIRE: u32 = 1_209_600;
pub(crate) const SOA_MINIMUM: u32 = 86_400;
