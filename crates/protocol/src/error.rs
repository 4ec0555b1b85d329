use thiserror::Error;

/// Ways a received datagram can fail to parse as a DNS query.
///
/// None of these escape the handler except [`WireError::TruncatedHeader`]:
/// with a readable header the handler still answers NXDOMAIN, without one
/// there is nothing to echo and the datagram must be dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Datagram too short for a DNS header: {0} bytes")]
    TruncatedHeader(usize),

    #[error("Question section extends past the end of the datagram")]
    QuestionOverrun,

    #[error("Question label is not valid UTF-8")]
    InvalidLabel,
}
