use crate::domain::is_well_formed;

/// Why a candidate never left the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyInput,
    InvalidFormat,
}

/// Result of the pre-flight check
#[derive(Debug, PartialEq, Eq)]
pub enum Decision<'a> {
    Reject(Rejection),
    Submit(&'a str),
}

/// How a submission attempt ended, from the visitor's point of view. Each
/// variant maps to exactly one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Rejected(Rejection),
    Saved,
    /// The server answered `success: false`, with its message if it gave one
    Failed(Option<String>),
    /// The call itself blew up (transport error, garbled response, ...)
    Unexpected,
}

/// Checks run in order, first failure wins. Nothing is trimmed: a candidate
/// that passes is submitted exactly as typed.
pub fn decide(candidate: &str) -> Decision<'_> {
    if candidate.trim().is_empty() {
        return Decision::Reject(Rejection::EmptyInput);
    }
    if !is_well_formed(candidate) {
        return Decision::Reject(Rejection::InvalidFormat);
    }
    Decision::Submit(candidate)
}
