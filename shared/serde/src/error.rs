use thiserror::Error;

/// Errors that can occur while writing values into or reading them out of a packet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Reader ran past the end of the buffer
    #[error("Attempted to read {requested} bits at bit offset {offset}, but the buffer only holds {available} bits")]
    UnexpectedEnd {
        requested: u32,
        offset: u32,
        available: u32,
    },

    /// String, or its length prefix, exceeds the allowed maximum
    #[error("String of {length} bytes exceeds the maximum of {limit} bytes")]
    StringTooLong {
        length: usize,
        limit: usize,
    },

    /// String payload is not valid UTF-8
    #[error("String payload is not valid UTF-8")]
    InvalidUtf8,
}
