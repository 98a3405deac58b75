//! Error types for the jobdump-core library.
//!
//! Every failure names the decoding stage that ran out of input. A failed
//! decode never yields a partial record.

use thiserror::Error;

/// Result type alias for jobdump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Decoding failures, one per stage of the `.job` layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Fewer bytes than the fixed-length header requires
    #[error("truncated header: need {needed} bytes, have {available}")]
    TruncatedHeader {
        /// Bytes required for the fixed header
        needed: usize,
        /// Bytes present in the input
        available: usize,
    },

    /// A length prefix or its payload runs past the end of the input
    #[error("truncated variable-length field '{field}' at offset {offset}")]
    TruncatedVariableField {
        /// Name of the field being read
        field: &'static str,
        /// Byte offset where the read started
        offset: usize,
    },

    /// The fixed-size trailer is cut short
    #[error("truncated trailer at offset {offset}")]
    TruncatedTrailer {
        /// Byte offset where the read started
        offset: usize,
    },

    /// A signature block is announced but incomplete
    #[error("truncated signature block at offset {offset}")]
    TruncatedSignature {
        /// Byte offset where the read started
        offset: usize,
    },
}

impl Error {
    /// Creates a new truncated header error
    pub fn truncated_header(needed: usize, available: usize) -> Self {
        Self::TruncatedHeader { needed, available }
    }

    /// Creates a new truncated variable field error
    pub fn truncated_variable_field(field: &'static str, offset: usize) -> Self {
        Self::TruncatedVariableField { field, offset }
    }

    /// Creates a new truncated trailer error
    pub fn truncated_trailer(offset: usize) -> Self {
        Self::TruncatedTrailer { offset }
    }

    /// Creates a new truncated signature error
    pub fn truncated_signature(offset: usize) -> Self {
        Self::TruncatedSignature { offset }
    }

    /// Returns the name of the decoding stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            Self::TruncatedHeader { .. } => "header",
            Self::TruncatedVariableField { .. } => "variable section",
            Self::TruncatedTrailer { .. } => "trailer",
            Self::TruncatedSignature { .. } => "signature",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::truncated_variable_field("comment", 96);
        assert!(err.to_string().contains("comment"));
        assert!(err.to_string().contains("96"));

        let err = Error::truncated_header(68, 12);
        assert_eq!(err.to_string(), "truncated header: need 68 bytes, have 12");
    }

    #[test]
    fn test_stage() {
        assert_eq!(Error::truncated_header(68, 0).stage(), "header");
        assert_eq!(Error::truncated_trailer(100).stage(), "trailer");
        assert_eq!(Error::truncated_signature(200).stage(), "signature");
    }
}
