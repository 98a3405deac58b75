//! Decoder for Task Scheduler `.job` files.
//!
//! ## Layout
//!
//! A `.job` file is read front to back with a single cursor:
//!
//! 1. Fixed-length header, bytes [0,68)
//! 2. Variable-length section: running instance count and six
//!    length-prefixed UTF-16LE strings, then the reserved data size
//! 3. Fixed trailer with the scheduling state and one trigger
//! 4. Optional signature block, present only for single-trigger files
//!
//! The header carries offsets to later sections, but they are advisory and
//! the decoder ignores them.
//!
//! ## Configuration
//!
//! [`DecoderConfig`] selects how strings are decoded and whether the
//! reserved data payload is skipped. The defaults reproduce the output of
//! existing forensic tooling for the same files.

mod header;
mod reader;
mod strings;
mod trailer;
mod trigger;
mod types;

use crate::error::Result;
use tracing::debug;

pub use header::{FixedHeader, FIXED_HEADER_LEN};
pub use reader::JobReader;
pub use strings::{
    decode_text, VariableSection, COMMENT_NOT_SET, USER_NOT_SET, WORKING_DIRECTORY_NOT_SET,
};
pub use trailer::{SignatureBlock, Trailer, SIGNATURE_BLOCK_LEN, SIGNATURE_LEN, TRAILER_LEN};
pub use trigger::{TriggerDetails, TriggerType, TRIGGER_DATA_LEN};
pub use types::{
    JobId, LastRunTime, ScheduledDate, JOB_ID_LEN, LAST_RUN_TIME_LEN, SCHEDULED_DATE_LEN,
};

/// How length-prefixed strings are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringDecoding {
    /// Drop every zero byte and map each remaining byte to the char of the
    /// same value (Latin-1).
    ///
    /// Pure ASCII text matches existing tooling byte for byte. Bytes at or
    /// above `0x80` come out UTF-8 encoded, so their output differs from the
    /// raw byte that tooling would write.
    #[default]
    StripZeroBytes,
    /// Proper UTF-16LE decode with trailing NULs trimmed
    Utf16,
}

/// What to do with the reserved data that follows the string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservedDataHandling {
    /// Read the size but continue right after it, as existing tooling does
    #[default]
    Unskipped,
    /// Advance past the declared number of reserved bytes
    Skip,
}

/// Configuration for the decoder
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// String decoding strategy
    pub string_decoding: StringDecoding,
    /// Reserved data handling
    pub reserved_data: ReservedDataHandling,
}

impl DecoderConfig {
    /// Creates a new decoder config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string decoding strategy
    pub fn string_decoding(mut self, mode: StringDecoding) -> Self {
        self.string_decoding = mode;
        self
    }

    /// Sets the reserved data handling
    pub fn reserved_data(mut self, handling: ReservedDataHandling) -> Self {
        self.reserved_data = handling;
        self
    }
}

/// A fully decoded `.job` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    /// Fixed-length header
    pub header: FixedHeader,
    /// String fields
    pub variable: VariableSection,
    /// Scheduling state and trigger
    pub trailer: Trailer,
    /// Signature block, when present
    pub signature: Option<SignatureBlock>,
    /// Number of bytes the decoder consumed
    pub consumed: usize,
}

/// Decoder for `.job` buffers
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a new decoder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new decoder with custom configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes a complete record from `data`.
    ///
    /// Either every section decodes or an error names the section that ran
    /// out of input. Bytes after the last section are ignored.
    pub fn decode(&self, data: &[u8]) -> Result<JobRecord> {
        debug!("Decoding {} byte job buffer", data.len());

        let mut reader = JobReader::new(data);
        let header = FixedHeader::decode(&mut reader)?;
        let variable = VariableSection::decode(&mut reader, &self.config)?;
        let trailer = Trailer::decode(&mut reader)?;
        let signature = SignatureBlock::decode(&mut reader, trailer.trigger_count)?;

        debug!(
            "Decoded job: {} of {} bytes consumed, signature {}",
            reader.position(),
            data.len(),
            if signature.is_some() { "present" } else { "absent" }
        );

        Ok(JobRecord {
            header,
            variable,
            trailer,
            signature,
            consumed: reader.position(),
        })
    }
}

/// Decodes `data` with the default configuration
pub fn decode_job(data: &[u8]) -> Result<JobRecord> {
    Decoder::new().decode(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_decoder_config_builder() {
        let config = DecoderConfig::new()
            .string_decoding(StringDecoding::Utf16)
            .reserved_data(ReservedDataHandling::Skip);

        assert_eq!(config.string_decoding, StringDecoding::Utf16);
        assert_eq!(config.reserved_data, ReservedDataHandling::Skip);

        let decoder = Decoder::with_config(config);
        assert_eq!(decoder.config().string_decoding, StringDecoding::Utf16);
    }

    #[test]
    fn test_defaults_match_existing_tooling() {
        let config = DecoderConfig::default();
        assert_eq!(config.string_decoding, StringDecoding::StripZeroBytes);
        assert_eq!(config.reserved_data, ReservedDataHandling::Unskipped);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_job(&[]), Err(Error::truncated_header(68, 0)));
    }

    #[test]
    fn test_header_only() {
        let data = [0u8; FIXED_HEADER_LEN];
        assert_eq!(
            decode_job(&data),
            Err(Error::truncated_variable_field(
                "running instance count",
                FIXED_HEADER_LEN
            ))
        );
    }
}
