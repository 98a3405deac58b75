//! Variable-length section: the running instance count followed by
//! length-prefixed UTF-16LE strings.
//!
//! Each string is a `u16` count of code units followed by twice that many
//! bytes. Counts include the terminating NUL when the writer stored one.

use super::reader::JobReader;
use super::{DecoderConfig, ReservedDataHandling, StringDecoding};
use crate::error::{Error, Result};
use tracing::trace;

/// Value of `working_directory` when the file stores none
pub const WORKING_DIRECTORY_NOT_SET: &str = "Working Directory not set";

/// Value of `user` when the file stores none
pub const USER_NOT_SET: &str = "User not set";

/// Value of `comment` when the file stores none
pub const COMMENT_NOT_SET: &str = "Comment not set";

/// Decoded variable-length section
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VariableSection {
    /// Number of running instances
    pub running_instance_count: u16,
    /// Application to run; empty when not stored
    pub application_name: String,
    /// Command line parameters; empty when not stored
    pub parameters: String,
    /// Working directory, or [`WORKING_DIRECTORY_NOT_SET`]
    pub working_directory: String,
    /// Account the task runs as, or [`USER_NOT_SET`]
    pub user: String,
    /// Free-form comment, or [`COMMENT_NOT_SET`]
    pub comment: String,
    /// Opaque user data, absent when not stored
    pub user_data: Option<String>,
    /// Declared size of the reserved data that follows
    pub reserved_data_size: u16,
}

impl VariableSection {
    /// Decodes the section starting at the reader's position
    pub(crate) fn decode(reader: &mut JobReader<'_>, config: &DecoderConfig) -> Result<Self> {
        let running_instance_count = reader.u16_le_or(|offset| {
            Error::truncated_variable_field("running instance count", offset)
        })?;

        let mode = config.string_decoding;
        let application_name =
            read_string(reader, "application name", mode)?.unwrap_or_default();
        let parameters = read_string(reader, "parameters", mode)?.unwrap_or_default();
        let working_directory = read_string(reader, "working directory", mode)?
            .unwrap_or_else(|| WORKING_DIRECTORY_NOT_SET.to_string());
        let user = read_string(reader, "user", mode)?.unwrap_or_else(|| USER_NOT_SET.to_string());
        let comment =
            read_string(reader, "comment", mode)?.unwrap_or_else(|| COMMENT_NOT_SET.to_string());
        let user_data = read_string(reader, "user data", mode)?;

        let reserved_data_size = reader.u16_le_or(|offset| {
            Error::truncated_variable_field("reserved data size", offset)
        })?;
        match config.reserved_data {
            ReservedDataHandling::Unskipped => {}
            ReservedDataHandling::Skip => {
                reader.take_or(usize::from(reserved_data_size), |offset| {
                    Error::truncated_variable_field("reserved data", offset)
                })?;
            }
        }

        trace!(
            "Variable section ends at offset {} (application '{}')",
            reader.position(),
            application_name
        );

        Ok(Self {
            running_instance_count,
            application_name,
            parameters,
            working_directory,
            user,
            comment,
            user_data,
            reserved_data_size,
        })
    }
}

/// Reads one length-prefixed string; `None` when the count is zero
fn read_string(
    reader: &mut JobReader<'_>,
    field: &'static str,
    mode: StringDecoding,
) -> Result<Option<String>> {
    let units = reader.u16_le_or(|offset| Error::truncated_variable_field(field, offset))?;
    if units == 0 {
        return Ok(None);
    }

    let raw = reader.take_or(usize::from(units) * 2, |offset| {
        Error::truncated_variable_field(field, offset)
    })?;
    Ok(Some(decode_text(raw, mode)))
}

/// Converts raw UTF-16LE bytes to text using the selected strategy
pub fn decode_text(raw: &[u8], mode: StringDecoding) -> String {
    match mode {
        // Drops every zero byte and keeps the rest as Latin-1. Exact for
        // ASCII; anything else comes out mangled.
        StringDecoding::StripZeroBytes => raw
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect(),
        StringDecoding::Utf16 => {
            let units: Vec<u16> = raw
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
                .trim_end_matches('\0')
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u8> {
        let mut out = Vec::new();
        let units: Vec<u16> = s.encode_utf16().chain(Some(0)).collect();
        out.extend_from_slice(&(units.len() as u16).to_le_bytes());
        for unit in units {
            out.extend_from_slice(&unit.to_le_bytes());
        }
        out
    }

    fn section(fields: &[Option<&str>]) -> Vec<u8> {
        let mut data = vec![0x01, 0x00];
        for field in fields {
            match field {
                Some(s) => data.extend(utf16(s)),
                None => data.extend([0, 0]),
            }
        }
        data.extend([0x08, 0x00]);
        data
    }

    #[test]
    fn test_decode_text_strip_zero_bytes() {
        let raw = [b'c', 0, b'm', 0, b'd', 0, 0, 0];
        assert_eq!(decode_text(&raw, StringDecoding::StripZeroBytes), "cmd");
        // U+0101 is 01 01 on disk and loses its meaning
        assert_eq!(
            decode_text(&[0x01, 0x01], StringDecoding::StripZeroBytes),
            "\u{1}\u{1}"
        );
    }

    #[test]
    fn test_strip_zero_bytes_high_bytes_as_latin1() {
        // U+00EB is EB 00 on disk
        let text = decode_text(&[0xEB, 0x00], StringDecoding::StripZeroBytes);
        assert_eq!(text, "\u{eb}");
        assert_eq!(text.as_bytes(), &[0xC3, 0xAB]);
    }

    #[test]
    fn test_decode_text_utf16() {
        let raw: Vec<u8> = "Zoë\u{0101}\0"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        assert_eq!(decode_text(&raw, StringDecoding::Utf16), "Zoë\u{0101}");
    }

    #[test]
    fn test_sentinels_and_absent_user_data() {
        let data = section(&[Some("C:\\a.exe"), None, None, None, None, None]);
        let mut reader = JobReader::new(&data);
        let section = VariableSection::decode(&mut reader, &DecoderConfig::default()).unwrap();

        assert_eq!(section.running_instance_count, 1);
        assert_eq!(section.application_name, "C:\\a.exe");
        assert_eq!(section.parameters, "");
        assert_eq!(section.working_directory, "Working Directory not set");
        assert_eq!(section.user, "User not set");
        assert_eq!(section.comment, "Comment not set");
        assert_eq!(section.user_data, None);
        assert_eq!(section.reserved_data_size, 8);
        assert_eq!(reader.position(), data.len());
    }

    #[test]
    fn test_present_fields() {
        let data = section(&[
            Some("a"),
            Some("-x"),
            Some("C:\\"),
            Some("bob"),
            Some("hi"),
            Some("ud"),
        ]);
        let mut reader = JobReader::new(&data);
        let section = VariableSection::decode(&mut reader, &DecoderConfig::default()).unwrap();

        assert_eq!(section.parameters, "-x");
        assert_eq!(section.working_directory, "C:\\");
        assert_eq!(section.user, "bob");
        assert_eq!(section.comment, "hi");
        assert_eq!(section.user_data.as_deref(), Some("ud"));
    }

    #[test]
    fn test_length_past_end() {
        let mut data = section(&[Some("abc"), None, None, None, None, None]);
        // Claim 200 code units for the application name
        data[2..4].copy_from_slice(&200u16.to_le_bytes());
        let mut reader = JobReader::new(&data);
        assert_eq!(
            VariableSection::decode(&mut reader, &DecoderConfig::default()),
            Err(Error::truncated_variable_field("application name", 4))
        );
    }

    #[test]
    fn test_missing_length_prefix() {
        let data = [0x01, 0x00, 0x00];
        let mut reader = JobReader::new(&data);
        assert_eq!(
            VariableSection::decode(&mut reader, &DecoderConfig::default()),
            Err(Error::truncated_variable_field("application name", 2))
        );
    }

    #[test]
    fn test_skip_reserved_data() {
        let mut data = section(&[None, None, None, None, None, None]);
        let end = data.len();
        data.extend([0xAA; 8]);

        let config = DecoderConfig::new().reserved_data(ReservedDataHandling::Skip);
        let mut reader = JobReader::new(&data);
        VariableSection::decode(&mut reader, &config).unwrap();
        assert_eq!(reader.position(), end + 8);

        let mut reader = JobReader::new(&data);
        VariableSection::decode(&mut reader, &DecoderConfig::default()).unwrap();
        assert_eq!(reader.position(), end);

        let mut reader = JobReader::new(&data[..end + 4]);
        assert_eq!(
            VariableSection::decode(&mut reader, &config),
            Err(Error::truncated_variable_field("reserved data", end))
        );
    }
}
