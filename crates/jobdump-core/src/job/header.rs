//! Fixed-length header, bytes [0,68).

use super::reader::JobReader;
use super::types::{JobId, LastRunTime, JOB_ID_LEN, LAST_RUN_TIME_LEN};
use crate::error::{Error, Result};
use bytes::Buf;
use tracing::trace;

/// Size of the fixed-length header
pub const FIXED_HEADER_LEN: usize = 68;

const _: () = assert!(4 + JOB_ID_LEN + 12 + 20 + LAST_RUN_TIME_LEN == FIXED_HEADER_LEN);

/// Scalar fields of the fixed-length header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedHeader {
    /// Product version code of the writer, e.g. `0x0601` for Windows 7
    pub product_version: u16,
    /// File format version
    pub file_version: u16,
    /// Job identifier
    pub job_id: JobId,
    /// Offset of the application name length (informational)
    pub app_name_len_offset: u16,
    /// Offset of the trigger section (informational)
    pub trigger_offset: u16,
    /// Retries after a failed start
    pub error_retry_count: u16,
    /// Minutes between retries
    pub error_retry_interval: u16,
    /// Minutes to wait for the machine to go idle
    pub idle_deadline: u16,
    /// Minutes the machine must stay idle
    pub idle_wait: u16,
    /// Priority class bitmask, stored big-endian
    pub priority: u32,
    /// Maximum run time in milliseconds
    pub max_run_time: i32,
    /// Exit code of the most recent run
    pub exit_code: u32,
    /// Task status code
    pub status: i32,
    /// Task flags bitmask, stored big-endian
    pub flags: u32,
    /// Time of the most recent run
    pub last_run: LastRunTime,
}

impl FixedHeader {
    /// Decodes the header and leaves the reader at offset 68
    pub(crate) fn decode(reader: &mut JobReader<'_>) -> Result<Self> {
        let available = reader.remaining();
        let mut buf = reader.take_or(FIXED_HEADER_LEN, |_| {
            Error::truncated_header(FIXED_HEADER_LEN, available)
        })?;

        let header = Self {
            product_version: buf.get_u16_le(),
            file_version: buf.get_u16_le(),
            job_id: JobId::read(&mut buf),
            app_name_len_offset: buf.get_u16_le(),
            trigger_offset: buf.get_u16_le(),
            error_retry_count: buf.get_u16_le(),
            error_retry_interval: buf.get_u16_le(),
            idle_deadline: buf.get_u16_le(),
            idle_wait: buf.get_u16_le(),
            priority: buf.get_u32(),
            max_run_time: buf.get_i32_le(),
            exit_code: buf.get_u32_le(),
            status: buf.get_i32_le(),
            flags: buf.get_u32(),
            last_run: LastRunTime::read(&mut buf),
        };
        debug_assert!(!buf.has_remaining());

        trace!(
            "Header: product {:#06x}, file version {}, id {}",
            header.product_version,
            header.file_version,
            header.job_id
        );

        Ok(header)
    }
}
