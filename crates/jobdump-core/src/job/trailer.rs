//! Fixed-size trailer after the variable section, and the optional
//! signature block behind it.

use super::reader::JobReader;
use super::trigger::{TriggerDetails, TriggerType, TRIGGER_DATA_LEN};
use super::types::{ScheduledDate, SCHEDULED_DATE_LEN};
use crate::error::{Error, Result};
use bytes::{Buf, Bytes};
use tracing::trace;

/// Size of the fixed trailer
pub const TRAILER_LEN: usize = 58;

const _: () = assert!(14 + 2 * SCHEDULED_DATE_LEN + 20 + TRIGGER_DATA_LEN + 6 == TRAILER_LEN);

/// Size of the signature block, version fields included
pub const SIGNATURE_BLOCK_LEN: usize = 68;

/// Size of the opaque signature payload
pub const SIGNATURE_LEN: usize = 64;

/// Scheduling state and the single trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailer {
    /// Error code from the most recent start attempt
    pub start_error: i32,
    /// Task flags
    pub task_flags: i32,
    /// Number of triggers declared
    pub trigger_count: u16,
    /// Declared trigger size (informational)
    pub trigger_size: u16,
    /// Reserved
    pub reserved1: u16,
    /// First day the trigger fires
    pub scheduled_start: ScheduledDate,
    /// Last day the trigger fires
    pub scheduled_end: ScheduledDate,
    /// Hour of day the trigger fires
    pub start_hour: u16,
    /// Minute of the hour the trigger fires
    pub start_minute: u16,
    /// Minutes the trigger stays active
    pub minutes_duration: i32,
    /// Minutes between repetitions
    pub minutes_interval: i32,
    /// Trigger flags bitmask
    pub trigger_flags: i32,
    /// Trigger type
    pub trigger_type: TriggerType,
    /// Fields specific to `trigger_type`
    pub trigger: TriggerDetails,
    /// Padding
    pub padding: u16,
    /// Reserved
    pub reserved2: u16,
    /// Reserved
    pub reserved3: u16,
}

impl Trailer {
    pub(crate) fn decode(reader: &mut JobReader<'_>) -> Result<Self> {
        let mut buf = reader.take_or(TRAILER_LEN, Error::truncated_trailer)?;

        let start_error = buf.get_i32_le();
        let task_flags = buf.get_i32_le();
        let trigger_count = buf.get_u16_le();
        let trigger_size = buf.get_u16_le();
        let reserved1 = buf.get_u16_le();
        let scheduled_start = ScheduledDate::read(&mut buf);
        let scheduled_end = ScheduledDate::read(&mut buf);
        let start_hour = buf.get_u16_le();
        let start_minute = buf.get_u16_le();
        let minutes_duration = buf.get_i32_le();
        let minutes_interval = buf.get_i32_le();
        let trigger_flags = buf.get_i32_le();
        let trigger_type = TriggerType::from_code(buf.get_i32_le());

        let mut specific = [0u8; TRIGGER_DATA_LEN];
        buf.copy_to_slice(&mut specific);
        let trigger = TriggerDetails::decode(&specific, trigger_type);

        let trailer = Self {
            start_error,
            task_flags,
            trigger_count,
            trigger_size,
            reserved1,
            scheduled_start,
            scheduled_end,
            start_hour,
            start_minute,
            minutes_duration,
            minutes_interval,
            trigger_flags,
            trigger_type,
            trigger,
            padding: buf.get_u16_le(),
            reserved2: buf.get_u16_le(),
            reserved3: buf.get_u16_le(),
        };

        trace!(
            "Trailer: {} trigger(s), type {:?}",
            trailer.trigger_count,
            trailer.trigger_type
        );

        Ok(trailer)
    }
}

/// Versioned signature block found after the trailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureBlock {
    /// Signature format version
    pub version: u16,
    /// Minimum client version able to verify the signature
    pub min_client_version: u16,
    /// Opaque [`SIGNATURE_LEN`]-byte payload
    pub signature: Bytes,
}

impl SignatureBlock {
    /// Decodes the block if one is present.
    ///
    /// A block is present when at least two bytes follow the trailer and the
    /// trailer declared exactly one trigger. Anything else yields `None`.
    pub(crate) fn decode(reader: &mut JobReader<'_>, trigger_count: u16) -> Result<Option<Self>> {
        let present = reader.peek(2).is_some() && trigger_count == 1;
        trace!(
            "Signature block present: {} ({} bytes left, {} trigger(s))",
            present,
            reader.remaining(),
            trigger_count
        );
        if !present {
            return Ok(None);
        }

        let mut buf = reader.take_or(SIGNATURE_BLOCK_LEN, Error::truncated_signature)?;
        Ok(Some(Self {
            version: buf.get_u16_le(),
            min_client_version: buf.get_u16_le(),
            signature: buf.copy_to_bytes(SIGNATURE_LEN),
        }))
    }
}
