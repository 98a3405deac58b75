//! Value types shared by the header and trailer: the job identifier and the
//! two date shapes.

use bytes::Buf;
use std::fmt;

/// Encoded size of a [`JobId`]
pub const JOB_ID_LEN: usize = 16;

/// Encoded size of a [`LastRunTime`]
pub const LAST_RUN_TIME_LEN: usize = 16;

/// Encoded size of a [`ScheduledDate`]
pub const SCHEDULED_DATE_LEN: usize = 6;

/// Job identifier stored at header offset 4.
///
/// The first three components are little-endian. The trailing eight bytes
/// are read as four big-endian `u16` values, which is how existing tooling
/// interprets this field; it is not a general-purpose UUID decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JobId {
    /// Bytes [0,4), little-endian
    pub data1: u32,
    /// Bytes [4,6), little-endian
    pub data2: u16,
    /// Bytes [6,8), little-endian
    pub data3: u16,
    /// Bytes [8,16), four big-endian `u16` values
    pub data4: [u16; 4],
}

impl JobId {
    /// Reads an identifier from the first [`JOB_ID_LEN`] bytes of `buf`.
    ///
    /// Panics if fewer bytes remain; callers check the length first.
    pub(crate) fn read(buf: &mut impl Buf) -> Self {
        Self {
            data1: buf.get_u32_le(),
            data2: buf.get_u16_le(),
            data3: buf.get_u16_le(),
            data4: [buf.get_u16(), buf.get_u16(), buf.get_u16(), buf.get_u16()],
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d0, d1, d2, d3] = self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:04X}-{:04X}{:04X}{:04X}}}",
            self.data1, self.data2, self.data3, d0, d1, d2, d3
        )
    }
}

/// Full timestamp of the most recent run, header bytes [52,68).
///
/// Fields are stored as found; no calendar validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LastRunTime {
    /// Year
    pub year: u16,
    /// Month, 1-12 when set
    pub month: u16,
    /// Day of the week, 0 = Sunday
    pub weekday: u16,
    /// Day of the month
    pub day: u16,
    /// Hour
    pub hour: u16,
    /// Minute
    pub minute: u16,
    /// Second
    pub second: u16,
    /// Millisecond
    pub millisecond: u16,
}

impl LastRunTime {
    pub(crate) fn read(buf: &mut impl Buf) -> Self {
        Self {
            year: buf.get_u16_le(),
            month: buf.get_u16_le(),
            weekday: buf.get_u16_le(),
            day: buf.get_u16_le(),
            hour: buf.get_u16_le(),
            minute: buf.get_u16_le(),
            second: buf.get_u16_le(),
            millisecond: buf.get_u16_le(),
        }
    }
}

/// Compact year/month/day date used for a trigger's start and end.
///
/// The time of day is always midnight and there is no weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduledDate {
    /// Year
    pub year: u16,
    /// Month, 1-12 when set; anything else means the date is unset
    pub month: u16,
    /// Day of the month
    pub day: u16,
}

impl ScheduledDate {
    pub(crate) fn read(buf: &mut impl Buf) -> Self {
        Self {
            year: buf.get_u16_le(),
            month: buf.get_u16_le(),
            day: buf.get_u16_le(),
        }
    }

    /// Always zero
    pub fn hour(&self) -> u16 {
        0
    }

    /// Always zero
    pub fn minute(&self) -> u16 {
        0
    }

    /// Always zero
    pub fn second(&self) -> u16 {
        0
    }

    /// Always zero
    pub fn millisecond(&self) -> u16 {
        0
    }

    /// Compact dates carry no weekday
    pub fn weekday(&self) -> Option<u16> {
        None
    }
}
