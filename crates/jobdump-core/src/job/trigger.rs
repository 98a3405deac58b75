//! Trigger type codes and the trigger-specific sub-record.
//!
//! The trailer reserves six bytes whose layout depends on the trigger type:
//!
//! | Type | Layout                                                  |
//! |------|---------------------------------------------------------|
//! | 1    | days interval (u16)                                     |
//! | 2    | weeks interval (u16), days-of-week mask (u16)           |
//! | 3    | days-of-month mask (u32), months mask (u16)             |
//! | 4    | which week (u16), days-of-week mask (u16), months (u16) |
//!
//! Every other code, documented or not, carries no extra fields.

use bytes::Buf;

/// Size of the trigger-specific sub-record in the trailer
pub const TRIGGER_DATA_LEN: usize = 6;

/// Trigger type code from the trailer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerType {
    /// Run once at the scheduled start
    Once,
    /// Run every N days
    Daily,
    /// Run every N weeks on selected days
    Weekly,
    /// Run on selected days of selected months
    MonthlyDate,
    /// Run on a selected week and weekday of selected months
    MonthlyDow,
    /// Run when the machine goes idle
    EventOnIdle,
    /// Run at system start
    EventAtSystemStart,
    /// Run at user logon
    EventAtLogon,
    /// A code outside the documented range
    Unknown(i32),
}

impl TriggerType {
    /// Maps a raw code to its trigger type
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Once,
            1 => Self::Daily,
            2 => Self::Weekly,
            3 => Self::MonthlyDate,
            4 => Self::MonthlyDow,
            5 => Self::EventOnIdle,
            6 => Self::EventAtSystemStart,
            7 => Self::EventAtLogon,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw code
    pub fn code(&self) -> i32 {
        match self {
            Self::Once => 0,
            Self::Daily => 1,
            Self::Weekly => 2,
            Self::MonthlyDate => 3,
            Self::MonthlyDow => 4,
            Self::EventOnIdle => 5,
            Self::EventAtSystemStart => 6,
            Self::EventAtLogon => 7,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<i32> for TriggerType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// Decoded trigger-specific sub-record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDetails {
    /// Once, event triggers, and unknown codes
    None,
    /// Every `days_interval` days
    Daily {
        /// Days between runs
        days_interval: u16,
    },
    /// Every `weeks_interval` weeks on the days in `days_of_week`
    Weekly {
        /// Weeks between runs
        weeks_interval: u16,
        /// Bit 0 = Sunday .. bit 6 = Saturday
        days_of_week: u16,
    },
    /// On the days in `days` of the months in `months`
    MonthlyDate {
        /// Bit 0 = day 1 .. bit 30 = day 31
        days: u32,
        /// Bit 0 = January .. bit 11 = December
        months: u16,
    },
    /// On the `which_week` occurrence of the days in `days_of_week`
    MonthlyDow {
        /// 1-4 for first..fourth, 5 for last
        which_week: u16,
        /// Bit 0 = Sunday .. bit 6 = Saturday
        days_of_week: u16,
        /// Bit 0 = January .. bit 11 = December
        months: u16,
    },
}

impl TriggerDetails {
    /// Interprets the six trigger-specific bytes for `trigger_type`.
    ///
    /// Total over every code; bytes a layout does not use are ignored.
    pub fn decode(data: &[u8; TRIGGER_DATA_LEN], trigger_type: TriggerType) -> Self {
        let mut buf = &data[..];
        match trigger_type {
            TriggerType::Daily => Self::Daily {
                days_interval: buf.get_u16_le(),
            },
            TriggerType::Weekly => Self::Weekly {
                weeks_interval: buf.get_u16_le(),
                days_of_week: buf.get_u16_le(),
            },
            TriggerType::MonthlyDate => Self::MonthlyDate {
                days: buf.get_u32_le(),
                months: buf.get_u16_le(),
            },
            TriggerType::MonthlyDow => Self::MonthlyDow {
                which_week: buf.get_u16_le(),
                days_of_week: buf.get_u16_le(),
                months: buf.get_u16_le(),
            },
            TriggerType::Once
            | TriggerType::EventOnIdle
            | TriggerType::EventAtSystemStart
            | TriggerType::EventAtLogon
            | TriggerType::Unknown(_) => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 6] = [0x02, 0x00, 0x2A, 0x00, 0x10, 0x00];

    #[test]
    fn test_code_roundtrip() {
        for code in -2..10 {
            assert_eq!(TriggerType::from_code(code).code(), code);
        }
        assert_eq!(TriggerType::from(3), TriggerType::MonthlyDate);
        assert_eq!(TriggerType::from(8), TriggerType::Unknown(8));
    }

    #[test]
    fn test_layouts() {
        assert_eq!(
            TriggerDetails::decode(&DATA, TriggerType::Daily),
            TriggerDetails::Daily { days_interval: 2 }
        );
        assert_eq!(
            TriggerDetails::decode(&DATA, TriggerType::Weekly),
            TriggerDetails::Weekly {
                weeks_interval: 2,
                days_of_week: 0x2A
            }
        );
        assert_eq!(
            TriggerDetails::decode(&DATA, TriggerType::MonthlyDate),
            TriggerDetails::MonthlyDate {
                days: 0x002A_0002,
                months: 0x10
            }
        );
        assert_eq!(
            TriggerDetails::decode(&DATA, TriggerType::MonthlyDow),
            TriggerDetails::MonthlyDow {
                which_week: 2,
                days_of_week: 0x2A,
                months: 0x10
            }
        );
    }

    #[test]
    fn test_codes_without_fields() {
        for code in [0, 5, 6, 7, 8, -1, i32::MIN, i32::MAX] {
            assert_eq!(
                TriggerDetails::decode(&DATA, TriggerType::from_code(code)),
                TriggerDetails::None,
                "code {}",
                code
            );
        }
    }
}
