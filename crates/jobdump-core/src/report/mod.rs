//! Plain-text rendering of decoded records.
//!
//! [`Report`] prints one `Label: value` line per field. Numeric codes are
//! translated through the constant tables in [`tables`]; codes missing from
//! a table get an explicit fallback label instead of an error.

pub mod tables;

use crate::job::{JobRecord, LastRunTime, ScheduledDate, TriggerDetails};
use std::fmt;
use tables::{lookup, mask_labels, month_name, weekday_name};

/// Label for product versions missing from the table
pub const UNKNOWN_VERSION: &str = "Unknown Version";

/// Label for status codes missing from the table
pub const UNKNOWN_STATUS: &str = "Unknown Status";

/// Label for any other code missing from its table
pub const UNKNOWN: &str = "Unknown";

/// Product name for a header product version code
pub fn product_label(code: u16) -> &'static str {
    lookup(tables::PRODUCT_VERSIONS, code).unwrap_or(UNKNOWN_VERSION)
}

/// Description of a task status code
pub fn status_label(code: i32) -> &'static str {
    lookup(tables::TASK_STATUS, code).unwrap_or(UNKNOWN_STATUS)
}

/// Symbolic name of an exit or start error code
pub fn exit_code_label(code: u32) -> &'static str {
    lookup(tables::EXIT_CODES, code).unwrap_or(UNKNOWN)
}

/// Name of a trigger type code
pub fn trigger_type_label(code: i32) -> &'static str {
    lookup(tables::TRIGGER_TYPES, code).unwrap_or(UNKNOWN)
}

/// Renders the last run time, or `Task not yet run` when unset
pub fn format_last_run(time: &LastRunTime) -> String {
    match (weekday_name(time.weekday), month_name(time.month)) {
        (Some(weekday), Some(month)) => format!(
            "{} {} {} {:02}:{:02}:{:02}.{} {}",
            weekday,
            month,
            time.day,
            time.hour,
            time.minute,
            time.second,
            time.millisecond,
            time.year
        ),
        _ => "Task not yet run".to_string(),
    }
}

/// Renders a scheduled date, or `Does not expire` when unset
pub fn format_scheduled(date: &ScheduledDate) -> String {
    match month_name(date.month) {
        Some(month) => format!(
            "{} {} {:02}:{:02}:{:02}.{} {}",
            month,
            date.day,
            date.hour(),
            date.minute(),
            date.second(),
            date.millisecond(),
            date.year
        ),
        None => "Does not expire".to_string(),
    }
}

/// Renders a millisecond duration as `HH:MM:SS.mmm`
pub fn format_run_time(millis: i32) -> String {
    let millis = i64::from(millis);
    let hours = millis.div_euclid(3_600_000);
    let rest = millis.rem_euclid(3_600_000);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        hours,
        rest / 60_000,
        rest % 60_000 / 1000,
        rest % 1000
    )
}

/// Lower-case hex without separators
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Text report for a [`JobRecord`]
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    record: &'a JobRecord,
}

impl<'a> Report<'a> {
    /// Creates a report for `record`
    pub fn new(record: &'a JobRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.record.header;
        let variable = &self.record.variable;
        let trailer = &self.record.trailer;

        writeln!(f, "Product Info: {}", product_label(header.product_version))?;
        writeln!(f, "File Version: {}", header.file_version)?;
        writeln!(f, "UUID: {}", header.job_id)?;
        writeln!(f, "Error Retry Count: {}", header.error_retry_count)?;
        writeln!(f, "Error Retry Interval: {}", header.error_retry_interval)?;
        writeln!(f, "Idle Deadline: {}", header.idle_deadline)?;
        writeln!(f, "Idle Wait: {}", header.idle_wait)?;
        let priorities = mask_labels(tables::PRIORITY_CLASSES, header.priority);
        if !priorities.is_empty() {
            writeln!(f, "Priorities: {}", priorities.join(", "))?;
        }
        writeln!(
            f,
            "Maximum Run Time: {} (HH:MM:SS.MS)",
            format_run_time(header.max_run_time)
        )?;
        writeln!(f, "Exit Code: {}", exit_code_label(header.exit_code))?;
        writeln!(f, "Status: {}", status_label(header.status))?;
        writeln!(
            f,
            "Flags: {}",
            mask_labels(tables::TASK_FLAGS, header.flags).join(", ")
        )?;
        writeln!(f, "Date Run: {}", format_last_run(&header.last_run))?;

        writeln!(f, "Running Instances: {}", variable.running_instance_count)?;
        writeln!(f, "Application: {}", variable.application_name)?;
        if !variable.parameters.is_empty() {
            writeln!(f, "Parameters: {}", variable.parameters)?;
        }
        writeln!(f, "Working Directory: {}", variable.working_directory)?;
        writeln!(f, "User: {}", variable.user)?;
        writeln!(f, "Comment: {}", variable.comment)?;
        if let Some(user_data) = &variable.user_data {
            writeln!(f, "User Data: {}", user_data)?;
        }

        writeln!(f, "Start Error: {}", exit_code_label(trailer.start_error as u32))?;
        writeln!(f, "Trigger Count: {}", trailer.trigger_count)?;
        writeln!(
            f,
            "Scheduled Start Date: {}",
            format_scheduled(&trailer.scheduled_start)
        )?;
        writeln!(
            f,
            "Scheduled End Date: {}",
            format_scheduled(&trailer.scheduled_end)
        )?;
        writeln!(f, "Start Hour: {}", trailer.start_hour)?;
        writeln!(f, "Start Minute: {}", trailer.start_minute)?;
        writeln!(f, "Minutes Duration: {}", trailer.minutes_duration)?;
        writeln!(f, "Minutes Interval: {}", trailer.minutes_interval)?;
        writeln!(
            f,
            "Trigger Flags: {}",
            mask_labels(tables::TRIGGER_FLAGS, trailer.trigger_flags as u32).join(", ")
        )?;
        writeln!(
            f,
            "Trigger Type: {}",
            trigger_type_label(trailer.trigger_type.code())
        )?;
        match trailer.trigger {
            TriggerDetails::None => {}
            TriggerDetails::Daily { days_interval } => {
                writeln!(f, "Days Interval: {}", days_interval)?;
            }
            TriggerDetails::Weekly {
                weeks_interval,
                days_of_week,
            } => {
                writeln!(f, "Weeks Interval: {}", weeks_interval)?;
                writeln!(f, "Days Of The Week: {}", days_of_week)?;
            }
            TriggerDetails::MonthlyDate { days, months } => {
                writeln!(f, "Days: {}", days)?;
                writeln!(f, "Months: {}", months)?;
            }
            TriggerDetails::MonthlyDow {
                which_week,
                days_of_week,
                months,
            } => {
                writeln!(f, "Which Week: {}", which_week)?;
                writeln!(f, "Days Of The Week: {}", days_of_week)?;
                writeln!(f, "Months: {}", months)?;
            }
        }

        if let Some(signature) = &self.record.signature {
            writeln!(f, "Signature Version: {}", signature.version)?;
            writeln!(f, "Min Client Version: {}", signature.min_client_version)?;
            writeln!(f, "Job Signature: {}", hex(&signature.signature))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_labels() {
        assert_eq!(product_label(0x0601), "Windows 7");
        assert_eq!(product_label(0x1234), "Unknown Version");
        assert_eq!(status_label(0x41302), "Task is disabled");
        assert_eq!(status_label(-1), "Unknown Status");
        assert_eq!(exit_code_label(0), "S_OK");
        assert_eq!(exit_code_label(0xDEAD_BEEF), "Unknown");
        assert_eq!(trigger_type_label(6), "EVENT_AT_SYSTEMSTART");
        assert_eq!(trigger_type_label(42), "Unknown");
    }

    #[test]
    fn test_format_last_run() {
        let time = LastRunTime {
            year: 2013,
            month: 7,
            weekday: 3,
            day: 17,
            hour: 9,
            minute: 5,
            second: 30,
            millisecond: 250,
        };
        assert_eq!(format_last_run(&time), "Wednesday Jul 17 09:05:30.250 2013");
        assert_eq!(format_last_run(&LastRunTime::default()), "Task not yet run");
    }

    #[test]
    fn test_format_scheduled() {
        let date = ScheduledDate {
            year: 2014,
            month: 3,
            day: 9,
        };
        assert_eq!(format_scheduled(&date), "Mar 9 00:00:00.0 2014");
        assert_eq!(format_scheduled(&ScheduledDate::default()), "Does not expire");
    }

    #[test]
    fn test_format_run_time() {
        assert_eq!(format_run_time(259_200_000), "72:00:00.000");
        assert_eq!(format_run_time(90_500), "00:01:30.500");
        assert_eq!(format_run_time(0), "00:00:00.000");
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
        assert_eq!(hex(&[]), "");
    }
}
