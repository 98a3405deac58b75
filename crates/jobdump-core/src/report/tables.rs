//! Code-to-label tables for report output.
//!
//! Sources: MS-TSCH for the product, flag, priority and trigger values;
//! the exit and status codes are the Task Scheduler HRESULTs as existing
//! tooling labels them.

/// Product versions that write `.job` files
pub const PRODUCT_VERSIONS: &[(u16, &str)] = &[
    (0x0400, "Windows NT 4.0"),
    (0x0500, "Windows 2000"),
    (0x0501, "Windows XP"),
    (0x0600, "Windows Vista"),
    (0x0601, "Windows 7"),
    (0x0602, "Windows 8"),
    (0x0603, "Windows 8.1"),
    (0x0a00, "Windows 10"),
];

/// Task status codes
pub const TASK_STATUS: &[(i32, &str)] = &[
    (0x41300, "Task is ready to run"),
    (0x41301, "Task is running"),
    (0x41302, "Task is disabled"),
    (0x41303, "Task has not run"),
    (0x41304, "No more scheduled runs"),
    (0x41305, "Properties not set"),
    (0x41306, "Last run terminated by user"),
    (0x41307, "No triggers/triggers disabled"),
    (0x41308, "Triggers do not have set run times"),
];

/// Exit and start error codes
pub const EXIT_CODES: &[(u32, &str)] = &[
    (0x0000_0000, "S_OK"),
    (0x0000_0001, "S_FALSE"),
    (0x8000_0002, "E_OUTOFMEMORY"),
    (0x8000_0009, "E_ACCESSDENIED"),
    (0x8000_0003, "E_INVALIDARG"),
    (0x8000_0008, "E_FAIL"),
    (0x8000_FFFF, "E_UNEXPECTED"),
    (0x0004_1300, "SCHED_S_TASK_READY"),
    (0x0004_1301, "SCHED_S_TASK_RUNNING"),
    (0x0004_1302, "SCHED_S_TASK_DISABLED"),
    (0x0004_1303, "SCHED_S_TASK_HAS_NOT_RUN"),
    (0x0004_1304, "SCHED_S_TASK_NO_MORE_RUNS"),
    (0x0004_1305, "SCHED_S_TASK_NOT_SCHEDULED"),
    (0x0004_1306, "SCHED_S_TASK_TERMINATED"),
    (0x0004_1307, "SCHED_S_TASK_NO_VALID_TRIGGERS"),
    (0x0004_1308, "SCHED_S_EVENT_TRIGGER"),
    (0x8004_1309, "SCHED_E_TRIGGER_NOT_FOUND"),
    (0x8004_130A, "SCHED_E_TASK_NOT_READY"),
    (0x8004_130B, "SCHED_E_TASK_NOT_RUNNING"),
    (0x8004_130C, "SCHED_E_SERVICE_NOT_INSTALLED"),
    (0x8004_130D, "SCHED_E_CANNOT_OPEN_TASK"),
    (0x8004_130E, "SCHED_E_INVALID_TASK"),
    (0x8004_130F, "SCHED_E_ACCOUNT_INFORMATION_NOT_SET"),
    (0x8004_1310, "SCHED_E_ACCOUNT_NAME_NOT_FOUND"),
    (0x8004_1311, "SCHED_E_ACCOUNT_DBASE_CORRUPT"),
    (0x8004_1312, "SCHED_E_NO_SECURITY_SERVICES"),
    (0x8004_1313, "SCHED_E_UNKNOWN_OBJECT_VERSION"),
    (0x8004_1314, "SCHED_E_UNSUPPORTED_ACCOUNT_OPTION"),
    (0x8004_1315, "SCHED_E_SERVICE_NOT_RUNNING"),
    (0x8004_1316, "SCHED_E_UNEXPECTEDNODE"),
    (0x8004_1317, "SCHED_E_NAMESPACE"),
    (0x8004_1318, "SCHED_E_INVALIDVALUE"),
    (0x8004_1319, "SCHED_E_MISSINGNODE"),
    (0x8004_131A, "SCHED_E_MALFORMEDXML"),
    (0x0004_131B, "SCHED_S_SOME_TRIGGERS_FAILED"),
    (0x0004_131C, "SCHED_S_BATCH_LOGON_PROBLEM"),
    (0x8004_131D, "SCHED_E_TOO_MANY_NODES"),
    (0x8004_131E, "SCHED_E_PAST_END_BOUNDARY"),
    (0x8004_131F, "SCHED_E_ALREADY_RUNNING"),
    (0x8004_1320, "SCHED_E_USER_NOT_LOGGED_ON"),
    (0x8004_1321, "SCHED_E_INVALID_TASK_HASH"),
    (0x8004_1322, "SCHED_E_SERVICE_NOT_AVAILABLE"),
    (0x8004_1323, "SCHED_E_SERVICE_TOO_BUSY"),
    (0x8004_1324, "SCHED_E_TASK_ATTEMPTED"),
    (0x0004_1325, "SCHED_S_TASK_QUEUED"),
    (0x8004_1326, "SCHED_E_TASK_DISABLED"),
    (0x8004_1327, "SCHED_E_TASK_NOT_V1_COMPAT"),
    (0x8004_1328, "SCHED_E_START_ON_DEMAND"),
];

/// Header task flags, as read big-endian
pub const TASK_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "TASK_APPLICATION_NAME"),
    (0x0001_0000, "TASK_FLAG_RUN_ONLY_IF_DOCKED"),
    (0x0002_0000, "TASK_FLAG_HIDDEN"),
    (0x0004_0000, "TASK_FLAG_RUN_IF_CONNECTED_TO_INTERNET"),
    (0x0008_0000, "TASK_FLAG_RESTART_ON_IDLE_RESUME"),
    (0x0010_0000, "TASK_FLAG_SYSTEM_REQUIRED"),
    (0x0020_0000, "TASK_FLAG_RUN_ONLY_IF_LOGGED_ON"),
    (0x0100_0000, "TASK_FLAG_INTERACTIVE"),
    (0x0200_0000, "TASK_FLAG_DELETE_WHEN_DONE"),
    (0x0400_0000, "TASK_FLAG_DISABLED"),
    (0x1000_0000, "TASK_FLAG_START_ONLY_IF_IDLE"),
    (0x2000_0000, "TASK_FLAG_KILL_ON_IDLE_END"),
    (0x4000_0000, "TASK_FLAG_DONT_START_IF_ON_BATTERIES"),
    (0x8000_0000, "TASK_FLAG_KILL_IF_GOING_ON_BATTERIES"),
];

/// Priority classes, as read big-endian
pub const PRIORITY_CLASSES: &[(u32, &str)] = &[
    (0x0010_0000, "REALTIME_PRIORITY_CLASS"),
    (0x2000_0000, "NORMAL_PRIORITY_CLASS"),
    (0x4000_0000, "IDLE_PRIORITY_CLASS"),
    (0x8000_0000, "HIGH_PRIORITY_CLASS"),
];

/// Trigger flags
pub const TRIGGER_FLAGS: &[(u32, &str)] = &[
    (0b001, "TASK_TRIGGER_FLAG_HAS_END_DATE"),
    (0b010, "TASK_TRIGGER_FLAG_KILL_AT_DURATION_END"),
    (0b100, "TASK_TRIGGER_FLAG_DISABLED"),
];

/// Trigger types
pub const TRIGGER_TYPES: &[(i32, &str)] = &[
    (0, "ONCE"),
    (1, "DAILY"),
    (2, "WEEKLY"),
    (3, "MONTHLYDATE"),
    (4, "MONTHLYDOW"),
    (5, "EVENT_ON_IDLE"),
    (6, "EVENT_AT_SYSTEMSTART"),
    (7, "EVENT_AT_LOGON"),
];

/// Weekday names, Sunday first
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated month names, January first
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Finds the label for an exact code
pub fn lookup<K: PartialEq>(table: &[(K, &'static str)], code: K) -> Option<&'static str> {
    table
        .iter()
        .find(|(value, _)| *value == code)
        .map(|(_, label)| *label)
}

/// Labels of every mask in `table` whose bits are all set in `bits`
pub fn mask_labels(table: &[(u32, &'static str)], bits: u32) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(mask, _)| bits & mask == *mask)
        .map(|(_, label)| *label)
        .collect()
}

/// Weekday name for 0 = Sunday .. 6 = Saturday
pub fn weekday_name(weekday: u16) -> Option<&'static str> {
    WEEKDAYS.get(usize::from(weekday)).copied()
}

/// Month name for 1 = January .. 12 = December
pub fn month_name(month: u16) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| MONTHS.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(PRODUCT_VERSIONS, 0x0601), Some("Windows 7"));
        assert_eq!(lookup(PRODUCT_VERSIONS, 0x0700), None);
        assert_eq!(lookup(EXIT_CODES, 0x8004_1326), Some("SCHED_E_TASK_DISABLED"));
        assert_eq!(lookup(TRIGGER_TYPES, 8), None);
    }

    #[test]
    fn test_mask_labels() {
        assert_eq!(
            mask_labels(PRIORITY_CLASSES, 0x2000_0000),
            vec!["NORMAL_PRIORITY_CLASS"]
        );
        assert_eq!(
            mask_labels(TRIGGER_FLAGS, 0b101),
            vec!["TASK_TRIGGER_FLAG_HAS_END_DATE", "TASK_TRIGGER_FLAG_DISABLED"]
        );
        assert!(mask_labels(TASK_FLAGS, 0).is_empty());
    }

    #[test]
    fn test_calendar_names() {
        assert_eq!(weekday_name(0), Some("Sunday"));
        assert_eq!(weekday_name(7), None);
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(1), Some("Jan"));
        assert_eq!(month_name(12), Some("Dec"));
        assert_eq!(month_name(13), None);
    }
}
