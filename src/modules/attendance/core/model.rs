use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::modules::attendance::core::week::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Office,
    Remote,
}

/// One member's plan for a single weekday of a single week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub status: DayStatus,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl DaySchedule {
    /// Times are only meaningful for office days; a remote entry stores null
    /// times whatever the caller passed.
    pub fn new(
        status: DayStatus,
        start_time: Option<String>,
        end_time: Option<String>,
    ) -> Self {
        match status {
            DayStatus::Office => Self {
                status,
                start_time,
                end_time,
            },
            DayStatus::Remote => Self {
                status,
                start_time: None,
                end_time: None,
            },
        }
    }
}

/// Weekday -> plan. A missing key means "not yet scheduled", which is
/// distinct from an explicit remote entry.
pub type WeekSchedule = BTreeMap<Weekday, DaySchedule>;

/// Week identifier -> week schedule.
pub type AttendanceMap = BTreeMap<String, WeekSchedule>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub attendance: AttendanceMap,
}
