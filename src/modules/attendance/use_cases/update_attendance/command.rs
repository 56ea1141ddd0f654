use crate::modules::attendance::core::model::DayStatus;
use crate::modules::attendance::core::week::Weekday;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAttendance {
    pub member_id: String,
    pub week_id: String,
    pub day: Weekday,
    pub status: DayStatus,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
