use crate::modules::attendance::core::week::Weekday;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteScheduleDay {
    pub member_id: String,
    pub week_id: String,
    pub day: Weekday,
}
