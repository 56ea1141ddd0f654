// Shared test fixtures for the mutating commands.

use crate::modules::attendance::core::model::DayStatus;
use crate::modules::attendance::core::week::Weekday;
use crate::modules::attendance::use_cases::delete_schedule_day::command::DeleteScheduleDay;
use crate::modules::attendance::use_cases::update_attendance::command::UpdateAttendance;

pub struct UpdateAttendanceBuilder {
    inner: UpdateAttendance,
}

impl Default for UpdateAttendanceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UpdateAttendanceBuilder {
    pub fn new() -> Self {
        Self {
            inner: UpdateAttendance {
                member_id: "1".to_string(),
                week_id: "2025-W20".to_string(),
                day: Weekday::Monday,
                status: DayStatus::Office,
                start_time: Some("09:00".to_string()),
                end_time: Some("17:00".to_string()),
            },
        }
    }

    pub fn member_id(mut self, value: impl Into<String>) -> Self {
        self.inner.member_id = value.into();
        self
    }

    pub fn week_id(mut self, value: impl Into<String>) -> Self {
        self.inner.week_id = value.into();
        self
    }

    pub fn day(mut self, value: Weekday) -> Self {
        self.inner.day = value;
        self
    }

    pub fn status(mut self, value: DayStatus) -> Self {
        self.inner.status = value;
        self
    }

    pub fn start_time(mut self, value: Option<&str>) -> Self {
        self.inner.start_time = value.map(Into::into);
        self
    }

    pub fn end_time(mut self, value: Option<&str>) -> Self {
        self.inner.end_time = value.map(Into::into);
        self
    }

    pub fn build(self) -> UpdateAttendance {
        self.inner
    }
}

pub struct DeleteScheduleDayBuilder {
    inner: DeleteScheduleDay,
}

impl Default for DeleteScheduleDayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DeleteScheduleDayBuilder {
    pub fn new() -> Self {
        Self {
            inner: DeleteScheduleDay {
                member_id: "1".to_string(),
                week_id: "2025-W20".to_string(),
                day: Weekday::Monday,
            },
        }
    }

    pub fn member_id(mut self, value: impl Into<String>) -> Self {
        self.inner.member_id = value.into();
        self
    }

    pub fn week_id(mut self, value: impl Into<String>) -> Self {
        self.inner.week_id = value.into();
        self
    }

    pub fn day(mut self, value: Weekday) -> Self {
        self.inner.day = value;
        self
    }

    pub fn build(self) -> DeleteScheduleDay {
        self.inner
    }
}
