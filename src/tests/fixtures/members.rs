// Shared test fixture for roster members.

use crate::modules::attendance::core::model::{
    AttendanceMap, DaySchedule, DayStatus, TeamMember,
};
use crate::modules::attendance::core::week::Weekday;

pub struct TeamMemberBuilder {
    inner: TeamMember,
}

impl Default for TeamMemberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TeamMemberBuilder {
    pub fn new() -> Self {
        Self {
            inner: TeamMember {
                id: "1".to_string(),
                name: "Alex".to_string(),
                avatar: "/assets/team/alex.JPG".to_string(),
                role: None,
                attendance: AttendanceMap::new(),
            },
        }
    }

    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.inner.id = value.into();
        self
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.inner.name = value.into();
        self
    }

    pub fn avatar(mut self, value: impl Into<String>) -> Self {
        self.inner.avatar = value.into();
        self
    }

    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.inner.role = Some(value.into());
        self
    }

    pub fn day(mut self, week_id: &str, day: Weekday, schedule: DaySchedule) -> Self {
        self.inner
            .attendance
            .entry(week_id.to_string())
            .or_default()
            .insert(day, schedule);
        self
    }

    pub fn build(self) -> TeamMember {
        self.inner
    }
}

/// Two members, both already in the per-week format so loads do not trigger
/// migration.
pub fn two_member_roster() -> Vec<TeamMember> {
    vec![
        TeamMemberBuilder::new()
            .day(
                "2024-W50",
                Weekday::Friday,
                DaySchedule::new(DayStatus::Remote, None, None),
            )
            .build(),
        TeamMemberBuilder::new()
            .id("2")
            .name("Artem")
            .avatar("/assets/team/artem.JPG")
            .day(
                "2024-W50",
                Weekday::Monday,
                DaySchedule::new(
                    DayStatus::Office,
                    Some("08:00".to_string()),
                    Some("16:00".to_string()),
                ),
            )
            .build(),
    ]
}
