use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::modules::attendance::core::model::{DaySchedule, TeamMember};
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::attendance::use_cases::update_attendance::command::UpdateAttendance;

pub struct UpdateAttendanceHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateAttendanceHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Loads the whole roster, rewrites one day entry for one member and
    /// week, and persists the document whole. Returns the updated roster so
    /// callers can refresh without a second read.
    pub async fn handle(
        &self,
        command: UpdateAttendance,
    ) -> Result<Vec<TeamMember>, ApplicationError> {
        let mut members = self.repository.load_all().await?;

        let member = members
            .iter_mut()
            .find(|member| member.id == command.member_id)
            .ok_or_else(|| ApplicationError::MemberNotFound(command.member_id.clone()))?;

        let entry = DaySchedule::new(command.status, command.start_time, command.end_time);
        member
            .attendance
            .entry(command.week_id.clone())
            .or_default()
            .insert(command.day, entry);

        tracing::info!(
            member = %member.name,
            week_id = %command.week_id,
            day = %command.day,
            status = ?command.status,
            "updating schedule"
        );

        self.repository.save_all(&members).await?;
        Ok(members)
    }
}
