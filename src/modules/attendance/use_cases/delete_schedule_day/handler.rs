use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::modules::attendance::core::model::TeamMember;
use crate::modules::attendance::use_cases::delete_schedule_day::command::DeleteScheduleDay;
use crate::modules::attendance::use_cases::errors::ApplicationError;

pub struct DeleteScheduleDayHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteScheduleDayHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Removes one day entry; a week whose last entry was removed is dropped
    /// entirely, so no week identifier ever maps to an empty schedule.
    pub async fn handle(
        &self,
        command: DeleteScheduleDay,
    ) -> Result<Vec<TeamMember>, ApplicationError> {
        let mut members = self.repository.load_all().await?;

        let member = members
            .iter_mut()
            .find(|member| member.id == command.member_id)
            .ok_or_else(|| ApplicationError::MemberNotFound(command.member_id.clone()))?;

        let removed = member
            .attendance
            .get_mut(&command.week_id)
            .and_then(|week| week.remove(&command.day));
        if removed.is_none() {
            return Err(ApplicationError::ScheduleNotFound {
                name: member.name.clone(),
                day: command.day,
                week_id: command.week_id,
            });
        }

        if member
            .attendance
            .get(&command.week_id)
            .is_some_and(|week| week.is_empty())
        {
            member.attendance.remove(&command.week_id);
        }

        tracing::info!(
            member = %member.name,
            week_id = %command.week_id,
            day = %command.day,
            "deleting schedule day"
        );

        self.repository.save_all(&members).await?;
        Ok(members)
    }
}
