use std::sync::Arc;

use uuid::Uuid;

use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::modules::attendance::core::model::{AttendanceMap, TeamMember, WeekSchedule};
use crate::modules::attendance::core::week::current_week_id;
use crate::modules::attendance::use_cases::add_team_member::command::AddTeamMember;
use crate::modules::attendance::use_cases::errors::ApplicationError;

pub const DEFAULT_AVATAR: &str = "/placeholder-user.jpg";

pub struct AddTeamMemberHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> AddTeamMemberHandler<TRepository>
where
    TRepository: TeamRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: AddTeamMember,
    ) -> Result<Vec<TeamMember>, ApplicationError> {
        let mut members = self.repository.load_all().await?;

        let member = TeamMember {
            id: Uuid::now_v7().to_string(),
            name: command.name,
            avatar: command
                .avatar
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            role: command.role,
            attendance: AttendanceMap::from([(current_week_id(), WeekSchedule::new())]),
        };
        tracing::info!(member = %member.name, id = %member.id, "adding team member");

        members.push(member);
        self.repository.save_all(&members).await?;
        Ok(members)
    }
}
