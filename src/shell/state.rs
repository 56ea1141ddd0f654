use std::sync::Arc;

use crate::modules::attendance::adapters::outbound::kv_repository::KvTeamRepository;
use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::modules::attendance::use_cases::add_team_member::handler::AddTeamMemberHandler;
use crate::modules::attendance::use_cases::delete_schedule_day::handler::DeleteScheduleDayHandler;
use crate::modules::attendance::use_cases::update_attendance::handler::UpdateAttendanceHandler;
use crate::shared::infrastructure::kv_store::in_memory::InMemoryKvStore;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<dyn TeamRepository>,
    pub update_handler: Arc<UpdateAttendanceHandler<KvTeamRepository<InMemoryKvStore>>>,
    pub delete_handler: Arc<DeleteScheduleDayHandler<KvTeamRepository<InMemoryKvStore>>>,
    pub add_handler: Arc<AddTeamMemberHandler<KvTeamRepository<InMemoryKvStore>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(InMemoryKvStore::new())
    }

    pub fn with_store(store: InMemoryKvStore) -> Self {
        let repository = Arc::new(KvTeamRepository::new(Arc::new(store)));
        Self {
            roster: repository.clone(),
            update_handler: Arc::new(UpdateAttendanceHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteScheduleDayHandler::new(repository.clone())),
            add_handler: Arc::new(AddTeamMemberHandler::new(repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
