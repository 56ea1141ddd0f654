use async_trait::async_trait;

use crate::modules::attendance::core::model::TeamMember;
use crate::shared::infrastructure::kv_store::KvError;

/// Single-aggregate repository for the team roster. The roster is always
/// loaded and saved whole; callers mutate an owned copy and persist that.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<TeamMember>, KvError>;
    async fn save_all(&self, members: &[TeamMember]) -> Result<(), KvError>;
}
