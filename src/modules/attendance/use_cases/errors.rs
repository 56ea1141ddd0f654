use thiserror::Error;

use crate::modules::attendance::core::week::Weekday;
use crate::shared::infrastructure::kv_store::KvError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("team member with id {0} not found")]
    MemberNotFound(String),

    #[error("no schedule found for {name} on {day} in week {week_id}")]
    ScheduleNotFound {
        name: String,
        day: Weekday,
        week_id: String,
    },

    #[error(transparent)]
    Store(#[from] KvError),
}
