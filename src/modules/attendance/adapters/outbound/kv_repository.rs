// Key-value backed TeamRepository.
//
// Purpose
// - Own the one persisted roster document: seed it on first access, read it
//   defensively, migrate legacy shapes, and replace it whole on save.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::attendance::adapters::outbound::repository::TeamRepository;
use crate::modules::attendance::core::migrate::migrate_members_if_needed;
use crate::modules::attendance::core::model::{AttendanceMap, TeamMember};
use crate::shared::infrastructure::kv_store::{KeyValueStore, KvError};

/// The fixed key the whole attendance record lives under.
pub const TEAM_MEMBERS_KEY: &str = "attendance:team-members";

pub struct KvTeamRepository<TStore>
where
    TStore: KeyValueStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> KvTeamRepository<TStore>
where
    TStore: KeyValueStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    async fn seed_if_absent(&self) -> Result<(), KvError> {
        if self.store.exists(TEAM_MEMBERS_KEY).await? {
            return Ok(());
        }
        let roster = sample_roster();
        let value = serde_json::to_value(&roster)
            .map_err(|err| KvError::Serialization(err.to_string()))?;
        self.store.set(TEAM_MEMBERS_KEY, value).await?;
        tracing::info!(members = roster.len(), "seeded the roster with sample data");
        Ok(())
    }
}

#[async_trait]
impl<TStore> TeamRepository for KvTeamRepository<TStore>
where
    TStore: KeyValueStore + Send + Sync + 'static,
{
    async fn load_all(&self) -> Result<Vec<TeamMember>, KvError> {
        self.seed_if_absent().await?;

        let Some(raw) = self.store.get(TEAM_MEMBERS_KEY).await? else {
            return Ok(Vec::new());
        };

        // The document may come back as a JSON text payload or as an
        // already-structured value; tolerate both.
        let document = match raw {
            Value::String(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(err) => {
                    tracing::error!(%err, "stored roster is not valid JSON");
                    return Ok(Vec::new());
                }
            },
            value => value,
        };

        let (members, migrated) = migrate_members_if_needed(document);
        if migrated {
            // persist the migrated shape so the next read skips migration
            self.save_all(&members).await?;
        }
        Ok(members)
    }

    async fn save_all(&self, members: &[TeamMember]) -> Result<(), KvError> {
        let value = serde_json::to_value(members)
            .map_err(|err| KvError::Serialization(err.to_string()))?;
        self.store.set(TEAM_MEMBERS_KEY, value).await
    }
}

/// The roster a fresh store is seeded with.
pub fn sample_roster() -> Vec<TeamMember> {
    let member = |id: &str, name: &str, avatar: &str| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        avatar: avatar.to_string(),
        role: None,
        attendance: AttendanceMap::new(),
    };

    vec![
        member("1", "Alex", "/assets/team/alex.JPG"),
        member("2", "Artem", "/assets/team/artem.JPG"),
        member("3", "Ye", "/assets/team/ye.JPG"),
        member("4", "Jason", "/assets/team/jason.JPG"),
        member("5", "Maria", "/assets/team/maria.webp"),
        member("6", "Sini", "/assets/team/sini.webp"),
        member("7", "Phuong", "/assets/team/phoung.webp"),
        member("8", "David", "/assets/team/david.webp"),
        member("9", "Chris", "/placeholder-user.jpg"),
        member("10", "Iryna", "/assets/team/iryna.jpg"),
        member("11", "Diana", "/assets/team/diana.jpg"),
    ]
}
