use serde::{Deserialize, Serialize};

use crate::domain::TeamId;

/// Команда-участник турнира.
///
/// Команды создаёт хранилище, движок их только читает.
/// `id = 0` зарезервирован под заглушку "none" и в составе не допускается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Логотип (URL или base64), как его отдаёт бэкенд.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Username капитана.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            leader: None,
        }
    }

    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = Some(leader.into());
        self
    }
}
