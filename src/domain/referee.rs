use serde::{Deserialize, Serialize};

/// Судья турнира.
///
/// Для движка это непрозрачный тип: он просто копируется в каждую `Game`.
/// `build_rounds` обобщён по типу судьи, эта структура — вариант по умолчанию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Referee {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Referee {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }
}
